//! expressgen - interactive scaffolding for Express.js backends.

mod catalog;
mod collector;
mod colors;
mod commands;
mod database;
mod error;
mod naming;
mod package_json;
mod patcher;
mod prompt;
mod report;
mod runner;
mod schema;
mod session;

use clap::Parser;

/// Generates models, controllers and routes for an Express.js API in the
/// current directory. Every choice is asked interactively.
#[derive(Parser)]
#[command(name = "expressgen")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    report::banner();
    if let Err(e) = commands::init::execute() {
        report::error(&e.to_string());
        std::process::exit(1);
    }
}
