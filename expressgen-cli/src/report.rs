//! Terminal status lines.
//!
//! Every step of a session reports through these helpers so the output keeps
//! one look: a coloured tag or check mark, then the message.

use colored::Colorize;

use crate::colors;

pub fn banner() {
    println!();
    println!(
        "  {} {}",
        "expressgen".custom_color(colors::mauve()).bold(),
        "· Express.js project scaffolding".custom_color(colors::subtext())
    );
    println!();
}

pub fn info(msg: &str) {
    println!("{} {}", "INFO".custom_color(colors::blue()).bold(), msg);
}

pub fn warn(msg: &str) {
    println!("{} {}", "WARN".custom_color(colors::yellow()).bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "Error:".custom_color(colors::red()).bold(), msg);
}

pub fn created(display_name: &str) {
    println!(
        "  {} Created {}",
        "✓".custom_color(colors::green()),
        display_name.custom_color(colors::sky())
    );
}

pub fn updated(display_name: &str) {
    println!(
        "  {} Updated {}",
        "✓".custom_color(colors::green()),
        display_name.custom_color(colors::sky())
    );
}

pub fn unchanged(display_name: &str) {
    println!(
        "  {} {} already up to date",
        "○".custom_color(colors::yellow()),
        display_name.custom_color(colors::subtext())
    );
}

pub fn executed(argv: &[&str]) {
    println!("{}", executed_line(argv));
}

fn executed_line(argv: &[&str]) -> String {
    format!(
        "  {} {}",
        "Executed:".custom_color(colors::green()),
        argv.join(" ").custom_color(colors::subtext())
    )
}

/// Inline hint shown after a rejected answer, before the question is asked again.
pub fn rejected(msg: &str) {
    println!("  {} {}", "✗".custom_color(colors::red()), msg.custom_color(colors::red()));
}

pub fn done(msg: &str) {
    println!();
    println!("  {} {}", "🎉".bold(), msg.custom_color(colors::green()).bold());
    println!();
}
