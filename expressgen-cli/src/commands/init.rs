//! Full project setup in the current directory.

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};

use super::templates::{env, errors, index_js, middleware, readme};
use crate::catalog;
use crate::database;
use crate::error::{GenError, Result};
use crate::package_json;
use crate::prompt::{Prompter, TerminalPrompter};
use crate::report;
use crate::runner::{CommandRunner, SystemRunner};
use crate::session::GenerationSession;

const CORE_DEPENDENCIES: &[&str] = &[
    "express",
    "dotenv",
    "express-async-errors",
    "http-status-codes",
];

const DIRECTORIES: &[&str] = &["controllers", "models", "routes", "middleware", "errors", "db"];

/// Execute the generator against the invocation directory.
pub fn execute() -> Result<()> {
    let root = std::env::current_dir().map_err(|e| GenError::file_write(".", e))?;
    let mut prompter = TerminalPrompter::stdio();
    let mut runner = SystemRunner::new(root.clone());
    run(&root, &mut prompter, &mut runner, Local::now().date_naive())
}

pub fn run(
    root: &Path,
    prompter: &mut dyn Prompter,
    runner: &mut dyn CommandRunner,
    today: NaiveDate,
) -> Result<()> {
    report::info("Initializing Express.js project");
    install_core(runner)?;

    for dir in DIRECTORIES {
        let path = root.join(dir);
        fs::create_dir_all(&path).map_err(|e| GenError::file_write(path, e))?;
    }

    let backend = database::select(prompter)?;
    if let Some(backend) = backend {
        database::setup(backend, root, runner)?;
    }

    let selected = catalog::select(prompter)?;
    let (packages, dev_packages) = catalog::packages(&selected);
    if !packages.is_empty() {
        let mut argv = vec!["npm", "install"];
        argv.extend(&packages);
        runner.run(&argv, "Failed to install middleware")?;
    }
    if !dev_packages.is_empty() {
        let mut argv = vec!["npm", "install", "--save-dev"];
        argv.extend(&dev_packages);
        runner.run(&argv, "Failed to install middleware dev dependencies")?;
    }

    env::render(backend).write(root)?;
    for artifact in [middleware::artifacts(), errors::artifacts()].concat() {
        artifact.write(root)?;
    }

    let entrypoint = index_js::render(backend, &selected);
    if root.join(&entrypoint.path).exists() {
        report::warn(&format!("Keeping existing {}", entrypoint.path));
    } else {
        entrypoint.write(root)?;
    }

    let manifest = root.join("package.json");
    if manifest.exists() {
        package_json::update(&manifest)?;
        report::updated("package.json");
    } else {
        report::warn("package.json not found, skipping npm scripts");
    }

    let models = match backend {
        Some(backend) => GenerationSession::new(root, backend).run(prompter)?,
        None => {
            report::info("No database selected, skipping model, route and controller generation");
            Vec::new()
        }
    };

    readme::render(backend, &models, today).write(root)?;

    initialize_git(runner);

    report::done("Express.js project setup completed successfully!");
    Ok(())
}

fn install_core(runner: &mut dyn CommandRunner) -> Result<()> {
    runner.run(&["npm", "init", "-y"], "Failed to initialize npm project")?;
    for dep in CORE_DEPENDENCIES {
        runner.run(&["npm", "install", *dep], &format!("Failed to install {dep}"))?;
    }
    runner.run(
        &["npm", "install", "nodemon", "--save-dev"],
        "Failed to install nodemon",
    )?;
    Ok(())
}

/// Repository history is optional: failures here only warn.
fn initialize_git(runner: &mut dyn CommandRunner) {
    let steps: [(&[&str], &str); 3] = [
        (&["git", "init"], "Failed to initialize git"),
        (&["git", "add", "."], "Failed to add files to git"),
        (
            &["git", "commit", "-m", "Initial project setup"],
            "Failed to commit initial setup",
        ),
    ];
    for (argv, context) in steps {
        if let Err(e) = runner.run(argv, context) {
            report::warn(&format!("Git initialization failed: {e}"));
            return;
        }
    }
}
