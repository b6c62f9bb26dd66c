//! Database choice and installation.

use std::path::Path;

use crate::commands::templates::db;
use crate::error::Result;
use crate::prompt::Prompter;
use crate::runner::CommandRunner;
use crate::schema::Backend;

/// Ask whether the project needs a database and, if so, which one.
pub fn select(prompter: &mut dyn Prompter) -> Result<Option<Backend>> {
    let use_database = prompter.choice(
        "Do you want to use a database in your project?",
        &["Yes", "No"],
        Some("No"),
    )?;
    if use_database != "Yes" {
        return Ok(None);
    }

    let labels = [Backend::Document.label(), Backend::Relational.label()];
    let picked = prompter.choice(
        "Select the database you want to use:",
        &labels,
        Some(Backend::Document.label()),
    )?;
    picked.parse().map(Some)
}

/// Install the backend's driver packages and write `db/connect.js`.
pub fn setup(backend: Backend, root: &Path, runner: &mut dyn CommandRunner) -> Result<()> {
    let packages = db::packages(backend);
    let mut argv = vec!["npm", "install"];
    argv.extend_from_slice(packages);
    runner.run(
        &argv,
        &format!("Failed to install {} dependencies", backend.label()),
    )?;

    db::render(backend).write(root)?;
    Ok(())
}
