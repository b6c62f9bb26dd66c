pub mod controller;
pub mod db;
pub mod env;
pub mod errors;
pub mod index_js;
pub mod middleware;
pub mod model;
pub mod readme;
pub mod routes;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GenError, Result};
use crate::report;
use crate::schema::ModelSchema;

/// One generated file, with its path relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: String,
    pub content: String,
}

impl Artifact {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Write under `root`, creating parent directories, and report it.
    pub fn write(&self, root: &Path) -> Result<PathBuf> {
        let full = root.join(&self.path);
        write_file(&full, &self.content, &self.path)?;
        Ok(full)
    }
}

/// Write `content` to `path`, printing a confirmation line on success.
pub fn write_file(path: &Path, content: &str, display_name: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| GenError::file_write(parent, e))?;
    }
    fs::write(path, content).map_err(|e| GenError::file_write(path, e))?;
    report::created(display_name);
    Ok(())
}

/// The three per-model files, in write order.
pub fn render_model_artifacts(schema: &ModelSchema) -> [Artifact; 3] {
    [
        model::render(schema),
        controller::render(schema),
        routes::render(schema),
    ]
}

/// Attribute names as a JavaScript destructuring/shorthand list: `title, body`.
fn field_list(schema: &ModelSchema) -> String {
    schema
        .attributes
        .iter()
        .map(|attr| attr.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
