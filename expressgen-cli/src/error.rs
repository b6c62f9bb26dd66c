//! Error type shared by every generation step.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    /// Interactive input that is structurally required was empty or invalid.
    /// The collector re-prompts on this variant instead of aborting.
    #[error("{0}")]
    InputValidation(String),

    #[error("Unsupported backend '{0}'. Available: mongodb, postgresql")]
    UnsupportedBackend(String),

    #[error("Failed to write {}: {source}", path.display())]
    FileWrite { path: PathBuf, source: io::Error },

    #[error("{context}. Error: {stderr}")]
    CommandExecution { context: String, stderr: String },

    #[error("Failed to read entrypoint {}: {source}", path.display())]
    EntrypointPatch { path: PathBuf, source: io::Error },

    #[error("Failed to update package.json: {0}")]
    PackageManifest(String),

    #[error("Prompt failed: {0}")]
    Prompt(#[source] io::Error),
}

impl GenError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InputValidation(msg.into())
    }

    pub fn file_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    pub fn command(context: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::CommandExecution {
            context: context.into(),
            stderr: stderr.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
