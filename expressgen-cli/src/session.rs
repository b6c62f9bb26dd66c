//! The model generation loop.

use std::path::{Path, PathBuf};

use crate::collector::{AttributeCollector, Round};
use crate::commands::templates::{self, index_js};
use crate::error::Result;
use crate::naming::ModelNames;
use crate::patcher::{self, PatchOutcome};
use crate::prompt::Prompter;
use crate::report;
use crate::schema::{Backend, ModelSchema};

pub struct GenerationSession {
    root: PathBuf,
    collector: AttributeCollector,
}

impl GenerationSession {
    pub fn new(root: impl Into<PathBuf>, backend: Backend) -> Self {
        Self {
            root: root.into(),
            collector: AttributeCollector::new(backend),
        }
    }

    /// Collect models until the user enters an empty name, generating each
    /// one as soon as it is complete. Returns the generated models' names.
    pub fn run(&mut self, prompter: &mut dyn Prompter) -> Result<Vec<ModelNames>> {
        let mut generated = Vec::new();
        loop {
            match self.collector.collect(prompter)? {
                Round::Finished => {
                    report::info("Finished model creation.");
                    return Ok(generated);
                }
                Round::Model(schema) => {
                    generate(&self.root, &schema)?;
                    generated.push(schema.names);
                }
            }
        }
    }
}

/// Write the model, controller and routes files, then wire the router into `index.js`.
pub fn generate(root: &Path, schema: &ModelSchema) -> Result<()> {
    report::info(&format!(
        "Generating {} ({} model)",
        schema.name(),
        schema.backend
    ));

    for artifact in templates::render_model_artifacts(schema) {
        if root.join(&artifact.path).exists() {
            report::warn(&format!("Overwriting existing {}", artifact.path));
        }
        artifact.write(root)?;
    }

    let entrypoint = index_js::path();
    match patcher::patch_file(&root.join(&entrypoint), &schema.names)? {
        PatchOutcome::Updated => report::updated(&entrypoint),
        PatchOutcome::Unchanged => report::unchanged(&entrypoint),
    }
    Ok(())
}
