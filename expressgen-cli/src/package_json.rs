//! Adjustments to the `package.json` written by `npm init`.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{GenError, Result};

#[derive(Serialize)]
struct Scripts {
    start: &'static str,
    dev: &'static str,
}

const SCRIPTS: Scripts = Scripts {
    start: "node index.js",
    dev: "nodemon index.js",
};

/// Point `main` at the entrypoint and add `start`/`dev` scripts, keeping any other scripts.
pub fn apply_scripts(manifest: &str) -> Result<String> {
    let mut root: Value =
        serde_json::from_str(manifest).map_err(|e| GenError::PackageManifest(e.to_string()))?;
    let obj = root
        .as_object_mut()
        .ok_or_else(|| GenError::PackageManifest("top level is not an object".to_string()))?;

    obj.insert("main".to_string(), Value::from("index.js"));

    let scripts = obj
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()));
    if !scripts.is_object() {
        *scripts = Value::Object(Map::new());
    }
    if let (Some(existing), Value::Object(ours)) = (
        scripts.as_object_mut(),
        serde_json::to_value(&SCRIPTS).map_err(|e| GenError::PackageManifest(e.to_string()))?,
    ) {
        existing.extend(ours);
    }

    let mut out =
        serde_json::to_string_pretty(&root).map_err(|e| GenError::PackageManifest(e.to_string()))?;
    out.push('\n');
    Ok(out)
}

pub fn update(path: &Path) -> Result<()> {
    let manifest =
        fs::read_to_string(path).map_err(|e| GenError::PackageManifest(e.to_string()))?;
    let updated = apply_scripts(&manifest)?;
    fs::write(path, updated).map_err(|e| GenError::file_write(path, e))
}
