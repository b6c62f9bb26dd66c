//! Incremental edits to the generated `index.js`.
//!
//! The entrypoint is never regenerated once it exists. Each model's router is
//! spliced in at marker comments, and an edit whose line is already present
//! is skipped, so patching the same model twice leaves the file unchanged.

use std::fs;
use std::path::Path;

use crate::error::{GenError, Result};
use crate::naming::ModelNames;

/// Opens the block holding route `require` lines.
pub const IMPORT_START: &str = "// expressgen:route-imports:start";
/// Closes the block holding route `require` lines.
pub const IMPORT_END: &str = "// expressgen:route-imports:end";
/// Route registrations are inserted directly above this line.
pub const ROUTES_ANCHOR: &str = "// expressgen:routes";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Updated,
    Unchanged,
}

/// Return `content` with the router of `names` imported and registered.
pub fn patch(content: &str, names: &ModelNames) -> String {
    let newline = if content.contains("\r\n") { "\r\n" } else { "\n" };
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();

    let import = names.routes_import_line();
    let import_end = ensure_import_region(&mut lines);
    if !contains_line(&lines, &import) {
        let indent = indentation(&lines[import_end]).to_string();
        lines.insert(import_end, format!("{indent}{import}"));
    }

    let registration = names.route_registration_line();
    let anchor = ensure_routes_anchor(&mut lines);
    if !contains_line(&lines, &registration) {
        let indent = indentation(&lines[anchor]).to_string();
        lines.insert(anchor, format!("{indent}{registration}"));
        lines.insert(anchor, format!("{indent}{}", names.route_comment_line()));
    }

    let mut out = lines.join(newline);
    out.push_str(newline);
    out
}

/// Patch the entrypoint file at `path` in place.
pub fn patch_file(path: &Path, names: &ModelNames) -> Result<PatchOutcome> {
    let original = fs::read_to_string(path).map_err(|source| GenError::EntrypointPatch {
        path: path.to_path_buf(),
        source,
    })?;

    let patched = patch(&original, names);
    if patched == original {
        return Ok(PatchOutcome::Unchanged);
    }

    fs::write(path, patched).map_err(|e| GenError::file_write(path, e))?;
    Ok(PatchOutcome::Updated)
}

fn contains_line(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.trim() == needle)
}

fn find_marker(lines: &[String], marker: &str) -> Option<usize> {
    lines.iter().position(|line| line.trim() == marker)
}

fn indentation(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

fn is_top_level_import(line: &str) -> bool {
    if line.starts_with(char::is_whitespace) || line.starts_with("//") {
        return false;
    }
    line.contains("require(") || line.starts_with("import ")
}

fn is_server_start(line: &str) -> bool {
    let trimmed = line.trim_start();
    if trimmed.starts_with("//") {
        return false;
    }
    trimmed.starts_with("start()") || trimmed.contains(".listen(")
}

/// Make sure the import region exists and return the index of its closing marker.
fn ensure_import_region(lines: &mut Vec<String>) -> usize {
    if let Some(start) = find_marker(lines, IMPORT_START) {
        if let Some(offset) = find_marker(&lines[start + 1..], IMPORT_END) {
            return start + 1 + offset;
        }
        lines.insert(start + 1, IMPORT_END.to_string());
        return start + 1;
    }

    if let Some(end) = find_marker(lines, IMPORT_END) {
        lines.insert(end, IMPORT_START.to_string());
        return end + 1;
    }

    let at = lines
        .iter()
        .rposition(|line| is_top_level_import(line))
        .map_or(0, |i| i + 1);
    lines.insert(at, IMPORT_START.to_string());
    lines.insert(at + 1, IMPORT_END.to_string());
    at + 1
}

/// Make sure the registration anchor exists and return its index.
fn ensure_routes_anchor(lines: &mut Vec<String>) -> usize {
    if let Some(anchor) = find_marker(lines, ROUTES_ANCHOR) {
        return anchor;
    }
    match lines.iter().position(|line| is_server_start(line)) {
        Some(at) => {
            let indent = indentation(&lines[at]).to_string();
            lines.insert(at, format!("{indent}{ROUTES_ANCHOR}"));
            at
        }
        None => {
            lines.push(ROUTES_ANCHOR.to_string());
            lines.len() - 1
        }
    }
}
