// blueprint-core/src/application/normalize.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::error::BlueprintError;
use crate::infrastructure::config::{load_document, to_yaml};
use crate::infrastructure::fs::replace_file;

/// Outcome of normalizing one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub path: PathBuf,
    pub rendered: String,
    /// Whether the file on disk differs from the canonical rendering.
    pub changed: bool,
}

/// Validates `path` and renders it canonically. With `write`, a changed file is
/// replaced in place; an invalid document is never touched.
#[instrument]
pub fn normalize_file(path: &Path, write: bool) -> Result<Normalized, BlueprintError> {
    let document = load_document(path)?;
    let rendered = to_yaml(&document)?;
    let current = fs::read_to_string(path)?;
    let changed = current != rendered;

    if write && changed {
        replace_file(path, &rendered)?;
        info!("Rewrote document in canonical form");
    }

    Ok(Normalized {
        path: path.to_path_buf(),
        rendered,
        changed,
    })
}
