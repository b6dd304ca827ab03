// blueprint-core/src/infrastructure/config/loader.rs

use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::domain::config::{Document, resolve_document};
use crate::error::BlueprintError;
use crate::infrastructure::error::InfrastructureError;

/// Looked up in order inside the project directory.
pub const DOCUMENT_CANDIDATES: [&str; 4] = [
    "assets.yml",
    "assets.yaml",
    "blueprint.yml",
    "blueprint.yaml",
];

/// Overrides discovery with an explicit document path.
pub const CONFIG_ENV: &str = "BLUEPRINT_CONFIG";

/// Picks the document to load: an explicit path, then `BLUEPRINT_CONFIG`, then the
/// first candidate present in `dir`.
pub fn locate_document(
    explicit: Option<&Path>,
    dir: &Path,
) -> Result<PathBuf, InfrastructureError> {
    let env_override = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    locate_with(explicit, env_override, dir)
}

fn locate_with(
    explicit: Option<&Path>,
    env_override: Option<PathBuf>,
    dir: &Path,
) -> Result<PathBuf, InfrastructureError> {
    if let Some(path) = explicit {
        return existing(path.to_path_buf());
    }
    if let Some(path) = env_override {
        warn!(path = ?path, "Document path overridden via {}", CONFIG_ENV);
        return existing(path);
    }
    find_document(dir)
}

fn existing(path: PathBuf) -> Result<PathBuf, InfrastructureError> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(InfrastructureError::ConfigNotFound(format!(
            "{} does not exist",
            path.display()
        )))
    }
}

pub fn find_document(dir: &Path) -> Result<PathBuf, InfrastructureError> {
    DOCUMENT_CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
        .ok_or_else(|| {
            InfrastructureError::ConfigNotFound(format!(
                "none of {:?} in {}",
                DOCUMENT_CANDIDATES,
                dir.display()
            ))
        })
}

/// Reads a YAML (or JSON) file into an untyped value.
pub fn load_raw(path: &Path) -> Result<Value, InfrastructureError> {
    let content = fs::read_to_string(path).map_err(|source| InfrastructureError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_yaml::from_str(&content)?)
}

pub fn parse_document_str(text: &str) -> Result<Document, BlueprintError> {
    let raw: Value = serde_yaml::from_str(text).map_err(InfrastructureError::YamlError)?;
    Ok(resolve_document(raw)?)
}

#[instrument]
pub fn load_document(path: &Path) -> Result<Document, BlueprintError> {
    info!("Loading configuration document");
    let raw = load_raw(path)?;
    let document = resolve_document(raw)?;
    info!(
        partitions = document.partitions().len(),
        assets = document.assets().len(),
        "Configuration validated"
    );
    Ok(document)
}
