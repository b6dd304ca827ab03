// blueprint-core/src/infrastructure/error.rs

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(blueprint::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    #[error("Cannot read '{}': {source}", .path.display())]
    #[diagnostic(code(blueprint::infra::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(blueprint::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON Rendering Error: {0}")]
    #[diagnostic(code(blueprint::infra::json))]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration document not found: {0}")]
    #[diagnostic(
        code(blueprint::infra::config_missing),
        help("Pass --file, set BLUEPRINT_CONFIG, or add assets.yml to the directory.")
    )]
    ConfigNotFound(String),
}
