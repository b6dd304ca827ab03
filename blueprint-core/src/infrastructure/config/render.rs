// blueprint-core/src/infrastructure/config/render.rs
//
// Canonical rendering: defaults filled in, legacy keys replaced by their current names.

use crate::domain::config::Document;
use crate::infrastructure::error::InfrastructureError;

pub fn to_yaml(document: &Document) -> Result<String, InfrastructureError> {
    Ok(serde_yaml::to_string(document)?)
}

pub fn to_json(document: &Document) -> Result<String, InfrastructureError> {
    Ok(serde_json::to_string_pretty(document)?)
}
