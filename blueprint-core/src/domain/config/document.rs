// blueprint-core/src/domain/config/document.rs

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use super::asset::{Asset, RawAsset, build_asset};
use super::integrity::validate_document;
use super::partition::{Partition, build_partition};
use super::resolver::deserialize;
use crate::domain::error::{ConfigError, ErrorReport};

/// The whole configuration: shared partition definitions and the assets using them.
///
/// Entities refer to each other by name only. A `Document` obtained through
/// [`resolve_document`] has passed every integrity check and is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    partitions: Option<Vec<Partition>>,
    assets: Vec<Asset>,
}

impl Document {
    pub fn partitions(&self) -> &[Partition] {
        self.partitions.as_deref().unwrap_or_default()
    }

    /// Whether the document has a `partitions` section at all.
    pub fn declares_partitions(&self) -> bool {
        self.partitions.is_some()
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn partition(&self, name: &str) -> Option<&Partition> {
        self.partitions().iter().find(|p| p.name() == name)
    }

    pub fn asset(&self, name: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.name() == name)
    }
}

// --- RAW ENVELOPES ---

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDocument {
    #[serde(default)]
    partitions: Option<Vec<Value>>,
    assets: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPartition {
    name: String,
    partition_type: String,
    #[serde(default)]
    config: Mapping,
}

/// Locator for an envelope that may be too broken to deserialize: by name when the
/// raw map carries one, by position otherwise.
fn envelope_context(section: &str, entity: &str, index: usize, value: &Value) -> String {
    match value.get("name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => format!("{} '{}'", entity, name),
        _ => format!("{}[{}]", section, index),
    }
}

/// Entity assembly over the whole document. Every partition, asset and check is
/// resolved, and all of their errors are returned together.
pub fn parse_document(raw: Value) -> Result<Document, ErrorReport> {
    let raw: RawDocument = deserialize("document", raw)?;
    let mut report = ErrorReport::new();

    let partitions = raw.partitions.map(|values| {
        values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| {
                let context = envelope_context("partitions", "partition", index, &value);
                let built = deserialize::<RawPartition>(&context, value)
                    .map_err(ErrorReport::from)
                    .and_then(|p| build_partition(&p.name, &p.partition_type, p.config));
                match built {
                    Ok(partition) => Some(partition),
                    Err(errors) => {
                        report.merge(errors);
                        None
                    }
                }
            })
            .collect::<Vec<_>>()
    });

    if raw.assets.is_empty() {
        report.push(ConfigError::invalid_field(
            "document",
            "assets",
            "must declare at least one asset",
        ));
    }

    let assets = raw
        .assets
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let context = envelope_context("assets", "asset", index, &value);
            let built = deserialize::<RawAsset>(&context, value)
                .map_err(ErrorReport::from)
                .and_then(build_asset);
            match built {
                Ok(asset) => Some(asset),
                Err(errors) => {
                    report.merge(errors);
                    None
                }
            }
        })
        .collect();

    report.into_result(Document { partitions, assets })
}

/// Full pipeline: entity assembly, then the cross-entity integrity passes.
pub fn resolve_document(raw: Value) -> Result<Document, ErrorReport> {
    validate_document(parse_document(raw)?)
}
