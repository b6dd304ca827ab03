// blueprint-core/src/domain/config/asset.rs

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::collections::HashSet;
use validator::Validate;

use super::check::{Check, build_check};
use super::resolver::{deserialize, validation_report};
use crate::domain::error::{ConfigError, ErrorReport};

fn default_schedule() -> String {
    "eager".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct Column {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,

    #[serde(alias = "type")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub data_type: String,
}

/// An asset as written in the document, before its checks are resolved.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawAsset {
    #[serde(alias = "asset_name")]
    pub name: String,

    #[serde(default)]
    pub depends_on: Option<String>,

    // Optional here so a missing key is reported as a field error, not a parse failure.
    #[serde(default)]
    pub resources: Option<Vec<String>>,

    #[serde(default)]
    pub column_schema: Option<Vec<Value>>,

    #[serde(default)]
    pub partitions: Option<Vec<String>>,

    #[serde(default)]
    pub schedule: Option<String>,

    #[serde(default)]
    pub checks: Option<Vec<Value>>,

    #[serde(default)]
    pub materialize_fn: Option<String>,

    #[serde(default)]
    pub metadata_fn: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawCheck {
    pub check_type: String,
    #[serde(default)]
    pub config: Mapping,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Asset {
    name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    depends_on: Option<String>,

    resources: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    column_schema: Option<Vec<Column>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    partitions: Option<Vec<String>>,

    schedule: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    checks: Option<Vec<Check>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    materialize_fn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    metadata_fn: Option<String>,
}

impl Asset {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Upstream asset, ignoring an empty `depends_on`.
    pub fn depends_on(&self) -> Option<&str> {
        self.depends_on.as_deref().filter(|dep| !dep.is_empty())
    }

    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    pub fn column_schema(&self) -> &[Column] {
        self.column_schema.as_deref().unwrap_or_default()
    }

    pub fn partitions(&self) -> &[String] {
        self.partitions.as_deref().unwrap_or_default()
    }

    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    pub fn checks(&self) -> &[Check] {
        self.checks.as_deref().unwrap_or_default()
    }

    /// Name of the externally supplied materialization callable, if configured.
    pub fn materialize_fn(&self) -> Option<&str> {
        self.materialize_fn.as_deref()
    }

    pub fn metadata_fn(&self) -> Option<&str> {
        self.metadata_fn.as_deref()
    }
}

/// Assembles one asset and resolves its checks.
///
/// References to other assets and partitions are left unchecked: they need the whole
/// document and are verified by the integrity passes.
pub fn build_asset(raw: RawAsset) -> Result<Asset, ErrorReport> {
    let context = if raw.name.is_empty() {
        "asset".to_string()
    } else {
        format!("asset '{}'", raw.name)
    };
    let mut report = ErrorReport::new();

    if raw.name.trim().is_empty() {
        report.push(ConfigError::invalid_field(&context, "name", "must not be empty"));
    }

    let resources = match raw.resources {
        Some(resources) => resources,
        None => {
            report.push(ConfigError::invalid_field(
                &context,
                "resources",
                "must be present (an empty list is allowed)",
            ));
            Vec::new()
        }
    };

    let column_schema = raw
        .column_schema
        .map(|columns| build_columns(&context, columns, &mut report));

    let checks = raw.checks.map(|checks| {
        checks
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| {
                let check_context = format!("{} > checks[{}]", context, index);
                match resolve_raw_check(&check_context, value) {
                    Ok(check) => Some(check),
                    Err(errors) => {
                        report.merge(errors);
                        None
                    }
                }
            })
            .collect::<Vec<_>>()
    });

    report.into_result(Asset {
        name: raw.name,
        depends_on: raw.depends_on,
        resources,
        column_schema,
        partitions: raw.partitions,
        schedule: raw.schedule.unwrap_or_else(default_schedule),
        checks,
        materialize_fn: raw.materialize_fn,
        metadata_fn: raw.metadata_fn,
    })
}

fn resolve_raw_check(context: &str, value: Value) -> Result<Check, ErrorReport> {
    let raw: RawCheck = deserialize(context, value)?;
    build_check(&raw.check_type, raw.config).map_err(|errors| errors.within(context))
}

fn build_columns(context: &str, columns: Vec<Value>, report: &mut ErrorReport) -> Vec<Column> {
    let mut seen = HashSet::new();
    let mut repeated = HashSet::new();
    let mut built = Vec::with_capacity(columns.len());

    for (index, value) in columns.into_iter().enumerate() {
        let column_context = format!("{} > column_schema[{}]", context, index);
        let column: Column = match deserialize(&column_context, value) {
            Ok(column) => column,
            Err(error) => {
                report.push(error);
                continue;
            }
        };
        if let Err(errors) = column.validate() {
            report.merge(validation_report(&column_context, &errors));
            continue;
        }
        if !seen.insert(column.name.clone()) && repeated.insert(column.name.clone()) {
            report.push(ConfigError::DuplicateName {
                entity: format!("{} column", context),
                name: column.name.clone(),
            });
        }
        built.push(column);
    }
    built
}
