// blueprint-core/src/domain/config/resolver.rs
//
// Tag -> variant construction. One exhaustive match per closed enum: a new kind without
// a constructor is a compile error, never a silent fallthrough.

use regex::Regex;
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use std::sync::LazyLock;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use super::check::CheckConfig;
use super::kinds::{CheckKind, PartitionKind, expected_tags};
use super::partition::PartitionConfig;
use super::rules::SUB_FIELD_PARAM;
use crate::domain::error::{ConfigError, ErrorReport};

const PARTITION_ENTITY: &str = "partition config";
const CHECK_ENTITY: &str = "check config";

// Validator reports struct-level (schema) failures under this key.
const RECORD_LEVEL_KEY: &str = "__all__";

#[allow(clippy::expect_used)]
static FIELD_IN_MESSAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"field `([^`]+)`").expect("static field pattern"));

/// Resolves a partition `partition_type` tag and its raw config map.
pub fn resolve_partition(tag: &str, raw: Mapping) -> Result<PartitionConfig, ErrorReport> {
    let kind: PartitionKind = tag.parse().map_err(|_| ConfigError::UnrecognizedVariant {
        entity: PARTITION_ENTITY.to_string(),
        tag: tag.to_string(),
        expected: expected_tags(PartitionKind::ALL.iter().map(|k| k.as_str())),
    })?;
    construct_partition(kind, raw)
}

pub fn construct_partition(
    kind: PartitionKind,
    raw: Mapping,
) -> Result<PartitionConfig, ErrorReport> {
    let entity = PARTITION_ENTITY;
    let config = match kind {
        PartitionKind::Hourly => PartitionConfig::Hourly(construct(entity, raw)?),
        PartitionKind::Daily => PartitionConfig::Daily(construct(entity, raw)?),
        PartitionKind::Weekly => PartitionConfig::Weekly(construct(entity, raw)?),
        PartitionKind::Monthly => PartitionConfig::Monthly(construct(entity, raw)?),
        PartitionKind::Categorical => PartitionConfig::Categorical(construct(entity, raw)?),
    };
    Ok(config)
}

/// Resolves a `check_type` tag and its raw config map.
pub fn resolve_check(tag: &str, raw: Mapping) -> Result<CheckConfig, ErrorReport> {
    let kind: CheckKind = tag.parse().map_err(|_| ConfigError::UnrecognizedVariant {
        entity: CHECK_ENTITY.to_string(),
        tag: tag.to_string(),
        expected: expected_tags(CheckKind::ALL.iter().map(|k| k.as_str())),
    })?;
    construct_check(kind, raw)
}

pub fn construct_check(kind: CheckKind, raw: Mapping) -> Result<CheckConfig, ErrorReport> {
    let entity = CHECK_ENTITY;
    let config = match kind {
        CheckKind::Schema => CheckConfig::Schema(construct(entity, raw)?),
        CheckKind::Volume => CheckConfig::Volume(construct(entity, raw)?),
        CheckKind::Unique => CheckConfig::Unique(construct(entity, raw)?),
        CheckKind::Bounds => CheckConfig::Bounds(construct(entity, raw)?),
        CheckKind::Nullity => CheckConfig::Nullity(construct(entity, raw)?),
        CheckKind::Regex => CheckConfig::Regex(construct(entity, raw)?),
    };
    Ok(config)
}

/// Two phases: shape and types through serde, then the validator rules. Record-level
/// rules only run once every field rule passed.
fn construct<T>(entity: &str, raw: Mapping) -> Result<T, ErrorReport>
where
    T: DeserializeOwned + Validate,
{
    let record: T = deserialize(entity, Value::Mapping(raw))?;
    record
        .validate()
        .map_err(|errors| validation_report(entity, &errors))?;
    Ok(record)
}

/// Deserializes `value`, reporting a failure against the path of the offending field.
pub(crate) fn deserialize<T>(entity: &str, value: Value) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    serde_path_to_error::deserialize(value).map_err(|err| deserialize_error(entity, &err))
}

// Type errors carry their location in the tracked path. Missing and unknown keys fail
// on the enclosing map, so the key itself is only found in the message.
fn deserialize_error(
    entity: &str,
    err: &serde_path_to_error::Error<serde_yaml::Error>,
) -> ConfigError {
    let message = err.inner().to_string();
    let path = err.path().to_string();
    let parent = (path != ".").then_some(path);
    let named = FIELD_IN_MESSAGE
        .captures(&message)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());

    let field = match (parent, named) {
        (Some(parent), Some(named))
            if parent == named || parent.ends_with(&format!(".{}", named)) =>
        {
            parent
        }
        (Some(parent), Some(named)) => format!("{}.{}", parent, named),
        (Some(parent), None) => parent,
        (None, Some(named)) => named,
        (None, None) => "config".to_string(),
    };
    ConfigError::invalid_field(entity, field, message)
}

pub(crate) fn validation_report(entity: &str, errors: &ValidationErrors) -> ErrorReport {
    let mut found = Vec::new();
    flatten(entity, "", errors, &mut found);
    // Validator keys its errors by hash map; sort for stable output.
    found.sort_by_key(|e| e.to_string());
    found.into_iter().collect()
}

fn flatten(entity: &str, prefix: &str, errors: &ValidationErrors, out: &mut Vec<ConfigError>) {
    for (key, kind) in errors.errors() {
        let key = key.to_string();
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                for err in list {
                    if key == RECORD_LEVEL_KEY {
                        out.push(ConfigError::CrossFieldInvariantViolation {
                            entity: entity.to_string(),
                            rule: describe(err),
                        });
                    } else {
                        let field = field_path(&path, err);
                        out.push(ConfigError::invalid_field(entity, field, describe(err)));
                    }
                }
            }
            ValidationErrorsKind::Struct(inner) => flatten(entity, &path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    flatten(entity, &format!("{}[{}]", path, index), inner, out);
                }
            }
        }
    }
}

// A rule on a whole sub-record may point at one of its fields.
fn field_path(path: &str, err: &ValidationError) -> String {
    match err.params.get(SUB_FIELD_PARAM).and_then(|v| v.as_str()) {
        Some(sub) => format!("{}.{}", path, sub),
        None => path.to_string(),
    }
}

fn describe(err: &ValidationError) -> String {
    match &err.message {
        Some(message) => message.to_string(),
        None => format!("failed rule '{}'", err.code),
    }
}
