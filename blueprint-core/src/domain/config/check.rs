// blueprint-core/src/domain/config/check.rs

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;
use validator::{Validate, ValidationError};

use super::kinds::{CheckKind, Severity};
use super::resolver;
use super::rules::{
    MaxBound, MinBound, compilable_pattern, non_negative_finite, ordered_bounds,
    positive_finite, positive_max, positive_min,
};
use crate::domain::error::ErrorReport;

// =============================================================================
//  1. VARIANT CONFIGS
// =============================================================================

fn default_anomaly_from_n() -> i64 {
    10
}

fn default_anomaly_stddev() -> f64 {
    2.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, Default)]
#[serde(deny_unknown_fields)]
pub struct SchemaCheckConfig {
    #[serde(default)]
    pub severity: Severity,
}

/// Row-count anomaly detection: flags a materialization whose volume drifts more than
/// `anomaly_stddev` deviations once `anomaly_from_n` runs of history exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
#[validate(schema(function = "volume_bounds"))]
pub struct VolumeCheckConfig {
    #[serde(default)]
    pub severity: Severity,

    #[serde(default = "default_anomaly_from_n")]
    #[validate(range(min = 3, message = "must be >= 3"))]
    pub anomaly_from_n: i64,

    #[serde(default = "default_anomaly_stddev")]
    #[validate(custom(function = "positive_finite"))]
    pub anomaly_stddev: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "positive_min"))]
    pub min: Option<MinBound>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "positive_max"))]
    pub max: Option<MaxBound>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UniqueCheckConfig {
    #[serde(default)]
    pub severity: Severity,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub column: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
#[validate(schema(function = "value_bounds"))]
pub struct BoundsCheckConfig {
    #[serde(default)]
    pub severity: Severity,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub column: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<MinBound>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<MaxBound>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NullityCheckConfig {
    #[serde(default)]
    pub severity: Severity,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub column: String,

    #[serde(default)]
    #[validate(custom(function = "non_negative_finite"))]
    pub threshold_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RegexCheckConfig {
    #[serde(default)]
    pub severity: Severity,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub column: String,

    #[validate(custom(function = "compilable_pattern"))]
    pub pattern: String,

    #[serde(default)]
    #[validate(custom(function = "non_negative_finite"))]
    pub threshold_pct: f64,
}

fn volume_bounds(c: &VolumeCheckConfig) -> Result<(), ValidationError> {
    ordered_bounds(c.min.as_ref(), c.max.as_ref())
}

fn value_bounds(c: &BoundsCheckConfig) -> Result<(), ValidationError> {
    ordered_bounds(c.min.as_ref(), c.max.as_ref())
}

/// The resolved config of a check; the variant always matches the check kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CheckConfig {
    Schema(SchemaCheckConfig),
    Volume(VolumeCheckConfig),
    Unique(UniqueCheckConfig),
    Bounds(BoundsCheckConfig),
    Nullity(NullityCheckConfig),
    Regex(RegexCheckConfig),
}

impl CheckConfig {
    pub fn kind(&self) -> CheckKind {
        match self {
            CheckConfig::Schema(_) => CheckKind::Schema,
            CheckConfig::Volume(_) => CheckKind::Volume,
            CheckConfig::Unique(_) => CheckKind::Unique,
            CheckConfig::Bounds(_) => CheckKind::Bounds,
            CheckConfig::Nullity(_) => CheckKind::Nullity,
            CheckConfig::Regex(_) => CheckKind::Regex,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            CheckConfig::Schema(c) => c.severity,
            CheckConfig::Volume(c) => c.severity,
            CheckConfig::Unique(c) => c.severity,
            CheckConfig::Bounds(c) => c.severity,
            CheckConfig::Nullity(c) => c.severity,
            CheckConfig::Regex(c) => c.severity,
        }
    }

    /// The column a check targets; table-level checks have none.
    pub fn column(&self) -> Option<&str> {
        match self {
            CheckConfig::Schema(_) | CheckConfig::Volume(_) => None,
            CheckConfig::Unique(c) => Some(&c.column),
            CheckConfig::Bounds(c) => Some(&c.column),
            CheckConfig::Nullity(c) => Some(&c.column),
            CheckConfig::Regex(c) => Some(&c.column),
        }
    }
}

// =============================================================================
//  2. ENTITY
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Check {
    #[serde(rename = "check_type")]
    kind: CheckKind,
    config: CheckConfig,
}

impl Check {
    pub fn kind(&self) -> CheckKind {
        self.kind
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    pub fn severity(&self) -> Severity {
        self.config.severity()
    }
}

pub fn build_check(tag: &str, raw_config: Mapping) -> Result<Check, ErrorReport> {
    let config = resolver::resolve_check(tag, raw_config)?;
    Ok(Check {
        kind: config.kind(),
        config,
    })
}
