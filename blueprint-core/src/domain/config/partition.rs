// blueprint-core/src/domain/config/partition.rs

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;
use validator::{Validate, ValidationError};

use super::kinds::PartitionKind;
use super::resolver;
use super::rules::{iso_date, ordered_window};
use crate::domain::error::{ConfigError, ErrorReport};

// =============================================================================
//  1. VARIANT CONFIGS
// =============================================================================
//
// Each cadence lists its full field set. Shared time fields are repeated rather than
// layered so a variant can be read, defaulted and tested on its own.

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_date_format() -> String {
    super::rules::DATE_LAYOUT.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
#[validate(schema(function = "hourly_window"))]
pub struct HourlyPartitionConfig {
    #[validate(custom(function = "iso_date"))]
    pub start_date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "iso_date"))]
    pub end_date: Option<String>,

    #[serde(default = "default_timezone")]
    pub timezone: String,

    #[serde(rename = "fmt", alias = "date_format", default = "default_date_format")]
    pub date_format: String,

    #[serde(default)]
    pub end_offset: i64,

    #[serde(default)]
    #[validate(range(min = 0, max = 59, message = "must be between 0 and 59"))]
    pub minute_offset: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
#[validate(schema(function = "daily_window"))]
pub struct DailyPartitionConfig {
    #[validate(custom(function = "iso_date"))]
    pub start_date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "iso_date"))]
    pub end_date: Option<String>,

    #[serde(default = "default_timezone")]
    pub timezone: String,

    #[serde(rename = "fmt", alias = "date_format", default = "default_date_format")]
    pub date_format: String,

    #[serde(default)]
    pub end_offset: i64,

    #[serde(default)]
    #[validate(range(min = 0, max = 59, message = "must be between 0 and 59"))]
    pub minute_offset: i64,

    #[serde(default)]
    #[validate(range(min = 0, max = 23, message = "must be between 0 and 23"))]
    pub hour_offset: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
#[validate(schema(function = "weekly_window"))]
pub struct WeeklyPartitionConfig {
    #[validate(custom(function = "iso_date"))]
    pub start_date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "iso_date"))]
    pub end_date: Option<String>,

    #[serde(default = "default_timezone")]
    pub timezone: String,

    #[serde(rename = "fmt", alias = "date_format", default = "default_date_format")]
    pub date_format: String,

    #[serde(default)]
    pub end_offset: i64,

    #[serde(default)]
    #[validate(range(min = 0, max = 59, message = "must be between 0 and 59"))]
    pub minute_offset: i64,

    #[serde(default)]
    #[validate(range(min = 0, max = 23, message = "must be between 0 and 23"))]
    pub hour_offset: i64,

    #[serde(default)]
    pub day_offset: i64,
}

/// Same field set as the weekly cadence; kept as its own type so the kind is never ambiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
#[validate(schema(function = "monthly_window"))]
pub struct MonthlyPartitionConfig {
    #[validate(custom(function = "iso_date"))]
    pub start_date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "iso_date"))]
    pub end_date: Option<String>,

    #[serde(default = "default_timezone")]
    pub timezone: String,

    #[serde(rename = "fmt", alias = "date_format", default = "default_date_format")]
    pub date_format: String,

    #[serde(default)]
    pub end_offset: i64,

    #[serde(default)]
    #[validate(range(min = 0, max = 59, message = "must be between 0 and 59"))]
    pub minute_offset: i64,

    #[serde(default)]
    #[validate(range(min = 0, max = 23, message = "must be between 0 and 23"))]
    pub hour_offset: i64,

    #[serde(default)]
    pub day_offset: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CategoricalPartitionConfig {
    #[serde(rename = "partition_keys", alias = "categories")]
    #[validate(length(min = 1, message = "must list at least one category"))]
    pub categories: Vec<String>,
}

fn hourly_window(c: &HourlyPartitionConfig) -> Result<(), ValidationError> {
    ordered_window(&c.start_date, c.end_date.as_deref())
}

fn daily_window(c: &DailyPartitionConfig) -> Result<(), ValidationError> {
    ordered_window(&c.start_date, c.end_date.as_deref())
}

fn weekly_window(c: &WeeklyPartitionConfig) -> Result<(), ValidationError> {
    ordered_window(&c.start_date, c.end_date.as_deref())
}

fn monthly_window(c: &MonthlyPartitionConfig) -> Result<(), ValidationError> {
    ordered_window(&c.start_date, c.end_date.as_deref())
}

/// The resolved config of a partition; the variant always matches the partition kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PartitionConfig {
    Hourly(HourlyPartitionConfig),
    Daily(DailyPartitionConfig),
    Weekly(WeeklyPartitionConfig),
    Monthly(MonthlyPartitionConfig),
    Categorical(CategoricalPartitionConfig),
}

impl PartitionConfig {
    pub fn kind(&self) -> PartitionKind {
        match self {
            PartitionConfig::Hourly(_) => PartitionKind::Hourly,
            PartitionConfig::Daily(_) => PartitionKind::Daily,
            PartitionConfig::Weekly(_) => PartitionKind::Weekly,
            PartitionConfig::Monthly(_) => PartitionKind::Monthly,
            PartitionConfig::Categorical(_) => PartitionKind::Categorical,
        }
    }

    /// First partition date for time-based cadences.
    pub fn start_date(&self) -> Option<&str> {
        match self {
            PartitionConfig::Hourly(c) => Some(&c.start_date),
            PartitionConfig::Daily(c) => Some(&c.start_date),
            PartitionConfig::Weekly(c) => Some(&c.start_date),
            PartitionConfig::Monthly(c) => Some(&c.start_date),
            PartitionConfig::Categorical(_) => None,
        }
    }
}

// =============================================================================
//  2. ENTITY
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Partition {
    name: String,
    #[serde(rename = "partition_type")]
    kind: PartitionKind,
    config: PartitionConfig,
}

impl Partition {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PartitionKind {
        self.kind
    }

    pub fn config(&self) -> &PartitionConfig {
        &self.config
    }
}

/// Assembles a partition from its envelope fields.
///
/// The name check and the config resolution both run, so an empty name and a broken
/// config are reported together.
pub fn build_partition(
    name: &str,
    tag: &str,
    raw_config: Mapping,
) -> Result<Partition, ErrorReport> {
    let context = if name.is_empty() {
        "partition".to_string()
    } else {
        format!("partition '{}'", name)
    };

    let mut report = ErrorReport::new();
    if name.trim().is_empty() {
        report.push(ConfigError::invalid_field(&context, "name", "must not be empty"));
    }

    match resolver::resolve_partition(tag, raw_config) {
        Ok(config) => report.into_result(Partition {
            name: name.to_string(),
            kind: config.kind(),
            config,
        }),
        Err(errors) => {
            report.merge(errors.within(&context));
            Err(report)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn mapping(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_daily_partition_defaults() {
        let partition = build_partition("p1", "daily", mapping("start_date: '2024-01-01'")).unwrap();

        assert_eq!(partition.name(), "p1");
        assert_eq!(partition.kind(), PartitionKind::Daily);
        match partition.config() {
            PartitionConfig::Daily(c) => {
                assert_eq!(c.hour_offset, 0);
                assert_eq!(c.minute_offset, 0);
                assert_eq!(c.end_offset, 0);
                assert_eq!(c.timezone, "UTC");
                assert_eq!(c.date_format, "%Y-%m-%d");
                assert_eq!(c.end_date, None);
            }
            other => panic!("Expected daily config, got {:?}", other),
        }
    }

    #[test]
    fn test_weekly_bad_start_date() {
        let report = build_partition("p1", "weekly", mapping("start_date: bad-date")).unwrap_err();

        assert_eq!(report.len(), 1);
        assert_eq!(
            report.errors()[0],
            ConfigError::invalid_field("partition 'p1'", "start_date", "must match YYYY-MM-DD")
        );
    }

    #[test]
    fn test_date_format_accepts_both_keys() {
        let by_alias = build_partition(
            "p",
            "hourly",
            mapping("{start_date: '2024-01-01', fmt: '%Y-%m-%d-%H:%M'}"),
        )
        .unwrap();
        let by_name = build_partition(
            "p",
            "hourly",
            mapping("{start_date: '2024-01-01', date_format: '%Y-%m-%d-%H:%M'}"),
        )
        .unwrap();
        assert_eq!(by_alias, by_name);
    }

    #[test]
    fn test_field_not_in_cadence_is_rejected() {
        let report = build_partition(
            "p",
            "hourly",
            mapping("{start_date: '2024-01-01', hour_offset: 3}"),
        )
        .unwrap_err();

        match &report.errors()[0] {
            ConfigError::InvalidVariantFields { field, rule, .. } => {
                assert_eq!(field, "hour_offset");
                assert!(rule.contains("unknown field"));
            }
            other => panic!("Expected InvalidVariantFields, got {:?}", other),
        }
    }

    #[test]
    fn test_end_before_start_is_cross_field() {
        let report = build_partition(
            "p",
            "monthly",
            mapping("{start_date: '2024-05-01', end_date: '2024-01-01'}"),
        )
        .unwrap_err();
        assert!(matches!(
            report.errors()[0],
            ConfigError::CrossFieldInvariantViolation { .. }
        ));
    }

    #[test]
    fn test_empty_name_and_bad_config_reported_together() {
        let report = build_partition("", "daily", mapping("start_date: '2024-1-5'")).unwrap_err();
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn test_categorical_partition_keys() {
        let partition = build_partition(
            "region",
            "categorical",
            mapping("partition_keys: [eu, us, apac]"),
        )
        .unwrap();
        match partition.config() {
            PartitionConfig::Categorical(c) => assert_eq!(c.categories, ["eu", "us", "apac"]),
            other => panic!("Expected categorical config, got {:?}", other),
        }
        assert_eq!(partition.config().start_date(), None);
    }

    #[test]
    fn test_offset_out_of_range() {
        let report = build_partition(
            "p",
            "daily",
            mapping("{start_date: '2024-01-01', hour_offset: 24}"),
        )
        .unwrap_err();
        assert_eq!(
            report.errors()[0],
            ConfigError::invalid_field("partition 'p'", "hour_offset", "must be between 0 and 23")
        );
    }
}
