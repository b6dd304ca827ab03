// blueprint-core/src/domain/config/rules.rs
//
// Field-level and record-level rules shared by the variant configs.
// Each rule returns a `ValidationError` whose message is the user-facing rule text.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::ValidationError;

use super::kinds::{MaxOperator, MinOperator};

#[allow(clippy::expect_used)]
static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static date pattern"));

pub const DATE_LAYOUT: &str = "%Y-%m-%d";

/// Lower bound of a volume or bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MinBound {
    pub value: i64,
    #[serde(default)]
    pub operator: MinOperator,
}

/// Upper bound of a volume or bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MaxBound {
    pub value: i64,
    #[serde(default)]
    pub operator: MaxOperator,
}

fn violation(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

pub(crate) fn iso_date(value: &str) -> Result<(), ValidationError> {
    if !ISO_DATE.is_match(value) {
        return Err(violation("iso_date", "must match YYYY-MM-DD"));
    }
    NaiveDate::parse_from_str(value, DATE_LAYOUT)
        .map(|_| ())
        .map_err(|_| violation("calendar_date", "must be a valid calendar date"))
}

/// `end_date` may not precede `start_date`. Only reached once both parsed as dates.
pub(crate) fn ordered_window(start: &str, end: Option<&str>) -> Result<(), ValidationError> {
    let Some(end) = end else {
        return Ok(());
    };
    match (
        NaiveDate::parse_from_str(start, DATE_LAYOUT),
        NaiveDate::parse_from_str(end, DATE_LAYOUT),
    ) {
        (Ok(start), Ok(end)) if end < start => Err(violation(
            "ordered_window",
            "end_date must not precede start_date",
        )),
        _ => Ok(()),
    }
}

/// Key of the `ValidationError` param naming the sub-field a rule is about.
pub(crate) const SUB_FIELD_PARAM: &str = "sub_field";

fn positive_value(value: i64) -> Result<(), ValidationError> {
    if value > 0 {
        return Ok(());
    }
    let mut err = violation("positive", "must be strictly positive");
    err.add_param(Cow::Borrowed(SUB_FIELD_PARAM), &"value");
    Err(err)
}

pub(crate) fn positive_min(bound: &MinBound) -> Result<(), ValidationError> {
    positive_value(bound.value)
}

pub(crate) fn positive_max(bound: &MaxBound) -> Result<(), ValidationError> {
    positive_value(bound.value)
}

/// Rejects NaN and infinities along with negative values.
pub(crate) fn non_negative_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(violation("non_negative", "must be a finite number >= 0"))
    }
}

pub(crate) fn positive_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(violation("positive", "must be a finite number > 0"))
    }
}

pub(crate) fn ordered_bounds(
    min: Option<&MinBound>,
    max: Option<&MaxBound>,
) -> Result<(), ValidationError> {
    match (min, max) {
        (Some(min), Some(max)) if min.value >= max.value => Err(violation(
            "ordered_bounds",
            format!(
                "min.value must be < max.value (got {} >= {})",
                min.value, max.value
            ),
        )),
        _ => Ok(()),
    }
}

pub(crate) fn compilable_pattern(pattern: &str) -> Result<(), ValidationError> {
    Regex::new(pattern)
        .map(|_| ())
        .map_err(|e| violation("regex", format!("is not a valid regular expression: {}", e)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date_pattern() {
        assert!(iso_date("2024-01-05").is_ok());
        assert!(iso_date("2024-1-5").is_err());
        assert!(iso_date("bad-date").is_err());
        assert!(iso_date(" 2024-01-05").is_err());
    }

    #[test]
    fn test_iso_date_rejects_impossible_days() {
        let err = iso_date("2024-02-30").unwrap_err();
        assert_eq!(err.code, "calendar_date");
        assert!(iso_date("2024-02-29").is_ok());
    }

    #[test]
    fn test_ordered_window() {
        assert!(ordered_window("2024-01-01", None).is_ok());
        assert!(ordered_window("2024-01-01", Some("2024-01-01")).is_ok());
        assert!(ordered_window("2024-02-01", Some("2024-01-01")).is_err());
    }

    #[test]
    fn test_ordered_bounds() {
        let min = |value| MinBound {
            value,
            operator: MinOperator::GreaterOrEqual,
        };
        let max = |value| MaxBound {
            value,
            operator: MaxOperator::LessOrEqual,
        };
        assert!(ordered_bounds(Some(&min(1)), Some(&max(2))).is_ok());
        assert!(ordered_bounds(Some(&min(2)), Some(&max(2))).is_err());
        assert!(ordered_bounds(Some(&min(50)), Some(&max(10))).is_err());
        assert!(ordered_bounds(Some(&min(50)), None).is_ok());
        assert!(ordered_bounds(None, Some(&max(-3))).is_ok());
    }

    #[test]
    fn test_bound_operator_defaults_when_omitted() {
        let bound: MinBound = serde_yaml::from_str("value: 4").unwrap();
        assert_eq!(bound.operator, MinOperator::GreaterOrEqual);
    }

    #[test]
    fn test_finite_rules_reject_nan_and_infinity() {
        assert!(non_negative_finite(0.0).is_ok());
        assert!(non_negative_finite(12.5).is_ok());
        assert!(non_negative_finite(-0.1).is_err());
        assert!(non_negative_finite(f64::NAN).is_err());
        assert!(non_negative_finite(f64::INFINITY).is_err());

        assert!(positive_finite(2.0).is_ok());
        assert!(positive_finite(0.0).is_err());
        assert!(positive_finite(f64::NAN).is_err());
        assert!(positive_finite(f64::INFINITY).is_err());
    }

    #[test]
    fn test_compilable_pattern() {
        assert!(compilable_pattern(r"^[a-z]+@\w+$").is_ok());
        assert!(compilable_pattern("(unclosed").is_err());
    }
}
