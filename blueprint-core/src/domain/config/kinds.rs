// blueprint-core/src/domain/config/kinds.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Closed sets of type tags. Every consumer matches on them exhaustively, so adding a
// variant fails compilation until the resolver and the definition builder handle it.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartitionKind {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Categorical,
}

impl PartitionKind {
    pub const ALL: [PartitionKind; 5] = [
        Self::Hourly,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Categorical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Categorical => "categorical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Schema,
    Volume,
    Unique,
    Bounds,
    Nullity,
    Regex,
}

impl CheckKind {
    pub const ALL: [CheckKind; 6] = [
        Self::Schema,
        Self::Volume,
        Self::Unique,
        Self::Bounds,
        Self::Nullity,
        Self::Regex,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Schema => "schema",
            Self::Volume => "volume",
            Self::Unique => "unique",
            Self::Bounds => "bounds",
            Self::Nullity => "nullity",
            Self::Regex => "regex",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Warn,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MinOperator {
    #[serde(rename = "gt")]
    GreaterThan,
    #[default]
    #[serde(rename = "ge")]
    GreaterOrEqual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MaxOperator {
    #[serde(rename = "lt")]
    LessThan,
    #[default]
    #[serde(rename = "le")]
    LessOrEqual,
}

/// Joined tag list used in "expected one of" messages.
pub(crate) fn expected_tags<I>(tags: I) -> String
where
    I: IntoIterator<Item = &'static str>,
{
    tags.into_iter().collect::<Vec<_>>().join(", ")
}

impl fmt::Display for PartitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartitionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown partition type: {}", s))
    }
}

impl FromStr for CheckKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown check type: {}", s))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_kind_parsing_matches_display() {
        for kind in PartitionKind::ALL {
            assert_eq!(kind.to_string().parse::<PartitionKind>().unwrap(), kind);
        }
        assert!("yearly".parse::<PartitionKind>().is_err());
    }

    #[test]
    fn test_check_kind_parsing_matches_display() {
        for kind in CheckKind::ALL {
            assert_eq!(kind.as_str().parse::<CheckKind>().unwrap(), kind);
        }
        assert!("row_count".parse::<CheckKind>().is_err());
    }

    #[test]
    fn test_tags_match_exactly() {
        for tag in ["DAILY", "Daily", " daily", "daily\n"] {
            assert!(tag.parse::<PartitionKind>().is_err(), "{:?} resolved", tag);
        }
        assert!("Volume".parse::<CheckKind>().is_err());
        assert!("regex ".parse::<CheckKind>().is_err());
    }

    #[test]
    fn test_operator_defaults_are_inclusive() {
        assert_eq!(MinOperator::default(), MinOperator::GreaterOrEqual);
        assert_eq!(MaxOperator::default(), MaxOperator::LessOrEqual);
        assert_eq!(Severity::default(), Severity::Warn);
    }

    #[test]
    fn test_operator_tags() {
        let gt: MinOperator = serde_yaml::from_str("gt").unwrap();
        let lt: MaxOperator = serde_yaml::from_str("lt").unwrap();
        assert_eq!(gt, MinOperator::GreaterThan);
        assert_eq!(lt, MaxOperator::LessThan);
        assert!(serde_yaml::from_str::<MinOperator>("lt").is_err());
    }
}
