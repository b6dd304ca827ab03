// blueprint-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

/// A single defect found while resolving or validating a configuration document.
///
/// `entity` is a human-readable locator: an entity kind (`"partition"`, `"asset"`)
/// for cross-entity violations, or a path such as `asset 'orders' > checks[1]`
/// once assembly has attached context to a variant error.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{entity}: unrecognized type '{tag}'")]
    #[diagnostic(
        code(blueprint::config::unrecognized_variant),
        help("Expected one of: {expected}.")
    )]
    UnrecognizedVariant {
        entity: String,
        tag: String,
        expected: String,
    },

    #[error("{entity}: field '{field}' {rule}")]
    #[diagnostic(code(blueprint::config::invalid_field))]
    InvalidVariantFields {
        entity: String,
        field: String,
        rule: String,
    },

    #[error("{entity}: {rule}")]
    #[diagnostic(code(blueprint::config::cross_field))]
    CrossFieldInvariantViolation { entity: String, rule: String },

    #[error("duplicate {entity} name '{name}'")]
    #[diagnostic(
        code(blueprint::config::duplicate_name),
        help("Names must be unique within the document.")
    )]
    DuplicateName { entity: String, name: String },

    #[error("{entity} '{from}': {field} references unknown '{to}'")]
    #[diagnostic(
        code(blueprint::config::dangling_reference),
        help("Declare '{to}' in the document or remove the reference.")
    )]
    DanglingReference {
        entity: String,
        field: String,
        from: String,
        to: String,
    },

    #[error("circular dependency between assets: {}", .assets.join(" -> "))]
    #[diagnostic(
        code(blueprint::config::cycle),
        help("Break the loop by removing one of the depends_on links.")
    )]
    CircularDependency { assets: Vec<String> },

    #[error("asset '{asset}' requires resource '{resource}' which is not provided")]
    #[diagnostic(code(blueprint::config::missing_resource))]
    MissingResource { asset: String, resource: String },
}

impl ConfigError {
    pub(crate) fn invalid_field(
        entity: impl Into<String>,
        field: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        ConfigError::InvalidVariantFields {
            entity: entity.into(),
            field: field.into(),
            rule: rule.into(),
        }
    }

    /// Replaces the entity locator of a variant-level error with `context`.
    /// Cross-entity errors already name their subject and are returned unchanged.
    pub(crate) fn within(self, context: &str) -> Self {
        match self {
            ConfigError::UnrecognizedVariant { tag, expected, .. } => {
                ConfigError::UnrecognizedVariant {
                    entity: context.to_string(),
                    tag,
                    expected,
                }
            }
            ConfigError::InvalidVariantFields { field, rule, .. } => {
                ConfigError::InvalidVariantFields {
                    entity: context.to_string(),
                    field,
                    rule,
                }
            }
            ConfigError::CrossFieldInvariantViolation { rule, .. } => {
                ConfigError::CrossFieldInvariantViolation {
                    entity: context.to_string(),
                    rule,
                }
            }
            other => other,
        }
    }
}

/// Every defect found in one pass over a document, in discovery order.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Default)]
#[error("configuration rejected with {} error(s)", .errors.len())]
#[diagnostic(
    code(blueprint::config::rejected),
    help("Fix every listed error; the document is accepted only when none remain.")
)]
pub struct ErrorReport {
    #[related]
    errors: Vec<ConfigError>,
}

impl ErrorReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ConfigError) {
        self.errors.push(error);
    }

    pub fn merge(&mut self, other: ErrorReport) {
        self.errors.extend(other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ConfigError] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConfigError> {
        self.errors.iter()
    }

    /// Attaches `context` to every variant-level error in the report.
    pub(crate) fn within(self, context: &str) -> Self {
        self.errors.into_iter().map(|e| e.within(context)).collect()
    }

    /// `Ok(value)` when nothing was recorded, the report itself otherwise.
    pub fn into_result<T>(self, value: T) -> Result<T, ErrorReport> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl From<ConfigError> for ErrorReport {
    fn from(error: ConfigError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl Extend<ConfigError> for ErrorReport {
    fn extend<I: IntoIterator<Item = ConfigError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl FromIterator<ConfigError> for ErrorReport {
    fn from_iter<I: IntoIterator<Item = ConfigError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ErrorReport {
    type Item = ConfigError;
    type IntoIter = std::vec::IntoIter<ConfigError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorReport {
    type Item = &'a ConfigError;
    type IntoIter = std::slice::Iter<'a, ConfigError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_within_rewrites_variant_errors_only() {
        let field = ConfigError::invalid_field("daily partition", "start_date", "bad");
        assert_eq!(
            field.within("partition 'p1'"),
            ConfigError::invalid_field("partition 'p1'", "start_date", "bad")
        );

        let dup = ConfigError::DuplicateName {
            entity: "asset".into(),
            name: "a1".into(),
        };
        assert_eq!(dup.clone().within("ignored"), dup);
    }

    #[test]
    fn test_report_into_result() {
        assert_eq!(ErrorReport::new().into_result(7).unwrap(), 7);

        let report = ErrorReport::from(ConfigError::MissingResource {
            asset: "a1".into(),
            resource: "db".into(),
        });
        let err = report.into_result(7).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(
            err.to_string(),
            "configuration rejected with 1 error(s)"
        );
    }

    #[test]
    fn test_display_messages_carry_context() {
        let err = ConfigError::DanglingReference {
            entity: "asset".into(),
            field: "depends_on".into(),
            from: "a1".into(),
            to: "a2".into(),
        };
        assert_eq!(
            err.to_string(),
            "asset 'a1': depends_on references unknown 'a2'"
        );

        let cycle = ConfigError::CircularDependency {
            assets: vec!["a".into(), "b".into(), "a".into()],
        };
        assert_eq!(
            cycle.to_string(),
            "circular dependency between assets: a -> b -> a"
        );
    }
}
