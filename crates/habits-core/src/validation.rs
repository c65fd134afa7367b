//! Form Validation
//!
//! Declarative per-field rules evaluated by a pure function, so the dialog's
//! validation can be tested without rendering anything.

use std::collections::BTreeMap;

use crate::config::HabitsConfig;

/// Name of the habit dialog's only field
pub const NAME_FIELD: &str = "name";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Field missing from the submitted values
    Required,
    TooShort,
    TooLong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub kind: ValidationErrorKind,
    pub message: String,
}

/// Constraints on one text field
///
/// Lengths count UTF-16 code units, the same unit the browser uses for
/// `input.value.length`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRules {
    pub required: bool,
    pub min_len: usize,
    pub max_len: usize,
    pub min_message: String,
    pub max_message: String,
}

impl FieldRules {
    /// Required text field with the standard length messages
    pub fn text(label: &str, min_len: usize, max_len: usize) -> Self {
        Self {
            required: true,
            min_len,
            max_len,
            min_message: format!("{} cannot be less than {} characters.", label, min_len),
            max_message: format!("{} cannot be more than {} characters.", label, max_len),
        }
    }

    fn check(&self, field: &str, value: Option<&str>) -> Option<ValidationError> {
        let error = |kind, message: &str| {
            Some(ValidationError {
                field: field.to_string(),
                kind,
                message: message.to_string(),
            })
        };

        let Some(value) = value else {
            return if self.required {
                error(ValidationErrorKind::Required, "Required")
            } else {
                None
            };
        };

        let len = value.encode_utf16().count();
        if len < self.min_len {
            error(ValidationErrorKind::TooShort, &self.min_message)
        } else if len > self.max_len {
            error(ValidationErrorKind::TooLong, &self.max_message)
        } else {
            None
        }
    }
}

/// Field name → rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSchema {
    fields: BTreeMap<String, FieldRules>,
}

impl FormSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, rules: FieldRules) -> Self {
        self.fields.insert(name.to_string(), rules);
        self
    }

    /// Schema of the "Create a New Habit" form
    pub fn habit(config: &HabitsConfig) -> Self {
        Self::new().field(
            NAME_FIELD,
            FieldRules::text("Name", config.name_min_len, config.name_max_len),
        )
    }

    pub fn rules(&self, field: &str) -> Option<&FieldRules> {
        self.fields.get(field)
    }

    /// Check one field; unknown fields always pass
    pub fn validate_field(&self, field: &str, value: &str) -> Option<ValidationError> {
        self.fields.get(field).and_then(|rules| rules.check(field, Some(value)))
    }

    /// Check every field of the schema against `values`
    pub fn validate<'a>(&self, values: impl IntoIterator<Item = (&'a str, &'a str)>) -> ValidationReport {
        let values: BTreeMap<&str, &str> = values.into_iter().collect();
        let results = self
            .fields
            .iter()
            .map(|(name, rules)| (name.clone(), rules.check(name, values.get(name.as_str()).copied())))
            .collect();
        ValidationReport { results }
    }
}

/// Outcome of validating a whole form: every schema field maps to an error or `None`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    results: BTreeMap<String, Option<ValidationError>>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.results.values().all(Option::is_none)
    }

    pub fn error_for(&self, field: &str) -> Option<&ValidationError> {
        self.results.get(field).and_then(Option::as_ref)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.results.values().flatten()
    }

    /// First failing field, in field-name order
    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> FormSchema {
        FormSchema::habit(&HabitsConfig::default())
    }

    #[test]
    fn test_valid_name_passes() {
        let report = schema().validate([(NAME_FIELD, "Read for 30 minutes")]);
        assert!(report.is_valid());
        assert!(report.error_for(NAME_FIELD).is_none());
    }

    #[test]
    fn test_empty_name_is_too_short() {
        let report = schema().validate([(NAME_FIELD, "")]);
        let err = report.error_for(NAME_FIELD).expect("error expected");
        assert_eq!(err.kind, ValidationErrorKind::TooShort);
        assert_eq!(err.message, "Name cannot be less than 2 characters.");
    }

    #[test]
    fn test_long_name_is_too_long() {
        let name = "x".repeat(101);
        let err = schema().validate_field(NAME_FIELD, &name).expect("error expected");
        assert_eq!(err.kind, ValidationErrorKind::TooLong);
        assert_eq!(err.message, "Name cannot be more than 100 characters.");
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let schema = schema();
        assert!(schema.validate_field(NAME_FIELD, "ab").is_none());
        assert!(schema.validate_field(NAME_FIELD, &"y".repeat(100)).is_none());
        assert!(schema.validate_field(NAME_FIELD, "a").is_some());
    }

    #[test]
    fn test_missing_field_is_required() {
        let report = schema().validate(std::iter::empty());
        assert!(!report.is_valid());
        assert_eq!(report.first_error().unwrap().kind, ValidationErrorKind::Required);
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        assert!(schema().validate_field(NAME_FIELD, "  ").is_none());
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // One astral-plane emoji is two UTF-16 units
        assert!(schema().validate_field(NAME_FIELD, "🏃").is_none());
        assert!(schema().validate_field(NAME_FIELD, "é").is_some());
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let report = schema().validate([(NAME_FIELD, "Walk"), ("color", "")]);
        assert!(report.is_valid());
        assert!(schema().validate_field("color", "").is_none());
    }

    #[test]
    fn test_custom_bounds_from_config() {
        let config = HabitsConfig {
            name_min_len: 3,
            name_max_len: 5,
            ..HabitsConfig::default()
        };
        let schema = FormSchema::habit(&config);
        assert!(schema.validate_field(NAME_FIELD, "ab").is_some());
        assert!(schema.validate_field(NAME_FIELD, "abcdef").is_some());
        assert_eq!(
            schema.rules(NAME_FIELD).unwrap().min_message,
            "Name cannot be less than 3 characters."
        );
    }
}
