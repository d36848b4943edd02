//! Input Validation
//!
//! Declarative per-input rules. A rule list is checked in order and the
//! first failure is reported.

use thiserror::Error;

use crate::config::{
    FIELD_NAME_MAX_LEN, FIELD_NAME_MIN_LEN, OPTION_MAX_LEN, OPTION_MIN_LEN, TITLE_MAX_LEN, TITLE_MIN_LEN,
};

/// Failed rule; the Display text is the message shown under the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Minimum {0} characters")]
    TooShort(usize),
    #[error("Maximum {0} characters")]
    TooLong(usize),
}

/// Anything that can check a text input
pub trait Validator {
    fn validate(&self, value: &str) -> Result<(), ValidationError>;
}

/// A single constraint on a text value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Non-empty after trimming
    Required,
    /// At least N characters
    MinLength(usize),
    /// At most N characters
    MaxLength(usize),
}

impl Validator for Rule {
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        // Length rules leave empty input to `Required`
        let len = value.chars().count();
        match *self {
            Rule::Required if value.trim().is_empty() => Err(ValidationError::Required),
            Rule::MinLength(min) if len > 0 && len < min => Err(ValidationError::TooShort(min)),
            Rule::MaxLength(max) if len > max => Err(ValidationError::TooLong(max)),
            _ => Ok(()),
        }
    }
}

/// Ordered rule list for one kind of input
#[derive(Debug, Clone, Copy)]
pub struct FieldRules(&'static [Rule]);

impl FieldRules {
    pub const fn new(rules: &'static [Rule]) -> Self {
        Self(rules)
    }
}

impl Validator for FieldRules {
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        self.0.iter().try_for_each(|rule| rule.validate(value))
    }
}

pub const TITLE_RULES: FieldRules =
    FieldRules::new(&[Rule::Required, Rule::MinLength(TITLE_MIN_LEN), Rule::MaxLength(TITLE_MAX_LEN)]);

pub const FIELD_NAME_RULES: FieldRules =
    FieldRules::new(&[Rule::Required, Rule::MinLength(FIELD_NAME_MIN_LEN), Rule::MaxLength(FIELD_NAME_MAX_LEN)]);

pub const OPTION_RULES: FieldRules =
    FieldRules::new(&[Rule::Required, Rule::MinLength(OPTION_MIN_LEN), Rule::MaxLength(OPTION_MAX_LEN)]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_rules_boundaries() {
        assert_eq!(TITLE_RULES.validate(""), Err(ValidationError::Required));
        assert_eq!(TITLE_RULES.validate("   "), Err(ValidationError::Required));
        assert_eq!(TITLE_RULES.validate("a"), Err(ValidationError::TooShort(2)));
        assert_eq!(TITLE_RULES.validate("ab"), Ok(()));
        assert_eq!(TITLE_RULES.validate(&"x".repeat(64)), Ok(()));
        assert_eq!(TITLE_RULES.validate(&"x".repeat(65)), Err(ValidationError::TooLong(64)));
    }

    #[test]
    fn test_field_name_max_is_32() {
        assert_eq!(FIELD_NAME_RULES.validate(&"n".repeat(32)), Ok(()));
        assert_eq!(FIELD_NAME_RULES.validate(&"n".repeat(33)), Err(ValidationError::TooLong(32)));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 2 chars, 4 bytes
        assert_eq!(OPTION_RULES.validate("ёж"), Ok(()));
        assert_eq!(OPTION_RULES.validate(&"я".repeat(64)), Ok(()));
    }

    #[test]
    fn test_min_length_alone_ignores_empty() {
        let rules = FieldRules::new(&[Rule::MinLength(3)]);
        assert_eq!(rules.validate(""), Ok(()));
        assert_eq!(rules.validate("ab"), Err(ValidationError::TooShort(3)));
    }

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::Required.to_string(), "This field is required");
        assert_eq!(ValidationError::TooShort(2).to_string(), "Minimum 2 characters");
        assert_eq!(ValidationError::TooLong(64).to_string(), "Maximum 64 characters");
    }
}
