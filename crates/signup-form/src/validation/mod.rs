// File: src/validation/mod.rs
// Purpose: Validation result and the Validate trait

use serde::Serialize;

pub mod rules;

pub use rules::{validate_signup, SignupRule};

/// Trait for types that can be validated
pub trait Validate {
    /// Runs every check and reports failures as ordered messages
    fn validate(&self) -> ValidationResult;

    fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }
}

/// Outcome of validating one submission
///
/// `errors` is `None` exactly when nothing failed, otherwise it holds at
/// least one message. Serializes as `{"errors":null}` or `{"errors":[...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    errors: Option<Vec<String>>,
}

impl ValidationResult {
    /// A result with no errors
    pub fn valid() -> Self {
        Self { errors: None }
    }

    /// Build from collected messages; an empty list means valid
    pub fn from_errors(errors: Vec<String>) -> Self {
        if errors.is_empty() {
            Self::valid()
        } else {
            Self {
                errors: Some(errors),
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_none()
    }

    /// Messages in rule order, empty when valid
    pub fn errors(&self) -> &[String] {
        self.errors.as_deref().unwrap_or_default()
    }

    pub fn into_errors(self) -> Option<Vec<String>> {
        self.errors
    }
}
