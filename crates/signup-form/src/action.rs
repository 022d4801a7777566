// File: src/action.rs
// Purpose: Submit handling for the signup form

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::form_data::FormData;
use crate::submission::Submission;
use crate::validation::{validate_signup, ValidationResult};

/// Holds the result of the latest submission for the view to render
///
/// Every submit re-runs the whole rule sequence; the previous result is
/// replaced, never consulted.
#[derive(Debug, Clone, Default)]
pub struct SignupAction {
    state: ValidationResult,
}

impl SignupAction {
    /// Start with no errors shown
    pub fn new() -> Self {
        Self {
            state: ValidationResult::valid(),
        }
    }

    /// Result of the latest submission
    pub fn state(&self) -> &ValidationResult {
        &self.state
    }

    /// Validate decoded form entries and keep the result
    pub fn submit(&mut self, form: &FormData) -> &ValidationResult {
        let submission = Submission::from_form_data(form);
        self.state = validate_signup(&submission);

        if self.state.is_valid() {
            info!(email = %submission.email, role = %submission.role, "signup accepted");
        } else {
            debug!(
                error_count = self.state.errors().len(),
                errors = ?self.state.errors(),
                "signup rejected"
            );
        }

        &self.state
    }

    /// Decode a urlencoded body, then submit it
    pub fn submit_urlencoded(&mut self, body: &str) -> Result<&ValidationResult> {
        let form = FormData::parse_urlencoded(body).context("Failed to read signup form body")?;
        Ok(self.submit(&form))
    }

    /// Clear any shown errors
    pub fn reset(&mut self) {
        self.state = ValidationResult::valid();
    }
}
