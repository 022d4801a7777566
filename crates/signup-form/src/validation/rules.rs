// File: src/validation/rules.rs
// Purpose: The signup rule sequence

use signup_validation::{
    has_min_items, has_min_length, is_email, is_equal_to_other_value, is_not_empty,
};

use super::{Validate, ValidationResult};
use crate::submission::Submission;

/// Shortest accepted password, in characters
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// One independent signup check
///
/// Each rule looks at the original submission only, never at another rule's
/// outcome, and contributes at most one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignupRule {
    Email,
    Password,
    PasswordConfirmation,
    Name,
    Role,
    Terms,
    Acquisition,
}

impl SignupRule {
    /// Every rule, in the order its message is reported
    pub const ALL: [SignupRule; 7] = [
        SignupRule::Email,
        SignupRule::Password,
        SignupRule::PasswordConfirmation,
        SignupRule::Name,
        SignupRule::Role,
        SignupRule::Terms,
        SignupRule::Acquisition,
    ];

    /// Message shown when the rule fails
    pub fn message(self) -> &'static str {
        match self {
            SignupRule::Email => "Invalid email address.",
            SignupRule::Password => "You must provide a password with at least six characters.",
            SignupRule::PasswordConfirmation => "Password do not match.",
            SignupRule::Name => "Please provide both your first and last name.",
            SignupRule::Role => "Please select a role.",
            SignupRule::Terms => "You must agree to the terms and conditions.",
            SignupRule::Acquisition => "Please select at least 1 acquisition channel.",
        }
    }

    pub fn passes(self, submission: &Submission) -> bool {
        match self {
            SignupRule::Email => is_email(&submission.email),
            SignupRule::Password => {
                is_not_empty(&submission.password)
                    && has_min_length(&submission.password, MIN_PASSWORD_LENGTH)
            }
            // Runs even when the password itself was rejected; two blank fields match
            SignupRule::PasswordConfirmation => {
                is_equal_to_other_value(&submission.password, &submission.confirm_password)
            }
            SignupRule::Name => {
                is_not_empty(&submission.first_name) && is_not_empty(&submission.last_name)
            }
            SignupRule::Role => is_not_empty(&submission.role),
            SignupRule::Terms => submission.terms,
            SignupRule::Acquisition => has_min_items(&submission.acquisition, 1),
        }
    }
}

/// Evaluate every rule against `submission` and collect the failures in order
pub fn validate_signup(submission: &Submission) -> ValidationResult {
    let errors = SignupRule::ALL
        .iter()
        .filter(|rule| !rule.passes(submission))
        .map(|rule| rule.message().to_string())
        .collect();

    ValidationResult::from_errors(errors)
}

impl Validate for Submission {
    fn validate(&self) -> ValidationResult {
        validate_signup(self)
    }
}
