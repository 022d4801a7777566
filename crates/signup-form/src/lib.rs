// File: src/lib.rs
// Purpose: Signup form library exports

pub mod action;
pub mod config;
pub mod form_data;
pub mod submission;
pub mod validation;
pub mod view;

pub use action::SignupAction;
pub use config::{AcquisitionChannel, FormConfig, RoleOption, SignupConfig};
pub use form_data::FormData;
pub use submission::Submission;
pub use validation::{validate_signup, SignupRule, Validate, ValidationResult};
pub use view::{render_error_list, render_signup_form};
