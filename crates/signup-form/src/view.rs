// File: src/view.rs
// Purpose: Maud markup for the signup form and its error list

use maud::{html, Markup};

use crate::config::SignupConfig;
use crate::submission::fields;
use crate::validation::ValidationResult;

/// Render the error list, or nothing when the result is valid
///
/// Each message is rendered verbatim, in rule order.
pub fn render_error_list(result: &ValidationResult) -> Markup {
    html! {
        @if !result.is_valid() {
            ul.error {
                @for error in result.errors() {
                    li { (error) }
                }
            }
        }
    }
}

/// Render the full signup form with the latest result
pub fn render_signup_form(config: &SignupConfig, result: &ValidationResult) -> Markup {
    html! {
        form method="post" action=(config.form.action) {
            h2 { (config.form.title) }
            p { (config.form.intro) }

            div.control {
                label for=(fields::EMAIL) { "Email" }
                input id=(fields::EMAIL) type="email" name=(fields::EMAIL);
            }

            div.control-row {
                div.control {
                    label for=(fields::PASSWORD) { "Password" }
                    input id=(fields::PASSWORD) type="password" name=(fields::PASSWORD);
                }
                div.control {
                    label for=(fields::CONFIRM_PASSWORD) { "Confirm Password" }
                    input id=(fields::CONFIRM_PASSWORD) type="password" name=(fields::CONFIRM_PASSWORD);
                }
            }

            hr;

            div.control-row {
                div.control {
                    label for=(fields::FIRST_NAME) { "First Name" }
                    input type="text" id=(fields::FIRST_NAME) name=(fields::FIRST_NAME);
                }
                div.control {
                    label for=(fields::LAST_NAME) { "Last Name" }
                    input type="text" id=(fields::LAST_NAME) name=(fields::LAST_NAME);
                }
            }

            div.control {
                label for=(fields::ROLE) { "What best describes your role?" }
                select id=(fields::ROLE) name=(fields::ROLE) {
                    @for (index, role) in config.roles.iter().enumerate() {
                        option value=(role.value) selected[index == 0] { (role.label) }
                    }
                }
            }

            fieldset {
                legend { "How did you find us?" }
                @for channel in &config.acquisition {
                    div.control {
                        input type="checkbox"
                            id=(format!("{}-{}", fields::ACQUISITION, channel.value))
                            name=(fields::ACQUISITION)
                            value=(channel.value);
                        label for=(format!("{}-{}", fields::ACQUISITION, channel.value)) {
                            (channel.label)
                        }
                    }
                }
            }

            div.control {
                label for="terms-and-conditions" {
                    input type="checkbox" id="terms-and-conditions" name=(fields::TERMS);
                    "I agree to the terms and conditions"
                }
            }

            (render_error_list(result))

            p.form-actions {
                button.button.button-flat type="reset" { "Reset" }
                button.button { "Sign up" }
            }
        }
    }
}
