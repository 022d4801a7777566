// File: src/submission.rs
// Purpose: Field values collected from one signup attempt

use serde::{Deserialize, Deserializer, Serialize};

use crate::form_data::FormData;

/// Field names as they appear in the form markup and the input contract
pub mod fields {
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirm-password";
    pub const FIRST_NAME: &str = "first-name";
    pub const LAST_NAME: &str = "last-name";
    pub const ROLE: &str = "role";
    pub const TERMS: &str = "terms";
    pub const ACQUISITION: &str = "acquisition";
}

/// The full set of values from one form interaction
///
/// Every field is always present. A value the browser did not send is the
/// empty string, an unchecked `terms` box is `false` and no ticked channel
/// is an empty `acquisition` list. When deserialized, `terms` takes either a
/// JSON boolean or the checkbox's string value (`"on"`), where any non-empty
/// string means checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Submission {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    #[serde(deserialize_with = "deserialize_checkbox")]
    pub terms: bool,
    pub acquisition: Vec<String>,
}

/// JSON shapes a checkbox value may arrive in
#[derive(Deserialize)]
#[serde(untagged)]
enum CheckboxValue {
    Flag(bool),
    Value(String),
}

fn deserialize_checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<CheckboxValue>::deserialize(deserializer)?;
    Ok(match value {
        Some(CheckboxValue::Flag(checked)) => checked,
        Some(CheckboxValue::Value(value)) => !value.is_empty(),
        None => false,
    })
}

impl Submission {
    /// Collect a submission from decoded form entries
    ///
    /// Single-valued fields take the last entry for their name, `acquisition`
    /// takes every entry in order, and `terms` is set when the checkbox sent
    /// a non-empty value.
    pub fn from_form_data(form: &FormData) -> Self {
        let text = |name: &str| form.get(name).unwrap_or_default().to_string();

        Self {
            email: text(fields::EMAIL),
            password: text(fields::PASSWORD),
            confirm_password: text(fields::CONFIRM_PASSWORD),
            first_name: text(fields::FIRST_NAME),
            last_name: text(fields::LAST_NAME),
            role: text(fields::ROLE),
            terms: form.get(fields::TERMS).is_some_and(|v| !v.is_empty()),
            acquisition: form
                .get_all(fields::ACQUISITION)
                .map(str::to_string)
                .collect(),
        }
    }
}

impl From<&FormData> for Submission {
    fn from(form: &FormData) -> Self {
        Self::from_form_data(form)
    }
}
