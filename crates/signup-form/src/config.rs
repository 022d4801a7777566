// File: src/config.rs
// Purpose: Configuration parsing from signup.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Signup page configuration
///
/// Only the rendered page is configurable. Rule messages and thresholds are
/// fixed by the rule sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupConfig {
    #[serde(default)]
    pub form: FormConfig,

    /// Options of the role selector; the first one is preselected
    #[serde(default = "default_roles")]
    pub roles: Vec<RoleOption>,

    /// Checkboxes of the "How did you find us?" fieldset
    #[serde(default = "default_acquisition")]
    pub acquisition: Vec<AcquisitionChannel>,
}

/// Page text and form target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_intro")]
    pub intro: String,

    /// Path the form posts to
    #[serde(default = "default_action")]
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcquisitionChannel {
    pub value: String,
    pub label: String,
}

// Default values
fn default_title() -> String {
    "Welcome on board!".to_string()
}

fn default_intro() -> String {
    "We just need a little bit of data from you to get you started 🚀".to_string()
}

fn default_action() -> String {
    "/signup".to_string()
}

fn option(value: &str, label: &str) -> (String, String) {
    (value.to_string(), label.to_string())
}

fn default_roles() -> Vec<RoleOption> {
    [
        option("student", "Student"),
        option("teacher", "Teacher"),
        option("employee", "Employee"),
        option("founder", "Founder"),
        option("other", "Other"),
    ]
    .into_iter()
    .map(|(value, label)| RoleOption { value, label })
    .collect()
}

fn default_acquisition() -> Vec<AcquisitionChannel> {
    [
        option("google", "Google"),
        option("friend", "Referred by friend"),
        option("other", "Other"),
    ]
    .into_iter()
    .map(|(value, label)| AcquisitionChannel { value, label })
    .collect()
}

// Default implementations
impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            intro: default_intro(),
            action: default_action(),
        }
    }
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            form: FormConfig::default(),
            roles: default_roles(),
            acquisition: default_acquisition(),
        }
    }
}

impl SignupConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            debug!(?path, "no signup config found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: SignupConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        if config.roles.is_empty() {
            warn!(?path, "no roles configured; every submission will fail the role rule");
        }

        Ok(config)
    }

    /// Load configuration from default path (./signup.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("signup.toml")
    }
}
