// File: src/form_data.rs
// Purpose: Decoded form entries in submission order

use anyhow::{Context, Result};

/// Form entries from a POST body
///
/// Keeps every `(name, value)` pair in the order it was sent, so repeated
/// checkbox names survive. Values are stored exactly as decoded, without
/// trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    /// Create empty form data
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create from name/value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse an `application/x-www-form-urlencoded` body
    pub fn parse_urlencoded(body: &str) -> Result<Self> {
        let mut entries = Vec::new();

        for pair in body.split('&').filter(|pair| !pair.is_empty()) {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            let name = decode_component(name)
                .with_context(|| format!("Failed to decode form field name: {:?}", name))?;
            let value = decode_component(value)
                .with_context(|| format!("Failed to decode value of form field {:?}", name))?;
            entries.push((name, value));
        }

        Ok(Self { entries })
    }

    /// Append an entry
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Last value sent for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Every value sent for `name`, in submission order
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Check if a field was sent
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Decode one urlencoded component, `+` meaning space
fn decode_component(raw: &str) -> Result<String> {
    let spaced = raw.replace('+', " ");
    Ok(urlencoding::decode(&spaced)?.into_owned())
}
