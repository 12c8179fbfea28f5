//! Flat configuration map produced by the resolver.
//!
//! Responsibilities:
//! - Hold resolved configuration as an ordered key/value map.
//! - Provide overlay semantics used by every merge stage.
//! - Render the map as dotenv lines and produce masked copies for display.
//!
//! Does NOT handle:
//! - Deciding which values go into the map (see `loader::builder`).
//! - Writing the map into the process environment.
//!
//! Invariants:
//! - Keys are ordered (`BTreeMap`) so output is deterministic.
//! - Overlaying replaces values for overlapping keys and never removes keys.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder printed in place of secret values.
pub const MASKED_VALUE: &str = "****";

/// A single configuration value.
///
/// Nearly everything is text; the JWT lifetime is the one numeric entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Number(u64),
    Text(String),
}

impl ConfigValue {
    /// Returns the text content, or `None` for numeric values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(s) => Some(s),
            ConfigValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<u64> {
        match self {
            ConfigValue::Number(n) => Some(*n),
            ConfigValue::Text(_) => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Text(s) => f.write_str(s),
            ConfigValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Text(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Text(value)
    }
}

impl From<u64> for ConfigValue {
    fn from(value: u64) -> Self {
        ConfigValue::Number(value)
    }
}

/// Ordered flat mapping from configuration key to value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigMap {
    entries: BTreeMap<String, ConfigValue>,
}

impl ConfigMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    /// Text value for `key`, if present and textual.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(ConfigValue::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overlay `other` onto this map; `other` wins on overlapping keys.
    pub fn overlay(&mut self, other: &ConfigMap) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// Copy of this map with secret values replaced by [`MASKED_VALUE`].
    ///
    /// Empty secrets stay empty so a disabled secret is still visible as such.
    pub fn masked(&self) -> ConfigMap {
        let entries = self
            .entries
            .iter()
            .map(|(key, value)| {
                let shown = match value {
                    ConfigValue::Text(s) if is_secret_key(key) && !s.is_empty() => {
                        ConfigValue::from(MASKED_VALUE)
                    }
                    other => other.clone(),
                };
                (key.clone(), shown)
            })
            .collect();
        ConfigMap { entries }
    }

    /// Render as `KEY=value` lines readable by dotenv parsers.
    pub fn to_dotenv(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.entries {
            out.push_str(key);
            out.push('=');
            out.push_str(&dotenv_quote(&value.to_string()));
            out.push('\n');
        }
        out
    }
}

impl FromIterator<(String, ConfigValue)> for ConfigMap {
    fn from_iter<I: IntoIterator<Item = (String, ConfigValue)>>(iter: I) -> Self {
        ConfigMap {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ConfigMap {
    type Item = (&'a String, &'a ConfigValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Whether `key` holds a password or signing secret.
pub fn is_secret_key(key: &str) -> bool {
    key.starts_with("SECRET_") || key.ends_with("_PASSWORD")
}

fn dotenv_quote(value: &str) -> String {
    let plain = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/' | ':' | ','));
    if plain {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '$' => quoted.push_str("\\$"),
            '\n' => quoted.push_str("\\n"),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}
