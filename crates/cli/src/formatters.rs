//! Output formatters for resolved configuration.
//!
//! Responsibilities:
//! - Render a `ConfigMap` as JSON, YAML, dotenv lines, or an aligned table.
//!
//! Does NOT handle:
//! - Masking secrets (callers pass an already-masked map).
//! - Printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - Every rendering ends with a newline.
//! - Keys appear in sorted order in every format.

use anyhow::Result;
use appenv_config::ConfigMap;

/// Output format enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Env,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "env" | "dotenv" => Ok(OutputFormat::Env),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!(
                "Invalid output format: {}. Valid options: json, yaml, env, table",
                s
            ),
        }
    }
}

/// Render `config` in `format`.
pub fn format_config(config: &ConfigMap, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(config)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Yaml => Ok(serde_yaml::to_string(config)?),
        OutputFormat::Env => Ok(config.to_dotenv()),
        OutputFormat::Table => Ok(format_table(config)),
    }
}

fn format_table(config: &ConfigMap) -> String {
    if config.is_empty() {
        return "No configuration keys resolved.\n".to_string();
    }

    let key_width = config.keys().map(str::len).max().unwrap_or(0).max("Key".len());
    let mut out = format!("{:<width$}  {}\n", "Key", "Value", width = key_width);
    out.push_str(&"-".repeat(key_width + 2 + "Value".len()));
    out.push('\n');

    for (key, value) in config.iter() {
        out.push_str(&format!("{:<width$}  {}\n", key, value, width = key_width));
    }
    out
}
