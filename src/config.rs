//! Configuration file support for notice-report.
//!
//! Provides YAML-based configuration through `notice-report.config.yml`
//! files: the catalog server connection, the application to report on,
//! report rendering options, the custom attribute rules, and free-form
//! properties exported into the report.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::notice_generation::domain::{FilterRule, OverrideRule};
use crate::ports::outbound::RuleProvider;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "notice-report.config.yml";

fn default_true() -> bool {
    true
}

/// Top-level configuration file schema.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub application: ApplicationConfig,
    #[serde(default)]
    pub report: ReportOptions,
    #[serde(default)]
    pub rules: RuleConfig,
    /// Key/value pairs embedded into the report as display properties.
    #[serde(default)]
    pub export_properties: BTreeMap<String, String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Catalog server connection settings.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ServerConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub api_token: Option<String>,
}

/// The application whose notices are reported.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApplicationConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
}

/// Report rendering options.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportOptions {
    /// Also write per-component text files next to the HTML report.
    #[serde(default)]
    pub text_file_output: bool,
    #[serde(default = "default_true")]
    pub show_file_paths: bool,
    #[serde(default = "default_true")]
    pub show_copyrights: bool,
    /// Custom HTML template carrying the empty data block div.
    #[serde(default)]
    pub template_path: Option<PathBuf>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            text_file_output: false,
            show_file_paths: true,
            show_copyrights: true,
            template_path: None,
        }
    }
}

/// Custom attribute rules, in declared order.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RuleConfig {
    #[serde(default)]
    pub filter: Vec<RuleEntry>,
    #[serde(default, rename = "override")]
    pub override_rules: Vec<RuleEntry>,
}

/// One configured rule: the attribute name it targets and its value
/// (the comparison value for filters, the override type for overrides).
#[derive(Debug, Clone, Deserialize)]
pub struct RuleEntry {
    pub attribute: String,
    pub value: String,
}

impl RuleProvider for RuleConfig {
    fn filter_rules(&self) -> Vec<FilterRule> {
        self.filter
            .iter()
            .map(|entry| FilterRule::new(entry.attribute.clone(), &entry.value))
            .collect()
    }

    fn override_rules(&self) -> Vec<OverrideRule> {
        self.override_rules
            .iter()
            .map(|entry| OverrideRule::new(entry.attribute.clone(), &entry.value))
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.server.url.trim().is_empty() {
        bail!(
            "Invalid config: server.url must not be empty.\n\n\
             💡 Hint: Set server.url to the base URL of the compliance catalog server."
        );
    }

    for (i, entry) in config.rules.filter.iter().enumerate() {
        if entry.attribute.trim().is_empty() {
            bail!(
                "Invalid config: rules.filter[{}].attribute must not be empty.\n\n\
                 💡 Hint: Each rule must name the custom attribute it targets.",
                i
            );
        }
    }

    for (i, entry) in config.rules.override_rules.iter().enumerate() {
        if entry.attribute.trim().is_empty() {
            bail!(
                "Invalid config: rules.override[{}].attribute must not be empty.\n\n\
                 💡 Hint: Each rule must name the custom attribute it targets.",
                i
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
