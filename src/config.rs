//! Extraction config helpers.
//!
//! The config is an optional JSON file; CLI flags override its paths.
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Current schema version for the extraction config.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;
pub const DEFAULT_INPUT: &str = "Feature_Spec.md";
pub const DEFAULT_OUTPUT: &str = "features.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    pub schema_version: u32,
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Top-level section titles (case-insensitive) that never hold features.
    #[serde(default = "default_skip_sections")]
    pub skip_sections: Vec<String>,
}

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_skip_sections() -> Vec<String> {
    vec![
        "clockify feature specification".to_string(),
        "table of contents".to_string(),
    ]
}

/// Build the config used when no config file is given.
pub fn default_config() -> CatalogConfig {
    CatalogConfig {
        schema_version: CONFIG_SCHEMA_VERSION,
        input: default_input(),
        output: default_output(),
        skip_sections: default_skip_sections(),
    }
}

/// Render the default config as pretty JSON.
pub fn config_stub() -> Result<String> {
    serde_json::to_string_pretty(&default_config()).context("serialize config stub")
}

pub fn load_config(path: &Path) -> Result<CatalogConfig> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: CatalogConfig =
        serde_json::from_slice(&bytes).context("parse feature catalog config JSON")?;
    Ok(config)
}

/// Write `config` to `path`, refusing to replace an existing file unless forced.
pub fn write_config(path: &Path, config: &CatalogConfig, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(anyhow!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let text = serde_json::to_string_pretty(config).context("serialize config")?;
    fs::write(path, text.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn validate_config(config: &CatalogConfig) -> Result<()> {
    if config.schema_version != CONFIG_SCHEMA_VERSION {
        return Err(anyhow!(
            "unsupported feature catalog config schema_version {}",
            config.schema_version
        ));
    }
    if config.input.as_os_str().is_empty() {
        return Err(anyhow!("config input path must not be empty"));
    }
    if config.output.as_os_str().is_empty() {
        return Err(anyhow!("config output path must not be empty"));
    }
    if config.skip_sections.iter().any(|title| title.trim().is_empty()) {
        return Err(anyhow!("config skip_sections entries must not be blank"));
    }
    Ok(())
}
