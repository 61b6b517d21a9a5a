use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::entry::{Method, ResourceType};
use crate::filter::FilterCriteria;
use crate::preview::PreviewOptions;

/// Response preview parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Lines shown before truncating a response preview.
    pub max_lines: usize,
    /// Spaces per indentation level when pretty-printing JSON.
    pub indent: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        let defaults = PreviewOptions::default();
        Self {
            max_lines: defaults.max_lines,
            indent: defaults.indent,
        }
    }
}

impl From<&PreviewConfig> for PreviewOptions {
    fn from(cfg: &PreviewConfig) -> Self {
        PreviewOptions {
            max_lines: cfg.max_lines,
            indent: cfg.indent,
        }
    }
}

/// Global configuration loaded from `~/.config/harmock/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarmockConfig {
    /// Methods kept when no `--method` flag is given (e.g. `["GET", "POST"]`).
    pub default_methods: Vec<String>,
    /// Resource type kept when no `--type` flag is given.
    pub default_resource_type: String,
    /// Rows visible at once in the interactive picker.
    pub page_size: usize,
    /// Optional preview settings; if missing, built-in defaults are used.
    #[serde(default)]
    pub preview: Option<PreviewConfig>,
}

impl Default for HarmockConfig {
    fn default() -> Self {
        Self {
            default_methods: vec![Method::Get.as_str().to_string()],
            default_resource_type: ResourceType::Xhr.as_str().to_string(),
            page_size: 15,
            preview: None,
        }
    }
}

impl HarmockConfig {
    /// Default filter from config values. Unknown method or type names are rejected.
    pub fn default_criteria(&self) -> Result<FilterCriteria> {
        let methods = self
            .default_methods
            .iter()
            .map(|m| m.parse::<Method>().map_err(anyhow::Error::msg))
            .collect::<Result<Vec<_>>>()?;
        let resource_type = self
            .default_resource_type
            .parse::<ResourceType>()
            .map_err(anyhow::Error::msg)?;
        Ok(FilterCriteria::default()
            .with_methods(methods)
            .with_resource_type(Some(resource_type)))
    }

    pub fn preview_options(&self) -> PreviewOptions {
        self.preview.as_ref().map(PreviewOptions::from).unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("harmock")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HarmockConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HarmockConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: HarmockConfig = toml::from_str(&data)?;
    Ok(cfg)
}
