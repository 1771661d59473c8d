use std::path::Path;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
#[cfg(not(target_arch = "wasm32"))]
use directories::ProjectDirs;
use serde::Deserialize;

use crate::domain::entities::view::{SchemaVariant, SummaryScope};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_DATA_SOURCE: &str = "regulations.json";

/// Viewer settings, read from `config.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub data_source: String,
    pub page_size: usize,
    pub schema: SchemaVariant,
    pub sort_glyphs: bool,
    pub summary: bool,
    pub summary_scope: SummaryScope,
    pub log_level: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data_source: DEFAULT_DATA_SOURCE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            schema: SchemaVariant::default(),
            sort_glyphs: true,
            summary: true,
            summary_scope: SummaryScope::default(),
            log_level: "info".to_string(),
        }
    }
}

impl ViewerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ViewerConfig = toml::from_str(text).context("failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("invalid config: {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            bail!("page_size must be greater than zero")
        }
        if self.data_source.trim().is_empty() {
            bail!("data_source must not be empty")
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("org", "regview", "regview")
        .ok_or_else(|| anyhow::anyhow!("unable to resolve application directories"))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join("config.toml"))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}
