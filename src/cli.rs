use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::{default_config_path, ViewerConfig};
use crate::domain::entities::view::SchemaVariant;

#[derive(Parser, Debug, Default)]
#[command(name = "regview", version, about = "Browse a regulatory dataset as a filterable table")]
pub struct Cli {
    /// JSON file path or http(s) URL of the dataset
    #[arg(long = "data")]
    pub data: Option<String>,

    /// Rows per page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Column layout: classic or indexed
    #[arg(long)]
    pub schema: Option<SchemaVariant>,

    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Loads the config file, then applies flags on top of it.
    pub fn resolve_config(&self) -> Result<ViewerConfig> {
        let path = match &self.config {
            Some(path) => path.clone(),
            None => default_config_path()?,
        };
        let config = ViewerConfig::load_from(&path)?;
        self.apply(config)
    }

    pub fn apply(&self, mut config: ViewerConfig) -> Result<ViewerConfig> {
        if let Some(data) = &self.data {
            config.data_source = data.clone();
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(schema) = self.schema {
            config.schema = schema;
        }
        config.validate()?;
        Ok(config)
    }
}
