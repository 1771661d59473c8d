use crate::domain::entities::dataset::Dataset;
use crate::infra::source::{load_dataset, resolve_source};
use crate::usecase::ports::source::{DataSource, LoadError};

pub struct LoadService {
    source: DataSource,
}

impl LoadService {
    pub fn new(source: DataSource) -> Self {
        Self { source }
    }

    pub fn from_config(raw: &str) -> Result<Self, LoadError> {
        match resolve_source(raw) {
            Ok(source) => Ok(Self::new(source)),
            Err(err) => {
                tracing::error!(source = raw, error = %err, "unusable data source");
                Err(err)
            }
        }
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    pub async fn load(&self) -> Result<Dataset, LoadError> {
        match load_dataset(&self.source).await {
            Ok(dataset) => {
                tracing::info!(records = dataset.len(), source = %self.source, "dataset loaded");
                Ok(dataset)
            }
            Err(err) => {
                tracing::error!(source = %self.source, error = %err, "failed to load dataset");
                Err(err)
            }
        }
    }
}
