mod file;
mod http;
mod json;

pub use json::parse_dataset;

#[cfg(not(target_arch = "wasm32"))]
pub use file::read_dataset;

use crate::domain::entities::dataset::Dataset;
use crate::usecase::ports::source::{DataSource, LoadError};

pub async fn load_dataset(source: &DataSource) -> Result<Dataset, LoadError> {
    match source {
        DataSource::File(path) => file::load(path),
        DataSource::Url(url) => http::fetch_dataset(url).await,
    }
}

/// Turns the configured value into a source. In the browser, relative values
/// are resolved against the page location.
#[cfg(not(target_arch = "wasm32"))]
pub fn resolve_source(raw: &str) -> Result<DataSource, LoadError> {
    Ok(DataSource::parse(raw))
}

#[cfg(target_arch = "wasm32")]
pub fn resolve_source(raw: &str) -> Result<DataSource, LoadError> {
    let href = web_sys::window()
        .and_then(|window| window.location().href().ok())
        .ok_or_else(|| LoadError::InvalidSource("page location is unavailable".to_string()))?;
    DataSource::resolve_relative(raw, &href)
}
