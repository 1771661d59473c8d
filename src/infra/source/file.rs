use std::path::Path;

use crate::domain::entities::dataset::Dataset;
use crate::usecase::ports::source::LoadError;

#[cfg(not(target_arch = "wasm32"))]
pub fn read_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    super::parse_dataset(&bytes)
}

#[cfg(not(target_arch = "wasm32"))]
pub(super) fn load(path: &Path) -> Result<Dataset, LoadError> {
    read_dataset(path)
}

#[cfg(target_arch = "wasm32")]
pub(super) fn load(path: &Path) -> Result<Dataset, LoadError> {
    Err(LoadError::InvalidSource(format!(
        "{} cannot be read from a browser",
        path.display()
    )))
}
