use crate::domain::entities::dataset::Dataset;
use crate::usecase::ports::source::LoadError;

pub(super) async fn fetch_dataset(url: &str) -> Result<Dataset, LoadError> {
    tracing::debug!(url, "fetching dataset");
    let response = reqwest::get(url)
        .await
        .map_err(|err| LoadError::Transport(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|err| LoadError::Transport(err.to_string()))?;
    super::parse_dataset(&body)
}
