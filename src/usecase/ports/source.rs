use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Where the dataset comes from. `http://` and `https://` values are fetched;
/// anything else is treated as a local file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let lower = raw.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Url(raw.to_string())
        } else {
            DataSource::File(PathBuf::from(raw))
        }
    }

    /// Browser builds: relative values are resolved against the page URL.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn resolve_relative(raw: &str, base: &str) -> Result<Self, LoadError> {
        if let url @ DataSource::Url(_) = Self::parse(raw) {
            return Ok(url);
        }
        let base = reqwest::Url::parse(base)
            .map_err(|err| LoadError::InvalidSource(format!("{base}: {err}")))?;
        let joined = base
            .join(raw.trim())
            .map_err(|err| LoadError::InvalidSource(format!("{raw}: {err}")))?;
        Ok(DataSource::Url(joined.into()))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Any of these is fatal for the session; the UI shows the message instead of the table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("expected a JSON array of objects")]
    Shape,

    #[error("invalid data source: {0}")]
    InvalidSource(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_distinguishes_urls_from_paths() {
        assert_eq!(
            DataSource::parse("https://example.org/regulations.json"),
            DataSource::Url("https://example.org/regulations.json".to_string())
        );
        assert_eq!(
            DataSource::parse(" regulations.json "),
            DataSource::File(PathBuf::from("regulations.json"))
        );
    }

    #[test]
    fn relative_sources_resolve_against_the_page() {
        assert_eq!(
            DataSource::resolve_relative("regulations.json", "https://example.org/app/index.html")
                .expect("relative source should resolve"),
            DataSource::Url("https://example.org/app/regulations.json".to_string())
        );
        assert_eq!(
            DataSource::resolve_relative("/data/regs.json", "http://localhost:8080/")
                .expect("rooted source should resolve"),
            DataSource::Url("http://localhost:8080/data/regs.json".to_string())
        );
        assert_eq!(
            DataSource::resolve_relative("https://cdn.example.org/r.json", "not a url")
                .expect("absolute source ignores the base"),
            DataSource::Url("https://cdn.example.org/r.json".to_string())
        );
        assert!(matches!(
            DataSource::resolve_relative("regulations.json", "not a url"),
            Err(LoadError::InvalidSource(_))
        ));
    }
}
