use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("category request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("category request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode category list: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
