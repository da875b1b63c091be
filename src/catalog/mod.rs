pub mod error;
pub mod file;
pub mod http;

pub use error::CatalogError;
pub use file::FileSource;
pub use http::HttpSource;

use crate::config::SourceConfig;
use crate::model::Category;
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait CategorySource: Send + Sync {
    /// Where the categories come from, for logs and status lines.
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<Vec<Category>, CatalogError>;
}

/// Performs one read of `source`. Any failure is logged and yields an empty list.
pub async fn load_or_empty(source: &dyn CategorySource) -> Vec<Category> {
    match source.fetch().await {
        Ok(categories) => {
            log::debug!(
                "Fetched {} categories from {}",
                categories.len(),
                source.describe()
            );
            categories
        }
        Err(e) => {
            log::error!("Error fetching categories from {}: {}", source.describe(), e);
            Vec::new()
        }
    }
}

pub fn source_from_config(
    config: &SourceConfig,
    file: Option<&Path>,
) -> Result<Box<dyn CategorySource>, CatalogError> {
    match file {
        Some(path) => Ok(Box::new(FileSource::new(path))),
        None => Ok(Box::new(HttpSource::from_config(config)?)),
    }
}
