use crate::catalog::{CatalogError, CategorySource};
use crate::model::Category;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Reads a category list exported to disk, in the same shape the API serves.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CategorySource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<Category>, CatalogError> {
        let content = tokio::fs::read(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })?;
        Ok(serde_json::from_slice(&content)?)
    }
}
