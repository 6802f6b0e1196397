use std::path::PathBuf;

use crate::{
    error::{AppError, AppResult},
    services::sources::TabularSource,
};

/// Reads an export from the local filesystem
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl TabularSource for FileSource {
    async fn fetch_bytes(&self) -> AppResult<Vec<u8>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| AppError::transport(self.locator(), None, e.to_string()))?;

        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "Source read");

        Ok(bytes)
    }

    fn locator(&self) -> String {
        self.path.display().to_string()
    }
}
