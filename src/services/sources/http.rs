use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    services::sources::TabularSource,
};

/// Reads an export over HTTP with a single GET
#[derive(Clone)]
pub struct HttpSource {
    http_client: HttpClient,
    url: String,
}

impl HttpSource {
    pub fn new(http_client: HttpClient, url: impl Into<String>) -> Self {
        Self {
            http_client,
            url: url.into(),
        }
    }
}

#[async_trait::async_trait]
impl TabularSource for HttpSource {
    async fn fetch_bytes(&self) -> AppResult<Vec<u8>> {
        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| {
                AppError::transport(&self.url, e.status().map(|s| s.as_u16()), e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::transport(
                &self.url,
                Some(status.as_u16()),
                format!("HTTP error! Status: {}", status.as_u16()),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::transport(&self.url, None, e.to_string()))?;

        tracing::debug!(url = %self.url, bytes = body.len(), "Source fetched");

        Ok(body.to_vec())
    }

    fn locator(&self) -> String {
        self.url.clone()
    }
}
