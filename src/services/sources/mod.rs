/// Tabular source abstraction
///
/// A source hands back the raw bytes of one recommendations export. Readers make a
/// single attempt per call and report every unsuccessful retrieval as a transport error.
/// Decoding is left to the parser so malformed text surfaces as a parse error.
use std::sync::Arc;

use crate::error::AppResult;

pub mod file;
pub mod http;

pub use file::FileSource;
pub use http::HttpSource;

/// Trait for raw tabular content providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TabularSource: Send + Sync {
    /// Retrieve the resource's full content
    async fn fetch_bytes(&self) -> AppResult<Vec<u8>>;

    /// URL or path of the resource, for error reports
    fn locator(&self) -> String;
}

/// Picks a reader by locator scheme: http(s) URLs go over the network, anything else is a path
pub fn source_for(locator: &str, http_client: reqwest::Client) -> Arc<dyn TabularSource> {
    if locator.starts_with("http://") || locator.starts_with("https://") {
        Arc::new(HttpSource::new(http_client, locator))
    } else {
        Arc::new(FileSource::new(locator))
    }
}
