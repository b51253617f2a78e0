use crate::domain::error::FetchError;
use async_trait::async_trait;
use serde_json::Value;

/// Remote side of a batch run: the lookup endpoint and the image hosts.
///
/// The batch procedure only ever talks to this trait, so the HTTP client can
/// be swapped for an in-memory source in tests.
#[async_trait]
pub trait KanjiSource {
    /// Look up one kanji and return the decoded JSON body as-is.
    async fn lookup(&self, kanji: &str) -> Result<Value, FetchError>;

    /// Download the raw bytes behind an image URL.
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
