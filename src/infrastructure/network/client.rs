use crate::domain::error::FetchError;
use crate::domain::traits::KanjiSource;
use crate::infrastructure::config::Config;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

const SEARCH_PATH: &str = "/v1/guest/search";

/// Lookup API client backed by reqwest
pub struct HttpKanjiSource {
    client: Client,
    search_url: String,
}

impl HttpKanjiSource {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            search_url: format!("{}{}", base_url.trim_end_matches('/'), SEARCH_PATH),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Ok(Self::new(create_client(config)?, &config.base_url))
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }
}

/// Every request made through this client gives up after `timeout_secs`.
pub fn create_client(config: &Config) -> Result<Client, FetchError> {
    Ok(Client::builder()
        .timeout(config.timeout())
        .user_agent(config.user_agent.as_str())
        .build()?)
}

#[async_trait]
impl KanjiSource for HttpKanjiSource {
    async fn lookup(&self, kanji: &str) -> Result<Value, FetchError> {
        debug!("Looking up {} at {}", kanji, self.search_url);

        // The body decides the outcome, not the status: an error page that
        // is still JSON classifies by its content.
        let response = self
            .client
            .get(&self.search_url)
            .query(&[("word", kanji)])
            .send()
            .await?;
        debug!("Lookup {} answered {}", kanji, response.status());

        Ok(response.json::<Value>().await?)
    }

    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!("Downloading image {}", url);

        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(bytes.to_vec())
    }
}
