//! `api.dictionaryapi.dev` as a [`DefinitionSource`].

use async_trait::async_trait;
use log::{debug, info};
use reqwest::Url;

use super::client::http_client;
use super::source::{DefinitionSource, FetchError};
use super::types::DictionaryResponse;

pub struct DictionaryApi {
    base_url: Url,
    client: reqwest::Client,
}

impl DictionaryApi {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| FetchError::Config(format!("bad dictionary URL {base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::Config(format!("dictionary URL {base_url} cannot take a path")));
        }

        Ok(Self {
            base_url,
            client: http_client(user_agent)?,
        })
    }

    /// The word is appended as one percent-encoded path segment.
    fn entry_url(&self, word: &str) -> Url {
        let mut url = self.base_url.clone();
        // Checked in new(): the base can take path segments
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["api", "v2", "entries", "en", word]);
        }
        url
    }
}

#[async_trait]
impl DefinitionSource for DictionaryApi {
    fn name(&self) -> &str {
        "dictionaryapi.dev"
    }

    async fn define(&self, word: &str) -> Result<Option<String>, FetchError> {
        let url = self.entry_url(word);
        info!("Fetching definition for {}", word);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        // Unknown words come back as 404 with an error object
        if response.status().as_u16() != 200 {
            debug!("No entry for {}: HTTP {}", word, response.status());
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let parsed: DictionaryResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        let definition = parsed.first_definition().map(str::to_string);
        debug!("Definition for {}: {:?}", word, definition);
        Ok(definition)
    }
}
