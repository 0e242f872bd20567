//! Plain HTTP access to the puzzle site.
//!
//! The pages we need are server-rendered, so a GET is enough: no browser,
//! no script execution.

use chrono::NaiveDate;
use log::{debug, info, warn};

use super::source::FetchError;

/// Path and query of the game page for `date`.
pub fn game_path(date: NaiveDate) -> String {
    format!("/strands-game/?date={}", date.format("%Y-%m-%d"))
}

/// Path of the daily answers article, e.g. `/strands-today-answers-october-08-2024/`.
pub fn answers_path(date: NaiveDate) -> String {
    let month_day = date.format("%B-%d").to_string().to_lowercase();
    format!("/strands-today-answers-{}-{}/", month_day, date.format("%Y"))
}

/// Builds the reqwest client shared by every adapter in this module.
pub(crate) fn http_client(user_agent: &str) -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .build()
        .map_err(|e| FetchError::Config(e.to_string()))
}

/// Fetches HTML pages from one site.
pub struct PageClient {
    base_url: String,
    client: reqwest::Client,
}

impl PageClient {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, FetchError> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: http_client(user_agent)?,
        })
    }

    /// Full URL for a path (which must start with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GETs `path` and returns the body. Non-2xx statuses become `FetchError::Api`.
    pub async fn fetch_html(&self, path: &str) -> Result<String, FetchError> {
        let url = self.url(path);
        info!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("Response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Page fetch failed: {} - {} bytes", status, err_body.len());
            return Err(FetchError::Api {
                status,
                message: format!("GET {url} failed"),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
