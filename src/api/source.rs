use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while talking to a remote site.
#[derive(Debug)]
pub enum FetchError {
    /// Client misconfigured (bad base URL, unusable user agent).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Server answered with a non-success status.
    Api { status: u16, message: String },
    /// Body could not be decoded.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Config(msg) => write!(f, "config error: {msg}"),
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "HTTP {status}: {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Anything that can look up a short definition for a word.
#[async_trait]
pub trait DefinitionSource: Send + Sync {
    /// Returns the name of the source, for logs.
    fn name(&self) -> &str;

    /// `Ok(None)` means the source answered but has nothing usable for `word`.
    async fn define(&self, word: &str) -> Result<Option<String>, FetchError>;
}
