//! # Page Scraping
//!
//! Synchronous parsers that turn fetched HTML into typed records. They know
//! the exact markup of the puzzle site and nothing else; fetching lives in
//! [`crate::api`].
//!
//! `scraper::Html` is not `Send`, so every parser takes `&str`, builds its
//! document locally and returns owned data.

pub mod answers;
pub mod board;
pub mod hints;

use std::fmt;

use scraper::Selector;

#[derive(Debug)]
pub enum ScrapeError {
    /// A required element was not on the page. Names what was looked for.
    MissingElement(&'static str),
    /// A CSS selector failed to compile.
    Selector(String),
    /// Embedded JSON was malformed.
    Json(serde_json::Error),
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrapeError::MissingElement(what) => write!(f, "could not find {what}"),
            ScrapeError::Selector(msg) => write!(f, "bad selector: {msg}"),
            ScrapeError::Json(e) => write!(f, "embedded JSON is malformed: {e}"),
        }
    }
}

impl std::error::Error for ScrapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScrapeError::Json(e) => Some(e),
            _ => None,
        }
    }
}

pub(crate) fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(format!("{css}: {e}")))
}

/// Concatenated text of an element with surrounding whitespace removed.
pub(crate) fn element_text(element: scraper::ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

pub use answers::{AnswersPage, parse_answers};
pub use board::parse_board;
pub use hints::parse_props;
