//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{DefinitionSource, FetchError};

/// A canned dictionary for tests that don't need real API calls.
#[derive(Default)]
pub struct StubDictionary {
    definitions: HashMap<String, String>,
    failing: HashSet<String>,
    /// Words looked up, in call order.
    calls: Mutex<Vec<String>>,
}

impl StubDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, word: &str, definition: &str) -> Self {
        self.definitions.insert(word.to_string(), definition.to_string());
        self
    }

    /// Lookups for `word` fail with a network error.
    pub fn failing(mut self, word: &str) -> Self {
        self.failing.insert(word.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl DefinitionSource for StubDictionary {
    fn name(&self) -> &str {
        "stub"
    }

    async fn define(&self, word: &str) -> Result<Option<String>, FetchError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(word.to_string());
        }
        if self.failing.contains(word) {
            return Err(FetchError::Network("connection refused".to_string()));
        }
        Ok(self.definitions.get(word).cloned())
    }
}
