// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search providers and their payloads.
//!
//! Two payload shapes are accepted wherever documents are read:
//!
//! ```text
//! [ {"title": ..., "snippet": ..., "link": ...}, ... ]          bare array
//!
//! { "organic_results": [ ... ],                                  search response
//!   "search_information": { "total_results": 1234 } }
//! ```
//!
//! A response without `organic_results` simply has no documents. Anything
//! else (a string, a number, an array of numbers) is malformed input.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CollaboratorError, RankError};
use crate::types::Document;

/// Number of results requested from a provider per query.
pub const DEFAULT_RESULT_COUNT: usize = 20;

/// Anything that can turn a query into candidate documents.
///
/// Implementations own their transport, timeouts and retries. Any list,
/// including an empty one, is valid input to the engine.
pub trait SearchProvider {
    fn search(&self, query: &str) -> Result<Vec<Document>, CollaboratorError>;

    /// Full response including the provider's total hit count, when known.
    fn search_page(&self, query: &str) -> Result<SearchResponse, CollaboratorError> {
        Ok(SearchResponse {
            organic_results: self.search(query)?,
            search_information: None,
        })
    }
}

/// A search-engine response page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub organic_results: Vec<Document>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_information: Option<SearchInformation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchInformation {
    #[serde(default)]
    pub total_results: Option<u64>,
}

impl SearchResponse {
    /// Total hits the provider reported, if any.
    pub fn total_results(&self) -> Option<u64> {
        self.search_information.as_ref().and_then(|info| info.total_results)
    }
}

/// Decode either payload shape into a response.
pub fn parse_response(json: &str) -> Result<SearchResponse, RankError> {
    let value: Value = serde_json::from_str(json)?;
    if value.is_array() {
        let organic_results: Vec<Document> = serde_json::from_value(value)?;
        return Ok(SearchResponse {
            organic_results,
            search_information: None,
        });
    }
    Ok(serde_json::from_value(value)?)
}

/// Decode either payload shape into its documents.
pub fn parse_documents(json: &str) -> Result<Vec<Document>, RankError> {
    parse_response(json).map(|response| response.organic_results)
}

/// A provider that replays one recorded response for every query.
#[derive(Debug, Clone, Default)]
pub struct RecordedResults {
    response: SearchResponse,
}

impl RecordedResults {
    pub fn new(response: SearchResponse) -> Self {
        Self { response }
    }
}

impl SearchProvider for RecordedResults {
    fn search(&self, _query: &str) -> Result<Vec<Document>, CollaboratorError> {
        Ok(self.response.organic_results.clone())
    }

    fn search_page(&self, _query: &str) -> Result<SearchResponse, CollaboratorError> {
        Ok(self.response.clone())
    }
}
