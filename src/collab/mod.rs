// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Collaborator contracts around the ranking core.
//!
//! The engine itself does no I/O. Everything that talks to the outside world
//! sits behind a trait here, so the core can be driven by a real HTTP client,
//! a recorded payload, or a test fake with no change to scoring:
//!
//! ```text
//! SearchProvider ──► Vec<Document> ──► Ranker ──► Vec<RankedDocument>
//!                                         │
//!                                         └──► HistoryStore (append-only)
//!
//! PageScraper ──► ScrapedPage ──► ContentRewriter ──► parse_thread / parse_tweets
//! ```
//!
//! | Module     | Contract |
//! |------------|----------|
//! | `provider` | search-engine payloads and the `SearchProvider` trait |
//! | `scrape`   | extracted page content and the `PageScraper` trait |
//! | `rewrite`  | generated-text parsing and the `ContentRewriter` trait |
//! | `history`  | append-only record stores |
//! | `pipeline` | the two end-to-end flows built from the above |
//!
//! Timeouts, retries and cancellation belong to the trait implementations.

pub mod history;
pub mod pipeline;
pub mod provider;
pub mod rewrite;
pub mod scrape;

pub use history::{FormattedRecord, HistoryStore, JsonDirHistory, MemoryHistory, SearchRecord, StoredRecord};
pub use pipeline::{format_page, search_and_rank, FormattedPage};
pub use provider::{parse_documents, parse_response, RecordedResults, SearchProvider, SearchResponse};
pub use rewrite::{parse_thread, parse_tweets, ContentRewriter, RewriteRequest, ThreadOutput, ThreadSection};
pub use scrape::{PageScraper, ScrapedPage};
