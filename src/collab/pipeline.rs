// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! End-to-end flows built from the collaborator traits.
//!
//! ```text
//! search_and_rank:  query ─► provider ─► history.save ─► ranker ─► ranked
//! format_page:      url ─► scraper ─► clamp ─► rewriter ─► parse_thread ─► history.save
//! ```
//!
//! History is a side record. A failed save is logged and the flow carries on;
//! the caller still gets their results.

use tracing::{debug, info, warn};

use super::history::{FormattedRecord, HistoryStore, SearchRecord};
use super::provider::SearchProvider;
use super::rewrite::{parse_thread, ContentRewriter, RewriteRequest, RewriteStyle, ThreadOutput};
use super::scrape::{PageScraper, ScrapedPage};
use crate::engine::Ranker;
use crate::error::PipelineError;
use crate::types::RankedDocument;

/// Search, record, rank.
pub fn search_and_rank<P>(
    provider: &P,
    history: Option<&mut dyn HistoryStore<SearchRecord>>,
    ranker: &Ranker,
    query: &str,
) -> Result<Vec<RankedDocument>, PipelineError>
where
    P: SearchProvider + ?Sized,
{
    let query = query.trim();
    if query.is_empty() {
        return Err(PipelineError::EmptyQuery);
    }

    let response = provider.search_page(query)?;
    info!(
        query,
        results = response.organic_results.len(),
        total = ?response.total_results(),
        "search complete"
    );

    if let Some(store) = history {
        let record = SearchRecord::new(query, response.organic_results.clone(), response.total_results());
        match store.save(record) {
            Ok(id) => debug!(id = %id, "search recorded"),
            Err(e) => warn!(error = %e, "failed to record search"),
        }
    }

    Ok(ranker.rank(query, response.organic_results)?)
}

/// A page rewritten as a thread.
#[derive(Debug, Clone)]
pub struct FormattedPage {
    pub page: ScrapedPage,
    pub title: String,
    pub output: ThreadOutput,
    /// Id of the history record, when one was saved.
    pub history_id: Option<String>,
}

/// Scrape `url` and rewrite its content as a thread.
pub fn format_page<S, W>(
    scraper: &S,
    rewriter: &W,
    history: Option<&mut dyn HistoryStore<FormattedRecord>>,
    url: &str,
    title: Option<&str>,
) -> Result<FormattedPage, PipelineError>
where
    S: PageScraper + ?Sized,
    W: ContentRewriter + ?Sized,
{
    let url = url.trim();
    if url.is_empty() {
        return Err(PipelineError::EmptyUrl);
    }

    let page = scraper.scrape(url)?.clamp();
    let source = page
        .rewrite_source()
        .ok_or_else(|| PipelineError::EmptyPage(url.to_string()))?;

    let title = title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(page.title.as_str());
    let request = RewriteRequest::new(RewriteStyle::Thread, Some(title), &source);
    debug!(url, chars = request.content.chars().count(), "rewriting page");

    let generated = rewriter.rewrite(&request)?;
    let output = parse_thread(&generated);
    if !output.is_structured() {
        warn!(url, "rewriter output had no thread sections, keeping raw text");
    }

    let history_id = history.and_then(|store| {
        let record = FormattedRecord {
            title: request.title.clone(),
            original_content_length: source.chars().count(),
            formatted: output.sections(),
            timestamp: chrono::Utc::now(),
        };
        match store.save(record) {
            Ok(id) => Some(id),
            Err(e) => {
                warn!(error = %e, "failed to record formatted page");
                None
            }
        }
    });

    Ok(FormattedPage {
        page,
        title: request.title,
        output,
        history_id,
    })
}
