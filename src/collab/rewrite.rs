// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Content rewriting: page text in, thread or tweet list out.
//!
//! The [`ContentRewriter`] is a text generator (an LLM endpoint in practice).
//! Its output is free text that only *usually* follows the requested format,
//! so parsing never fails. It degrades instead.
//!
//! # Thread format
//!
//! ```text
//! Intro paragraph                          → "Thread Intro"
//! ---
//! /1
//! Headline: body text                      → "Headline" / "body text"
//! ---
//! /2
//! body without a usable colon              → "/2 Section"
//! ---
//! stray text longer than ten chars         → "Additional Info"
//! ```
//!
//! If nothing at all matches, the caller gets [`ThreadOutput::Raw`].
//!
//! # Tweet format
//!
//! A JSON array of strings is taken as is. Any other JSON value becomes a
//! single tweet holding the whole text. Non-JSON is split into lines with
//! list markers (`1.`, `-`, `*`) stripped, keeping lines of 1 to 280 chars.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::scrape::truncate_chars;
use crate::error::CollaboratorError;

/// Content sent for thread formatting is cut to this many chars.
pub const THREAD_CONTENT_LIMIT: usize = 8_000;

/// Content sent for tweet generation is cut to this many chars.
pub const TWEET_CONTENT_LIMIT: usize = 4_000;

pub const MAX_TWEET_CHARS: usize = 280;

/// Title used when the caller has none.
pub const DEFAULT_TITLE: &str = "Generated Content";

pub const INTRO_HEADLINE: &str = "Thread Intro";
pub const EXTRA_HEADLINE: &str = "Additional Info";
pub const RAW_HEADLINE: &str = "Formatted Content";

/// Longest headline taken from the text before a colon.
const MAX_HEADLINE_CHARS: usize = 50;

/// What the rewriter is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewriteStyle {
    Thread,
    Tweets,
}

impl RewriteStyle {
    pub fn content_limit(self) -> usize {
        match self {
            Self::Thread => THREAD_CONTENT_LIMIT,
            Self::Tweets => TWEET_CONTENT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteRequest {
    pub style: RewriteStyle,
    pub title: String,
    pub content: String,
}

impl RewriteRequest {
    /// Build a request, truncating `content` to the style's limit.
    pub fn new(style: RewriteStyle, title: Option<&str>, content: &str) -> Self {
        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TITLE);
        Self {
            style,
            title: title.to_string(),
            content: truncate_chars(content, style.content_limit()).to_string(),
        }
    }
}

/// A text generator.
pub trait ContentRewriter {
    fn rewrite(&self, request: &RewriteRequest) -> Result<String, CollaboratorError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadSection {
    pub headline: String,
    pub content: String,
}

impl ThreadSection {
    fn new(headline: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            content: content.into(),
        }
    }
}

/// Parsed rewriter output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ThreadOutput {
    Structured(Vec<ThreadSection>),
    Raw(String),
}

impl ThreadOutput {
    /// Sections for display or storage; raw text becomes one section.
    pub fn sections(&self) -> Vec<ThreadSection> {
        match self {
            Self::Structured(sections) => sections.clone(),
            Self::Raw(text) => vec![ThreadSection::new(RAW_HEADLINE, text.clone())],
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }
}

/// Parse `---`-separated thread text.
pub fn parse_thread(text: &str) -> ThreadOutput {
    let chunks: Vec<&str> = text
        .split("---")
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect();

    let mut sections = Vec::new();

    if let Some(intro) = chunks.first() {
        sections.push(ThreadSection::new(INTRO_HEADLINE, *intro));
    }

    for chunk in chunks.iter().skip(1) {
        if is_numbered(chunk) {
            if let Some(section) = numbered_section(chunk) {
                sections.push(section);
            }
        } else if chunk.chars().count() > 10 {
            sections.push(ThreadSection::new(EXTRA_HEADLINE, *chunk));
        }
    }

    if sections.is_empty() {
        ThreadOutput::Raw(text.to_string())
    } else {
        ThreadOutput::Structured(sections)
    }
}

/// `/N` at the start of a chunk.
fn is_numbered(chunk: &str) -> bool {
    chunk
        .strip_prefix('/')
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_digit())
}

fn numbered_section(chunk: &str) -> Option<ThreadSection> {
    let lines: Vec<&str> = chunk.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.len() < 2 {
        return None;
    }

    let number_line = lines[0].trim();
    let body = lines[1..].join(" ");
    let body = body.trim();

    if let Some(colon) = body.find(':') {
        let char_index = body[..colon].chars().count();
        if char_index > 0 && char_index < MAX_HEADLINE_CHARS {
            return Some(ThreadSection::new(
                body[..colon].trim(),
                body[colon + 1..].trim(),
            ));
        }
    }

    Some(ThreadSection::new(format!("{} Section", number_line), body))
}

/// Parse generated tweets.
pub fn parse_tweets(text: &str) -> Vec<String> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        Ok(_) => vec![text.to_string()],
        Err(_) => text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| strip_bullet(strip_ordinal(line)).trim().to_string())
            .filter(|tweet| {
                let len = tweet.chars().count();
                len > 0 && len <= MAX_TWEET_CHARS
            })
            .collect(),
    }
}

/// Strip a leading `12.` marker.
fn strip_ordinal(line: &str) -> &str {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return line;
    }
    match rest.strip_prefix('.') {
        Some(after) => after.trim_start(),
        None => line,
    }
}

/// Strip a leading `-` or `*` marker.
fn strip_bullet(line: &str) -> &str {
    line.strip_prefix(['-', '*'])
        .map(str::trim_start)
        .unwrap_or(line)
}
