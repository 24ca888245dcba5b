// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Page scraping contract.
//!
//! A [`PageScraper`] loads a URL (usually in a headless browser) and returns
//! what it could extract. Whatever the implementation collects, [`ScrapedPage::clamp`]
//! bounds it before anything downstream sees it:
//!
//! | Field        | Limit |
//! |--------------|-------|
//! | `bodyText`   | 20000 chars |
//! | `headings`   | 20, non-empty text |
//! | `paragraphs` | 10, non-empty |
//! | `links`      | 20, non-empty text and href |
//! | `images`     | 10, non-empty src |

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CollaboratorError;

pub const MAX_BODY_CHARS: usize = 20_000;
pub const MAX_HEADINGS: usize = 20;
pub const MAX_PARAGRAPHS: usize = 10;
pub const MAX_LINKS: usize = 20;
pub const MAX_IMAGES: usize = 10;

/// Deadline for page navigation.
pub const NAVIGATION_TIMEOUT: Duration = Duration::from_secs(45);

/// Deadline for starting the browser.
pub const LAUNCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Loads a page and extracts its content.
pub trait PageScraper {
    fn scrape(&self, url: &str) -> Result<ScrapedPage, CollaboratorError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedPage {
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub body_text: String,
    #[serde(default)]
    pub headings: Vec<Heading>,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub images: Vec<Image>,
    /// JSON-LD blocks that parsed.
    #[serde(default)]
    pub structured_data: Vec<Value>,
    pub scraped_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Lowercase tag name, `h1` to `h6`.
    pub tag: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub title: String,
}

impl ScrapedPage {
    /// An empty page for `url`, stamped now.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: String::new(),
            meta_description: String::new(),
            body_text: String::new(),
            headings: Vec::new(),
            paragraphs: Vec::new(),
            links: Vec::new(),
            images: Vec::new(),
            structured_data: Vec::new(),
            scraped_at: Utc::now(),
        }
    }

    /// Trim whitespace, drop empty entries and apply the extraction limits.
    pub fn clamp(mut self) -> Self {
        self.body_text = truncate_chars(&self.body_text, MAX_BODY_CHARS).to_string();

        self.headings = self
            .headings
            .into_iter()
            .map(|h| Heading {
                tag: h.tag.to_lowercase(),
                text: h.text.trim().to_string(),
            })
            .filter(|h| !h.text.is_empty())
            .take(MAX_HEADINGS)
            .collect();

        self.paragraphs = self
            .paragraphs
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .take(MAX_PARAGRAPHS)
            .collect();

        self.links = self
            .links
            .into_iter()
            .map(|l| Link {
                text: l.text.trim().to_string(),
                href: l.href,
            })
            .filter(|l| !l.text.is_empty() && !l.href.is_empty())
            .take(MAX_LINKS)
            .collect();

        self.images = self
            .images
            .into_iter()
            .filter(|i| !i.src.is_empty())
            .take(MAX_IMAGES)
            .collect();

        self
    }

    /// Text handed to a rewriter: body text, else paragraphs, else the meta
    /// description. `None` when the page has nothing to say.
    pub fn rewrite_source(&self) -> Option<String> {
        if !self.body_text.trim().is_empty() {
            return Some(self.body_text.clone());
        }
        if !self.paragraphs.is_empty() {
            return Some(self.paragraphs.join("\n\n"));
        }
        if !self.meta_description.trim().is_empty() {
            return Some(self.meta_description.clone());
        }
        None
    }
}

/// The first `max` chars of `text`, cut on a char boundary.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}
