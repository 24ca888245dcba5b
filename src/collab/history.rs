// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Append-only history of searches and formatted pages.
//!
//! The ranking core never reads history. Stores exist so a front end can show
//! "recent searches" and so formatted threads can be revisited.
//!
//! # On-disk layout ([`JsonDirHistory`])
//!
//! ```text
//! <dir>/
//!   search_2026-10-18T09-14-03-117Z_0000.json
//!   search_2026-10-18T09-14-03-117Z_0001.json   same millisecond, next seq
//!   search_2026-10-18T10-02-45-980Z_0000.json
//! ```
//!
//! Timestamps are fixed-width UTC, so lexicographic order is chronological
//! order and listing is a reverse sort of file names. Files are created with
//! `create_new`; an existing record is never overwritten.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::rewrite::ThreadSection;
use crate::error::HistoryError;
use crate::types::Document;

/// Filename timestamp format. Fixed width, sorts chronologically.
const FILE_TIMESTAMP: &str = "%Y-%m-%dT%H-%M-%S-%3fZ";

/// Gives up after this many same-millisecond collisions.
const MAX_SEQ: u32 = 10_000;

/// An append-only record store.
pub trait HistoryStore<R> {
    /// Append `record`, returning its id.
    fn save(&mut self, record: R) -> Result<String, HistoryError>;

    /// Up to `limit` records, newest first.
    fn list(&self, limit: usize) -> Result<Vec<StoredRecord<R>>, HistoryError>;
}

/// A record plus the id it was saved under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord<R> {
    pub id: String,
    #[serde(flatten)]
    pub record: R,
}

/// One search and what it returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub query: String,
    pub timestamp: DateTime<Utc>,
    pub results: Vec<Document>,
    #[serde(default)]
    pub total_results: Option<u64>,
}

impl SearchRecord {
    pub fn new(query: impl Into<String>, results: Vec<Document>, total_results: Option<u64>) -> Self {
        Self {
            query: query.into(),
            timestamp: Utc::now(),
            results,
            total_results,
        }
    }
}

/// One page rewritten into a thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedRecord {
    pub title: String,
    /// Char length of the text sent to the rewriter, before truncation.
    pub original_content_length: usize,
    pub formatted: Vec<ThreadSection>,
    pub timestamp: DateTime<Utc>,
}

// =============================================================================
// IN-MEMORY
// =============================================================================

/// History kept in a vector. Ids are insertion indices.
#[derive(Debug, Clone)]
pub struct MemoryHistory<R> {
    records: Vec<R>,
}

impl<R> Default for MemoryHistory<R> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<R> MemoryHistory<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Clone> HistoryStore<R> for MemoryHistory<R> {
    fn save(&mut self, record: R) -> Result<String, HistoryError> {
        self.records.push(record);
        Ok((self.records.len() - 1).to_string())
    }

    fn list(&self, limit: usize) -> Result<Vec<StoredRecord<R>>, HistoryError> {
        Ok(self
            .records
            .iter()
            .enumerate()
            .rev()
            .take(limit)
            .map(|(i, record)| StoredRecord {
                id: i.to_string(),
                record: record.clone(),
            })
            .collect())
    }
}

// =============================================================================
// JSON DIRECTORY
// =============================================================================

/// History kept as one pretty-printed JSON file per record.
#[derive(Debug, Clone)]
pub struct JsonDirHistory<R> {
    dir: PathBuf,
    prefix: String,
    _record: PhantomData<fn() -> R>,
}

impl<R> JsonDirHistory<R> {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            _record: PhantomData,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> HistoryError {
        HistoryError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl JsonDirHistory<SearchRecord> {
    /// Search history under `dir`, files prefixed `search_`.
    pub fn searches(dir: impl Into<PathBuf>) -> Self {
        Self::new(dir, "search")
    }
}

impl JsonDirHistory<FormattedRecord> {
    /// Formatted-content history under `dir`, files prefixed `formatted_`.
    pub fn formatted(dir: impl Into<PathBuf>) -> Self {
        Self::new(dir, "formatted")
    }
}

impl<R: Serialize + DeserializeOwned> HistoryStore<R> for JsonDirHistory<R> {
    fn save(&mut self, record: R) -> Result<String, HistoryError> {
        let body = serde_json::to_vec_pretty(&record)?;
        fs::create_dir_all(&self.dir).map_err(|e| self.io_error(&self.dir, e))?;

        let stamp = Utc::now().format(FILE_TIMESTAMP).to_string();
        for seq in 0..MAX_SEQ {
            let id = format!("{}_{}_{:04}.json", self.prefix, stamp, seq);
            let path = self.dir.join(&id);

            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    file.write_all(&body).map_err(|e| self.io_error(&path, e))?;
                    tracing::debug!(path = %path.display(), "saved history record");
                    return Ok(id);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(self.io_error(&path, e)),
            }
        }

        let path = self.dir.join(format!("{}_{}", self.prefix, stamp));
        Err(self.io_error(
            &path,
            std::io::Error::new(ErrorKind::AlreadyExists, "too many records in one millisecond"),
        ))
    }

    fn list(&self, limit: usize) -> Result<Vec<StoredRecord<R>>, HistoryError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(&self.dir, e)),
        };

        let file_prefix = format!("{}_", self.prefix);
        let mut names: Vec<String> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| self.io_error(&self.dir, e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(".json") && name.starts_with(&file_prefix) {
                names.push(name);
            }
        }
        names.sort_unstable_by(|a, b| b.cmp(a));
        names.truncate(limit);

        names
            .into_iter()
            .map(|id| {
                let path = self.dir.join(&id);
                let text = fs::read_to_string(&path).map_err(|e| self.io_error(&path, e))?;
                let record = serde_json::from_str(&text)
                    .map_err(|source| HistoryError::Decode { path, source })?;
                Ok(StoredRecord { id, record })
            })
            .collect()
    }
}
