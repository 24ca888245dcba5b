// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the rankwise command-line interface.
//!
//! Three subcommands: `rank` to score a saved result page against a query,
//! `history` to list searches recorded by `rank --history-dir`, and `thread`
//! to parse generated thread or tweet text into sections.

pub mod display;
pub mod report;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rankwise",
    about = "Explainable keyword + TF-IDF ranking for search results",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a page of search results against a query
    Rank {
        /// Search query
        #[arg(long)]
        query: String,

        /// JSON file with results: a bare array or a search response
        /// with `organic_results`. Reads stdin when omitted or `-`.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print ranked documents as JSON
        #[arg(long)]
        json: bool,

        /// Show the full score calculation for each document
        #[arg(long)]
        explain: bool,

        /// Maximum number of results to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Weight of the keyword score (overrides config)
        #[arg(long)]
        keyword_weight: Option<f64>,

        /// Weight of the TF-IDF similarity score (overrides config)
        #[arg(long)]
        tfidf_weight: Option<f64>,

        /// Number of terms in each trace list (overrides config)
        #[arg(long)]
        trace_terms: Option<usize>,

        /// Config file (JSON). Falls back to $RANKWISE_CONFIG.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Record this search under the given directory
        #[arg(long)]
        history_dir: Option<PathBuf>,
    },

    /// List recorded searches, newest first
    History {
        /// Directory passed to `rank --history-dir`
        #[arg(long)]
        dir: PathBuf,

        /// Maximum number of searches to list (defaults to config historyLimit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print records as JSON
        #[arg(long)]
        json: bool,

        /// Config file (JSON). Falls back to $RANKWISE_CONFIG.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Parse generated thread text into sections
    Thread {
        /// Text file to parse. Reads stdin when omitted or `-`.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Parse as a tweet list instead of a `---` separated thread
        #[arg(long)]
        tweets: bool,

        /// Print the parsed output as JSON
        #[arg(long)]
        json: bool,
    },
}
