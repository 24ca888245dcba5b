// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! rankwise - explainable relevance ranking for search results.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rankwise::collab::{
    parse_response, parse_thread, parse_tweets, search_and_rank, HistoryStore, JsonDirHistory,
    RecordedResults, SearchRecord,
};
use rankwise::{Ranker, RankerConfig};

mod cli;
use cli::{report, Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,rankwise=info",
        1 => "info,rankwise=debug",
        2 => "debug,rankwise=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.log_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Rank {
            query,
            input,
            json,
            explain,
            limit,
            keyword_weight,
            tfidf_weight,
            trace_terms,
            config,
            history_dir,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(w) = keyword_weight {
                config.keyword_weight = w;
            }
            if let Some(w) = tfidf_weight {
                config.tfidf_weight = w;
            }
            if let Some(n) = trace_terms {
                config.trace_terms = n;
            }
            run_rank(&RankArgs {
                query,
                input,
                json,
                explain,
                limit,
                history_dir,
                config,
            })
        }
        Commands::History {
            dir,
            limit,
            json,
            config,
        } => {
            let limit = match limit {
                Some(n) => n,
                None => load_config(config.as_deref())?.history_limit,
            };
            run_history(&dir, limit, json)
        }
        Commands::Thread { input, tweets, json } => run_thread(input.as_deref(), tweets, json),
    }
}

struct RankArgs {
    query: String,
    input: Option<PathBuf>,
    json: bool,
    explain: bool,
    limit: Option<usize>,
    history_dir: Option<PathBuf>,
    config: RankerConfig,
}

fn load_config(path: Option<&Path>) -> Result<RankerConfig> {
    RankerConfig::load(path).context("failed to load ranker config")
}

/// Read a file, or stdin for `None` / `-`.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display()))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn run_rank(args: &RankArgs) -> Result<()> {
    let ranker = Ranker::from_config(&args.config).context("invalid ranking configuration")?;

    let text = read_input(args.input.as_deref())?;
    let response = parse_response(&text).context("input is not a list of documents or a search response")?;
    info!(documents = response.organic_results.len(), "loaded results");

    let provider = RecordedResults::new(response);
    let mut store = args.history_dir.clone().map(JsonDirHistory::searches);
    let history = store
        .as_mut()
        .map(|s| s as &mut dyn HistoryStore<SearchRecord>);

    let mut results = search_and_rank(&provider, history, &ranker, &args.query)?;
    if let Some(limit) = args.limit {
        results.truncate(limit);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        report::print_ranking(&args.query, &results, &ranker.weights(), args.explain);
    }
    Ok(())
}

fn run_history(dir: &Path, limit: usize, json: bool) -> Result<()> {
    let store = JsonDirHistory::searches(dir);
    let records = store
        .list(limit)
        .with_context(|| format!("failed to read history in {}", dir.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        report::print_history(&records);
    }
    Ok(())
}

fn run_thread(input: Option<&Path>, tweets: bool, json: bool) -> Result<()> {
    let text = read_input(input)?;

    if tweets {
        let tweets = parse_tweets(&text);
        if json {
            println!("{}", serde_json::to_string_pretty(&tweets)?);
        } else {
            report::print_tweets(&tweets);
        }
    } else {
        let output = parse_thread(&text);
        if json {
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            report::print_thread(&output);
        }
    }
    Ok(())
}
