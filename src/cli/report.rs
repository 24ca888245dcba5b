// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boxed terminal reports for ranked results, history and threads.
//!
//! The `--explain` view writes every score as the arithmetic that produced
//! it, using only numbers from the calculation trace:
//!
//! ```text
//! keyword  2/3 matched                        = 0.667
//! tfidf    0.0412 / (0.3310 × 0.2875)         = 0.433
//! final    0.40 × 0.667 + 0.60 × 0.433        = 0.527
//! ```

use rankwise::collab::{SearchRecord, StoredRecord, ThreadOutput};
use rankwise::{RankedDocument, Weights};

use super::display::*;

/// Width of the title column in the results table.
const TITLE_WIDTH: usize = 56;

// ═══════════════════════════════════════════════════════════════════════════
// RANKING
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_ranking(query: &str, results: &[RankedDocument], weights: &Weights, explain: bool) {
    double_header();
    title(&format!("rankwise · \"{}\"", truncate_text(query, 60)));
    double_footer();

    if results.is_empty() {
        section_top("RESULTS");
        row(&muted("  no documents"));
        section_bot();
        return;
    }

    section_top(&format!("RESULTS ({})", results.len()));
    row(&muted(&format!(
        "   #  {}   final   kw      tfidf",
        pad_right("title", TITLE_WIDTH - 2)
    )));

    for (i, result) in results.iter().enumerate() {
        let title = if result.document.title.is_empty() {
            muted("(untitled)")
        } else {
            truncate_text(&result.document.title, TITLE_WIDTH - 2)
        };
        row(&format!(
            "  {:>2}. {} {}   {}   {}",
            i + 1,
            pad_right(&title, TITLE_WIDTH - 2),
            score_value(result.final_score),
            score_value(result.keyword_score),
            score_value(result.tfidf_score),
        ));
        if !result.document.link.is_empty() {
            row(&muted(&format!("      {}", truncate_text(&result.document.link, 72))));
        }

        if explain {
            section_mid(&format!("#{} CALCULATION", i + 1));
            for line in explain_lines(result, weights) {
                row(&format!("  {}", line));
            }
            if i + 1 < results.len() {
                section_mid("RESULTS");
            }
        }
    }
    section_bot();
}

/// The audit view for one document, one line per fact.
pub fn explain_lines(result: &RankedDocument, weights: &Weights) -> Vec<String> {
    let trace = &result.calculation_trace;
    let mut lines = Vec::new();

    lines.push(format!(
        "keyword  {}/{} matched{}= {}",
        trace.matched_terms.len(),
        trace.query_terms.len(),
        " ".repeat(25),
        score_value(result.keyword_score)
    ));
    lines.push(format!(
        "tfidf    {:.4} / ({:.4} × {:.4})        = {}",
        trace.dot_product,
        trace.query_norm,
        trace.document_norm,
        score_value(result.tfidf_score)
    ));
    lines.push(format!(
        "final    {:.2} × {:.3} + {:.2} × {:.3}        = {}",
        weights.keyword,
        result.keyword_score,
        weights.tfidf,
        result.tfidf_score,
        score_value(result.final_score)
    ));

    lines.push(format!("query    {}", join_or_dash(&trace.query_terms)));
    lines.push(format!("matched  {}", join_or_dash(&trace.matched_terms)));

    let tf: Vec<String> = trace
        .top_tf_terms
        .iter()
        .map(|e| format!("{} {:.3} ({}/{})", e.term, e.tf, e.count, e.total_terms))
        .collect();
    lines.push(format!("top tf   {}", join_or_dash(&tf)));

    let idf: Vec<String> = trace
        .top_idf_terms
        .iter()
        .map(|e| format!("{} {:.3} ({}/{})", e.term, e.idf, e.docs_with_term, e.total_docs))
        .collect();
    lines.push(format!("top idf  {}", join_or_dash(&idf)));

    lines
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        muted("-")
    } else {
        items.join(", ")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// HISTORY
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_history(records: &[StoredRecord<SearchRecord>]) {
    section_top(&format!("HISTORY ({})", records.len()));
    if records.is_empty() {
        row(&muted("  no recorded searches"));
    }
    for stored in records {
        let record = &stored.record;
        let total = record
            .total_results
            .map(|n| format!(" of ~{}", n))
            .unwrap_or_default();
        row(&format!(
            "  {}  {}",
            muted(&record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()),
            truncate_text(&record.query, 44)
        ));
        row(&muted(&format!("      {} results{}", record.results.len(), total)));
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// THREADS
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_thread(output: &ThreadOutput) {
    let label = if output.is_structured() { "THREAD" } else { "THREAD (unstructured)" };
    section_top(label);
    for (i, section) in output.sections().iter().enumerate() {
        if i > 0 {
            section_mid(&truncate_text(&section.headline, 60));
        } else {
            row(&heading(&format!("  {}", truncate_text(&section.headline, 76))));
        }
        for line in wrap(&section.content, BOX_WIDTH - 4) {
            row(&format!("  {}", line));
        }
    }
    section_bot();
}

pub fn print_tweets(tweets: &[String]) {
    section_top(&format!("TWEETS ({})", tweets.len()));
    for (i, tweet) in tweets.iter().enumerate() {
        if i > 0 {
            row("");
        }
        let mut lines = wrap(tweet, BOX_WIDTH - 8).into_iter();
        if let Some(first) = lines.next() {
            row(&format!("  {:>2}. {}", i + 1, first));
        }
        for line in lines {
            row(&format!("      {}", line));
        }
    }
    section_bot();
}

/// Greedy word wrap on visible width. Words longer than `width` get a line each.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if current.is_empty() { 0 } else { 1 } + word.chars().count();
            if !current.is_empty() && current.chars().count() + needed > width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}
