//! Repository chores for rankwise, run as `cargo xtask <command>`.
//!
//! ```text
//! verify   markers + weight constants + tests (both feature sets) + clippy
//! test     tests with and without the parallel feature
//! check    cargo check, tests, clippy
//! bench    criterion ranking benchmarks
//! ```

use anyhow::{bail, ensure, Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fewer markers than this means invariant comments went missing.
const MIN_INVARIANT_MARKERS: usize = 5;

/// Weight constants that must sum to 1, as `(file, const name)`.
const WEIGHT_CONSTANTS: &[(&str, &str)] = &[
    ("src/scoring/core.rs", "DEFAULT_KEYWORD_WEIGHT"),
    ("src/scoring/core.rs", "DEFAULT_TFIDF_WEIGHT"),
];

type Step = (&'static str, fn(&Path) -> Result<()>);

const VERIFY_STEPS: &[Step] = &[
    ("invariant markers", check_invariant_markers),
    ("default fusion weights", verify_constants),
    ("tests (parallel)", |root| cargo(root, &["test", "--quiet"])),
    ("tests (sequential)", |root| {
        cargo(root, &["test", "--quiet", "--no-default-features"])
    }),
    ("clippy", |root| {
        cargo(root, &["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])
    }),
];

const CHECK_STEPS: &[Step] = &[
    ("cargo check", |root| cargo(root, &["check", "--all-targets"])),
    ("cargo test", |root| cargo(root, &["test", "--quiet"])),
    ("cargo clippy", |root| {
        cargo(root, &["clippy", "--quiet", "--", "-D", "warnings"])
    }),
];

fn main() -> Result<()> {
    let root = workspace_root()?;
    match std::env::args().nth(1).as_deref() {
        Some("verify") => run_steps("verify", &root, VERIFY_STEPS),
        Some("check") => run_steps("check", &root, CHECK_STEPS),
        Some("test") => {
            cargo(&root, &["test"])?;
            cargo(&root, &["test", "--no-default-features"])
        }
        Some("bench") => cargo(&root, &["bench", "--bench", "rank_bench"]),
        _ => {
            eprintln!("usage: cargo xtask <verify|test|check|bench>");
            Ok(())
        }
    }
}

fn run_steps(name: &str, root: &Path, steps: &[Step]) -> Result<()> {
    let total = steps.len();
    for (i, (label, step)) in steps.iter().enumerate() {
        println!("[{}/{}] {}...", i + 1, total, label);
        step(root).with_context(|| format!("{} failed at: {}", name, label))?;
        println!("  ✓ {}", label);
    }
    println!("\n✓ {} passed ({} steps)", name, total);
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// The directory above `xtask/`.
fn workspace_root() -> Result<PathBuf> {
    let manifest = match std::env::var_os("CARGO_MANIFEST_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir().context("no current directory")?,
    };
    Ok(manifest.parent().map(Path::to_path_buf).unwrap_or(manifest))
}

fn cargo(root: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(root)
        .status()
        .with_context(|| format!("could not spawn cargo {}", args.join(" ")))?;
    ensure!(status.success(), "cargo {} exited with {}", args.join(" "), status);
    Ok(())
}

/// Count `INVARIANT:` comments under `src/`.
fn check_invariant_markers(root: &Path) -> Result<()> {
    let mut count = 0;
    let mut pending = vec![root.join("src")];
    while let Some(dir) = pending.pop() {
        for entry in std::fs::read_dir(&dir).with_context(|| format!("reading {}", dir.display()))? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                let text = std::fs::read_to_string(&path)?;
                count += text.matches("INVARIANT:").count();
            }
        }
    }

    if count < MIN_INVARIANT_MARKERS {
        bail!(
            "found {} INVARIANT markers, expected at least {}",
            count,
            MIN_INVARIANT_MARKERS
        );
    }
    println!("  {} INVARIANT markers", count);
    Ok(())
}

/// Default weights must be non-negative and sum to 1.
fn verify_constants(root: &Path) -> Result<()> {
    let mut sum = 0.0;
    for (file, name) in WEIGHT_CONSTANTS {
        let text = std::fs::read_to_string(root.join(file)).with_context(|| format!("reading {}", file))?;
        let value = const_value(&text, name).with_context(|| format!("{} not found in {}", name, file))?;
        ensure!(value >= 0.0, "{} = {} is negative", name, value);
        println!("  {} = {}", name, value);
        sum += value;
    }
    ensure!((sum - 1.0).abs() <= 1e-9, "default weights sum to {}, expected 1", sum);
    Ok(())
}

/// Parse the literal in `pub const NAME: f64 = 0.4;`.
fn const_value(source: &str, name: &str) -> Option<f64> {
    let needle = format!("const {}:", name);
    let line = source.lines().find(|line| line.contains(&needle))?;
    let (_, literal) = line.split_once('=')?;
    literal.trim().trim_end_matches(';').trim().parse().ok()
}
