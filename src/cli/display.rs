// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the rankwise CLI.
//!
//! Everything here prints into one fixed-width box. Colors come from a
//! [`Palette`] chosen once per process and are addressed by [`Role`], so the
//! report code says *what* a piece of text is (a score, a border, a heading)
//! and never picks an RGB value itself.
//!
//! # Theme detection order
//!
//! 1. `RANKWISE_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Dark
//!
//! Styling is dropped entirely under `NO_COLOR` or when stdout is not a TTY,
//! so `rankwise rank ... | less` gets plain box characters.

use std::sync::OnceLock;

/// Visible width between the two vertical borders.
pub const BOX_WIDTH: usize = 80;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

fn parse_theme(name: &str) -> Option<Theme> {
    match name.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// `COLORFGBG` is "fg;bg". Background 7 and up (except 8, dark gray) is light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.rsplit(';').next()?.parse().ok()?;
    (bg >= 7 && bg != 8).then_some(Theme::Light)
}

#[cfg(target_os = "macos")]
fn macos_theme() -> Option<Theme> {
    let output = std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    // The key only exists in dark mode
    let dark = !output.status.success() || String::from_utf8_lossy(&output.stdout).contains("Dark");
    (!dark).then_some(Theme::Light)
}

#[cfg(not(target_os = "macos"))]
fn macos_theme() -> Option<Theme> {
    None
}

fn detect_theme() -> Theme {
    let env = |key: &str| std::env::var(key).ok();
    env("RANKWISE_THEME")
        .as_deref()
        .and_then(parse_theme)
        .or_else(|| env("COLORFGBG").as_deref().and_then(theme_from_colorfgbg))
        .or_else(macos_theme)
        .unwrap_or(Theme::Dark)
}

pub fn theme() -> Theme {
    static THEME: OnceLock<Theme> = OnceLock::new();
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTE
// ═══════════════════════════════════════════════════════════════════════════

/// What a piece of styled text means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Single-line box borders and secondary text.
    Frame,
    /// Double-line banner borders.
    Banner,
    /// Section labels and thread headlines.
    Heading,
    /// The banner title.
    Title,
    /// Score at or above 0.75.
    Strong,
    /// Score in [0.4, 0.75).
    Good,
    /// Score in [0.15, 0.4).
    Partial,
    /// Score in [0, 0.15).
    Weak,
    /// Negative score (only reachable with negative weights).
    Negative,
}

type Rgb = (u8, u8, u8);

/// Truecolor values for every [`Role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    frame: Rgb,
    banner: Rgb,
    heading: Rgb,
    title: Rgb,
    strong: Rgb,
    good: Rgb,
    partial: Rgb,
    negative: Rgb,
}

impl Palette {
    /// OneDark tones.
    const DARK: Palette = Palette {
        frame: (92, 99, 112),
        banner: (97, 175, 239),
        heading: (86, 182, 194),
        title: (102, 217, 239),
        strong: (166, 226, 46),
        good: (152, 195, 121),
        partial: (229, 192, 123),
        negative: (224, 108, 117),
    };

    /// One Light tones.
    const LIGHT: Palette = Palette {
        frame: (160, 161, 167),
        banner: (64, 120, 242),
        heading: (1, 132, 188),
        title: (1, 112, 158),
        strong: (68, 140, 39),
        good: (80, 161, 79),
        partial: (193, 132, 1),
        negative: (228, 86, 73),
    };

    pub fn for_theme(theme: Theme) -> Palette {
        match theme {
            Theme::Dark => Self::DARK,
            Theme::Light => Self::LIGHT,
        }
    }

    fn rgb(&self, role: Role) -> Rgb {
        match role {
            Role::Frame | Role::Weak => self.frame,
            Role::Banner => self.banner,
            Role::Heading => self.heading,
            Role::Title => self.title,
            Role::Strong => self.strong,
            Role::Good => self.good,
            Role::Partial => self.partial,
            Role::Negative => self.negative,
        }
    }

    /// Foreground escape for `role`.
    pub fn escape(&self, role: Role) -> String {
        let (r, g, b) = self.rgb(role);
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// STYLING
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Wrap `text` in the color for `role` plus `modifiers`, or return it bare.
pub fn paint(role: Role, modifiers: &str, text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let palette = Palette::for_theme(theme());
    format!("{}{}{}{}", modifiers, palette.escape(role), text, RESET)
}

/// Width of `s` as printed, skipping `ESC ... m` sequences.
pub fn visible_len(s: &str) -> usize {
    let mut chars = s.chars();
    let mut len = 0;
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            len += 1;
        }
    }
    len
}

pub fn heading(text: &str) -> String {
    paint(Role::Heading, BOLD, text)
}

pub fn muted(text: &str) -> String {
    paint(Role::Frame, DIM, text)
}

/// Three-decimal score colored by strength band.
pub fn score_value(score: f64) -> String {
    let role = match score {
        s if s < 0.0 => Role::Negative,
        s if s >= 0.75 => Role::Strong,
        s if s >= 0.4 => Role::Good,
        s if s >= 0.15 => Role::Partial,
        _ => Role::Weak,
    };
    paint(role, "", &format!("{:.3}", score))
}

/// Right-pad to `width` visible columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let gap = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(gap))
}

/// Cut to `max` chars, ending in `…` when shortened.
pub fn truncate_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut kept: String = text.chars().take(max.saturating_sub(1)).collect();
    kept.push('…');
    kept
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// A bordered line: `left` + `body` padded with `fill` to BOX_WIDTH + `right`.
/// Only the border characters take the `role` color.
fn framed(role: Role, left: char, body: &str, fill: char, right: char) {
    let gap = BOX_WIDTH.saturating_sub(visible_len(body));
    let tail = fill.to_string().repeat(gap);
    let edge = |c: char| paint(role, "", &c.to_string());
    let tail = if fill == ' ' { tail } else { paint(role, "", &tail) };
    println!("{}{}{}{}", edge(left), body, tail, edge(right));
}

/// `─ LABEL ` as drawn at the start of a section rule.
fn rule_label(label: &str) -> String {
    format!("{}{}", paint(Role::Frame, "", "─ "), heading(&format!("{} ", label)))
}

/// `│ content          │`
pub fn row(content: &str) {
    framed(Role::Frame, '│', content, ' ', '│');
}

/// `┌─ LABEL ──────────┐`
pub fn section_top(label: &str) {
    framed(Role::Frame, '┌', &rule_label(label), '─', '┐');
}

/// `├─ LABEL ──────────┤`
pub fn section_mid(label: &str) {
    framed(Role::Frame, '├', &rule_label(label), '─', '┤');
}

/// `└──────────────────┘`
pub fn section_bot() {
    framed(Role::Frame, '└', "", '─', '┘');
}

/// `╔══════════════════╗`
pub fn double_header() {
    framed(Role::Banner, '╔', "", '═', '╗');
}

/// `╚══════════════════╝`
pub fn double_footer() {
    framed(Role::Banner, '╚', "", '═', '╝');
}

/// `║      TITLE       ║`, centered.
pub fn title(text: &str) {
    let styled = paint(Role::Title, BOLD, text);
    let left = BOX_WIDTH.saturating_sub(visible_len(&styled)) / 2;
    framed(Role::Banner, '║', &format!("{}{}", " ".repeat(left), styled), ' ', '║');
}
