// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the sidesearch CLI.
//!
//! Results are printed the way the sidebar shows them: title snippet, body
//! snippet, link. `<mark>` highlights become colored text and HTML entities
//! are decoded, so what you see matches what a reader would see.
//!
//! Colors follow OneDark on dark terminals and One Light on light ones.
//! Respects `NO_COLOR` and non-TTY output.
//!
//! # Theme detection order
//!
//! 1. `SIDESEARCH_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use sidesearch::index::stats::IndexStats;
use sidesearch::ResultFragment;
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SIDESEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";

/// The colors the reports use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Errors and index problems
    Red,
    /// Clean index
    Green,
    /// Query highlights
    Yellow,
    /// Result titles
    Blue,
    /// Section labels
    Cyan,
    /// Borders, links, hints
    Gray,
}

impl Color {
    /// OneDark on dark terminals, One Light on light ones.
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        match (theme, self) {
            (Theme::Dark, Color::Red) => (224, 108, 117),
            (Theme::Dark, Color::Green) => (152, 195, 121),
            (Theme::Dark, Color::Yellow) => (229, 192, 123),
            (Theme::Dark, Color::Blue) => (97, 175, 239),
            (Theme::Dark, Color::Cyan) => (86, 182, 194),
            (Theme::Dark, Color::Gray) => (92, 99, 112),
            (Theme::Light, Color::Red) => (228, 86, 73),
            (Theme::Light, Color::Green) => (80, 161, 79),
            (Theme::Light, Color::Yellow) => (193, 132, 1),
            (Theme::Light, Color::Blue) => (64, 120, 242),
            (Theme::Light, Color::Cyan) => (1, 132, 188),
            (Theme::Light, Color::Gray) => (160, 161, 167),
        }
    }

    /// 24-bit foreground escape for the detected theme.
    pub fn code(self) -> String {
        let (r, g, b) = self.rgb(theme());
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// `text` in `color` with `modifiers`, or bare when colors are off.
pub fn themed(color: Color, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color.code(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Snippet markup as terminal text.
///
/// `<mark>` spans are rendered with `highlight` (or left bare when colors are
/// off) and entities are decoded.
pub fn terminal_snippet(html: &str, highlight: Option<&str>) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(open) = rest.find("<mark>") {
        out.push_str(&html_escape::decode_html_entities(&rest[..open]));
        let after_open = &rest[open + "<mark>".len()..];
        let close = after_open.find("</mark>").unwrap_or(after_open.len());
        let marked = html_escape::decode_html_entities(&after_open[..close]);
        match highlight {
            Some(style) => out.push_str(&format!("{}{}{}", style, marked, RESET)),
            None => out.push_str(&marked),
        }
        rest = after_open.get(close + "</mark>".len()..).unwrap_or("");
    }
    out.push_str(&html_escape::decode_html_entities(rest));
    out
}

fn highlight_style() -> Option<String> {
    use_colors().then(|| format!("{}{}", BOLD, Color::Yellow.code()))
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = Color::Gray.code();
    let len = visible_len(content);
    let pad = BOX_WIDTH.saturating_sub(len);
    println!("{}│{}{}{}{}│{}", border, RESET, content, " ".repeat(pad), border, RESET);
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = Color::Gray.code();
    let colored_label = themed(Color::Cyan, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let border = Color::Gray.code();
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), RESET);
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

/// Print search results the way the sidebar lays them out.
pub fn print_results(query: &str, fragments: &[ResultFragment]) {
    let style = highlight_style();
    section_top(&format!("{} result(s) for \"{}\"", fragments.len(), query));
    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 {
            row("");
        }
        let title = terminal_snippet(&fragment.title_html, style.as_deref());
        row(&format!(" {}. {}", i + 1, themed(Color::Blue, &[BOLD], &title)));
        let body = terminal_snippet(&fragment.body_html, style.as_deref());
        for line in wrap(&body, BOX_WIDTH - 5) {
            row(&format!("    {}", line));
        }
        row(&format!("    {}", themed(Color::Gray, &[UNDERLINE], &fragment.href)));
    }
    section_bot();
}

/// Print raw fragment markup, one list item per line.
pub fn print_html(fragments: &[ResultFragment]) {
    for fragment in fragments {
        println!("{}", fragment.to_html());
    }
}

/// Print an index summary.
pub fn print_inspect(path: &str, stats: &IndexStats) {
    section_top(&format!("INDEX {}", path));
    row(&format!(" documents          {:>10}", stats.documents));
    row(&format!(" title chars        {:>10}", stats.title_chars));
    row(&format!(" description chars  {:>10}", stats.description_chars));
    row(&format!(" content chars      {:>10}", stats.content_chars));
    row(&format!(" longest content    {:>10}", stats.longest_content));

    if stats.is_clean() {
        row(&format!(" {}", themed(Color::Green, &[], "all documents have a title and permalink")));
    } else {
        if !stats.missing_title.is_empty() {
            row(&format!(
                " {} {:?}",
                themed(Color::Red, &[BOLD], "missing title:"),
                stats.missing_title
            ));
        }
        if !stats.missing_permalink.is_empty() {
            row(&format!(
                " {} {:?}",
                themed(Color::Red, &[BOLD], "missing permalink:"),
                stats.missing_permalink
            ));
        }
    }
    section_bot();
}

/// Hint printed when the query is below the threshold.
pub fn print_below_threshold(query: &str, min_chars: usize) {
    println!(
        "{}",
        themed(
            Color::Gray,
            &[],
            &format!(
                "\"{}\" is shorter than {} characters; the sidebar would show nothing",
                query, min_chars
            )
        )
    );
}

/// Greedy word wrap on visible width.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && visible_len(&line) + 1 + visible_len(word) > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
