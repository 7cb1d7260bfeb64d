// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the clinisearch CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `CLINISEARCH_THEME` first, then `COLORFGBG`, then defaults to dark. Colors
//! are dropped entirely when stdout isn't a TTY or `NO_COLOR` is set, so piping
//! into `jq` or a file gives clean text.
//!
//! Hebrew titles are printed as-is; the terminal handles bidi. Widths are
//! counted in chars, which is right for Hebrew letters but not for points
//! and cantillation marks. Close enough for a results table.

use std::sync::OnceLock;

use clinisearch::{Category, IndexStats, RelevanceTier, ResultItem};

// Width between │ and │ (excluding border chars)
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
    if let Ok(theme) = std::env::var("CLINISEARCH_THEME") {
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
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);     // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);   // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);  // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);     // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);     // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);      // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);       // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);     // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);    // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);     // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);  // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);      // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);    // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
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

/// Cut to at most `max` visible chars, marking the cut with `…`.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

fn border(glyphs: &str) -> String {
    themed(GRAY, &[], glyphs)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let len = visible_len(content);
    let pad = BOX_WIDTH.saturating_sub(len);
    println!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded relevance tier badge
pub fn tier_badge(tier: RelevanceTier) -> String {
    let text = format!("[{}]", tier.as_str());
    match tier {
        RelevanceTier::High => themed(GREEN, &[BOLD], &text),
        RelevanceTier::Medium => themed(BLUE, &[], &text),
        RelevanceTier::Low => themed(GRAY, &[], &text),
    }
}

/// Color-coded category label
pub fn category_label(category: Category) -> String {
    let color: fn() -> String = match category {
        Category::Topics => CYAN,
        Category::Drugs => GREEN,
        Category::Questions => YELLOW,
        Category::Chapters => BLUE,
        Category::Guidelines => MAGENTA,
        Category::Translations => GRAY,
        Category::Cases => RED,
    };
    themed(color, &[], category.as_str())
}

/// Color-coded rank value
pub fn rank_value(rank: f64) -> String {
    let text = format!("{:>5.0}", rank);
    let color: fn() -> String = if rank >= 12.0 {
        BRIGHT_GREEN
    } else if rank >= 6.0 {
        GREEN
    } else if rank >= 3.0 {
        YELLOW
    } else {
        GRAY
    };
    themed(color, &[], &text)
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULT RENDERING
// ═══════════════════════════════════════════════════════════════════════════

/// One boxed section listing results, best first.
pub fn print_results(label: &str, results: &[ResultItem]) {
    section_top(&format!("{} ({})", label, results.len()));
    if results.is_empty() {
        row(&themed(GRAY, &[DIM], " no matches"));
    }
    for (position, item) in results.iter().enumerate() {
        let badge = match item.tier {
            Some(tier) => tier_badge(tier),
            None => rank_value(item.rank),
        };
        let heading = item.path.as_deref().unwrap_or(&item.title);
        let line = format!(
            " {:>2}. {} {} {}",
            position + 1,
            pad_right(&badge, 8),
            pad_right(&category_label(item.category), 12),
            themed(CYAN, &[BOLD], &truncate_chars(heading, 50)),
        );
        row(&line);

        let mut detail = format!("     {}", themed(GRAY, &[], &item.id));
        if let Some(field) = &item.matched_field {
            detail.push_str(&themed(GRAY, &[DIM], &format!("  via {field}")));
        }
        row(&detail);
        if !item.snippet.is_empty() {
            row(&format!("     {}", truncate_chars(&item.snippet, BOX_WIDTH - 6)));
        }
    }
    section_bot();
}

pub fn print_stats(stats: &IndexStats) {
    section_top("INDEX");
    let lines = [
        ("nodes", stats.nodes),
        ("terms", stats.terms),
        ("postings", stats.postings),
        ("  title", stats.title_postings),
        ("  chapter title", stats.chapter_title_postings),
        ("  content", stats.content_postings),
        ("  case title", stats.case_title_postings),
    ];
    for (name, value) in lines {
        row(&format!(" {} {}", pad_right(name, 18), themed(GREEN, &[BOLD], &value.to_string())));
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
