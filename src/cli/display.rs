// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the stemlight CLI.
//!
//! OneDark on dark terminals, One Light on light ones. `STEMLIGHT_THEME`
//! ("dark" or "light") wins, then the `COLORFGBG` hint, then dark. Colour is
//! only used on a TTY and never when `NO_COLOR` is set, so piped output is
//! plain text.
//!
//! Highlighted spans render bold yellow; in plain mode they are wrapped in
//! `[` `]` so the marks survive a pipe.

use std::sync::OnceLock;
use stemlight::Span;

/// Width between │ and │.
pub const BOX_WIDTH: usize = 78;

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("STEMLIGHT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": background 7 and up (except 8) is a light terminal
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            rgb(match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            })
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Theme colour plus modifiers, or the bare text without a colour terminal.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Length in chars, skipping ANSI escapes.
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

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let border = themed(GRAY, &[], "│");
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    println!("{} {}{}{}", border, content, " ".repeat(pad), border);
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        themed(GRAY, &[], "┌"),
        label_part,
        themed(GRAY, &[], &format!("{}┐", "─".repeat(remaining)))
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", themed(GRAY, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

/// One boxed row per wrapped line.
pub fn span_rows(spans: &[Span]) {
    for line in wrap_spans(spans, BOX_WIDTH - 2) {
        row(&render_spans(&line));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

pub fn render_spans(spans: &[Span]) -> String {
    let colors = use_colors();
    spans
        .iter()
        .map(|span| match (span.highlighted, colors) {
            (false, _) => span.text.clone(),
            (true, true) => format!("{}{}{}{}", BOLD, YELLOW(), span.text, RESET),
            (true, false) => format!("[{}]", span.text),
        })
        .collect()
}

/// Greedy word wrap that keeps each piece's highlight flag.
///
/// Breaks only after whitespace; a single word longer than `width` gets a
/// line of its own.
pub fn wrap_spans(spans: &[Span], width: usize) -> Vec<Vec<Span>> {
    let mut lines = Vec::new();
    let mut line: Vec<Span> = Vec::new();
    let mut used = 0;

    for span in spans {
        for piece in span.text.split_inclusive(char::is_whitespace) {
            let len = piece.trim_end().chars().count();
            if used > 0 && used + len > width {
                lines.push(std::mem::take(&mut line));
                used = 0;
            }
            used += piece.chars().count();
            match line.last_mut() {
                Some(last) if last.highlighted == span.highlighted => last.text.push_str(piece),
                _ => line.push(Span {
                    text: piece.to_string(),
                    highlighted: span.highlighted,
                }),
            }
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Relevance score, or a dash when results are unranked.
pub fn score_value(score: Option<f64>) -> String {
    match score {
        Some(score) => themed(GREEN, &[], &format!("{:>7.3}", score)),
        None => themed(GRAY, &[], "      -"),
    }
}

pub fn label(text: &str) -> String {
    themed(GRAY, &[DIM], text)
}

pub fn error_prefix() -> String {
    themed(RED, &[BOLD], "error:")
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
