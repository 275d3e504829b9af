//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

fn ansi_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern"))
}

pub fn strip_ansi(s: &str) -> String {
    ansi_re().replace_all(s, "").into_owned()
}

/// Display width on the terminal, ignoring escape sequences.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{s}{}", " ".repeat(pad))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{s}", " ".repeat(pad))
}

/// Cut to `max` visible chars, appending "..." when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    let plain = strip_ansi(s);
    if plain.chars().count() <= max {
        return plain;
    }
    let mut out: String = plain.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

/// 33 → "33%"
pub fn percent(value: u32) -> String {
    format!("{value}%")
}
