/// ANSI color helper utilities for terminal output.
use crate::core::calculator::summary::Rating;
use crate::models::date_status::DateStatus;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Calendar colours: present green, absent red, late amber, leave blue,
/// off and future grey.
pub fn color_for_status(status: DateStatus) -> &'static str {
    match status {
        DateStatus::Present => GREEN,
        DateStatus::Absent => RED,
        DateStatus::Late => YELLOW,
        DateStatus::Leave => BLUE,
        DateStatus::Off | DateStatus::Future => GREY,
        DateStatus::Inapplicable => RESET,
    }
}

pub fn color_for_rating(rating: Rating) -> &'static str {
    match rating {
        Rating::Good => GREEN,
        Rating::Low => RED,
    }
}

/// Grey out placeholders ("N/A", "-", empty).
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "N/A" || v == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
