/// ANSI color helper utilities for terminal output.
use crate::models::appointment::AppointmentStatus;
use crate::models::payment::PaymentStatus;
use regex::Regex;
use std::sync::LazyLock;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern"));

pub fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

pub fn color_for_status(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Scheduled => BLUE,
        AppointmentStatus::Completed => GREEN,
        AppointmentStatus::Cancelled => RED,
    }
}

pub fn color_for_payment(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Completed => GREEN,
        PaymentStatus::Refunded => YELLOW,
        PaymentStatus::Failed => RED,
    }
}

pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Grey placeholder for empty optional fields.
pub fn colorize_optional(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => paint(GREY, "--"),
    }
}
