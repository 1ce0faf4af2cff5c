use crate::utils::error::{AppError, Result};
use chrono::{DateTime, NaiveDateTime};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Timestamp layout used by the order API.
pub const SERVER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_currency(amount: f64) -> String {
    format_currency_with(DEFAULT_CURRENCY_SYMBOL, amount)
}

pub fn format_currency_with(symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", symbol, amount)
}

/// Short Indian-English date, e.g. `18 Oct 2026`.
///
/// Month names are chrono's three-letter abbreviations, so September renders
/// as `Sep` where browsers using en-IN show `Sept`.
pub fn format_date(ts: &NaiveDateTime) -> String {
    ts.format("%-d %b %Y").to_string()
}

/// Date plus 12-hour clock, e.g. `18 Oct 2026, 09:05 pm`.
pub fn format_datetime(ts: &NaiveDateTime) -> String {
    ts.format("%-d %b %Y, %I:%M %P").to_string()
}

/// Accepts RFC 3339 (kept in its own offset's wall time) or the order API's
/// `YYYY-MM-DD HH:MM:SS`.
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(text, SERVER_TIMESTAMP_FORMAT).map_err(|e| {
        AppError::ValidationError {
            message: format!("Unrecognised timestamp '{}': {}", text, e),
        }
    })
}
