//! Turns a [`LogMessage`] into the text and dedup key that go on the wire.

use crate::call_site::CallSite;
use crate::record::{CapturedError, LogMessage, LogRecord};
use chrono::{DateTime, Local};

/// Timestamp layout prefixed to every message, local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `[<file>:<line>] <message>`
pub fn format_plain_text(call_site: &CallSite, text: &str) -> String {
    format!("[{}] {}", call_site, text)
}

/// `<file>:<line> <text> (EXCEPTION:<type>)`, or without the location
/// when the error has no recorded origin.
pub fn format_captured_error(error: &CapturedError) -> String {
    match &error.origin {
        Some(origin) => format!("{} {} (EXCEPTION:{})", origin, error.text, error.type_name),
        None => format!("{} (EXCEPTION:{})", error.text, error.type_name),
    }
}

/// Format `message`, using `call_site` for plain text.
pub fn format_message(message: &LogMessage, call_site: &CallSite) -> String {
    match message {
        LogMessage::PlainText(text) => format_plain_text(call_site, text),
        LogMessage::CapturedError(error) => format_captured_error(error),
    }
}

/// MD5 hex digest of the formatted message, taken before the timestamp is
/// added so identical content always maps to the same key.
pub fn dedup_key(formatted: &str) -> String {
    format!("{:x}", md5::compute(formatted.as_bytes()))
}

pub fn with_timestamp(formatted: &str, now: DateTime<Local>) -> String {
    format!("[{}] {}", now.format(TIMESTAMP_FORMAT), formatted)
}

/// Build the full record for one call.
pub fn build_record(
    level: &str,
    message: &LogMessage,
    call_site: &CallSite,
    now: DateTime<Local>,
) -> LogRecord {
    let formatted = format_message(message, call_site);
    LogRecord {
        level: level.to_string(),
        dedup_key: dedup_key(&formatted),
        message: with_timestamp(&formatted, now),
    }
}
