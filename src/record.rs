use crate::call_site::CallSite;
use serde::Serialize;
use std::panic::Location;

/// JSON body posted to the log ingestion endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub level: String,
    /// Timestamped, location-annotated message text.
    pub message: String,
    /// Hex digest the receiving service uses to collapse repeated entries.
    pub dedup_key: String,
}

/// Content of a log call: plain text or a captured error value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogMessage {
    PlainText(String),
    CapturedError(CapturedError),
}

impl From<&str> for LogMessage {
    fn from(text: &str) -> Self {
        LogMessage::PlainText(text.to_string())
    }
}

impl From<String> for LogMessage {
    fn from(text: String) -> Self {
        LogMessage::PlainText(text)
    }
}

impl From<&String> for LogMessage {
    fn from(text: &String) -> Self {
        LogMessage::PlainText(text.clone())
    }
}

impl From<CapturedError> for LogMessage {
    fn from(error: CapturedError) -> Self {
        LogMessage::CapturedError(error)
    }
}

/// An error value flattened into what the log line needs: its type name,
/// its display text and where it was captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedError {
    pub type_name: String,
    pub text: String,
    pub origin: Option<CallSite>,
}

impl CapturedError {
    /// Capture `error` at the calling location.
    ///
    /// The type name is the last path segment of `E` with generic
    /// arguments dropped, e.g. `ParseIntError` for
    /// `core::num::error::ParseIntError`.
    ///
    /// The name comes from the static type, so a `Box<dyn Error>` or
    /// `&dyn Error` is reported as `Error`. For those, use
    /// [`CapturedError::from_parts`] with the concrete type name.
    #[track_caller]
    pub fn new<E>(error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        CapturedError {
            type_name: short_type_name(std::any::type_name::<E>()).to_string(),
            text: error.to_string(),
            origin: Some(CallSite::from(Location::caller())),
        }
    }

    /// Build from explicit parts. Without an origin the formatted line
    /// carries no location prefix.
    pub fn from_parts(
        type_name: impl Into<String>,
        text: impl Into<String>,
        origin: Option<CallSite>,
    ) -> Self {
        CapturedError {
            type_name: type_name.into(),
            text: text.into(),
            origin,
        }
    }
}

fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct ValueError(&'static str);

    impl std::fmt::Display for ValueError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.0)
        }
    }

    impl std::error::Error for ValueError {}

    #[test]
    fn captures_type_name_text_and_origin() {
        let line = line!() + 1;
        let captured = CapturedError::new(&ValueError("bad input"));
        assert_eq!(captured.type_name, "ValueError");
        assert_eq!(captured.text, "bad input");
        assert_eq!(captured.origin, Some(CallSite::new(file!(), line)));
    }

    #[test]
    fn std_error_type_names_are_shortened() {
        let err = "x".parse::<i32>().unwrap_err();
        assert_eq!(CapturedError::new(&err).type_name, "ParseIntError");
        assert_eq!(short_type_name("alloc::vec::Vec<u8>"), "Vec");
        assert_eq!(short_type_name("Plain"), "Plain");
    }

    #[test]
    fn dyn_errors_report_static_name_unless_given_one() {
        let boxed: Box<dyn std::error::Error> =
            Box::new(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        let captured = CapturedError::new(&*boxed);
        assert_eq!(captured.type_name, "Error");
        assert_eq!(captured.text, "disk full");

        let named = CapturedError::from_parts("IoError", boxed.to_string(), captured.origin);
        assert_eq!(named.type_name, "IoError");
        assert!(named.origin.is_some());
    }

    #[test]
    fn record_serializes_to_exactly_three_keys() {
        let record = LogRecord {
            level: "info".to_string(),
            message: "[2024-01-01 00:00:00] hi".to_string(),
            dedup_key: "abc".to_string(),
        };
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(|k| k.as_str()).collect();
        keys.sort();
        assert_eq!(keys, ["dedup_key", "level", "message"]);
        assert_eq!(object["level"], "info");
    }
}
