use std::fmt;
use std::panic::Location;

/// File and line of the application code that issued a log call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
}

impl CallSite {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        CallSite {
            file: file.into(),
            line,
        }
    }
}

impl From<&Location<'_>> for CallSite {
    fn from(location: &Location<'_>) -> Self {
        CallSite::new(location.file(), location.line())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Location of the code that called into this crate.
///
/// Every public entry point is `#[track_caller]`, so the location reported
/// here skips the crate's own frames and lands on the application line.
#[track_caller]
pub fn resolve_call_site() -> CallSite {
    CallSite::from(Location::caller())
}
