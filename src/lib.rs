//! Forward application log messages to a remote logging HTTP endpoint.
//!
//! Each call formats one message, posts it as JSON with a bearer token and
//! reports success as a `bool`. Delivery problems never panic or propagate;
//! they are logged locally through `tracing`.
//!
//! ```no_run
//! use remote_log_sender::{send_error, send_info, CapturedError};
//!
//! send_info("Starting price update pipeline");
//!
//! if let Err(e) = "12x".parse::<u32>() {
//!     send_error(CapturedError::new(&e));
//! }
//! ```

pub mod call_site;
pub mod env;
pub mod error;
pub mod format;
pub mod init;
pub mod record;
pub mod sender;

pub use call_site::{resolve_call_site, CallSite};
pub use env::{Credentials, CredentialsProvider, EnvCredentials, StaticCredentials};
pub use error::SendError;
pub use record::{CapturedError, LogMessage, LogRecord};
pub use sender::{LogSender, SenderConfig};

/// Send `message` at `level` using `LOG_API_URL` / `LOG_API_KEY` from the
/// environment as they are at the moment of the call.
///
/// Returns `true` on a 2xx response and `false` otherwise, including when
/// either variable is unset or empty (no request is made then).
#[track_caller]
pub fn send_log(level: &str, message: impl Into<LogMessage>) -> bool {
    LogSender::from_env().send_log(level, message)
}

#[track_caller]
pub fn send_info(message: impl Into<LogMessage>) -> bool {
    send_log(sender::INFO, message)
}

#[track_caller]
pub fn send_warning(message: impl Into<LogMessage>) -> bool {
    send_log(sender::WARNING, message)
}

#[track_caller]
pub fn send_error(message: impl Into<LogMessage>) -> bool {
    send_log(sender::ERROR, message)
}

#[track_caller]
pub fn send_critical(message: impl Into<LogMessage>) -> bool {
    send_log(sender::CRITICAL, message)
}
