use crate::call_site::resolve_call_site;
use crate::env::{Credentials, CredentialsProvider, EnvCredentials};
use crate::error::SendError;
use crate::format::build_record;
use crate::record::{LogMessage, LogRecord};
use chrono::Local;
use reqwest::blocking::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Level strings used by the convenience wrappers. Any other string is
/// passed through to the endpoint unchanged.
pub const INFO: &str = "info";
pub const WARNING: &str = "warning";
pub const ERROR: &str = "error";
pub const CRITICAL: &str = "critical";

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Tunables for [`LogSender`].
///
/// **Fields**
/// - `timeout`: upper bound for the whole request, connect included.
#[derive(Clone, Debug)]
pub struct SenderConfig {
    pub timeout: Duration,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Delivers single log records to the configured endpoint with one
/// blocking HTTP POST per call.
///
/// Credentials are fetched from the provider on every call and nothing is
/// retried or buffered. A fresh HTTP client is built per request on a
/// short-lived thread, so independent calls share no state and the sender
/// can be used from inside an async runtime. The calling thread blocks
/// until the request finishes or times out.
#[derive(Clone)]
pub struct LogSender {
    credentials: Arc<dyn CredentialsProvider>,
    config: SenderConfig,
}

impl LogSender {
    /// Create a sender with the default [`SenderConfig`].
    pub fn new(credentials: Arc<dyn CredentialsProvider>) -> Self {
        Self::with_config(credentials, SenderConfig::default())
    }

    pub fn with_config(credentials: Arc<dyn CredentialsProvider>, config: SenderConfig) -> Self {
        LogSender { credentials, config }
    }

    /// Sender reading `LOG_API_URL` / `LOG_API_KEY` at call time.
    pub fn from_env() -> Self {
        Self::new(Arc::new(EnvCredentials::default()))
    }

    /// Format and deliver one record.
    ///
    /// **Returns**
    /// - `Ok(body)` with the response text on any 2xx status.
    /// - `Err(SendError::ConfigurationMissing)` without touching the
    ///   network if either credential is absent or empty.
    /// - `Err(..)` for transport failures, timeouts and non-2xx statuses.
    #[track_caller]
    pub fn try_send_log(
        &self,
        level: &str,
        message: impl Into<LogMessage>,
    ) -> Result<String, SendError> {
        let call_site = resolve_call_site();
        let credentials = self
            .credentials
            .credentials()
            .ok_or(SendError::ConfigurationMissing)?;

        let record = build_record(level, &message.into(), &call_site, Local::now());

        // reqwest's blocking client panics if built or dropped on an async
        // worker thread; keep it off the caller's thread.
        std::thread::scope(|s| {
            s.spawn(|| deliver(&credentials, &record, self.config.timeout))
                .join()
                .unwrap_or(Err(SendError::DeliveryAborted))
        })
    }

    /// Fire-and-forget variant of [`LogSender::try_send_log`]: failures are
    /// reported as a local diagnostic and collapsed to `false`.
    #[track_caller]
    pub fn send_log(&self, level: &str, message: impl Into<LogMessage>) -> bool {
        match self.try_send_log(level, message) {
            Ok(body) => {
                info!(target: "remote_log_sender", log_level = level, response = %body, "log sent successfully");
                true
            }
            Err(e) => {
                error!(target: "remote_log_sender", log_level = level, error = %e, "error sending log");
                false
            }
        }
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<LogMessage>) -> bool {
        self.send_log(INFO, message)
    }

    #[track_caller]
    pub fn warning(&self, message: impl Into<LogMessage>) -> bool {
        self.send_log(WARNING, message)
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<LogMessage>) -> bool {
        self.send_log(ERROR, message)
    }

    #[track_caller]
    pub fn critical(&self, message: impl Into<LogMessage>) -> bool {
        self.send_log(CRITICAL, message)
    }
}

fn deliver(
    credentials: &Credentials,
    record: &LogRecord,
    timeout: Duration,
) -> Result<String, SendError> {
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(SendError::Client)?;

    let resp = client
        .post(&credentials.url)
        .bearer_auth(&credentials.api_key)
        .json(record)
        .send()
        .map_err(SendError::Transport)?;

    let status = resp.status();
    if status.is_success() {
        resp.text().map_err(SendError::Transport)
    } else {
        let body = resp.text().unwrap_or_else(|_| "<no body>".to_string());
        Err(SendError::Status { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::StaticCredentials;

    #[test]
    fn default_timeout_is_five_seconds() {
        assert_eq!(SenderConfig::default().timeout, Duration::from_secs(5));
    }

    #[test]
    fn missing_credentials_short_circuit() {
        let sender = LogSender::new(Arc::new(StaticCredentials::missing()));
        let err = sender.try_send_log(INFO, "hello").unwrap_err();
        assert!(err.is_configuration_missing());
        assert!(!sender.info("hello"));
    }

    #[test]
    fn timeout_reaches_the_client() {
        // Accepted by the kernel backlog but never answered.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let sender = LogSender::with_config(
            Arc::new(StaticCredentials::new(format!("http://{}/logs", addr), "key")),
            SenderConfig {
                timeout: Duration::from_millis(200),
            },
        );
        let started = std::time::Instant::now();
        let err = sender.try_send_log(INFO, "slow").unwrap_err();
        assert!(matches!(err, SendError::Transport(ref e) if e.is_timeout()));
        assert!(started.elapsed() < DEFAULT_TIMEOUT);
        drop(listener);
    }

    #[test]
    fn unreachable_endpoint_is_a_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let sender = LogSender::with_config(
            Arc::new(StaticCredentials::new(format!("http://{}/logs", addr), "key")),
            SenderConfig {
                timeout: Duration::from_secs(1),
            },
        );
        let err = sender.try_send_log(ERROR, "boom").unwrap_err();
        assert!(matches!(err, SendError::Transport(_)));
        assert!(!sender.error("boom"));
    }
}
