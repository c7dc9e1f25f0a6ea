use reqwest::StatusCode;

/// Reasons a record was not delivered.
#[derive(thiserror::Error, Debug)]
pub enum SendError {
    #[error("LOG_API_URL and LOG_API_KEY environment variables must be set")]
    ConfigurationMissing,

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to log endpoint failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("log endpoint responded with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("log delivery thread panicked")]
    DeliveryAborted,
}

impl SendError {
    pub fn is_configuration_missing(&self) -> bool {
        matches!(self, SendError::ConfigurationMissing)
    }
}
