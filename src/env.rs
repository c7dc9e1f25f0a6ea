//! Environment variable names used by this crate and the credentials
//! lookup built on top of them.
//!
//! The sender never caches credentials: a [`CredentialsProvider`] is asked
//! again on every send, so changing the environment mid-process takes
//! effect on the next call.

/// Destination endpoint, e.g. `https://logging.example.com/logs`.
pub const LOG_API_URL_ENV: &str = "LOG_API_URL";

/// Bearer token sent in the `Authorization` header.
pub const LOG_API_KEY_ENV: &str = "LOG_API_KEY";

/// Endpoint and API key needed to deliver a record.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub url: String,
    pub api_key: String,
}

impl Credentials {
    /// Build credentials, returning `None` if either value is empty.
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Option<Self> {
        let url = url.into();
        let api_key = api_key.into();
        if url.is_empty() || api_key.is_empty() {
            None
        } else {
            Some(Credentials { url, api_key })
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Source of [`Credentials`], consulted once per send.
pub trait CredentialsProvider: Send + Sync {
    /// Current credentials, or `None` if either value is missing or empty.
    fn credentials(&self) -> Option<Credentials>;
}

/// Reads credentials from the process environment at call time.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    url_var: String,
    key_var: String,
}

impl EnvCredentials {
    /// Read from variables other than `LOG_API_URL` / `LOG_API_KEY`.
    pub fn with_vars(url_var: impl Into<String>, key_var: impl Into<String>) -> Self {
        EnvCredentials {
            url_var: url_var.into(),
            key_var: key_var.into(),
        }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::with_vars(LOG_API_URL_ENV, LOG_API_KEY_ENV)
    }
}

impl CredentialsProvider for EnvCredentials {
    fn credentials(&self) -> Option<Credentials> {
        let url = std::env::var(&self.url_var).ok()?;
        let api_key = std::env::var(&self.key_var).ok()?;
        Credentials::new(url, api_key)
    }
}

/// Fixed credentials, for injection in tests or when configuration comes
/// from somewhere other than the environment.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    credentials: Option<Credentials>,
}

impl StaticCredentials {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        StaticCredentials {
            credentials: Credentials::new(url, api_key),
        }
    }

    /// A provider that never yields credentials.
    pub fn missing() -> Self {
        Self::default()
    }
}

impl CredentialsProvider for StaticCredentials {
    fn credentials(&self) -> Option<Credentials> {
        self.credentials.clone()
    }
}
