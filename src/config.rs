//! Gateway configuration.
//!
//! Credentials are checked once, when [`Credentials`] is built. Everything else
//! in [`GatewayConfig`] has a default matching the processor's documented
//! endpoints, so a caller only has to supply the three keys.

use crate::error::{GatewayError, Result};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use url::Url;

pub const TEST_URL: &str = "https://api.xendit.co/test";
pub const LIVE_URL: &str = "https://api.xendit.co/live";
pub const DEFAULT_CURRENCY: &str = "IDR";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Raw credential input, as it arrives from the CLI, the environment or a file.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CredentialOptions {
    pub public_key: Option<String>,
    pub secret_key: Option<String>,
    pub validation_token: Option<String>,
}

/// The three keys the processor requires.
///
/// Immutable once built. `Debug` never prints the key material.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    public_key: String,
    secret_key: String,
    validation_token: String,
}

impl Credentials {
    pub fn new(
        public_key: impl Into<String>,
        secret_key: impl Into<String>,
        validation_token: impl Into<String>,
    ) -> Result<Self> {
        Self::from_options(CredentialOptions {
            public_key: Some(public_key.into()),
            secret_key: Some(secret_key.into()),
            validation_token: Some(validation_token.into()),
        })
    }

    /// Builds credentials, failing on the first key that is absent or blank.
    pub fn from_options(options: CredentialOptions) -> Result<Self> {
        Ok(Self {
            public_key: require(options.public_key, "public_key")?,
            secret_key: require(options.secret_key, "secret_key")?,
            validation_token: require(options.validation_token, "validation_token")?,
        })
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn validation_token(&self) -> &str {
        &self.validation_token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &"[REDACTED]")
            .field("secret_key", &"[REDACTED]")
            .field("validation_token", &"[REDACTED]")
            .finish()
    }
}

fn require(value: Option<String>, name: &'static str) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(GatewayError::MissingCredential(name)),
    }
}

/// Per-instance gateway settings.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub credentials: Credentials,
    /// Selects the test endpoint and marks every response as a test response.
    pub test: bool,
    pub test_url: Url,
    pub live_url: Url,
    pub default_currency: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl GatewayConfig {
    /// Creates a live-mode configuration with the default endpoints.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            test: false,
            test_url: Url::parse(TEST_URL).expect("TEST_URL is a valid URL"),
            live_url: Url::parse(LIVE_URL).expect("LIVE_URL is a valid URL"),
            default_currency: DEFAULT_CURRENCY.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    pub fn with_test(mut self, test: bool) -> Self {
        self.test = test;
        self
    }

    pub fn with_test_url(mut self, url: &str) -> Result<Self> {
        self.test_url = parse_endpoint(url)?;
        Ok(self)
    }

    pub fn with_live_url(mut self, url: &str) -> Result<Self> {
        self.live_url = parse_endpoint(url)?;
        Ok(self)
    }

    pub fn with_default_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_currency = currency.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The endpoint every request goes to, chosen by the environment flag.
    pub fn endpoint(&self) -> &Url {
        if self.test {
            &self.test_url
        } else {
            &self.live_url
        }
    }
}

fn parse_endpoint(url: &str) -> Result<Url> {
    let parsed = Url::parse(url)
        .map_err(|e| GatewayError::InvalidConfig(format!("invalid endpoint '{}': {}", url, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(GatewayError::InvalidConfig(format!(
            "unsupported endpoint scheme '{}'",
            scheme
        ))),
    }
}
