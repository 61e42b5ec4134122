use crate::config::GatewayConfig;
use crate::domain::ports::Transport;
use crate::error::{GatewayError, Result};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{debug, instrument};

/// Sends requests to the processor over HTTPS with `reqwest`.
///
/// Requests are authenticated with the secret key as the basic-auth user name.
/// Any non-2xx status is returned as [`GatewayError::UnexpectedStatus`].
pub struct HttpTransport {
    client: Client,
    secret_key: String,
}

impl HttpTransport {
    /// Builds a client using the timeouts from `config`.
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            client,
            secret_key: config.credentials.secret_key().to_string(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, body), fields(bytes = body.len()))]
    async fn send(&self, url: &str, body: String) -> Result<Option<String>> {
        let response = self
            .client
            .post(url)
            .basic_auth(&self.secret_key, Some(""))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        debug!(status = status.as_u16(), bytes = text.len(), "Processor responded");

        if !status.is_success() {
            return Err(GatewayError::UnexpectedStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok((!text.is_empty()).then_some(text))
    }
}
