use crate::application::builder::{build_charge, build_reference};
use crate::application::mapping::{self, ErrorCodeMap};
use crate::application::sequence::FirstResponse;
use crate::config::GatewayConfig;
use crate::domain::card::CreditCard;
use crate::domain::info::{GatewayInfo, XENDIT};
use crate::domain::intent::{Money, PaymentOptions};
use crate::domain::operation::Operation;
use crate::domain::payload::RequestPayload;
use crate::domain::ports::{Transport, TransportBox};
use crate::domain::response::GatewayResponse;
use crate::error::Result;
use crate::infrastructure::http::HttpTransport;
use tracing::{debug, info, instrument};

/// Amount authorized, then voided, by [`XenditGateway::verify`].
pub const VERIFY_AMOUNT: Money = Money::from_minor(100);

/// The card gateway.
///
/// Owns its configuration and its transport. Holds no mutable state, so one
/// instance can serve concurrent callers.
pub struct XenditGateway<T: Transport = TransportBox> {
    config: GatewayConfig,
    transport: T,
    error_codes: ErrorCodeMap,
}

impl XenditGateway<HttpTransport> {
    /// Creates a gateway talking to the processor over HTTPS.
    pub fn connect(config: GatewayConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::new(config, transport))
    }
}

impl<T: Transport> XenditGateway<T> {
    /// Creates a gateway with the given transport and an empty error code map.
    ///
    /// Credentials were already checked when `config.credentials` was built.
    pub fn new(config: GatewayConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            error_codes: ErrorCodeMap::default(),
        }
    }

    /// Replaces the error code map consulted for failed responses.
    pub fn with_error_codes(mut self, error_codes: ErrorCodeMap) -> Self {
        self.error_codes = error_codes;
        self
    }

    /// Returns the configuration the gateway was built with.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Returns the static facts about the processor.
    pub fn info(&self) -> &'static GatewayInfo {
        &XENDIT
    }

    /// Charges the card in one step.
    pub async fn purchase(
        &self,
        money: Money,
        card: &CreditCard,
        options: &PaymentOptions,
    ) -> Result<GatewayResponse> {
        let post = build_charge(money, card, options, &self.config.default_currency);
        self.commit(Operation::Purchase, post).await
    }

    /// Reserves funds on the card.
    pub async fn authorize(
        &self,
        money: Money,
        card: &CreditCard,
        options: &PaymentOptions,
    ) -> Result<GatewayResponse> {
        let post = build_charge(money, card, options, &self.config.default_currency);
        self.commit(Operation::Authorize, post).await
    }

    /// Turns a prior authorization into a charge.
    pub async fn capture(&self, authorization: &str) -> Result<GatewayResponse> {
        self.commit(Operation::Capture, build_reference(authorization))
            .await
    }

    /// Reverses a completed charge.
    pub async fn refund(&self, authorization: &str) -> Result<GatewayResponse> {
        self.commit(Operation::Refund, build_reference(authorization))
            .await
    }

    /// Cancels a prior authorization.
    pub async fn void(&self, authorization: &str) -> Result<GatewayResponse> {
        self.commit(Operation::Void, build_reference(authorization))
            .await
    }

    /// Checks that the card can be charged without moving funds.
    ///
    /// Authorizes [`VERIFY_AMOUNT`] and, if that succeeds, voids the
    /// authorization. The returned response is always the authorization's; the
    /// void's response is discarded.
    #[instrument(skip_all)]
    pub async fn verify(
        &self,
        card: &CreditCard,
        options: &PaymentOptions,
    ) -> Result<GatewayResponse> {
        let authorization = self.authorize(VERIFY_AMOUNT, card, options).await?;

        let outcome = FirstResponse::new(authorization)
            .then_discard(|first| {
                let reference = first.authorization().unwrap_or_default().to_string();
                async move { self.void(&reference).await }
            })
            .await?;

        Ok(outcome.into_response())
    }

    #[instrument(skip(self, post), fields(action = operation.action(), test = self.config.test))]
    async fn commit(&self, operation: Operation, post: RequestPayload) -> Result<GatewayResponse> {
        let url = self.config.endpoint();
        let body = post.to_body(operation.action())?;
        debug!(url = %url, fields = post.len(), "Sending request");

        let body = self.transport.send(url.as_str(), body).await?;
        let response = mapping::to_response(
            mapping::parse(body.as_deref()),
            self.config.test,
            &self.error_codes,
        );

        info!(
            success = response.success,
            authorization = response.authorization().unwrap_or_default(),
            "Processor call completed"
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Credentials, TEST_URL};
    use crate::infrastructure::in_memory::ScriptedTransport;
    use serde_json::json;

    fn gateway(transport: ScriptedTransport) -> XenditGateway<ScriptedTransport> {
        let credentials = Credentials::new("pk_test", "sk_test", "token").unwrap();
        XenditGateway::new(GatewayConfig::new(credentials).with_test(true), transport)
    }

    fn card() -> CreditCard {
        CreditCard::new("4000000000000002", 12, 2030).with_verification_value("123")
    }

    #[tokio::test]
    async fn test_purchase_sends_charge_payload_to_test_url() {
        let transport = ScriptedTransport::new();
        transport
            .push_json(json!({"status": "SUCCESS", "id": "ch_1"}))
            .await;
        let gateway = gateway(transport.clone());

        let response = gateway
            .purchase(Money::from_minor(5000), &card(), &PaymentOptions::default())
            .await
            .unwrap();

        assert!(response.is_success());
        assert!(response.test);
        assert_eq!(response.authorization(), Some("ch_1"));

        let requests = transport.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, TEST_URL);
        let body = requests[0].json();
        assert_eq!(body["action"], json!("credit_card_charges"));
        assert_eq!(body["amount"], json!("50.00"));
        assert_eq!(body["currency"], json!("IDR"));
        assert_eq!(body["cvv"], json!("123"));
        assert_eq!(body["expire"], json!("12/30"));
    }

    #[test]
    fn test_gateway_exposes_config_and_info() {
        let gateway = gateway(ScriptedTransport::new());

        assert!(gateway.config().test);
        assert_eq!(gateway.config().endpoint().as_str(), TEST_URL);
        assert_eq!(gateway.info().display_name, "Xendit");
        assert_eq!(gateway.info().default_currency, gateway.config().default_currency);
        assert!(gateway.info().supports_country("ID"));
    }

    #[tokio::test]
    async fn test_reference_operations_send_authorization() {
        let transport = ScriptedTransport::new();
        for _ in 0..3 {
            transport.push_json(json!({"status": "ok"})).await;
        }
        let gateway = gateway(transport.clone());

        gateway.capture("AUTH1").await.unwrap();
        gateway.refund("AUTH2").await.unwrap();
        gateway.void("AUTH3").await.unwrap();

        let bodies: Vec<_> = transport
            .requests()
            .await
            .iter()
            .map(|r| r.json())
            .collect();
        assert_eq!(bodies[0], json!({"action": "capture", "authorization": "AUTH1"}));
        assert_eq!(bodies[1], json!({"action": "refund", "authorization": "AUTH2"}));
        assert_eq!(bodies[2], json!({"action": "void", "authorization": "AUTH3"}));
    }

    #[tokio::test]
    async fn test_live_mode_flags_response() {
        let transport = ScriptedTransport::new();
        transport.push_json(json!({"status": "ok"})).await;
        let credentials = Credentials::new("pk", "sk", "token").unwrap();
        let gateway = XenditGateway::new(GatewayConfig::new(credentials), transport.clone());

        let response = gateway.void("AUTH").await.unwrap();

        assert!(!response.test);
        assert_eq!(transport.requests().await[0].url, crate::config::LIVE_URL);
    }

    #[tokio::test]
    async fn test_empty_body_is_a_failed_response() {
        let transport = ScriptedTransport::new();
        transport.push_empty().await;
        let gateway = gateway(transport);

        let response = gateway.capture("AUTH").await.unwrap();

        assert!(!response.success);
        assert!(response.params.is_empty());
        assert_eq!(response.message, None);
        assert_eq!(response.error_code, None);
    }

    #[tokio::test]
    async fn test_custom_error_codes_are_applied() {
        use crate::domain::response::StandardErrorCode;

        let transport = ScriptedTransport::new();
        transport
            .push_json(json!({"status": "FAILED", "error_code": "EXPIRED_CARD"}))
            .await;
        let gateway = gateway(transport).with_error_codes(
            ErrorCodeMap::new().with("EXPIRED_CARD", StandardErrorCode::ExpiredCard),
        );

        let response = gateway
            .authorize(Money::from_minor(100), &card(), &PaymentOptions::default())
            .await
            .unwrap();

        assert_eq!(response.error_code, Some(StandardErrorCode::ExpiredCard));
    }
}
