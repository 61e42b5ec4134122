use serde::Serialize;
use serde_json::{Map, Value};

/// Parsed processor body. Empty when the body was missing or unreadable.
pub type RawResponse = Map<String, Value>;

/// Normalized error codes a processor failure can be classified into.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum StandardErrorCode {
    IncorrectNumber,
    InvalidNumber,
    InvalidExpiryDate,
    InvalidCvc,
    ExpiredCard,
    IncorrectCvc,
    IncorrectZip,
    IncorrectAddress,
    IncorrectPin,
    CardDeclined,
    ProcessingError,
    CallIssuer,
    PickupCard,
    ConfigError,
    TestModeLiveCard,
    UnsupportedFeature,
}

/// Address verification placeholder.
#[derive(Debug, Default, Serialize, PartialEq, Clone)]
pub struct AvsResult {
    pub code: Option<String>,
}

/// Card verification value placeholder.
#[derive(Debug, Default, Serialize, PartialEq, Clone)]
pub struct CvvResult {
    pub code: Option<String>,
}

/// The outcome of one round trip with the processor.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct GatewayResponse {
    pub success: bool,
    pub message: Option<String>,
    pub params: RawResponse,
    /// Identifier of the processor transaction, used for capture, refund and void.
    pub authorization: Option<String>,
    pub avs_result: AvsResult,
    pub cvv_result: CvvResult,
    pub test: bool,
    pub error_code: Option<StandardErrorCode>,
}

impl GatewayResponse {
    /// Whether the processor reported success.
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }
}
