//! Response interpretation.
//!
//! Turns a raw processor body into a [`GatewayResponse`]. Success detection is
//! two case-insensitive substring checks on `status`, OR'd together, so
//! `"SUCCESS"`, `"Success"` and `"ok"` all count.

use crate::domain::response::{
    AvsResult, CvvResult, GatewayResponse, RawResponse, StandardErrorCode,
};
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

pub const STATUS_FIELD: &str = "status";
pub const MESSAGE_FIELD: &str = "message";
pub const AUTHORIZATION_FIELD: &str = "id";
pub const ERROR_CODE_FIELD: &str = "error_code";
pub const AVS_FIELD: &str = "avs_result";
pub const CVV_FIELD: &str = "cvv_result";

/// Processor error reasons mapped to normalized codes.
///
/// Empty by default, so every failure maps to no code. Entries added with
/// [`ErrorCodeMap::with`] are looked up by the response's `error_code` field.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ErrorCodeMap {
    codes: HashMap<String, StandardErrorCode>,
}

impl ErrorCodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, reason: impl Into<String>, code: StandardErrorCode) -> Self {
        self.codes.insert(reason.into(), code);
        self
    }

    pub fn lookup(&self, reason: &str) -> Option<StandardErrorCode> {
        self.codes.get(reason).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Parses a response body into a JSON object.
///
/// A missing, empty, malformed or non-object body yields an empty object.
pub fn parse(body: Option<&str>) -> RawResponse {
    let Some(body) = body.filter(|b| !b.trim().is_empty()) else {
        return RawResponse::new();
    };

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            warn!(kind = value_kind(&other), "Response body is not a JSON object");
            RawResponse::new()
        }
        Err(e) => {
            warn!(error = %e, "Response body is not valid JSON");
            RawResponse::new()
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn string_field<'a>(response: &'a RawResponse, key: &str) -> Option<&'a str> {
    response.get(key).and_then(Value::as_str)
}

pub fn success_from(response: &RawResponse) -> bool {
    let Some(status) = string_field(response, STATUS_FIELD) else {
        return false;
    };
    let status = status.to_lowercase();
    status.contains("success") || status.contains("ok")
}

pub fn message_from(response: &RawResponse) -> Option<String> {
    string_field(response, MESSAGE_FIELD)
        .or_else(|| string_field(response, STATUS_FIELD))
        .map(str::to_string)
}

pub fn authorization_from(response: &RawResponse) -> Option<String> {
    match response.get(AUTHORIZATION_FIELD)? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

pub fn error_code_from(response: &RawResponse, codes: &ErrorCodeMap) -> Option<StandardErrorCode> {
    if success_from(response) {
        return None;
    }
    string_field(response, ERROR_CODE_FIELD).and_then(|reason| codes.lookup(reason))
}

/// Builds the normalized response for a parsed body.
pub fn to_response(response: RawResponse, test: bool, codes: &ErrorCodeMap) -> GatewayResponse {
    GatewayResponse {
        success: success_from(&response),
        message: message_from(&response),
        authorization: authorization_from(&response),
        avs_result: AvsResult {
            code: string_field(&response, AVS_FIELD).map(str::to_string),
        },
        cvv_result: CvvResult {
            code: string_field(&response, CVV_FIELD).map(str::to_string),
        },
        test,
        error_code: error_code_from(&response, codes),
        params: response,
    }
}
