use serde::Serialize;
use serde_json::{Map, Value};

/// Flat, insertion-ordered request body for a single call.
///
/// Absent optional values are never stored, so the serialized body carries
/// no `null` placeholders.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RequestPayload {
    fields: Map<String, Value>,
}

impl RequestPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.fields.insert(key.to_string(), value.into());
    }

    /// Inserts `value` only when it is present.
    pub fn insert_opt<V: Into<Value>>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serializes the payload for `action` into the request body.
    pub fn to_body(&self, action: &str) -> serde_json::Result<String> {
        let mut body = Map::with_capacity(self.fields.len() + 1);
        body.insert("action".to_string(), Value::from(action));
        body.extend(self.fields.clone());
        serde_json::to_string(&body)
    }
}
