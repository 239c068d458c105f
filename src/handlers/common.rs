//! Request-input helpers shared by the handlers.
//!
//! Generator endpoints never reject numeric input: unparseable values fall
//! back to the documented default and out-of-range values are clamped.
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::convert::Infallible;
use tracing::warn;
use validator::Validate;

use crate::errors::ServiceError;

/// Default window for both the series and the prediction endpoints.
pub const DEFAULT_WINDOW: u32 = 7;

/// Outcome of reading a count-like request value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountInput {
    Missing,
    Invalid,
    Value(i64),
}

impl CountInput {
    /// Parse a query-string value. Integers are taken as-is, finite decimals
    /// are truncated, anything else is invalid.
    pub fn from_str_value(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Missing;
        };
        let trimmed = raw.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return Self::Value(n);
        }
        match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() => Self::Value(f.trunc() as i64),
            _ => Self::Invalid,
        }
    }

    /// Read a JSON body value; numbers and numeric strings are accepted.
    pub fn from_json_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Missing,
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
                .map(Self::Value)
                .unwrap_or(Self::Invalid),
            Some(Value::String(s)) => Self::from_str_value(Some(s)),
            Some(_) => Self::Invalid,
        }
    }

    /// Resolve to a usable count: default when missing or invalid, clamped
    /// into `0..=max` otherwise.
    pub fn resolve(self, field: &str, default: u32, max: u32) -> u32 {
        match self {
            Self::Missing => default,
            Self::Invalid => {
                warn!(field, default, "non-numeric input, using default");
                default
            }
            Self::Value(n) if n < 0 => {
                warn!(field, requested = n, "negative input clamped to 0");
                0
            }
            Self::Value(n) if n > i64::from(max) => {
                warn!(field, requested = n, max, "input above maximum, clamped");
                max
            }
            Self::Value(n) => n as u32,
        }
    }
}

/// Query string as ordered key/value pairs. Never rejects; repeated keys
/// are kept and lookups take the first occurrence.
#[derive(Debug, Clone, Default)]
pub struct QueryPairs(pub Vec<(String, String)>);

impl QueryPairs {
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for QueryPairs
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<Vec<(String, String)>>::from_request_parts(parts, state).await {
            Ok(Query(pairs)) => Ok(Self(pairs)),
            Err(rejection) => {
                warn!(error = %rejection.body_text(), "unreadable query string, ignoring it");
                Ok(Self::default())
            }
        }
    }
}

/// JSON object body that never rejects: an absent, malformed or non-object
/// body reads as `{}`.
#[derive(Debug, Clone, Default)]
pub struct LenientJson(pub Map<String, Value>);

impl LenientJson {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String field, or `default` when absent or not a string.
    pub fn string_or(&self, key: &str, default: &str) -> String {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_string()
    }

    pub fn parse(bytes: &[u8]) -> Self {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Self::default();
        }
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(map)) => Self(map),
            Ok(other) => {
                warn!(kind = json_kind(&other), "request body is not a JSON object, treating as {{}}");
                Self::default()
            }
            Err(err) => {
                warn!(error = %err, "malformed JSON body, treating as {{}}");
                Self::default()
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[async_trait]
impl<S> FromRequest<S> for LenientJson
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ServiceError::BadRequest(rejection.body_text()))?;
        Ok(Self::parse(&bytes))
    }
}

/// JSON body deserialized into `T` and checked with `validator`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ServiceError::BadRequest(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}
