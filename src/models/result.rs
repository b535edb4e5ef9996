use base64::prelude::{BASE64_STANDARD, Engine as _};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Scalar header value accepted by API Gateway in a proxy result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum HeaderValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl From<bool> for HeaderValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for HeaderValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for HeaderValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for HeaderValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Response returned to API Gateway from a REST proxy integration.
///
/// Handlers build and mutate this freely; the adapter hands it back to the
/// runtime untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayProxyResult {
    #[schemars(description = "HTTP status code")]
    pub status_code: u16,
    #[schemars(description = "Response payload, already serialized by the handler")]
    pub body: String,
    #[serde(default)]
    pub headers: HashMap<String, HeaderValue>,
    #[serde(default)]
    pub multi_value_headers: HashMap<String, Vec<HeaderValue>>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl ApiGatewayProxyResult {
    /// Creates a result with no headers and a plain-text body flag.
    #[must_use]
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
            headers: HashMap::new(),
            multi_value_headers: HashMap::new(),
            is_base64_encoded: false,
        }
    }

    /// Serializes `payload` as the body and sets `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Returns an error if `payload` cannot be serialized to JSON.
    pub fn json<T: Serialize>(status_code: u16, payload: &T) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(payload)?;
        Ok(Self::new(status_code, body).with_header("Content-Type", "application/json"))
    }

    /// Base64-encodes `bytes` as the body and marks the result as binary.
    #[must_use]
    pub fn binary(status_code: u16, bytes: impl AsRef<[u8]>) -> Self {
        let mut result = Self::new(status_code, BASE64_STANDARD.encode(bytes));
        result.is_base64_encoded = true;
        result
    }

    /// Sets a single-value header, replacing any previous value.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<HeaderValue>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_multi_value_header<V>(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self
    where
        V: Into<HeaderValue>,
    {
        self.multi_value_headers
            .insert(name.into(), values.into_iter().map(Into::into).collect());
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_applies_defaults() {
        let result = ApiGatewayProxyResult::new(200, "ok");
        assert_eq!(result.status_code, 200);
        assert_eq!(result.body, "ok");
        assert!(result.headers.is_empty());
        assert!(result.multi_value_headers.is_empty());
        assert!(!result.is_base64_encoded);
    }

    #[test]
    fn test_defaults_are_not_shared() {
        let mut first = ApiGatewayProxyResult::new(200, "a");
        let second = ApiGatewayProxyResult::new(200, "b");

        first.headers.insert("X-Only-First".to_string(), true.into());
        first
            .multi_value_headers
            .insert("Set-Cookie".to_string(), vec!["a=1".into()]);

        assert!(second.headers.is_empty());
        assert!(second.multi_value_headers.is_empty());
    }

    #[test]
    fn test_serializes_camel_case() {
        let result = ApiGatewayProxyResult::new(201, "created")
            .with_header("X-Count", 3_i64)
            .with_header("X-Ratio", 0.5)
            .with_header("X-Cached", false)
            .with_multi_value_header("Set-Cookie", ["a=1", "b=2"]);

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "statusCode": 201,
                "body": "created",
                "headers": {"X-Count": 3, "X-Ratio": 0.5, "X-Cached": false},
                "multiValueHeaders": {"Set-Cookie": ["a=1", "b=2"]},
                "isBase64Encoded": false
            })
        );
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let result: ApiGatewayProxyResult =
            serde_json::from_value(json!({"statusCode": 404, "body": "missing"})).unwrap();
        assert_eq!(result, ApiGatewayProxyResult::new(404, "missing"));
    }

    #[test]
    fn test_header_value_scalars() {
        let values: Vec<HeaderValue> =
            serde_json::from_value(json!([true, 7, 1.5, "text"])).unwrap();
        assert_eq!(
            values,
            vec![
                HeaderValue::Bool(true),
                HeaderValue::Int(7),
                HeaderValue::Float(1.5),
                HeaderValue::String("text".to_string()),
            ]
        );
    }

    #[test]
    fn test_json_sets_content_type() {
        let result = ApiGatewayProxyResult::json(200, &json!({"ok": true})).unwrap();
        assert_eq!(result.body, r#"{"ok":true}"#);
        assert_eq!(
            result.headers.get("Content-Type"),
            Some(&HeaderValue::from("application/json"))
        );
    }

    #[test]
    fn test_binary_encodes_body() {
        let result = ApiGatewayProxyResult::binary(200, b"hello");
        assert_eq!(result.body, "aGVsbG8=");
        assert!(result.is_base64_encoded);
    }
}
