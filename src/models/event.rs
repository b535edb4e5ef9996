//! Inbound API Gateway REST proxy event.
//!
//! See <https://docs.aws.amazon.com/apigateway/latest/developerguide/set-up-lambda-proxy-integrations.html>
//! for the wire format.

use base64::prelude::{BASE64_STANDARD, Engine as _};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

use crate::models::error::AdapterError;

/// Keys every proxy event must carry, in the order they are checked.
pub const REQUIRED_KEYS: [&str; 12] = [
    "resource",
    "path",
    "httpMethod",
    "headers",
    "multiValueHeaders",
    "queryStringParameters",
    "multiValueQueryStringParameters",
    "pathParameters",
    "stageVariables",
    "requestContext",
    "body",
    "isBase64Encoded",
];

/// HTTP method of the incoming request.
///
/// Methods outside the six API Gateway forwards for REST resources are kept
/// verbatim in [`HttpMethod::Other`] instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Other(String),
}

impl HttpMethod {
    /// Method name exactly as API Gateway sent it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Other(method) => method,
        }
    }
}

impl From<String> for HttpMethod {
    fn from(method: String) -> Self {
        match method.as_str() {
            "GET" => Self::Get,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "PATCH" => Self::Patch,
            "DELETE" => Self::Delete,
            "OPTIONS" => Self::Options,
            _ => Self::Other(method),
        }
    }
}

impl From<HttpMethod> for String {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Other(method) => method,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed view of an API Gateway REST proxy event.
///
/// Built once per invocation by [`ApiGatewayProxyEvent::from_event`] and only
/// readable afterwards. Values are copied as sent: a `null` stays `None`.
///
/// Deserializing directly also requires every key in [`REQUIRED_KEYS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayProxyEvent {
    /// Matched route template, e.g. `/users/{id}`
    resource: String,
    /// Concrete request path
    path: String,
    #[schemars(with = "String")]
    http_method: HttpMethod,
    #[serde(deserialize_with = "required")]
    #[schemars(with = "Option<HashMap<String, String>>")]
    headers: Option<HashMap<String, String>>,
    #[serde(deserialize_with = "required")]
    #[schemars(with = "Option<HashMap<String, Vec<String>>>")]
    multi_value_headers: Option<HashMap<String, Vec<String>>>,
    #[serde(deserialize_with = "required")]
    #[schemars(with = "Option<HashMap<String, String>>")]
    query_string_parameters: Option<HashMap<String, String>>,
    #[serde(deserialize_with = "required")]
    #[schemars(with = "Option<HashMap<String, Vec<String>>>")]
    multi_value_query_string_parameters: Option<HashMap<String, Vec<String>>>,
    #[serde(deserialize_with = "required")]
    #[schemars(with = "Option<HashMap<String, String>>")]
    path_parameters: Option<HashMap<String, String>>,
    #[serde(deserialize_with = "required")]
    #[schemars(with = "Option<HashMap<String, String>>")]
    stage_variables: Option<HashMap<String, String>>,
    // TODO: replace with a typed request context (identity, authorizer claims)
    request_context: Map<String, Value>,
    /// Raw payload; parsing is up to the handler
    #[serde(deserialize_with = "required")]
    #[schemars(with = "Option<String>")]
    body: Option<String>,
    is_base64_encoded: bool,
}

/// Nullable but not omittable: serde reports a missing key instead of
/// filling in `None`.
fn required<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl ApiGatewayProxyEvent {
    /// Parses a raw proxy event.
    ///
    /// Every key in [`REQUIRED_KEYS`] must be present, although `null` is
    /// accepted wherever the field is optional. Extra keys are ignored.
    ///
    /// # Errors
    ///
    /// - `NotAnObject` if the event is not a JSON object
    /// - `MissingKey` naming the first absent key
    /// - `InvalidField` if a value has the wrong JSON type
    pub fn from_event(event: Value) -> Result<Self, AdapterError> {
        let Some(fields) = event.as_object() else {
            return Err(AdapterError::NotAnObject(json_type_name(&event)));
        };

        if let Some(missing) = REQUIRED_KEYS.iter().find(|key| !fields.contains_key(**key)) {
            return Err(AdapterError::MissingKey(*missing));
        }

        Ok(serde_json::from_value(event)?)
    }

    /// Matched route template.
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Concrete request path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// HTTP method of the request.
    #[must_use]
    pub const fn http_method(&self) -> &HttpMethod {
        &self.http_method
    }

    /// Single-value headers, `None` when the event carried `null`.
    #[must_use]
    pub const fn headers(&self) -> Option<&HashMap<String, String>> {
        self.headers.as_ref()
    }

    /// Headers with every value in the order received.
    #[must_use]
    pub const fn multi_value_headers(&self) -> Option<&HashMap<String, Vec<String>>> {
        self.multi_value_headers.as_ref()
    }

    /// Single-value query string parameters.
    #[must_use]
    pub const fn query_string_parameters(&self) -> Option<&HashMap<String, String>> {
        self.query_string_parameters.as_ref()
    }

    /// Query string parameters with every value in the order received.
    #[must_use]
    pub const fn multi_value_query_string_parameters(&self) -> Option<&HashMap<String, Vec<String>>> {
        self.multi_value_query_string_parameters.as_ref()
    }

    /// Values bound to the resource template's variables.
    #[must_use]
    pub const fn path_parameters(&self) -> Option<&HashMap<String, String>> {
        self.path_parameters.as_ref()
    }

    /// Variables of the deployment stage.
    #[must_use]
    pub const fn stage_variables(&self) -> Option<&HashMap<String, String>> {
        self.stage_variables.as_ref()
    }

    /// Caller and authorizer metadata, passed through unparsed.
    #[must_use]
    pub const fn request_context(&self) -> &Map<String, Value> {
        &self.request_context
    }

    /// Raw body as sent; see [`Self::decoded_body`] for bytes.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Whether [`Self::body`] is base64-encoded binary content.
    #[must_use]
    pub const fn is_base64_encoded(&self) -> bool {
        self.is_base64_encoded
    }

    /// Looks up a single-value header, ignoring ASCII case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .as_ref()?
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Looks up a single-value query string parameter.
    #[must_use]
    pub fn query_parameter(&self, name: &str) -> Option<&str> {
        self.query_string_parameters.as_ref()?.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn path_parameter(&self, name: &str) -> Option<&str> {
        self.path_parameters.as_ref()?.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn stage_variable(&self, name: &str) -> Option<&str> {
        self.stage_variables.as_ref()?.get(name).map(String::as_str)
    }

    /// API Gateway request id from the request context, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_context.get("requestId").and_then(Value::as_str)
    }

    /// Deployment stage from the request context, if present.
    #[must_use]
    pub fn stage(&self) -> Option<&str> {
        self.request_context.get("stage").and_then(Value::as_str)
    }

    /// Returns the body as bytes, decoding base64 when the event says so.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBase64` if the body is flagged as base64 but does not decode.
    pub fn decoded_body(&self) -> Result<Option<Vec<u8>>, AdapterError> {
        let Some(body) = self.body.as_deref() else {
            return Ok(None);
        };

        if self.is_base64_encoded {
            Ok(Some(BASE64_STANDARD.decode(body)?))
        } else {
            Ok(Some(body.as_bytes().to_vec()))
        }
    }
}

impl TryFrom<Value> for ApiGatewayProxyEvent {
    type Error = AdapterError;

    fn try_from(event: Value) -> Result<Self, Self::Error> {
        Self::from_event(event)
    }
}
