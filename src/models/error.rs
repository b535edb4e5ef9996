//! Error types for the proxy adapter.
//!
//! Every failure the adapter can produce comes from reading the inbound event,
//! so the variants describe what was wrong with the event rather than with the
//! handler.

use lambda_runtime::Diagnostic;
use thiserror::Error;

/// Failure to turn a raw proxy event into an [`ApiGatewayProxyEvent`].
///
/// [`ApiGatewayProxyEvent`]: crate::models::ApiGatewayProxyEvent
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The event was not a JSON object.
    #[error("Proxy event must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// A required top-level key was absent from the event.
    #[error("Missing required key in proxy event: {0}")]
    MissingKey(&'static str),

    /// A key was present but its value had the wrong shape.
    #[error("Invalid field in proxy event: {0}")]
    InvalidField(#[from] serde_json::Error),

    /// The body was flagged as base64 but did not decode.
    #[error("Body is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

impl AdapterError {
    /// Short name reported as the Lambda `errorType`.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::NotAnObject(_) => "NotAnObject",
            Self::MissingKey(_) => "MissingKey",
            Self::InvalidField(_) => "InvalidField",
            Self::InvalidBase64(_) => "InvalidBase64",
        }
    }

    /// Converts the error into the diagnostic the Lambda runtime reports.
    #[must_use]
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            error_type: self.error_type().to_string(),
            error_message: self.to_string(),
        }
    }
}
