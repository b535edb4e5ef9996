use lambda_runtime::Context;
use lambda_runtime::tracing::{debug, warn};
use serde_json::{Value, json};

use crate::models::{ApiGatewayProxyEvent, ApiGatewayProxyResult};

/// Builds a JSON error result with the given status.
fn error_response(status_code: u16, message: &str) -> ApiGatewayProxyResult {
    ApiGatewayProxyResult::new(status_code, json!({ "error": message }).to_string())
        .with_header("Content-Type", "application/json")
}

/// Sample REST handler that echoes the request back as JSON.
///
/// The body is decoded from base64 when flagged and returned as (lossy) UTF-8.
/// A body flagged as base64 that fails to decode produces a 400.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn echo_handler(event: ApiGatewayProxyEvent, context: Context) -> ApiGatewayProxyResult {
    let body = match event.decoded_body() {
        Ok(bytes) => bytes.map(|b| String::from_utf8_lossy(&b).into_owned()),
        Err(e) => {
            warn!(error = %e, "Rejecting request body");
            return error_response(400, &e.to_string());
        }
    };

    debug!(method = %event.http_method(), path = %event.path(), "Echoing request");

    let payload: Value = json!({
        "method": event.http_method().as_str(),
        "resource": event.resource(),
        "path": event.path(),
        "pathParameters": event.path_parameters(),
        "queryStringParameters": event.query_string_parameters(),
        "requestId": context.request_id,
        "body": body,
    });

    ApiGatewayProxyResult::json(200, &payload)
        .unwrap_or_else(|e| error_response(500, &format!("Failed to serialize response: {e}")))
}
