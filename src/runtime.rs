//! Bridge between the Lambda runtime and the proxy adapter.

use lambda_runtime::tracing::{debug, error, info};
use lambda_runtime::{Context, Diagnostic, Error, LambdaEvent, service_fn};
use serde_json::Value;
use std::sync::Arc;

use crate::adapter::{RestApiHandler, rest_api_handler};
use crate::models::{AdapterError, ApiGatewayProxyResult};

/// Runs one invocation through an adapted handler.
///
/// Logs the full event only when `RUST_LOG=debug/trace`.
///
/// # Errors
///
/// Returns a `Diagnostic` whose `error_type` is one of `NotAnObject`,
/// `MissingKey`, `InvalidField` or `InvalidBase64` when the event cannot be parsed.
pub fn dispatch<H>(
    wrapped: &H,
    event: LambdaEvent<Value>,
) -> Result<ApiGatewayProxyResult, Diagnostic>
where
    H: Fn(Value, Context) -> Result<ApiGatewayProxyResult, AdapterError>,
{
    let (payload, context) = event.into_parts();

    let method = payload.get("httpMethod").and_then(Value::as_str).unwrap_or("-");
    let path = payload.get("path").and_then(Value::as_str).unwrap_or("-");

    debug!(request_id = %context.request_id, payload = ?payload, "Received proxy event");
    info!(request_id = %context.request_id, method, path, "Invoking REST handler");

    wrapped(payload, context)
        .inspect(|result| debug!(status_code = result.status_code, "Handler returned"))
        .map_err(|e| {
            error!(error = %e, error_type = e.error_type(), "Failed to adapt proxy event");
            e.to_diagnostic()
        })
}

/// Serves a typed REST handler on the Lambda runtime.
///
/// # Errors
///
/// Returns an error if the runtime fails to start or loses its connection to
/// the Lambda API.
pub async fn run<F>(handler: F) -> Result<(), Error>
where
    F: RestApiHandler<Context> + Send + Sync + 'static,
{
    let wrapped = Arc::new(rest_api_handler::<Context, F>(handler));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let wrapped = Arc::clone(&wrapped);
        async move { dispatch(wrapped.as_ref(), event) }
    }))
    .await
}
