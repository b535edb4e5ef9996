//! Wraps typed REST handlers so they can be invoked with a raw proxy event.

use serde_json::Value;

use crate::models::{AdapterError, ApiGatewayProxyEvent, ApiGatewayProxyResult};

/// A handler written against the typed proxy event.
///
/// Implemented for every `Fn(ApiGatewayProxyEvent, C) -> ApiGatewayProxyResult`,
/// where `C` is whatever context the invoking runtime supplies.
pub trait RestApiHandler<C>: Fn(ApiGatewayProxyEvent, C) -> ApiGatewayProxyResult {}

impl<C, F> RestApiHandler<C> for F where F: Fn(ApiGatewayProxyEvent, C) -> ApiGatewayProxyResult {}

/// Adapts a typed handler to the raw `(event, context)` invocation contract.
///
/// The returned function parses the event with [`ApiGatewayProxyEvent::from_event`],
/// calls `handler` exactly once with the parsed event and the untouched context,
/// and returns the handler's result as-is. If parsing fails the handler is
/// never called and the error is returned to the caller.
pub fn rest_api_handler<C, F>(
    handler: F,
) -> impl Fn(Value, C) -> Result<ApiGatewayProxyResult, AdapterError>
where
    F: RestApiHandler<C>,
{
    move |event, context| {
        let event = ApiGatewayProxyEvent::from_event(event)?;
        Ok(handler(event, context))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_context_is_passed_through() {
        let wrapped = rest_api_handler(|event: ApiGatewayProxyEvent, context: Value| {
            ApiGatewayProxyResult::new(200, format!("{} {}", event.path(), context["fn"]))
        });

        let event = json!({
            "resource": "/",
            "path": "/",
            "httpMethod": "GET",
            "headers": {},
            "multiValueHeaders": {},
            "queryStringParameters": {},
            "multiValueQueryStringParameters": null,
            "pathParameters": null,
            "stageVariables": null,
            "requestContext": {},
            "body": null,
            "isBase64Encoded": false
        });

        let result = wrapped(event, json!({"fn": "demo"})).unwrap();
        assert_eq!(result.body, "/ \"demo\"");
    }
}
