//! Typed adapter for API Gateway REST proxy integrations on AWS Lambda.
//!
//! Write handlers against [`ApiGatewayProxyEvent`] and [`ApiGatewayProxyResult`],
//! then wrap them with [`rest_api_handler`] (or serve them directly with
//! [`runtime::run`]) to accept the raw proxy event.

pub mod adapter;
pub mod handler;
pub mod models;
pub mod runtime;

pub use adapter::{RestApiHandler, rest_api_handler};
pub use models::{AdapterError, ApiGatewayProxyEvent, ApiGatewayProxyResult, HeaderValue, HttpMethod};
