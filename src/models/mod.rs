pub mod error;
pub mod event;
pub mod result;

pub use error::AdapterError;
pub use event::{ApiGatewayProxyEvent, HttpMethod, REQUIRED_KEYS};
pub use result::{ApiGatewayProxyResult, HeaderValue};
