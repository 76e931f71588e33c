//! HTTP transport layer for the Resend API client.

mod error;
mod http;
mod reqwest;
mod request;
mod response;

pub use self::reqwest::ReqwestTransport;
pub use error::TransportError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use request::RequestBuilder;
pub use response::{
    ResponseParser, HEADER_RATELIMIT_LIMIT, HEADER_RATELIMIT_REMAINING, HEADER_RATELIMIT_RESET,
    HEADER_RETRY_AFTER,
};
