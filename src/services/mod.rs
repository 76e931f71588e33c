//! Resend API service implementations.

mod api_keys;
mod audience_contacts;
mod audiences;
mod batch;
mod broadcasts;
mod contact_properties;
mod contact_segments;
mod contact_topics;
mod contacts;
mod domains;
mod emails;
mod received_emails;
mod segments;
mod templates;
mod topics;
mod webhooks;

pub use api_keys::*;
pub use audience_contacts::*;
pub use audiences::*;
pub use batch::*;
pub use broadcasts::*;
pub use contact_properties::*;
pub use contact_segments::*;
pub use contact_topics::*;
pub use contacts::*;
pub use domains::*;
pub use emails::*;
pub use received_emails::*;
pub use segments::*;
pub use templates::*;
pub use topics::*;
pub use webhooks::*;

use crate::errors::{ResendError, ResendResult};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Bytes escaped inside a single path segment. `@` is left alone so
/// email-keyed paths stay readable.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Fails with a validation error when `value` is empty.
pub(crate) fn require(value: &str, message: &str) -> ResendResult<()> {
    if value.trim().is_empty() {
        return Err(ResendError::validation(message));
    }
    Ok(())
}

/// Encodes an identifier as exactly one URL path segment.
///
/// `.` and `..` are refused: URL parsing resolves them in either spelling.
/// A literal `%` is escaped, so no other input encodes to a dot segment.
pub(crate) fn segment(value: &str) -> ResendResult<String> {
    if matches!(value, "." | "..") {
        return Err(ResendError::validation(format!(
            "Identifier cannot be a dot segment: {}",
            value
        )));
    }
    Ok(utf8_percent_encode(value, PATH_SEGMENT).to_string())
}


#[cfg(test)]
pub(crate) mod test_support {
    use crate::mocks::MockHttpTransport;
    use crate::ResendClient;
    use std::sync::Arc;

    pub fn create_test_client() -> (ResendClient, Arc<MockHttpTransport>) {
        let transport = Arc::new(MockHttpTransport::new());
        let client = ResendClient::builder()
            .api_key("re_test")
            .transport(transport.clone())
            .build()
            .unwrap();
        (client, transport)
    }
}
