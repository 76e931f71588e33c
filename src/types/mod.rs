//! Data types shared across Resend resources.

use serde::{Deserialize, Serialize};

/// A field that accepts either a single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrVec {
    /// A single value.
    One(String),
    /// Several values.
    Many(Vec<String>),
}

impl StringOrVec {
    /// Returns the values as a list.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Self::One(value) => vec![value.clone()],
            Self::Many(values) => values.clone(),
        }
    }
}

impl From<&str> for StringOrVec {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for StringOrVec {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for StringOrVec {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

/// Custom metadata attached to an email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name.
    pub name: String,
    /// Tag value.
    pub value: String,
}

impl Tag {
    /// Creates a tag.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An email attachment.
///
/// Either `content` (raw bytes, base64 encoded on the wire) or `path` (a URL
/// the API fetches) should be set. Neither is read or checked locally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Raw file contents.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "base64_bytes"
    )]
    pub content: Option<Vec<u8>>,
    /// Name of the attached file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// URL of the file to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// MIME type; derived from the filename by the API when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Content id for inline images referenced as `cid:` in HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
}

impl Attachment {
    /// Creates an attachment from in-memory content.
    pub fn from_content(filename: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: Some(content.into()),
            filename: Some(filename.into()),
            ..Default::default()
        }
    }

    /// Creates an attachment fetched by the API from a URL.
    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Default::default()
        }
    }
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error> {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|s| STANDARD.decode(s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

/// Reference to a resource returned by mutating calls: `{ object, id }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    /// Object tag.
    #[serde(default)]
    pub object: String,
    /// Resource identifier.
    #[serde(default)]
    pub id: String,
}

/// Response to a delete call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedResponse {
    /// Object tag.
    #[serde(default)]
    pub object: String,
    /// Identifier of the deleted resource.
    #[serde(default, alias = "contact")]
    pub id: String,
    /// Whether the resource was deleted.
    #[serde(default)]
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_string_or_vec_accepts_both_shapes() {
        let one: StringOrVec = serde_json::from_value(json!("a@b.com")).unwrap();
        let many: StringOrVec = serde_json::from_value(json!(["a@b.com", "c@d.com"])).unwrap();

        assert_eq!(one, StringOrVec::One("a@b.com".to_string()));
        assert_eq!(many.to_vec(), vec!["a@b.com", "c@d.com"]);
        assert_eq!(serde_json::to_value(&one).unwrap(), json!("a@b.com"));
    }

    #[test]
    fn test_attachment_content_is_base64() {
        let attachment = Attachment::from_content("invoice.txt", b"hello".to_vec());
        let value = serde_json::to_value(&attachment).unwrap();

        assert_eq!(value, json!({ "content": "aGVsbG8=", "filename": "invoice.txt" }));

        let decoded: Attachment = serde_json::from_value(value).unwrap();
        assert_eq!(decoded.content.as_deref(), Some(&b"hello"[..]));
    }

    #[test]
    fn test_attachment_path_passthrough() {
        let attachment = Attachment {
            content_id: Some("logo".to_string()),
            ..Attachment::from_path("https://example.com/logo.png")
        };
        let value = serde_json::to_value(&attachment).unwrap();

        assert_eq!(
            value,
            json!({ "path": "https://example.com/logo.png", "content_id": "logo" })
        );
    }

    #[test]
    fn test_deleted_response_contact_alias() {
        let deleted: DeletedResponse =
            serde_json::from_value(json!({ "object": "contact", "contact": "c1", "deleted": true }))
                .unwrap();

        assert_eq!(deleted.id, "c1");
        assert!(deleted.deleted);
    }
}
