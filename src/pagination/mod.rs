//! Cursor-based pagination for Resend list endpoints.
//!
//! List endpoints take `limit`, `after` and `before` query parameters and
//! answer with `{ "object": "list", "has_more": bool, "data": [...] }`.
//! Callers fetch the next page by repeating the call with `after` set to the
//! id of the last item until `has_more` is false.

use crate::errors::{ResendError, ResendResult};
use serde::{Deserialize, Serialize};

/// Pagination parameters for list requests.
///
/// `after` and `before` are not checked for mutual exclusion; the API
/// rejects requests that set both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListOptions {
    /// Maximum number of items to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Return items after this cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// Return items before this cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
}

impl ListOptions {
    /// Creates empty pagination options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the `after` cursor.
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Sets the `before` cursor.
    pub fn before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    /// Returns true if no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.limit.is_none() && self.after.is_none() && self.before.is_none()
    }

    /// Encodes the present parameters as a query string, without the `?`.
    pub fn to_query(&self) -> ResendResult<String> {
        serde_urlencoded::to_string(self).map_err(|e| {
            ResendError::request_build(format!("Failed to encode pagination parameters: {}", e))
        })
    }

    /// Appends the query string to a path.
    pub fn apply(&self, path: &str) -> ResendResult<String> {
        let query = self.to_query()?;
        if query.is_empty() {
            return Ok(path.to_string());
        }
        let separator = if path.contains('?') { '&' } else { '?' };
        Ok(format!("{}{}{}", path, separator, query))
    }

    /// Options for the page following `page`, keeping the same limit.
    ///
    /// Returns `None` when the API reported no further items.
    pub fn next_after<T: HasId>(&self, page: &ListResponse<T>) -> Option<Self> {
        if !page.has_more {
            return None;
        }
        let last = page.data.last()?;
        Some(Self {
            limit: self.limit,
            after: Some(last.id().to_string()),
            before: None,
        })
    }
}

/// Response shape shared by every list endpoint.
///
/// Legacy endpoints omit `object` and `has_more`; both decode to their
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Object tag, normally `"list"`.
    #[serde(default)]
    pub object: String,
    /// Whether more items are available after this page.
    #[serde(default)]
    pub has_more: bool,
    /// The items.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            object: String::new(),
            has_more: false,
            data: Vec::new(),
        }
    }
}

impl<T> ListResponse<T> {
    /// Returns the number of items in this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the page is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the items.
    pub fn into_items(self) -> Vec<T> {
        self.data
    }
}

impl<T> IntoIterator for ListResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// Entities that can serve as a pagination cursor.
pub trait HasId {
    /// The entity identifier.
    fn id(&self) -> &str;
}
