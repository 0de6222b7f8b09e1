//! HTTP request body types

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// The kind of request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequestBodyKind {
    /// No body
    #[default]
    None,
    /// Raw text body with an explicit content type
    Raw {
        /// The content type (e.g., "application/json", "text/plain")
        content_type: String,
    },
}

/// HTTP request body with content and type information.
///
/// A body of kind [`RequestBodyKind::None`] carries no content type;
/// callers must not synthesize one for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RequestBody {
    /// The kind of body
    pub kind: RequestBodyKind,
    /// The body content as a string
    #[serde(default)]
    pub content: String,
}

impl RequestBody {
    /// Creates an empty body.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            kind: RequestBodyKind::None,
            content: String::new(),
        }
    }

    /// Creates a JSON body from already-serialized content.
    #[must_use]
    pub fn json(content: impl Into<String>) -> Self {
        Self {
            kind: RequestBodyKind::Raw {
                content_type: "application/json".to_string(),
            },
            content: content.into(),
        }
    }

    /// Creates a JSON body by serializing a value.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidBody`] if the value cannot be
    /// serialized to JSON.
    pub fn json_value<T: Serialize>(value: &T) -> DomainResult<Self> {
        let content =
            serde_json::to_string(value).map_err(|e| DomainError::InvalidBody(e.to_string()))?;
        Ok(Self::json(content))
    }

    /// Creates a plain text body.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: RequestBodyKind::Raw {
                content_type: "text/plain".to_string(),
            },
            content: content.into(),
        }
    }

    /// Returns whether the body is empty or none.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.kind, RequestBodyKind::None) || self.content.is_empty()
    }

    /// Returns the content type if the body carries one.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        match &self.kind {
            RequestBodyKind::None => None,
            RequestBodyKind::Raw { content_type } => Some(content_type),
        }
    }
}
