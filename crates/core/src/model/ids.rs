use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Identifier of a content view.
///
/// The same identifier doubles as the address fragment for detail views and as
/// the key under which the content provider stores lesson data, so it must be
/// usable verbatim after a `#`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ViewId(String);

impl ViewId {
    /// Create a validated view id.
    ///
    /// # Errors
    ///
    /// Returns `ViewIdError::Empty` for blank input and
    /// `ViewIdError::InvalidChar` if the id contains whitespace or `#`.
    pub fn new(value: impl Into<String>) -> Result<Self, ViewIdError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(ViewIdError::Empty);
        }
        if let Some(ch) = raw.chars().find(|c| c.is_whitespace() || *c == '#') {
            return Err(ViewIdError::InvalidChar { raw, ch });
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ViewId {
    type Error = ViewIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ViewId> for String {
    fn from(value: ViewId) -> Self {
        value.0
    }
}

impl fmt::Debug for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ViewId({})", self.0)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for ViewId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ViewId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ViewIdError {
    #[error("view id cannot be empty")]
    Empty,
    #[error("view id {raw:?} contains invalid character {ch:?}")]
    InvalidChar { raw: String, ch: char },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_and_fragment_breaking_ids() {
        assert_eq!(ViewId::new(""), Err(ViewIdError::Empty));
        assert!(matches!(
            ViewId::new("view detail"),
            Err(ViewIdError::InvalidChar { ch: ' ', .. })
        ));
        assert!(matches!(
            ViewId::new("#view"),
            Err(ViewIdError::InvalidChar { ch: '#', .. })
        ));
    }

    #[test]
    fn deserializes_through_validation() {
        let id: ViewId = serde_json::from_str("\"view-detail-1\"").unwrap();
        assert_eq!(id, "view-detail-1");
        assert!(serde_json::from_str::<ViewId>("\"\"").is_err());
    }
}
