#![forbid(unsafe_code)]

//! Errors at the host boundary.
//!
//! Everything past the boundary is total; only decoding host-provided JSON
//! can fail.

use core::fmt;

/// The catalog document could not be decoded.
#[derive(Debug)]
pub enum CatalogError {
    /// Not valid JSON, or not an array of item records.
    Decode(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "invalid search catalog: {e}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e)
    }
}

/// A host input record was rejected.
#[derive(Debug)]
pub enum InputError {
    /// Not valid JSON, or a field has the wrong shape.
    Decode(serde_json::Error),
    /// `type` names an event the widget does not listen for.
    UnknownEventType(String),
    /// A key event without a `key` field.
    MissingKey,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "invalid input record: {e}"),
            Self::UnknownEventType(t) => write!(f, "unknown input event type {t:?}"),
            Self::MissingKey => write!(f, "key event without a key"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for InputError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e)
    }
}
