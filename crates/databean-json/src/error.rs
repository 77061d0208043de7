//! Value-tree error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),
    #[error("expected a JSON {0} at the document root")]
    RootType(&'static str),
}
