//! Error types for parsing and coercion.

use crate::json::Kind;
use thiserror::Error;

/// Errors surfaced by parsing, encoding, and the strict coercion accessors.
///
/// Navigation and mutation never produce these: a failed lookup degrades to a
/// null view and a mutation on the wrong shape is either a no-op (`set`,
/// `del`) or a destructive replace (`set_path`).
#[derive(Error, Debug)]
pub enum JsonError {
    /// The input was not valid JSON, or a tree failed to serialize.
    #[error("JSON codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// A coercion was requested against a value of the wrong variant.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: Kind, found: Kind },

    /// An integral number literal does not fit the requested width.
    #[error("number {literal} does not fit in {target}")]
    Overflow {
        literal: String,
        target: &'static str,
    },

    /// A number literal cannot be parsed as the requested target at all
    /// (e.g. a fractional or exponent form requested as an integer).
    #[error("number {literal} cannot be parsed as {target}")]
    ParseFailure {
        literal: String,
        target: &'static str,
    },
}

/// Convenience alias used throughout dynjson-core.
pub type Result<T> = std::result::Result<T, JsonError>;
