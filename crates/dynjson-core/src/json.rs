//! The `Json` handle and its codec surface.
//!
//! `Json` is a transparent newtype over `serde_json::Value`; the tree itself
//! is whatever the codec decoded. The crate is built with serde_json's
//! `arbitrary_precision` feature, so numbers stay backed by their original
//! digit sequence until a numeric coercion is explicitly requested — a parsed
//! `u64::MAX` coerces exactly instead of passing through an `f64`. The
//! `preserve_order` feature keeps object keys in insertion order on re-encode.

use crate::error::Result;
use serde_json::{Map, Value};
use std::fmt;
use std::io;
use std::str::FromStr;

/// The six JSON variants, used in diagnostics and [`Json::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    pub(crate) fn of(value: &Value) -> Kind {
        match value {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        };
        f.write_str(name)
    }
}

/// A handle over a dynamic JSON value tree.
///
/// Created by parsing ([`Json::from_slice`], [`Json::from_reader`], or
/// `str::parse`) or empty via [`Json::new`]. Navigation methods return
/// borrowed `&Json` views into the same tree; mutation methods take
/// `&mut self` and edit in place.
#[derive(Debug, Clone, PartialEq)]
#[repr(transparent)]
pub struct Json(pub(crate) Value);

/// Shared miss result: every failed lookup borrows this one null view, so
/// chained `get` calls after a miss keep returning null without allocating.
static NULL: Json = Json(Value::Null);

impl Json {
    /// An empty object root, ready for `set` / `set_path`.
    pub fn new() -> Json {
        Json(Value::Object(Map::new()))
    }

    /// Parse a JSON document from a byte slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Json> {
        Ok(Json(serde_json::from_slice(bytes)?))
    }

    /// Parse a JSON document by reading `reader` to completion.
    ///
    /// The read is blocking and synchronous; there is no partial or streaming
    /// decode. Truncated input fails the same way malformed input does.
    pub fn from_reader(reader: impl io::Read) -> Result<Json> {
        Ok(Json(serde_json::from_reader(reader)?))
    }

    /// Wrap an already-built `serde_json::Value`.
    pub fn from_value(value: Value) -> Json {
        Json(value)
    }

    /// The underlying `serde_json::Value`.
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Unwrap into the underlying `serde_json::Value`.
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Encode compactly.
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }

    /// Encode with two-space indentation per nesting level.
    pub fn encode_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }

    pub(crate) fn null() -> &'static Json {
        &NULL
    }

    /// View a borrowed `Value` as a borrowed `Json`.
    pub(crate) fn from_ref(value: &Value) -> &Json {
        // SAFETY: Json is repr(transparent) over Value, so the pointer cast
        // preserves layout and the lifetime is carried through unchanged.
        unsafe { &*(value as *const Value as *const Json) }
    }
}

impl Default for Json {
    /// Same as [`Json::new`]: an empty object, not null.
    fn default() -> Json {
        Json::new()
    }
}

impl FromStr for Json {
    type Err = crate::error::JsonError;

    fn from_str(s: &str) -> Result<Json> {
        Ok(Json(serde_json::from_str(s)?))
    }
}

impl From<Value> for Json {
    fn from(value: Value) -> Json {
        Json(value)
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Value {
        json.0
    }
}

impl fmt::Display for Json {
    /// Renders the compact encoding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(&self.0) {
            Ok(text) => f.write_str(&text),
            Err(_) => Err(fmt::Error),
        }
    }
}
