//! Type coercion: strict `as_*` accessors and defaulting `must_*` accessors.
//!
//! Strict accessors narrow to exactly one variant and return
//! [`JsonError::TypeMismatch`] otherwise; there is no widening between
//! container kinds. Numeric accessors parse the number's backing literal
//! exactly — an integral literal that does not fit the requested width is an
//! [`JsonError::Overflow`], and a fractional or exponent literal requested as
//! an integer is a [`JsonError::ParseFailure`]. Nothing truncates silently;
//! callers who want truncation go through [`Json::as_f64`] and truncate
//! themselves.
//!
//! Each strict accessor has a `must_*` counterpart that swallows the error
//! and substitutes a default: `must_i64(7)` falls back to `7`,
//! `must_i64(None)` to `0`. This trades error visibility for call-site
//! brevity, so it belongs only where the default is semantically safe.

use crate::error::{JsonError, Result};
use crate::json::{Json, Kind};
use serde_json::{Map, Number, Value};

/// Classify a failed integer parse: literals made of digits (and a sign) are
/// width overflows, anything with a fraction or exponent is unparseable as an
/// integer at all.
fn integer_error(n: &Number, target: &'static str) -> JsonError {
    let literal = n.to_string();
    if literal.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        JsonError::Overflow { literal, target }
    } else {
        JsonError::ParseFailure { literal, target }
    }
}

impl Json {
    /// The variant of this value.
    pub fn kind(&self) -> Kind {
        Kind::of(&self.0)
    }

    /// True if this value is null (including the null view returned by a
    /// failed lookup).
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    fn mismatch(&self, expected: Kind) -> JsonError {
        JsonError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    /// Borrow as an object map.
    pub fn as_object(&self) -> Result<&Map<String, Value>> {
        self.0.as_object().ok_or_else(|| self.mismatch(Kind::Object))
    }

    /// Borrow as an array.
    pub fn as_array(&self) -> Result<&Vec<Value>> {
        self.0.as_array().ok_or_else(|| self.mismatch(Kind::Array))
    }

    /// Narrow to a boolean.
    pub fn as_bool(&self) -> Result<bool> {
        self.0.as_bool().ok_or_else(|| self.mismatch(Kind::Bool))
    }

    /// Borrow as a string slice.
    pub fn as_str(&self) -> Result<&str> {
        self.0.as_str().ok_or_else(|| self.mismatch(Kind::String))
    }

    /// Borrow a string value's raw UTF-8 bytes.
    ///
    /// No base64 or other byte encoding is decoded; this is the string's own
    /// byte representation.
    pub fn as_bytes(&self) -> Result<&[u8]> {
        Ok(self.as_str()?.as_bytes())
    }

    /// Collect an array of strings, mapping null elements to empty strings.
    ///
    /// All-or-nothing: any element that is neither a string nor null fails
    /// the whole call; no partial result is produced.
    pub fn as_string_array(&self) -> Result<Vec<String>> {
        let arr = self.as_array()?;
        let mut out = Vec::with_capacity(arr.len());
        for element in arr {
            match element {
                Value::Null => out.push(String::new()),
                Value::String(s) => out.push(s.clone()),
                other => {
                    return Err(JsonError::TypeMismatch {
                        expected: Kind::String,
                        found: Kind::of(other),
                    })
                }
            }
        }
        Ok(out)
    }

    fn number(&self) -> Result<&Number> {
        match &self.0 {
            Value::Number(n) => Ok(n),
            _ => Err(self.mismatch(Kind::Number)),
        }
    }

    /// Coerce to a host-width signed integer, exactly.
    pub fn as_int(&self) -> Result<isize> {
        let n = self.number()?;
        let wide = n.as_i64().ok_or_else(|| integer_error(n, "int"))?;
        isize::try_from(wide).map_err(|_| JsonError::Overflow {
            literal: n.to_string(),
            target: "int",
        })
    }

    /// Coerce to `i64`, exactly.
    pub fn as_i64(&self) -> Result<i64> {
        let n = self.number()?;
        n.as_i64().ok_or_else(|| integer_error(n, "i64"))
    }

    /// Coerce to `u64`, exactly. Negative literals are an overflow.
    pub fn as_u64(&self) -> Result<u64> {
        let n = self.number()?;
        n.as_u64().ok_or_else(|| integer_error(n, "u64"))
    }

    /// Coerce any number to `f64`.
    pub fn as_f64(&self) -> Result<f64> {
        let n = self.number()?;
        n.as_f64().ok_or_else(|| JsonError::ParseFailure {
            literal: n.to_string(),
            target: "f64",
        })
    }

    /// [`as_object`](Json::as_object) with a default; `None` means an empty map.
    ///
    /// Returns an owned copy: on success the whole map is cloned, every
    /// call. Use [`as_object`](Json::as_object) to iterate a large document
    /// without copying it.
    pub fn must_object(&self, default: impl Into<Option<Map<String, Value>>>) -> Map<String, Value> {
        match self.0.as_object() {
            Some(map) => map.clone(),
            None => default.into().unwrap_or_default(),
        }
    }

    /// [`as_array`](Json::as_array) with a default; `None` means an empty vec.
    ///
    /// Returns an owned copy: on success the whole array is cloned, every
    /// call. Use [`as_array`](Json::as_array) to iterate a large document
    /// without copying it.
    pub fn must_array(&self, default: impl Into<Option<Vec<Value>>>) -> Vec<Value> {
        match self.0.as_array() {
            Some(arr) => arr.clone(),
            None => default.into().unwrap_or_default(),
        }
    }

    /// [`as_bool`](Json::as_bool) with a default; `None` means `false`.
    pub fn must_bool(&self, default: impl Into<Option<bool>>) -> bool {
        self.0
            .as_bool()
            .or_else(|| default.into())
            .unwrap_or_default()
    }

    /// [`as_str`](Json::as_str) with a default; `None` means the empty string.
    pub fn must_string<'a>(&self, default: impl Into<Option<&'a str>>) -> String {
        match self.0.as_str() {
            Some(s) => s.to_owned(),
            None => default.into().unwrap_or_default().to_owned(),
        }
    }

    /// [`as_string_array`](Json::as_string_array) with a default; `None`
    /// means an empty vec.
    pub fn must_string_array(&self, default: impl Into<Option<Vec<String>>>) -> Vec<String> {
        self.as_string_array()
            .ok()
            .or_else(|| default.into())
            .unwrap_or_default()
    }

    /// [`as_int`](Json::as_int) with a default; `None` means `0`.
    pub fn must_int(&self, default: impl Into<Option<isize>>) -> isize {
        self.as_int()
            .ok()
            .or_else(|| default.into())
            .unwrap_or_default()
    }

    /// [`as_i64`](Json::as_i64) with a default; `None` means `0`.
    pub fn must_i64(&self, default: impl Into<Option<i64>>) -> i64 {
        self.as_i64()
            .ok()
            .or_else(|| default.into())
            .unwrap_or_default()
    }

    /// [`as_u64`](Json::as_u64) with a default; `None` means `0`.
    pub fn must_u64(&self, default: impl Into<Option<u64>>) -> u64 {
        self.as_u64()
            .ok()
            .or_else(|| default.into())
            .unwrap_or_default()
    }

    /// [`as_f64`](Json::as_f64) with a default; `None` means `0.0`.
    pub fn must_f64(&self, default: impl Into<Option<f64>>) -> f64 {
        self.as_f64()
            .ok()
            .or_else(|| default.into())
            .unwrap_or_default()
    }
}
