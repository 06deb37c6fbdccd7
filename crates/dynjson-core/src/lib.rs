//! # dynjson-core
//!
//! A dynamic JSON value container: parse arbitrary JSON into an untyped tree,
//! navigate it by key, index, or path, mutate it in place (including
//! auto-creating intermediate objects on a path write), and coerce leaves to
//! concrete scalar or container types.
//!
//! Navigation never fails: looking up a missing key, an out-of-range index, or
//! a child of a non-object yields a null view, so lookups chain safely without
//! checking at every step. Coercion is where absence or shape mismatch finally
//! surfaces, either as a [`JsonError`] from the strict `as_*` accessors or as a
//! caller-supplied default from the `must_*` accessors.
//!
//! ## Quick start
//!
//! ```rust
//! use dynjson_core::Json;
//!
//! let mut js: Json = r#"{"user":{"name":"Alice"},"scores":[95,87]}"#.parse().unwrap();
//!
//! // Chained navigation; missing keys degrade to null, not errors.
//! assert_eq!(js.get("user").get("name").must_string(None), "Alice");
//! assert_eq!(js.get("scores").get_index(1).must_i64(None), 87);
//! assert_eq!(js.get("no_such_key").get("deeper").must_i64(-1), -1);
//!
//! // Path writes create intermediate objects as needed.
//! js.set_path(&["user", "contact", "email"], "alice@example.com");
//! assert_eq!(
//!     js.get_path(&["user", "contact", "email"]).as_str().unwrap(),
//!     "alice@example.com"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`error`] — [`JsonError`] and the crate [`Result`] alias
//! - `json` — the [`Json`] handle, constructors, and encoding
//! - `navigate` — read-only traversal (`get`, `get_index`, `get_path`, `check_get`)
//! - `mutate` — write operations (`set`, `del`, `set_path`)
//! - `coerce` — strict `as_*` accessors and defaulting `must_*` accessors

mod coerce;
pub mod error;
mod json;
mod mutate;
mod navigate;

pub use error::{JsonError, Result};
pub use json::{Json, Kind};

// Re-exported so callers can build values and defaults without naming
// serde_json themselves.
pub use serde_json::{Map, Number, Value};

/// Library version string, for diagnostics only.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
