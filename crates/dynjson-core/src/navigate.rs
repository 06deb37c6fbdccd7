//! Read-only traversal.
//!
//! None of these operations can fail or panic. Absence and shape mismatch
//! both degrade to a borrowed null view, so lookups chain freely:
//!
//! ```rust
//! # use dynjson_core::Json;
//! let js: Json = r#"{"a":{"b":[10,20]}}"#.parse().unwrap();
//! assert_eq!(js.get("a").get("b").get_index(1).must_i64(None), 20);
//! assert!(js.get("missing").get("still_missing").check_get("x").is_none());
//! ```

use crate::json::Json;

impl Json {
    /// Child at `key`, or a null view if this value is not an object or the
    /// key is absent.
    pub fn get(&self, key: &str) -> &Json {
        match self.0.as_object().and_then(|map| map.get(key)) {
            Some(child) => Json::from_ref(child),
            None => Json::null(),
        }
    }

    /// Element at `index`, or a null view if this value is not an array or
    /// the index is out of range. Indices never wrap around.
    pub fn get_index(&self, index: usize) -> &Json {
        match self.0.as_array().and_then(|arr| arr.get(index)) {
            Some(element) => Json::from_ref(element),
            None => Json::null(),
        }
    }

    /// Repeated [`get`](Json::get) along `keys`, left to right.
    ///
    /// A miss anywhere along the path short-circuits the remaining segments
    /// into further null lookups.
    pub fn get_path(&self, keys: &[&str]) -> &Json {
        let mut node = self;
        for key in keys {
            node = node.get(key);
        }
        node
    }

    /// Like [`get`](Json::get), but reports whether the lookup hit.
    ///
    /// Returns `None` both when this value is not an object and when the key
    /// is absent; the two cases are deliberately not distinguished. A key
    /// that is present with an explicit null value is a hit
    /// (`Some(null view)`), not a miss.
    pub fn check_get(&self, key: &str) -> Option<&Json> {
        self.0
            .as_object()
            .and_then(|map| map.get(key))
            .map(Json::from_ref)
    }
}
