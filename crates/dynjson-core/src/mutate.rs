//! Write operations.
//!
//! Mutation never returns an error. `set` and `del` are silent no-ops when
//! the receiver is not an object. `set_path` goes further: any node standing
//! where the path needs an object — including the root — is destructively
//! replaced with a fresh empty object. Callers rely on this "make it so"
//! contract to write a path blindly, without probing the existing shape
//! first; changing it into an error would change the public contract.

use crate::json::Json;
use serde_json::{Map, Value};

/// Make `slot` an object, replacing whatever else was there.
fn as_object_or_reset(slot: &mut Value) -> &mut Map<String, Value> {
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

impl Json {
    /// Insert or overwrite `key` with `value`.
    ///
    /// Silent no-op if this value is not an object.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        if let Some(map) = self.0.as_object_mut() {
            map.insert(key.into(), value.into());
        }
    }

    /// Remove `key` if present.
    ///
    /// Silent no-op if this value is not an object or the key is absent.
    pub fn del(&mut self, key: &str) {
        if let Some(map) = self.0.as_object_mut() {
            map.remove(key);
        }
    }

    /// Write `value` at the object path `keys`, creating intermediate
    /// objects as needed.
    ///
    /// - An empty path replaces the root value itself.
    /// - A non-object root is replaced with an empty object before walking.
    /// - Each intermediate segment that is absent is created as an empty
    ///   object; one that exists but is not an object is replaced with an
    ///   empty object, discarding its previous content.
    /// - The final segment is set to `value` on the object reached.
    pub fn set_path(&mut self, keys: &[&str], value: impl Into<Value>) {
        let value = value.into();
        let Some((last, parents)) = keys.split_last() else {
            self.0 = value;
            return;
        };

        let mut curr = as_object_or_reset(&mut self.0);
        for key in parents {
            let slot = curr
                .entry(key.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            curr = as_object_or_reset(slot);
        }
        curr.insert(last.to_string(), value);
    }
}
