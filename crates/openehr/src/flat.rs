//! Flat composition sink.
//!
//! openEHR "flat format" compositions are a single JSON object whose keys are
//! slash-separated archetype paths with pipe-suffixed facets (for example
//! `medication/dosierung/frequenz/quantity_value|magnitude`) and whose values
//! are scalars. Mapping functions append entries here; the downstream
//! composition builder consumes the finished object.

use serde::Serialize;
use serde_json::{Map, Value};

/// Ordered path-keyed scalar sink for one openEHR composition.
///
/// Keys are unique and the last write to a path wins. Only scalar values
/// (string, number, boolean) are representable in the flat format; any other
/// JSON value kind is dropped silently, matching the downstream builder's
/// expectations.
///
/// The sink is owned by the caller for the duration of one conversion
/// session and is the only mutable object in the mapping data path.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct FlatComposition {
    #[serde(flatten)]
    entries: Map<String, Value>,
}

impl FlatComposition {
    /// Creates an empty flat composition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a scalar under the exact path key, overwriting any previous
    /// value. Non-scalar values (null, arrays, objects) are dropped.
    pub fn insert(&mut self, path: impl Into<String>, value: Value) {
        match value {
            Value::String(_) | Value::Number(_) | Value::Bool(_) => {
                self.entries.insert(path.into(), value);
            }
            _ => {}
        }
    }

    /// Returns the value stored at `path`, if any.
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.entries.get(path)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Consumes the sink, yielding the flat JSON object.
    pub fn into_json(self) -> Value {
        Value::Object(self.entries)
    }
}
