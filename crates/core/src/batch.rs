//! Write batch for atomic mapping output.
//!
//! Mapping functions do not touch the caller's sink directly. Each call
//! computes its writes into a [`WriteBatch`], and the dispatcher commits the
//! batch only when the whole call succeeded. A failing call therefore leaves
//! the flat composition untouched.

use crate::error::{MapError, MapResult};
use openehr::FlatComposition;
use serde_json::Value;

/// Writes computed by one mapping call.
#[derive(Clone, Debug, Default)]
pub struct WriteBatch {
    writes: Vec<(String, Value)>,
}

impl WriteBatch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a text value.
    pub fn push_text(&mut self, path: impl Into<String>, value: impl Into<String>) {
        self.writes.push((path.into(), Value::String(value.into())));
    }

    /// Queues an integer value.
    pub fn push_integer(&mut self, path: impl Into<String>, value: i64) {
        self.writes.push((path.into(), Value::Number(value.into())));
    }

    /// Queues a decimal magnitude.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::UnrepresentableMagnitude`] for non-finite values,
    /// which have no JSON number representation.
    pub fn push_magnitude(&mut self, path: impl Into<String>, value: f64) -> MapResult<()> {
        let number = serde_json::Number::from_f64(value)
            .ok_or(MapError::UnrepresentableMagnitude(value))?;
        self.writes.push((path.into(), Value::Number(number)));
        Ok(())
    }

    /// Returns `true` if no writes have been queued.
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Number of queued writes.
    pub fn len(&self) -> usize {
        self.writes.len()
    }

    /// Queued writes in order.
    pub fn writes(&self) -> &[(String, Value)] {
        &self.writes
    }

    /// Applies all queued writes to the flat composition, in order.
    pub fn commit(self, flat: &mut FlatComposition) {
        for (path, value) in self.writes {
            flat.insert(path, value);
        }
    }
}
