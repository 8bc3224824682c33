//! FHIR dose range/quantity → openEHR range.
//!
//! Variant-dispatches on the source shape: a `Range` writes lower/upper
//! magnitude (and unit where present) facets, a bare `Quantity` writes a
//! single magnitude/unit pair. Both bounds of a range are required; like
//! every mapping function the writes are committed only when the whole call
//! succeeds.

use crate::batch::WriteBatch;
use crate::error::{MapError, MapResult};
use crate::mapping::SourceValue;
use fhir::{Quantity, Range};

pub(crate) fn map(openehr_path: &str, value: &SourceValue) -> MapResult<WriteBatch> {
    match value {
        SourceValue::Range(range) => map_range(openehr_path, range),
        SourceValue::Quantity(quantity) => map_quantity(openehr_path, quantity),
        other => Err(MapError::TypeMismatch {
            expected: "Range or Quantity",
            got: other.kind(),
        }),
    }
}

fn map_range(path: &str, range: &Range) -> MapResult<WriteBatch> {
    let mut batch = WriteBatch::new();

    let Some(low) = range.low.as_ref() else {
        return Err(MapError::MissingField("low"));
    };
    let Some(low_value) = low.value else {
        return Err(MapError::MissingField("low.value"));
    };
    batch.push_magnitude(format!("{path}/quantity_value/lower|magnitude"), low_value)?;
    if let Some(unit) = low.unit_text() {
        batch.push_text(format!("{path}/quantity_value/lower|unit"), unit);
    }

    let Some(high) = range.high.as_ref() else {
        return Err(MapError::MissingField("high"));
    };
    let Some(high_value) = high.value else {
        return Err(MapError::MissingField("high.value"));
    };
    batch.push_magnitude(format!("{path}/quantity_value/upper|magnitude"), high_value)?;
    if let Some(unit) = high.unit_text() {
        batch.push_text(format!("{path}/quantity_value/upper|unit"), unit);
    }

    Ok(batch)
}

fn map_quantity(path: &str, quantity: &Quantity) -> MapResult<WriteBatch> {
    let Some(value) = quantity.value else {
        return Err(MapError::MissingField("value"));
    };

    let mut batch = WriteBatch::new();
    batch.push_magnitude(format!("{path}/quantity_value|magnitude"), value)?;
    if let Some(unit) = quantity.unit_text() {
        batch.push_text(format!("{path}/quantity_value|unit"), unit);
    }
    Ok(batch)
}
