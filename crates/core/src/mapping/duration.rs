//! FHIR dosage duration → openEHR administration duration.
//!
//! Consumes a `Timing.repeat` element and writes the administration
//! duration as ISO 8601 duration tokens, either a single value or a
//! lower/upper pair when `durationMax` is present.

use crate::batch::WriteBatch;
use crate::error::{MapError, MapResult};
use crate::mapping::SourceValue;
use crate::unit;

pub(crate) fn map(openehr_path: &str, value: &SourceValue) -> MapResult<WriteBatch> {
    let SourceValue::TimingRepeat(repeat) = value else {
        return Err(MapError::TypeMismatch {
            expected: "TimingRepeat",
            got: value.kind(),
        });
    };

    let Some(duration) = repeat.duration else {
        // Expected "nothing to map" case, not a data fault.
        tracing::debug!("no duration found in timing repeat");
        return Err(MapError::MissingField("duration"));
    };

    let Some(duration_unit) = repeat.duration_unit else {
        return Err(MapError::MissingField("durationUnit"));
    };

    let mut batch = WriteBatch::new();

    if let Some(duration_max) = repeat.duration_max {
        batch.push_text(
            format!("{openehr_path}/duration_value/lower|value"),
            unit::format_duration(duration, duration_unit),
        );
        batch.push_text(
            format!("{openehr_path}/duration_value/upper|value"),
            unit::format_duration(duration_max, duration_unit),
        );
    } else {
        batch.push_text(
            format!("{openehr_path}/duration_value|value"),
            unit::format_duration(duration, duration_unit),
        );
    }

    Ok(batch)
}
