//! FHIR-aligned timing wire models.
//!
//! This module models the subset of the FHIR R4 `Timing` datatype that the
//! dosage mapping functions consume: the `repeat` element with its
//! time-of-day, frequency, period, duration and count fields.
//!
//! Responsibilities:
//! - Define strict wire models for serialisation/deserialisation
//! - Define the `UnitsOfTime` code set with wire-code conversion helpers
//! - Provide parse helpers surfacing the failing field path
//!
//! Notes:
//! - All repeat fields are independently optional; field presence alone
//!   decides which sub-mappings fire downstream.
//! - `#[serde(deny_unknown_fields)]` keeps deserialisation strict, so inputs
//!   carrying unmodelled FHIR elements are rejected instead of silently
//!   truncated.

use crate::{FhirResult, parse_strict};
use serde::{Deserialize, Serialize};
use std::fmt;

/// FHIR `Timing.repeat.periodUnit` / `durationUnit` code set (UCUM codes).
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum UnitsOfTime {
    /// Second (`s`).
    #[serde(rename = "s")]
    Second,
    /// Minute (`min`).
    #[serde(rename = "min")]
    Minute,
    /// Hour (`h`).
    #[serde(rename = "h")]
    Hour,
    /// Day (`d`).
    #[serde(rename = "d")]
    Day,
    /// Week (`wk`).
    #[serde(rename = "wk")]
    Week,
    /// Month (`mo`).
    #[serde(rename = "mo")]
    Month,
    /// Year (`a`).
    #[serde(rename = "a")]
    Year,
}

impl UnitsOfTime {
    /// Convert to FHIR wire format code.
    pub fn code(self) -> &'static str {
        match self {
            UnitsOfTime::Second => "s",
            UnitsOfTime::Minute => "min",
            UnitsOfTime::Hour => "h",
            UnitsOfTime::Day => "d",
            UnitsOfTime::Week => "wk",
            UnitsOfTime::Month => "mo",
            UnitsOfTime::Year => "a",
        }
    }

    /// Parse from FHIR wire format code.
    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "s" => Some(UnitsOfTime::Second),
            "min" => Some(UnitsOfTime::Minute),
            "h" => Some(UnitsOfTime::Hour),
            "d" => Some(UnitsOfTime::Day),
            "wk" => Some(UnitsOfTime::Week),
            "mo" => Some(UnitsOfTime::Month),
            "a" => Some(UnitsOfTime::Year),
            _ => None,
        }
    }
}

impl fmt::Display for UnitsOfTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Wire representation of the FHIR `Timing.repeat` element.
///
/// Every field is optional; callers inspect presence per field. Values are
/// assumed already validated against the FHIR datatype constraints by the
/// upstream parser (positive integers, decimal precision and so on).
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TimingRepeat {
    /// Specific times of day (`timeOfDay`), local-time strings.
    #[serde(rename = "timeOfDay", default, skip_serializing_if = "Vec::is_empty")]
    pub time_of_day: Vec<String>,

    /// Number of repetitions per period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<u32>,

    /// Upper bound of the repetition count per period.
    #[serde(rename = "frequencyMax", skip_serializing_if = "Option::is_none")]
    pub frequency_max: Option<u32>,

    /// Duration of one period over which repetitions occur.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<f64>,

    /// Upper bound of the period.
    #[serde(rename = "periodMax", skip_serializing_if = "Option::is_none")]
    pub period_max: Option<f64>,

    /// Unit of `period` / `periodMax`.
    #[serde(rename = "periodUnit", skip_serializing_if = "Option::is_none")]
    pub period_unit: Option<UnitsOfTime>,

    /// How long the administration lasts per occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// Upper bound of the administration duration.
    #[serde(rename = "durationMax", skip_serializing_if = "Option::is_none")]
    pub duration_max: Option<f64>,

    /// Unit of `duration` / `durationMax`.
    #[serde(rename = "durationUnit", skip_serializing_if = "Option::is_none")]
    pub duration_unit: Option<UnitsOfTime>,

    /// Total number of times the event occurs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl TimingRepeat {
    /// Parse a `Timing.repeat` element from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FhirError::Translation`] if the JSON does not match
    /// the wire schema, including unknown keys and wrong field types.
    pub fn parse(json_text: &str) -> FhirResult<Self> {
        parse_strict(json_text, "Timing.repeat")
    }
}

/// Wire representation of the FHIR `Timing` datatype (repeat element only).
///
/// The `event` and `code` elements of the full datatype are not consumed by
/// any mapping function and are not modelled.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Timing {
    /// Recurrence details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<TimingRepeat>,
}

impl Timing {
    /// Parse a `Timing` datatype from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FhirError::Translation`] if the JSON does not match
    /// the wire schema.
    pub fn parse(json_text: &str) -> FhirResult<Self> {
        parse_strict(json_text, "Timing")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FhirError;

    #[test]
    fn parses_full_repeat() {
        let input = r#"{
            "timeOfDay": ["08:00:00", "20:00:00"],
            "frequency": 2,
            "frequencyMax": 4,
            "period": 1,
            "periodUnit": "d",
            "duration": 30,
            "durationUnit": "min",
            "count": 10
        }"#;

        let repeat = TimingRepeat::parse(input).expect("parse repeat");
        assert_eq!(repeat.time_of_day, vec!["08:00:00", "20:00:00"]);
        assert_eq!(repeat.frequency, Some(2));
        assert_eq!(repeat.frequency_max, Some(4));
        assert_eq!(repeat.period, Some(1.0));
        assert_eq!(repeat.period_unit, Some(UnitsOfTime::Day));
        assert_eq!(repeat.duration, Some(30.0));
        assert_eq!(repeat.duration_unit, Some(UnitsOfTime::Minute));
        assert_eq!(repeat.count, Some(10));
    }

    #[test]
    fn parses_timing_without_repeat() {
        let timing = Timing::parse("{}").expect("parse empty timing");
        assert!(timing.repeat.is_none());
    }

    #[test]
    fn rejects_unknown_keys() {
        let input = r#"{"frequency": 2, "unexpected_key": true}"#;

        let err = TimingRepeat::parse(input).expect_err("should reject unknown key");
        match err {
            FhirError::Translation(msg) => assert!(msg.contains("unexpected_key")),
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_period_unit_code() {
        let input = r#"{"period": 1, "periodUnit": "fortnight"}"#;

        let err = TimingRepeat::parse(input).expect_err("should reject unknown unit code");
        match err {
            FhirError::Translation(msg) => assert!(msg.contains("periodUnit")),
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn units_of_time_round_trip_wire_codes() {
        for unit in [
            UnitsOfTime::Second,
            UnitsOfTime::Minute,
            UnitsOfTime::Hour,
            UnitsOfTime::Day,
            UnitsOfTime::Week,
            UnitsOfTime::Month,
            UnitsOfTime::Year,
        ] {
            assert_eq!(UnitsOfTime::from_code(unit.code()), Some(unit));
        }
        assert_eq!(UnitsOfTime::from_code("ms"), None);
    }
}
