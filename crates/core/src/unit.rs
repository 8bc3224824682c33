//! Time-unit conversion between FHIR and openEHR representations.
//!
//! Two independent conversions over [`UnitsOfTime`]:
//!
//! - **Frequency**: FHIR period units to the openEHR frequency unit strings
//!   the `DV_QUANTITY` frequency constraint accepts (`1/s`, `1/min`, `1/h`,
//!   `1/d`). Only sub-week units qualify.
//! - **Duration**: FHIR time units to ISO 8601 duration tokens. Every unit
//!   is a valid ISO 8601 duration unit, so duration validity reduces to a
//!   unit being present at all; sub-day units go in the time-designator part
//!   (`PT...`), day-and-above in the date-designator part (`P...`).
//!
//! The converters are pure functions shared freely across callers.

use fhir::UnitsOfTime;

/// Returns `true` for units the openEHR frequency constraint accepts.
pub fn is_frequency_unit(unit: UnitsOfTime) -> bool {
    frequency_unit(unit).is_some()
}

/// openEHR frequency unit string for a FHIR period unit.
///
/// Returns `None` for units outside the `1/s`..`1/d` constraint
/// (week, month, year).
pub fn frequency_unit(unit: UnitsOfTime) -> Option<&'static str> {
    match unit {
        UnitsOfTime::Second => Some("1/s"),
        UnitsOfTime::Minute => Some("1/min"),
        UnitsOfTime::Hour => Some("1/h"),
        UnitsOfTime::Day => Some("1/d"),
        UnitsOfTime::Week | UnitsOfTime::Month | UnitsOfTime::Year => None,
    }
}

/// ISO 8601 duration designator letter for a FHIR time unit.
///
/// Minute and month both map to `M`; the `PT`/`P` prefix produced by
/// [`format_duration`] disambiguates them.
pub fn duration_designator(unit: UnitsOfTime) -> char {
    match unit {
        UnitsOfTime::Second => 'S',
        UnitsOfTime::Minute => 'M',
        UnitsOfTime::Hour => 'H',
        UnitsOfTime::Day => 'D',
        UnitsOfTime::Week => 'W',
        UnitsOfTime::Month => 'M',
        UnitsOfTime::Year => 'Y',
    }
}

/// Formats a magnitude and time unit into an ISO 8601 duration token,
/// e.g. `PT5H` or `P3D`. The magnitude is rendered without fractional
/// digits.
pub fn format_duration(value: f64, unit: UnitsOfTime) -> String {
    let designator = duration_designator(unit);
    match unit {
        UnitsOfTime::Second | UnitsOfTime::Minute | UnitsOfTime::Hour => {
            format!("PT{value:.0}{designator}")
        }
        UnitsOfTime::Day | UnitsOfTime::Week | UnitsOfTime::Month | UnitsOfTime::Year => {
            format!("P{value:.0}{designator}")
        }
    }
}

/// Extracts the magnitude preceding a designator letter from an ISO 8601
/// duration token, e.g. `("PT3H", 'H')` yields `3`.
///
/// Returns `None` when no digit run immediately precedes the designator.
pub fn extract_numeric_value(duration: &str, designator: char) -> Option<u64> {
    let bytes = duration.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i < bytes.len() && bytes[i] as char == designator {
                return duration[start..i].parse().ok();
            }
        } else {
            i += 1;
        }
    }
    None
}
