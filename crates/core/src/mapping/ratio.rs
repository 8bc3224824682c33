//! FHIR `Ratio` → openEHR `DV_QUANTITY` administration rate.
//!
//! Two sub-behaviours share the mapping code:
//!
//! - **Rate ratio** (a `doseAndRate` element carrying `rateRatio`): both
//!   sides must be valid; the magnitude is the numerator divided by the
//!   denominator and the compound unit is normalised and checked against
//!   the administration-rate allow-list before the quantity facets are
//!   written.
//! - **Plain ratio** (a bare `Ratio`): only the numerator is required; the
//!   value is written as a single formatted string directly at the target
//!   path. The target element takes free text, so no unit allow-list
//!   applies on this path.

use crate::batch::WriteBatch;
use crate::error::{MapError, MapResult};
use crate::mapping::SourceValue;
use crate::ratio::RatioParts;
use fhir::Ratio;

/// Administration-rate units the target quantity constraint accepts.
const RATE_UNIT_ALLOW_LIST: [&str; 4] = ["l/h", "ml/min", "ml/s", "ml/h"];

pub(crate) fn map(openehr_path: &str, value: &SourceValue) -> MapResult<WriteBatch> {
    match value {
        SourceValue::DoseAndRate(dose_and_rate) => {
            let Some(rate) = dose_and_rate.rate_ratio.as_ref() else {
                return Err(MapError::MissingField("rateRatio"));
            };
            map_rate_ratio(openehr_path, rate)
        }
        SourceValue::Ratio(ratio) => map_plain_ratio(openehr_path, ratio),
        other => Err(MapError::TypeMismatch {
            expected: "Ratio or DoseAndRate",
            got: other.kind(),
        }),
    }
}

fn map_rate_ratio(path: &str, ratio: &Ratio) -> MapResult<WriteBatch> {
    let parts = RatioParts::of(ratio);
    let Some(numerator) = parts.numerator else {
        return Err(MapError::MissingField("numerator"));
    };
    let Some(denominator) = parts.denominator else {
        return Err(MapError::MissingField("denominator"));
    };
    if denominator.value == 0.0 {
        return Err(MapError::ZeroDenominator);
    }

    let magnitude = numerator.value / denominator.value;
    let unit = normalize_rate_unit(&format!("{}/{}", numerator.unit, denominator.unit));
    if !RATE_UNIT_ALLOW_LIST.contains(&unit.as_str()) {
        return Err(MapError::UnsupportedRateUnit(unit));
    }

    let mut batch = WriteBatch::new();
    batch.push_magnitude(format!("{path}/quantity_value|magnitude"), magnitude)?;
    batch.push_text(format!("{path}/quantity_value|unit"), unit);
    Ok(batch)
}

fn map_plain_ratio(path: &str, ratio: &Ratio) -> MapResult<WriteBatch> {
    let parts = RatioParts::of(ratio);
    let Some(numerator) = parts.numerator else {
        return Err(MapError::MissingField("numerator"));
    };

    // Format as numerator/denominator, e.g. "600 mg/h"; the denominator is
    // optional here.
    let mut formatted = format!("{} {}", numerator.value, numerator.unit);
    if let Some(denominator) = parts.denominator {
        formatted.push('/');
        formatted.push_str(&denominator.unit);
    }

    let mut batch = WriteBatch::new();
    batch.push_text(path, formatted);
    Ok(batch)
}

/// Lower-cases, trims whitespace around the slash and abbreviates long unit
/// names so the allow-list check sees a canonical compound form.
fn normalize_rate_unit(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let normalized = match lowered.split_once('/') {
        Some((numerator, denominator)) => format!(
            "{}/{}",
            abbreviate(numerator.trim()),
            abbreviate(denominator.trim())
        ),
        None => abbreviate(lowered.trim()).to_string(),
    };

    // Canonicalise compound forms that survive token abbreviation.
    match normalized.as_str() {
        "ml/hour" => "ml/h".to_string(),
        "l/hour" => "l/h".to_string(),
        "ml/minute" => "ml/min".to_string(),
        "ml/second" => "ml/s".to_string(),
        _ => normalized,
    }
}

fn abbreviate(unit: &str) -> &str {
    match unit {
        "liter" => "l",
        "milliliter" => "ml",
        "hour" => "h",
        "minute" => "min",
        "second" => "s",
        other => other,
    }
}
