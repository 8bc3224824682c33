//! Per-side validation of FHIR ratios.
//!
//! A ratio side is usable for mapping only when it carries a numeric value;
//! its unit text falls back to the coded form and defaults to empty when
//! neither is present. Each side is validated independently so the mapping
//! functions can apply their own per-side requirements.

use fhir::{Quantity, Ratio};

/// One usable side of a ratio: magnitude plus unit text.
#[derive(Clone, Debug, PartialEq)]
pub struct RatioSide {
    pub value: f64,
    pub unit: String,
}

/// Per-side extraction outcome for a FHIR ratio.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RatioParts {
    /// Present iff the numerator carries a numeric value.
    pub numerator: Option<RatioSide>,
    /// Present iff the denominator carries a numeric value.
    pub denominator: Option<RatioSide>,
}

impl RatioParts {
    /// Extracts whichever sides of `ratio` are usable.
    pub fn of(ratio: &Ratio) -> Self {
        Self {
            numerator: side(ratio.numerator.as_ref()),
            denominator: side(ratio.denominator.as_ref()),
        }
    }
}

fn side(quantity: Option<&Quantity>) -> Option<RatioSide> {
    let quantity = quantity?;
    let value = quantity.value?;
    Some(RatioSide {
        value,
        unit: quantity.unit_text().unwrap_or_default().to_string(),
    })
}
