//! FHIR-aligned quantity, ratio, range and dose-and-rate wire models.
//!
//! These are the value shapes the dose and rate mapping functions consume.
//! Each mirrors its FHIR R4 datatype with only the elements the mapping
//! engine reads; deserialisation stays strict so unmodelled elements are
//! surfaced rather than dropped.

use crate::{FhirResult, parse_strict};
use serde::{Deserialize, Serialize};

/// Wire representation of the FHIR `Quantity` datatype.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Quantity {
    /// Numeric magnitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Human-readable unit text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Unit system URI (for example UCUM).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Coded unit form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Quantity {
    /// Parse a `Quantity` datatype from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FhirError::Translation`] if the JSON does not match
    /// the wire schema.
    pub fn parse(json_text: &str) -> FhirResult<Self> {
        parse_strict(json_text, "Quantity")
    }

    /// Unit text, falling back to the coded form when no text is present.
    pub fn unit_text(&self) -> Option<&str> {
        self.unit.as_deref().or(self.code.as_deref())
    }
}

/// Wire representation of the FHIR `Ratio` datatype.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Ratio {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numerator: Option<Quantity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub denominator: Option<Quantity>,
}

impl Ratio {
    /// Parse a `Ratio` datatype from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FhirError::Translation`] if the JSON does not match
    /// the wire schema.
    pub fn parse(json_text: &str) -> FhirResult<Self> {
        parse_strict(json_text, "Ratio")
    }
}

/// Wire representation of the FHIR `Range` datatype.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Range {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<Quantity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Quantity>,
}

impl Range {
    /// Parse a `Range` datatype from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FhirError::Translation`] if the JSON does not match
    /// the wire schema.
    pub fn parse(json_text: &str) -> FhirResult<Self> {
        parse_strict(json_text, "Range")
    }
}

/// Wire representation of the FHIR `Dosage.doseAndRate` backbone element.
///
/// FHIR expresses the dose/rate choice through mutually exclusive `dose[x]`
/// and `rate[x]` elements; the modelled subset covers the variants the
/// mapping functions consume (`doseRange`, `doseQuantity`, `rateRatio`).
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DoseAndRate {
    #[serde(rename = "doseRange", skip_serializing_if = "Option::is_none")]
    pub dose_range: Option<Range>,

    #[serde(rename = "doseQuantity", skip_serializing_if = "Option::is_none")]
    pub dose_quantity: Option<Quantity>,

    #[serde(rename = "rateRatio", skip_serializing_if = "Option::is_none")]
    pub rate_ratio: Option<Ratio>,
}

impl DoseAndRate {
    /// Parse a `Dosage.doseAndRate` element from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FhirError::Translation`] if the JSON does not match
    /// the wire schema.
    pub fn parse(json_text: &str) -> FhirResult<Self> {
        parse_strict(json_text, "Dosage.doseAndRate")
    }
}
