//! FHIR wire/boundary support for the dosage mapping engine.
//!
//! This crate provides **wire models** for the FHIR R4 dosage and timing
//! shapes that feed the FHIR → openEHR mapping functions:
//! - `Timing` / `TimingRepeat` recurrence descriptions
//! - `Quantity`, `Ratio`, `Range` and `Dosage.doseAndRate` value shapes
//!
//! This crate focuses on:
//! - FHIR semantic alignment (without FHIR REST transport)
//! - strict serialisation/deserialisation of the modelled subset
//! - small accessors the mapping engine needs (unit text fallback, wire codes)
//!
//! Resources arrive as FHIR JSON; parse helpers use `serde_path_to_error` to
//! surface a best-effort path to the failing field.

pub mod quantity;
pub mod timing;

// Re-export public wire models
pub use quantity::{DoseAndRate, Quantity, Range, Ratio};
pub use timing::{Timing, TimingRepeat, UnitsOfTime};

/// Errors returned by the `fhir` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum FhirError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with a [`FhirError`].
pub type FhirResult<T> = Result<T, FhirError>;

/// Parse JSON text into a wire model, reporting the path to any failing field.
pub(crate) fn parse_strict<T>(json_text: &str, what: &str) -> FhirResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let mut deserializer = serde_json::Deserializer::from_str(json_text);

    match serde_path_to_error::deserialize(&mut deserializer) {
        Ok(parsed) => Ok(parsed),
        Err(err) => {
            let path = err.path().to_string();
            let source = err.into_inner();
            let path = if path.is_empty() {
                "<root>"
            } else {
                path.as_str()
            };
            Err(FhirError::Translation(format!(
                "{what} schema mismatch at {path}: {source}"
            )))
        }
    }
}
