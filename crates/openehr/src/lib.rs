//! openEHR flat-composition boundary support.
//!
//! This crate is responsible for the openEHR-facing side of the FHIR →
//! openEHR mapping engine: the flat (path-keyed) composition sink that
//! accumulates mapping output, and validation/normalisation of openEHR
//! data-value literals.
//!
//! Mapping semantics live in `mapper-core`. This crate handles value
//! formats and standards alignment only.

pub mod dv_time;
pub mod flat;

pub use flat::FlatComposition;

use thiserror::Error;

/// Errors returned by the `openehr` boundary crate.
#[derive(Debug, Error)]
pub enum OpenehrError {
    #[error("time value '{0}' does not conform to the DV_TIME ISO 8601 format")]
    InvalidTime(String),
}
