//! # Mapper Core
//!
//! Mapping engine converting FHIR dosage/timing structures into openEHR
//! flat-composition entries.
//!
//! This crate contains pure conversion logic:
//! - Mapping-code dispatch over a closed set of mapping functions
//! - The four mapping functions (timing cluster, administration duration,
//!   administration rate, dose range)
//! - Time-unit conversion and ratio validation supporting them
//!
//! Wire models live in the `fhir` crate; the flat composition sink and
//! `DV_TIME` handling live in the `openehr` crate. Every component here is
//! stateless: a mapping invocation is a pure computation whose writes are
//! committed to the caller-owned sink only on success, so converters can be
//! shared freely across concurrent callers.
//!
//! **No host concerns**: plugin registration, logging subscribers and
//! construction of the FHIR source objects belong to the embedding
//! application.

pub mod batch;
pub mod error;
pub mod mapping;
pub mod ratio;
pub mod unit;

pub use batch::WriteBatch;
pub use error::{MapError, MapResult};
pub use mapping::{MappingCode, SourceValue};

use openehr::FlatComposition;
use serde_json::Value;

/// FHIR ⇄ openEHR format conversion entry points.
///
/// This is a zero-sized type used for namespacing the dispatch operations.
/// All methods are associated functions.
pub struct FormatMapper;

impl FormatMapper {
    /// Applies one FHIR → openEHR mapping function.
    ///
    /// Dispatches `mapping_code` to the corresponding mapping function,
    /// hands it the source `value` and commits the computed writes to
    /// `flat` when the function succeeds.
    ///
    /// Returns `true` iff the mapping succeeded and its writes were
    /// committed. `false` means "this path was not populated": unknown
    /// mapping codes, source shape mismatches and all per-function failure
    /// rules land here after a warning, and the sink is left untouched.
    pub fn fhir_to_openehr(
        mapping_code: &str,
        openehr_path: &str,
        value: &SourceValue,
        openehr_type: &str,
        flat: &mut FlatComposition,
    ) -> bool {
        tracing::debug!(
            mapping_code,
            openehr_path,
            openehr_type,
            value_kind = value.kind(),
            "applying FHIR to openEHR mapping"
        );

        let Some(code) = MappingCode::from_wire(mapping_code) else {
            tracing::warn!(mapping_code, "unknown mapping code");
            return false;
        };

        let outcome = match code {
            MappingCode::TimingToDailyNonDaily => mapping::timing::map(openehr_path, value),
            MappingCode::DosageDurationToAdministrationDuration => {
                mapping::duration::map(openehr_path, value)
            }
            MappingCode::RatioToDvQuantity => mapping::ratio::map(openehr_path, value),
            MappingCode::DosageQuantityToRange => mapping::dose::map(openehr_path, value),
        };

        match outcome {
            Ok(batch) => {
                tracing::debug!(
                    mapping_code,
                    openehr_path,
                    writes = batch.len(),
                    "mapping succeeded"
                );
                batch.commit(flat);
                true
            }
            Err(err) => {
                tracing::warn!(mapping_code, openehr_path, %err, "mapping failed");
                false
            }
        }
    }

    /// Reverse (openEHR → FHIR) mapping.
    ///
    /// Not implemented; always yields no value. The signature is kept at
    /// the boundary so hosts can wire both directions, but callers must not
    /// rely on it producing anything.
    pub fn openehr_to_fhir(
        mapping_code: &str,
        openehr_path: &str,
        _flat: &FlatComposition,
        _fhir_path: &str,
    ) -> Option<Value> {
        tracing::debug!(
            mapping_code,
            openehr_path,
            "openEHR to FHIR mapping is currently disabled"
        );
        None
    }
}
