//! Mapping-function dispatch.
//!
//! Each supported mapping function is identified on the wire by a mapping
//! code string carried in the template definition. The codes form a closed
//! set: unknown codes fail closed at [`MappingCode::from_wire`] and never
//! reach a mapping function.

pub mod dose;
pub mod duration;
pub mod ratio;
pub mod timing;

use fhir::{DoseAndRate, Quantity, Range, Ratio, Timing, TimingRepeat};

/// Closed set of supported mapping functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MappingCode {
    /// FHIR `Timing` → openEHR daily/non-daily timing cluster.
    TimingToDailyNonDaily,
    /// FHIR dosage duration → openEHR administration duration.
    DosageDurationToAdministrationDuration,
    /// FHIR `Ratio` → openEHR `DV_QUANTITY` administration rate.
    RatioToDvQuantity,
    /// FHIR dose range/quantity → openEHR range.
    DosageQuantityToRange,
}

impl MappingCode {
    /// Convert to the wire-format mapping code.
    pub fn to_wire(self) -> &'static str {
        match self {
            MappingCode::TimingToDailyNonDaily => "timingToDaily_NonDaily",
            MappingCode::DosageDurationToAdministrationDuration => {
                "dosageDurationToAdministrationDuration"
            }
            MappingCode::RatioToDvQuantity => "ratio_to_dv_quantity",
            MappingCode::DosageQuantityToRange => "dosageQuantityToRange",
        }
    }

    /// Parse from the wire-format mapping code.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "timingToDaily_NonDaily" => Some(MappingCode::TimingToDailyNonDaily),
            "dosageDurationToAdministrationDuration" => {
                Some(MappingCode::DosageDurationToAdministrationDuration)
            }
            "ratio_to_dv_quantity" => Some(MappingCode::RatioToDvQuantity),
            "dosageQuantityToRange" => Some(MappingCode::DosageQuantityToRange),
            _ => None,
        }
    }
}

/// Polymorphic source value handed to a mapping function.
///
/// Each mapping function pattern-matches the variants it accepts and reports
/// a type mismatch for any other shape.
#[derive(Clone, Debug, PartialEq)]
pub enum SourceValue {
    Timing(Timing),
    TimingRepeat(TimingRepeat),
    Ratio(Ratio),
    DoseAndRate(DoseAndRate),
    Range(Range),
    Quantity(Quantity),
}

impl SourceValue {
    /// Shape name used in type-mismatch diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            SourceValue::Timing(_) => "Timing",
            SourceValue::TimingRepeat(_) => "TimingRepeat",
            SourceValue::Ratio(_) => "Ratio",
            SourceValue::DoseAndRate(_) => "DoseAndRate",
            SourceValue::Range(_) => "Range",
            SourceValue::Quantity(_) => "Quantity",
        }
    }
}
