/// Failure reasons a mapping function can report.
///
/// Mapping functions return the specific reason for diagnostics and tests;
/// the collapse to a boolean happens only at the dispatch boundary, after
/// logging.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("expected {expected} source value, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("unit '{0}' is not an allowed administration rate unit")]
    UnsupportedRateUnit(String),

    #[error("rate denominator must be non-zero")]
    ZeroDenominator,

    #[error("magnitude {0} cannot be represented in the flat composition")]
    UnrepresentableMagnitude(f64),

    #[error("no mappable fields present")]
    NothingMapped,
}

/// Type alias for Results that can fail with a [`MapError`].
pub type MapResult<T> = std::result::Result<T, MapError>;
