//! FHIR `Timing` → openEHR daily/non-daily timing cluster.
//!
//! Maps the sub-fields of `Timing.repeat` independently: specific time of
//! day, frequency (single value or range), administration interval (single
//! value or range) and sequence count. A sub-field whose unit is missing or
//! unsupported, or whose time literal fails validation, is skipped with a
//! warning; the call as a whole succeeds when at least one sub-field mapped.

use crate::batch::WriteBatch;
use crate::error::{MapError, MapResult};
use crate::mapping::SourceValue;
use crate::unit;
use fhir::TimingRepeat;

pub(crate) fn map(openehr_path: &str, value: &SourceValue) -> MapResult<WriteBatch> {
    let SourceValue::Timing(timing) = value else {
        return Err(MapError::TypeMismatch {
            expected: "Timing",
            got: value.kind(),
        });
    };

    // Nothing to map without a repeat element.
    let Some(repeat) = timing.repeat.as_ref() else {
        return Err(MapError::NothingMapped);
    };

    let mut batch = WriteBatch::new();

    map_time_of_day(openehr_path, repeat, &mut batch);
    map_frequency(openehr_path, repeat, &mut batch);
    map_interval(openehr_path, repeat, &mut batch);
    map_count(openehr_path, repeat, &mut batch);

    if batch.is_empty() {
        Err(MapError::NothingMapped)
    } else {
        Ok(batch)
    }
}

/// Maps `timeOfDay[0]` into the `zeitpunkt` (specific time) node.
fn map_time_of_day(path: &str, repeat: &TimingRepeat, batch: &mut WriteBatch) {
    let Some(time_of_day) = repeat.time_of_day.first() else {
        return;
    };

    match openehr::dv_time::validate_and_format(time_of_day) {
        Ok(formatted) => {
            batch.push_text(format!("{path}/zeitpunkt"), formatted);
        }
        Err(err) => {
            tracing::warn!(%err, "skipping time-of-day mapping");
        }
    }
}

/// Maps `frequency`/`frequencyMax` into the `frequenz` quantity node.
fn map_frequency(path: &str, repeat: &TimingRepeat, batch: &mut WriteBatch) {
    let Some(frequency) = repeat.frequency else {
        return;
    };

    let Some(unit_symbol) = repeat.period_unit.and_then(unit::frequency_unit) else {
        tracing::warn!(
            period_unit = ?repeat.period_unit,
            "skipping frequency mapping due to missing or unsupported period unit"
        );
        return;
    };

    if let Some(frequency_max) = repeat.frequency_max {
        batch.push_integer(
            format!("{path}/frequenz/quantity_value/lower|magnitude"),
            i64::from(frequency),
        );
        batch.push_text(format!("{path}/frequenz/quantity_value/lower|unit"), unit_symbol);
        batch.push_integer(
            format!("{path}/frequenz/quantity_value/upper|magnitude"),
            i64::from(frequency_max),
        );
        batch.push_text(format!("{path}/frequenz/quantity_value/upper|unit"), unit_symbol);
    } else {
        batch.push_integer(
            format!("{path}/frequenz/quantity_value|magnitude"),
            i64::from(frequency),
        );
        batch.push_text(format!("{path}/frequenz/quantity_value|unit"), unit_symbol);
    }
}

/// Maps `period`/`periodMax` into the `intervall` duration node.
fn map_interval(path: &str, repeat: &TimingRepeat, batch: &mut WriteBatch) {
    let Some(period) = repeat.period else {
        return;
    };

    // Every unit is duration-valid, so only an absent unit skips the field.
    let Some(period_unit) = repeat.period_unit else {
        tracing::warn!("skipping interval mapping due to missing period unit");
        return;
    };

    if let Some(period_max) = repeat.period_max {
        batch.push_text(
            format!("{path}/intervall/duration_value/lower|value"),
            unit::format_duration(period, period_unit),
        );
        batch.push_text(
            format!("{path}/intervall/duration_value/upper|value"),
            unit::format_duration(period_max, period_unit),
        );
    } else {
        batch.push_text(
            format!("{path}/intervall/duration_value|value"),
            unit::format_duration(period, period_unit),
        );
    }
}

/// Maps `count` into the dose sequence node.
fn map_count(path: &str, repeat: &TimingRepeat, batch: &mut WriteBatch) {
    if let Some(count) = repeat.count {
        batch.push_integer(format!("{path}/dosierungsreihenfolge"), i64::from(count));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fhir::{Timing, UnitsOfTime};
    use serde_json::json;

    const PATH: &str = "medikamentenverordnung/dosierung";

    fn timing(repeat: TimingRepeat) -> SourceValue {
        SourceValue::Timing(Timing {
            repeat: Some(repeat),
        })
    }

    #[test]
    fn maps_count_alone() {
        let value = timing(TimingRepeat {
            count: Some(3),
            ..Default::default()
        });

        let batch = map(PATH, &value).expect("count should map");
        assert_eq!(batch.len(), 1);
        assert_eq!(
            batch.writes()[0],
            (format!("{PATH}/dosierungsreihenfolge"), json!(3))
        );
    }

    #[test]
    fn maps_time_of_day_with_normalisation() {
        let value = timing(TimingRepeat {
            time_of_day: vec!["143000".to_string()],
            ..Default::default()
        });

        let batch = map(PATH, &value).expect("time of day should map");
        assert_eq!(
            batch.writes()[0],
            (format!("{PATH}/zeitpunkt"), json!("14:30:00"))
        );
    }

    #[test]
    fn uses_only_first_time_of_day() {
        let value = timing(TimingRepeat {
            time_of_day: vec!["08:00:00".to_string(), "20:00:00".to_string()],
            ..Default::default()
        });

        let batch = map(PATH, &value).expect("time of day should map");
        assert_eq!(batch.len(), 1);
        assert_eq!(
            batch.writes()[0],
            (format!("{PATH}/zeitpunkt"), json!("08:00:00"))
        );
    }

    #[test]
    fn maps_single_frequency_with_unit() {
        let value = timing(TimingRepeat {
            frequency: Some(3),
            period_unit: Some(UnitsOfTime::Day),
            ..Default::default()
        });

        let batch = map(PATH, &value).expect("frequency should map");
        assert_eq!(
            batch.writes(),
            &[
                (format!("{PATH}/frequenz/quantity_value|magnitude"), json!(3)),
                (format!("{PATH}/frequenz/quantity_value|unit"), json!("1/d")),
            ]
        );
    }

    #[test]
    fn maps_frequency_range() {
        let value = timing(TimingRepeat {
            frequency: Some(2),
            frequency_max: Some(4),
            period_unit: Some(UnitsOfTime::Hour),
            ..Default::default()
        });

        let batch = map(PATH, &value).expect("frequency range should map");
        assert_eq!(
            batch.writes(),
            &[
                (
                    format!("{PATH}/frequenz/quantity_value/lower|magnitude"),
                    json!(2)
                ),
                (
                    format!("{PATH}/frequenz/quantity_value/lower|unit"),
                    json!("1/h")
                ),
                (
                    format!("{PATH}/frequenz/quantity_value/upper|magnitude"),
                    json!(4)
                ),
                (
                    format!("{PATH}/frequenz/quantity_value/upper|unit"),
                    json!("1/h")
                ),
            ]
        );
    }

    #[test]
    fn skips_frequency_with_unsupported_period_unit() {
        // Week is outside the frequency constraint; count still maps.
        let value = timing(TimingRepeat {
            frequency: Some(2),
            period_unit: Some(UnitsOfTime::Week),
            count: Some(1),
            ..Default::default()
        });

        let batch = map(PATH, &value).expect("count keeps the call successful");
        assert_eq!(batch.len(), 1);
        assert_eq!(
            batch.writes()[0],
            (format!("{PATH}/dosierungsreihenfolge"), json!(1))
        );
    }

    #[test]
    fn maps_interval_single_value() {
        let value = timing(TimingRepeat {
            period: Some(6.0),
            period_unit: Some(UnitsOfTime::Hour),
            ..Default::default()
        });

        let batch = map(PATH, &value).expect("interval should map");
        assert_eq!(
            batch.writes(),
            &[(
                format!("{PATH}/intervall/duration_value|value"),
                json!("PT6H")
            )]
        );
    }

    #[test]
    fn maps_interval_range() {
        let value = timing(TimingRepeat {
            period: Some(1.0),
            period_max: Some(2.0),
            period_unit: Some(UnitsOfTime::Week),
            ..Default::default()
        });

        let batch = map(PATH, &value).expect("interval range should map");
        assert_eq!(
            batch.writes(),
            &[
                (
                    format!("{PATH}/intervall/duration_value/lower|value"),
                    json!("P1W")
                ),
                (
                    format!("{PATH}/intervall/duration_value/upper|value"),
                    json!("P2W")
                ),
            ]
        );
    }

    #[test]
    fn interval_allows_units_frequency_rejects() {
        // Week is fine for the interval even though the frequency constraint
        // rejects it.
        let value = timing(TimingRepeat {
            frequency: Some(1),
            period: Some(2.0),
            period_unit: Some(UnitsOfTime::Week),
            ..Default::default()
        });

        let batch = map(PATH, &value).expect("interval should map");
        assert_eq!(
            batch.writes(),
            &[(
                format!("{PATH}/intervall/duration_value|value"),
                json!("P2W")
            )]
        );
    }

    #[test]
    fn invalid_time_of_day_alone_fails_the_call() {
        let value = timing(TimingRepeat {
            time_of_day: vec!["25:00".to_string()],
            ..Default::default()
        });

        let err = map(PATH, &value).expect_err("nothing mappable remains");
        assert!(matches!(err, MapError::NothingMapped));
    }

    #[test]
    fn empty_repeat_reports_nothing_mapped() {
        let value = timing(TimingRepeat::default());
        let err = map(PATH, &value).expect_err("nothing to map");
        assert!(matches!(err, MapError::NothingMapped));
    }

    #[test]
    fn missing_repeat_reports_nothing_mapped() {
        let value = SourceValue::Timing(Timing { repeat: None });
        let err = map(PATH, &value).expect_err("nothing to map");
        assert!(matches!(err, MapError::NothingMapped));
    }

    #[test]
    fn rejects_other_source_shapes() {
        let value = SourceValue::Ratio(fhir::Ratio::default());
        let err = map(PATH, &value).expect_err("should reject ratio input");
        assert!(matches!(
            err,
            MapError::TypeMismatch {
                expected: "Timing",
                ..
            }
        ));
    }
}
