//! `DV_TIME` literal validation and normalisation.
//!
//! openEHR `DV_TIME` carries an ISO 8601 local-time literal. The canonical
//! form accepted downstream is the extended form; this module validates an
//! incoming time string and rewrites the permitted alternative forms into
//! extended form:
//!
//! - Extended (returned verbatim): `hh:mm:ss[(,|.)fff][Z|±hh[:mm]]`
//! - Compact (re-assembled):       `hhmmss[(,|.)fff][Z|±hh[mm]]`
//! - Shorthand `hh:mm` → `hh:mm:00`, `hh` → `hh:00:00`
//!
//! Hours are bounded to 00–23 and minutes/seconds to 00–59. Anything else
//! is rejected; there is no partial repair beyond the forms listed above.

use crate::OpenehrError;

/// Validates a local-time string and normalises it to extended ISO 8601 form.
///
/// # Errors
///
/// Returns [`OpenehrError::InvalidTime`] if the string matches none of the
/// accepted forms or any component is out of range.
pub fn validate_and_format(time: &str) -> Result<String, OpenehrError> {
    // All accepted forms are pure ASCII; byte-positional parsing below
    // relies on that.
    if time.is_empty() || !time.is_ascii() {
        return Err(OpenehrError::InvalidTime(time.to_string()));
    }

    if is_extended(time) {
        return Ok(time.to_string());
    }

    if let Some(extended) = compact_to_extended(time) {
        return Ok(extended);
    }

    let bytes = time.as_bytes();

    // Shorthand hh:mm
    if bytes.len() == 5
        && bytes[2] == b':'
        && hour(&bytes[0..2]).is_some()
        && sexagesimal(&bytes[3..5]).is_some()
    {
        return Ok(format!("{time}:00"));
    }

    // Shorthand hh
    if bytes.len() == 2 && hour(bytes).is_some() {
        return Ok(format!("{time}:00:00"));
    }

    Err(OpenehrError::InvalidTime(time.to_string()))
}

/// Two ASCII digits interpreted as an hour (00–23).
fn hour(bytes: &[u8]) -> Option<u8> {
    let value = two_digits(bytes)?;
    (value <= 23).then_some(value)
}

/// Two ASCII digits interpreted as a minute or second (00–59).
fn sexagesimal(bytes: &[u8]) -> Option<u8> {
    let value = two_digits(bytes)?;
    (value <= 59).then_some(value)
}

fn two_digits(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 || !bytes[0].is_ascii_digit() || !bytes[1].is_ascii_digit() {
        return None;
    }
    Some((bytes[0] - b'0') * 10 + (bytes[1] - b'0'))
}

/// Checks for the extended form `hh:mm:ss[(,|.)fff][Z|±hh[:mm]]`.
///
/// The timezone minute may appear with or without a separating colon, as in
/// `+01:30` or `+0130`.
fn is_extended(time: &str) -> bool {
    let bytes = time.as_bytes();
    if bytes.len() < 8 {
        return false;
    }
    if hour(&bytes[0..2]).is_none()
        || bytes[2] != b':'
        || sexagesimal(&bytes[3..5]).is_none()
        || bytes[5] != b':'
        || sexagesimal(&bytes[6..8]).is_none()
    {
        return false;
    }

    let mut i = 8;

    // Optional fraction: marker plus at least one digit.
    if i < bytes.len() && (bytes[i] == b',' || bytes[i] == b'.') {
        i += 1;
        let digits_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == digits_start {
            return false;
        }
    }

    if i == bytes.len() {
        return true;
    }

    // Optional timezone.
    match bytes[i] {
        b'Z' => i + 1 == bytes.len(),
        b'+' | b'-' => {
            i += 1;
            if bytes.len() < i + 2 || hour(&bytes[i..i + 2]).is_none() {
                return false;
            }
            i += 2;
            if i == bytes.len() {
                return true;
            }
            if bytes[i] == b':' {
                i += 1;
            }
            bytes.len() == i + 2 && sexagesimal(&bytes[i..i + 2]).is_some()
        }
        _ => false,
    }
}

/// Re-assembles the compact form `hhmmss[(,|.)fff][Z|±hh[mm]]` into extended
/// form, or returns `None` if the string is not valid compact form.
fn compact_to_extended(time: &str) -> Option<String> {
    let bytes = time.as_bytes();
    if bytes.len() < 6 {
        return None;
    }
    hour(&bytes[0..2])?;
    sexagesimal(&bytes[2..4])?;
    sexagesimal(&bytes[4..6])?;

    let mut extended = format!("{}:{}:{}", &time[0..2], &time[2..4], &time[4..6]);
    let mut i = 6;

    // Fraction: consume digits up to a timezone marker or end of string. Any
    // other non-digit inside the fraction is invalid.
    if i < bytes.len() && (bytes[i] == b',' || bytes[i] == b'.') {
        let fraction_start = i;
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == fraction_start + 1 {
            return None;
        }
        extended.push_str(&time[fraction_start..i]);
    }

    if i == bytes.len() {
        return Some(extended);
    }

    match bytes[i] {
        b'Z' if i + 1 == bytes.len() => {
            extended.push('Z');
            Some(extended)
        }
        b'+' | b'-' => {
            extended.push(bytes[i] as char);
            i += 1;
            if bytes.len() < i + 2 || hour(&bytes[i..i + 2]).is_none() {
                return None;
            }
            extended.push_str(&time[i..i + 2]);
            i += 2;
            if i == bytes.len() {
                return Some(extended);
            }
            // Compact timezone minutes carry no colon; insert one.
            if bytes.len() != i + 2 || sexagesimal(&bytes[i..i + 2]).is_none() {
                return None;
            }
            extended.push(':');
            extended.push_str(&time[i..i + 2]);
            Some(extended)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_extended_form_verbatim() {
        for input in [
            "23:59:59",
            "00:00:00",
            "12:30:45.123",
            "12:30:45,5",
            "12:30:45Z",
            "12:30:45+01:30",
            "12:30:45+0130",
            "12:30:45-23",
            "12:30:45.999Z",
        ] {
            let formatted = validate_and_format(input).expect("valid extended time");
            assert_eq!(formatted, input);
        }
    }

    #[test]
    fn is_idempotent_on_valid_input() {
        for input in ["235959+0130", "14:30", "14", "12:30:45.123Z"] {
            let once = validate_and_format(input).expect("valid time");
            let twice = validate_and_format(&once).expect("still valid");
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn converts_compact_to_extended() {
        assert_eq!(validate_and_format("235959").expect("valid"), "23:59:59");
        assert_eq!(validate_and_format("235959Z").expect("valid"), "23:59:59Z");
        assert_eq!(
            validate_and_format("235959+0130").expect("valid"),
            "23:59:59+01:30"
        );
        assert_eq!(
            validate_and_format("120000-05").expect("valid"),
            "12:00:00-05"
        );
        assert_eq!(
            validate_and_format("120000.25Z").expect("valid"),
            "12:00:00.25Z"
        );
        assert_eq!(
            validate_and_format("120000,5+0200").expect("valid"),
            "12:00:00,5+02:00"
        );
    }

    #[test]
    fn expands_shorthand_forms() {
        assert_eq!(validate_and_format("14:30").expect("valid"), "14:30:00");
        assert_eq!(validate_and_format("14").expect("valid"), "14:00:00");
    }

    #[test]
    fn rejects_out_of_range_components() {
        for input in ["24:00:00", "12:60:00", "12:00:60", "240000", "236000"] {
            let err = validate_and_format(input).expect_err("should reject out of range");
            assert!(matches!(err, OpenehrError::InvalidTime(_)));
        }
    }

    #[test]
    fn rejects_unvalidatable_strings() {
        for input in [
            "",
            "noon",
            "1430",
            "14:3",
            "12:30:45x",
            "123045.12x3",
            "123045.",
            "123045+1",
            "12:30:45+24",
            "１２:００:００",
        ] {
            let err = validate_and_format(input).expect_err("should reject invalid time");
            assert!(matches!(err, OpenehrError::InvalidTime(_)));
        }
    }
}
