use thiserror::Error;

use crate::Temperature;

/// Longest accepted station name, in UTF-8 bytes.
pub const MAX_STATION_LEN: usize = 100;

const DELIMITER: char = ';';

/// Why a line was dropped. Displays as `<reason>: <offending text>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("invalid record format: {line}")]
    InvalidFormat { line: String },
    #[error("invalid station name: {station}")]
    InvalidStation { station: String },
    #[error("invalid temperature value: {text}")]
    InvalidTemperature { text: String },
    #[error("temperature out of range or invalid format: {text}")]
    OutOfRange { text: String },
}

impl Rejection {
    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::InvalidFormat { .. } => "invalid record format",
            Rejection::InvalidStation { .. } => "invalid station name",
            Rejection::InvalidTemperature { .. } => "invalid temperature value",
            Rejection::OutOfRange { .. } => "temperature out of range or invalid format",
        }
    }

    /// The diagnostic line reported for a rejected input line.
    pub fn diagnostic(&self, line_number: usize) -> String {
        format!("Error parsing line {line_number}: {self}")
    }
}

/// Splits and validates a `station;temperature` line.
///
/// The station borrows from `line`. Checks run in order: one delimiter,
/// station length, numeric temperature, then one fractional digit and range.
pub fn parse_record(line: &str) -> Result<(&str, Temperature), Rejection> {
    let mut fields = line.split(DELIMITER);
    let (Some(station), Some(text), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(Rejection::InvalidFormat {
            line: line.to_owned(),
        });
    };

    if station.is_empty() || station.len() > MAX_STATION_LEN {
        return Err(Rejection::InvalidStation {
            station: station.to_owned(),
        });
    }

    let value: f64 = text.parse().map_err(|_| Rejection::InvalidTemperature {
        text: text.to_owned(),
    })?;

    let temperature = checked_temperature(text, value).ok_or_else(|| Rejection::OutOfRange {
        text: text.to_owned(),
    })?;
    Ok((station, temperature))
}

fn checked_temperature(text: &str, value: f64) -> Option<Temperature> {
    let (_, fraction) = text.split_once('.')?;
    if fraction.len() != 1 || !fraction.as_bytes()[0].is_ascii_digit() {
        return None;
    }
    // NaN fails both comparisons
    if !(-99.9..=99.9).contains(&value) {
        return None;
    }
    Some(Temperature::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepted(line: &str) -> (&str, f64) {
        let (station, temperature) = parse_record(line).unwrap();
        (station, temperature.value())
    }

    #[test]
    fn parses_valid_lines() {
        assert_eq!(accepted("Hamburg;12.0"), ("Hamburg", 12.0));
        assert_eq!(accepted("Bulawayo;8.9"), ("Bulawayo", 8.9));
        assert_eq!(accepted("Palembang;-38.8"), ("Palembang", -38.8));
        assert_eq!(accepted("St. John's;+15.2"), ("St. John's", 15.2));
        assert_eq!(accepted("Cracow;.5"), ("Cracow", 0.5));
        let (_, zero) = parse_record("Abéché;-0.0").unwrap();
        assert!(zero.value() == 0.0 && zero.value().is_sign_negative());
    }

    #[test]
    fn accepts_range_bounds() {
        assert_eq!(accepted("A;99.9"), ("A", 99.9));
        assert_eq!(accepted("A;-99.9"), ("A", -99.9));
    }

    #[test]
    fn station_is_kept_verbatim() {
        assert_eq!(accepted(" Da Lat ;2.0"), (" Da Lat ", 2.0));
    }

    #[test]
    fn rejects_wrong_delimiter_count() {
        for line in ["", "A", "A 10.0", "A;1.0;2.0", "A;;1.0"] {
            assert_eq!(
                parse_record(line),
                Err(Rejection::InvalidFormat {
                    line: line.to_owned()
                }),
                "{line:?}"
            );
        }
    }

    #[test]
    fn rejects_bad_station_names() {
        assert_eq!(
            parse_record(";5.0"),
            Err(Rejection::InvalidStation {
                station: String::new()
            })
        );

        let at_limit = "x".repeat(MAX_STATION_LEN);
        assert!(parse_record(&format!("{at_limit};1.0")).is_ok());

        let too_long = "x".repeat(MAX_STATION_LEN + 1);
        assert_eq!(
            parse_record(&format!("{too_long};1.0")),
            Err(Rejection::InvalidStation { station: too_long })
        );
    }

    #[test]
    fn station_limit_counts_bytes() {
        // 50 two-byte characters fit, 51 do not
        let fits = "é".repeat(50);
        assert!(parse_record(&format!("{fits};1.0")).is_ok());
        let over = "é".repeat(51);
        assert!(matches!(
            parse_record(&format!("{over};1.0")),
            Err(Rejection::InvalidStation { .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_temperature() {
        for text in ["abc", "", "1.2.3", " 1.0", "1,5", "-"] {
            assert_eq!(
                parse_record(&format!("A;{text}")),
                Err(Rejection::InvalidTemperature {
                    text: text.to_owned()
                }),
                "{text:?}"
            );
        }
    }

    #[test]
    fn rejects_bad_format_or_range() {
        for text in [
            "150.0", "-100.0", "100.0", "23", "5.", "1.25", "1.5e1", "1e1", "inf", "NaN", "99.95",
        ] {
            assert_eq!(
                parse_record(&format!("A;{text}")),
                Err(Rejection::OutOfRange {
                    text: text.to_owned()
                }),
                "{text:?}"
            );
        }
    }

    #[test]
    fn diagnostic_message() {
        let rejection = parse_record("A;abc").unwrap_err();
        assert_eq!(rejection.reason(), "invalid temperature value");
        assert_eq!(
            rejection.diagnostic(7),
            "Error parsing line 7: invalid temperature value: abc"
        );

        let rejection = parse_record("A;150.0").unwrap_err();
        assert_eq!(
            rejection.diagnostic(2),
            "Error parsing line 2: temperature out of range or invalid format: 150.0"
        );
    }
}
