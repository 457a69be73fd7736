//! Free-form height parsing.
//!
//! Accepted shapes: `5'10"`, `5' 10`, `5 ft 10 in`, `5 feet`, `70 in`,
//! `70"`, `178 cm` and a bare number, which is read as centimeters.

use crate::convert::CM_PER_INCH;
use crate::error::UnitError;

/// Tallest height accepted by the parser.
const MAX_HEIGHT_CM: f64 = 300.0;

/// Unit words rewritten to their symbol, longest first so `inches`
/// is not left half-replaced by `in`.
const UNIT_WORDS: [(&str, &str); 7] = [
    ("inches", "\""),
    ("inch", "\""),
    ("in", "\""),
    ("feet", "'"),
    ("foot", "'"),
    ("ft", "'"),
    ("\u{2033}", "\""),
];

/// Parses a free-form height string into centimeters.
pub fn parse_height_cm(input: &str) -> Result<f64, UnitError> {
    let trimmed = input.trim().to_lowercase();
    if trimmed.is_empty() {
        return Err(UnitError::Empty);
    }

    let cm = if let Some(value) = trimmed.strip_suffix("cm") {
        parse_number(value, input)?
    } else {
        parse_imperial(&normalize_imperial(&trimmed), input)? * CM_PER_INCH
    };

    if cm <= 0.0 || cm > MAX_HEIGHT_CM {
        return Err(UnitError::OutOfRange {
            input: input.to_string(),
        });
    }
    Ok(cm)
}

fn normalize_imperial(value: &str) -> String {
    let mut normalized = value.replace(['\u{2032}', '\u{2019}'], "'");
    for (word, symbol) in UNIT_WORDS {
        normalized = normalized.replace(word, symbol);
    }
    normalized.retain(|c| !c.is_whitespace());
    normalized
}

/// Returns total inches. A bare number without any unit is centimeters.
fn parse_imperial(value: &str, original: &str) -> Result<f64, UnitError> {
    if let Some((feet, rest)) = value.split_once('\'') {
        let feet = parse_number(feet, original)?;
        let rest = rest.trim_end_matches('"');
        let inches = if rest.is_empty() {
            0.0
        } else {
            parse_number(rest, original)?
        };
        if inches >= 12.0 {
            return Err(UnitError::OutOfRange {
                input: original.to_string(),
            });
        }
        return Ok(feet * 12.0 + inches);
    }

    if let Some(inches) = value.strip_suffix('"') {
        return parse_number(inches, original);
    }

    Ok(parse_number(value, original)? / CM_PER_INCH)
}

fn parse_number(value: &str, original: &str) -> Result<f64, UnitError> {
    let value = value.trim();
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() && number >= 0.0 => Ok(number),
        Ok(_) => Err(UnitError::OutOfRange {
            input: original.to_string(),
        }),
        Err(_) => Err(UnitError::Unparseable {
            input: original.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn parses_feet_and_inches() {
        assert!(close(parse_height_cm("5'10\"").unwrap(), 70.0 * 2.54));
        assert!(close(parse_height_cm("5' 10").unwrap(), 70.0 * 2.54));
        assert!(close(parse_height_cm("5 ft 10 in").unwrap(), 70.0 * 2.54));
        assert!(close(parse_height_cm("6 feet").unwrap(), 72.0 * 2.54));
        assert!(close(parse_height_cm("5ft").unwrap(), 60.0 * 2.54));
    }

    #[test]
    fn parses_inches_only() {
        assert!(close(parse_height_cm("70 in").unwrap(), 177.8));
        assert!(close(parse_height_cm("70\"").unwrap(), 177.8));
        assert!(close(parse_height_cm("70 inches").unwrap(), 177.8));
    }

    #[test]
    fn parses_centimeters() {
        assert!(close(parse_height_cm("178 cm").unwrap(), 178.0));
        assert!(close(parse_height_cm("178.5").unwrap(), 178.5));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse_height_cm("  "), Err(UnitError::Empty));
        assert!(matches!(
            parse_height_cm("tall"),
            Err(UnitError::Unparseable { .. })
        ));
        assert!(matches!(
            parse_height_cm("5'14\""),
            Err(UnitError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_height_cm("0 cm"),
            Err(UnitError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_height_cm("-170"),
            Err(UnitError::OutOfRange { .. })
        ));
    }
}
