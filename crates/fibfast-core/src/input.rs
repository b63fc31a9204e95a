//! Argument coercion from raw text into the typed contract.
//!
//! Indices and counts must be non-negative integers that fit in a `u64`;
//! values may be any integer. Surrounding whitespace and a leading `+` are
//! accepted; fractions, exponents and empty input are not.

use std::str::FromStr;

use num_bigint::BigInt;

use crate::error::FibError;

/// Parse a sequence index (`k`, `k0`, `k1`, `start`).
pub fn parse_index(name: &'static str, raw: &str) -> Result<u64, FibError> {
    parse_unsigned(name, raw)
}

/// Parse an index that must be supplied. `None` means the argument was
/// omitted.
pub fn parse_required_index(name: &'static str, raw: Option<&str>) -> Result<u64, FibError> {
    parse_index(name, raw.ok_or(FibError::MissingArgument(name))?)
}

/// Parse an element-count bound (`n`).
pub fn parse_count(raw: &str) -> Result<u64, FibError> {
    parse_unsigned("n", raw)
}

/// Parse a lookup value. `None` means the argument was not supplied at all.
///
/// Negative values parse successfully; the value resolver reports them as
/// not in the sequence.
pub fn parse_value(raw: Option<&str>) -> Result<BigInt, FibError> {
    let raw = raw.ok_or(FibError::MissingArgument("value"))?;
    let digits = check_integer("value", raw)?;
    BigInt::from_str(digits).map_err(|e| FibError::invalid("value", e.to_string()))
}

fn parse_unsigned(name: &'static str, raw: &str) -> Result<u64, FibError> {
    let digits = check_integer(name, raw)?;
    if digits.starts_with('-') {
        return Err(FibError::invalid(
            name,
            format!("expected a non-negative integer, got {}", raw.trim()),
        ));
    }
    digits.parse::<u64>().map_err(|_| {
        FibError::invalid(name, format!("{} does not fit in 64 bits", raw.trim()))
    })
}

/// Validate the shape `[+-]?[0-9]+` and return the trimmed text without a `+`.
fn check_integer<'a>(name: &'static str, raw: &'a str) -> Result<&'a str, FibError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FibError::invalid(name, "expected an integer, got empty input"));
    }

    let unsigned = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FibError::invalid(
            name,
            format!("expected an integer, got {trimmed}"),
        ));
    }

    Ok(trimmed.strip_prefix('+').unwrap_or(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_accepts_integer_text() {
        assert_eq!(parse_index("k", "123"), Ok(123));
        assert_eq!(parse_index("k", " 7 "), Ok(7));
        assert_eq!(parse_index("k", "+5"), Ok(5));
        assert_eq!(parse_index("k", "0"), Ok(0));
    }

    #[test]
    fn index_rejects_bad_input() {
        for raw in ["-1", "abc", "1.23", "", "  ", "1e3", "+", "-", "0x10"] {
            assert!(
                matches!(
                    parse_index("k", raw),
                    Err(FibError::InvalidArgument { name: "k", .. })
                ),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn index_rejects_overflow() {
        let err = parse_index("k", "18446744073709551616").unwrap_err();
        assert!(err.to_string().contains("64 bits"));
        assert_eq!(parse_index("k", "18446744073709551615"), Ok(u64::MAX));
    }

    #[test]
    fn required_index_missing() {
        assert_eq!(
            parse_required_index("k1", None),
            Err(FibError::MissingArgument("k1"))
        );
        assert_eq!(parse_required_index("k", Some("89")), Ok(89));
        assert!(matches!(
            parse_required_index("k0", Some("-3")),
            Err(FibError::InvalidArgument { name: "k0", .. })
        ));
    }

    #[test]
    fn count_rejects_negative() {
        assert!(matches!(
            parse_count("-1"),
            Err(FibError::InvalidArgument { name: "n", .. })
        ));
        assert_eq!(parse_count("5"), Ok(5));
    }

    #[test]
    fn value_parses_big_integers() {
        let v = parse_value(Some("1779979416004714189")).unwrap();
        assert_eq!(v.to_string(), "1779979416004714189");
        let huge = "9".repeat(200);
        assert_eq!(parse_value(Some(&huge)).unwrap().to_string(), huge);
    }

    #[test]
    fn value_keeps_sign() {
        assert_eq!(parse_value(Some("-1")).unwrap(), BigInt::from(-1));
        assert_eq!(parse_value(Some("+28657")).unwrap(), BigInt::from(28657));
    }

    #[test]
    fn value_missing() {
        assert_eq!(parse_value(None), Err(FibError::MissingArgument("value")));
    }

    #[test]
    fn value_rejects_bad_input() {
        assert!(matches!(
            parse_value(Some("abc")),
            Err(FibError::InvalidArgument { name: "value", .. })
        ));
        assert!(parse_value(Some("2.5")).is_err());
    }
}
