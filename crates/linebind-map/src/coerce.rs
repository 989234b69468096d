//! Scalar coercion of raw tokens.

use std::str::FromStr;

use linebind_model::{ScalarKind, Value};

use crate::error::{MapError, Result};

/// Converts a raw token into a value of the requested scalar kind.
///
/// Strings pass through unchanged and chars take the first character.
/// Numbers use the standard parser for their exact width. Bools accept
/// `true` and `false` in any letter case. Anything else is a
/// [`MapError::Format`] carrying the token and the kind.
pub fn coerce(raw: &str, kind: ScalarKind) -> Result<Value> {
    Ok(match kind {
        ScalarKind::String => Value::String(raw.to_string()),
        ScalarKind::Int32 => Value::Int32(parse(raw, kind)?),
        ScalarKind::Int64 => Value::Int64(parse(raw, kind)?),
        ScalarKind::Int16 => Value::Int16(parse(raw, kind)?),
        ScalarKind::Int8 => Value::Int8(parse(raw, kind)?),
        ScalarKind::Float32 => Value::Float32(parse(raw, kind)?),
        ScalarKind::Float64 => Value::Float64(parse(raw, kind)?),
        ScalarKind::Bool => Value::Bool(parse_bool(raw).ok_or_else(|| format_error(raw, kind))?),
        ScalarKind::Char => Value::Char(raw.chars().next().ok_or_else(|| format_error(raw, kind))?),
    })
}

fn parse<T: FromStr>(raw: &str, kind: ScalarKind) -> Result<T> {
    raw.parse::<T>().map_err(|_| format_error(raw, kind))
}

fn parse_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn format_error(raw: &str, kind: ScalarKind) -> MapError {
    MapError::Format {
        raw: raw.to_string(),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_pass_through() {
        assert_eq!(
            coerce(" padded ", ScalarKind::String).unwrap(),
            Value::String(" padded ".into())
        );
    }

    #[test]
    fn test_integer_widths() {
        assert_eq!(coerce("127", ScalarKind::Int8).unwrap(), Value::Int8(127));
        assert!(coerce("128", ScalarKind::Int8).is_err());
        assert_eq!(coerce("-32768", ScalarKind::Int16).unwrap(), Value::Int16(-32768));
        assert_eq!(
            coerce("9000000000", ScalarKind::Int64).unwrap(),
            Value::Int64(9_000_000_000)
        );
        assert!(coerce("9000000000", ScalarKind::Int32).is_err());
    }

    #[test]
    fn test_floats() {
        assert_eq!(coerce("2.5", ScalarKind::Float32).unwrap(), Value::Float32(2.5));
        assert_eq!(coerce("-1e3", ScalarKind::Float64).unwrap(), Value::Float64(-1000.0));
    }

    #[test]
    fn test_bools() {
        assert_eq!(coerce("TRUE", ScalarKind::Bool).unwrap(), Value::Bool(true));
        assert_eq!(coerce("false", ScalarKind::Bool).unwrap(), Value::Bool(false));
        assert!(coerce("yes", ScalarKind::Bool).is_err());
    }

    #[test]
    fn test_chars() {
        assert_eq!(coerce("xyz", ScalarKind::Char).unwrap(), Value::Char('x'));
        let err = coerce("", ScalarKind::Char).unwrap_err();
        assert!(matches!(err, MapError::Format { ref raw, kind: ScalarKind::Char } if raw.is_empty()));
    }

    #[test]
    fn test_format_error_carries_token_and_kind() {
        let err = coerce("thirty", ScalarKind::Int32).unwrap_err();
        match err {
            MapError::Format { raw, kind } => {
                assert_eq!(raw, "thirty");
                assert_eq!(kind, ScalarKind::Int32);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_numbers_are_not_trimmed() {
        assert!(coerce(" 4", ScalarKind::Int32).is_err());
    }
}
