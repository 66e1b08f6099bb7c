//! Low-level nom parser functions for document style values.
//!
//! Document values are loosely typed: a size may arrive as `0.25`, `"0.25"` or
//! `"25px"`, a color as `"0xff0000ff"`. These parsers accept only the exact raw
//! forms; anything else is left for the caller to pass through.

use nom::IResult;
use nom::Parser;
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while_m_n, take_while1};
use nom::character::complete::char;
use nom::combinator::{all_consuming, map_res, opt, recognize};
use nom::sequence::pair;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

// --- Helper Parsers ---

fn digits(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_digit()).parse(input)
}

/// Parses a plain decimal number (`12`, `-0.5`, `.25`), no exponent, no unit.
pub fn parse_f64(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(pair(
            opt(alt((char('+'), char('-')))),
            alt((
                recognize(pair(digits, opt(pair(char('.'), digits)))),
                recognize(pair(char('.'), digits)),
            )),
        )),
        |s: &str| s.parse::<f64>(),
    )
    .parse(input)
}

// --- Color Parsers ---

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Parses `0x` followed by exactly eight hex digits, returning the digits.
pub fn parse_hex_argb(input: &str) -> IResult<&str, &str> {
    let (input, _) = tag_no_case("0x").parse(input)?;
    take_while_m_n(8, 8, is_hex_digit).parse(input)
}

/// Recognizes any `0x`-prefixed token (well-formed or not).
pub fn is_hex_prefixed(input: &str) -> bool {
    tag_no_case::<_, _, nom::error::Error<&str>>("0x")
        .parse(input)
        .is_ok()
}

/// Helper to run a nom parser over the whole input and convert its result.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Parser<&'a str, Output = T, Error = nom::error::Error<&'a str>>,
{
    match all_consuming(parser).parse(input.trim()) {
        Ok((_, result)) => Ok(result),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

// --- High-level Parse Functions ---

/// Reads a unitless number from a number or numeric string.
///
/// Returns `None` for anything with a unit (`"10px"`), keywords or non-scalars.
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => run_parser(parse_f64, s).ok(),
        _ => None,
    }
}

/// Formats a number for CSS: at most four decimals, no trailing zeros.
pub fn format_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    let mut text = format!("{:.4}", rounded);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_f64_forms() {
        assert_eq!(run_parser(parse_f64, "12").unwrap(), 12.0);
        assert_eq!(run_parser(parse_f64, "-0.5").unwrap(), -0.5);
        assert_eq!(run_parser(parse_f64, ".25").unwrap(), 0.25);
        assert!(run_parser(parse_f64, "10px").is_err());
        assert!(run_parser(parse_f64, "auto").is_err());
    }

    #[test]
    fn test_numeric_value() {
        assert_eq!(numeric_value(&json!(0.1)), Some(0.1));
        assert_eq!(numeric_value(&json!("0.1")), Some(0.1));
        assert_eq!(numeric_value(&json!(" 3 ")), Some(3.0));
        assert_eq!(numeric_value(&json!("10vh")), None);
        assert_eq!(numeric_value(&json!(true)), None);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(10.000000000000002), "10");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(33.333333), "33.3333");
        assert_eq!(format_number(-0.00001), "0");
    }

    #[test]
    fn test_hex_argb() {
        assert_eq!(run_parser(parse_hex_argb, "0x33445566").unwrap(), "33445566");
        assert!(run_parser(parse_hex_argb, "0x334455").is_err());
        assert!(run_parser(parse_hex_argb, "0x3344556677").is_err());
        assert!(is_hex_prefixed("0xzz"));
        assert!(!is_hex_prefixed("#fff"));
    }
}
