//! Typed state values and the coercion rules between them and query text.

use serde::{Deserialize, Serialize};

/// The kind of a managed key, implied by its default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Str,
    Number,
    Bool,
    List,
}

/// A value held by one managed key.
///
/// Serializes untagged, so a state map turns into the same JSON object a
/// browser would produce for it (`NaN` becomes `null`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    Bool(bool),
    Number(f64),
    Str(String),
    List(Vec<String>),
}

impl StateValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            StateValue::Str(_) => ValueKind::Str,
            StateValue::Number(_) => ValueKind::Number,
            StateValue::Bool(_) => ValueKind::Bool,
            StateValue::List(_) => ValueKind::List,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, StateValue::List(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StateValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            StateValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StateValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            StateValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Text written into the query string for a scalar value.
    ///
    /// Lists have no single text form; each element is written as its own
    /// pair, so for them this joins with `,` (display only).
    pub fn to_query_value(&self) -> String {
        match self {
            StateValue::Str(s) => s.clone(),
            StateValue::Number(n) => format_number(*n),
            StateValue::Bool(b) => b.to_string(),
            StateValue::List(items) => items.join(","),
        }
    }
}

/// Coerce raw query text into a scalar of the given kind.
///
/// Never fails: unparseable numbers become `NaN` and any boolean text other
/// than exactly `"true"` is `false`. A `List` kind wraps the single value.
pub fn parse_scalar(raw: &str, kind: ValueKind) -> StateValue {
    match kind {
        ValueKind::Str => StateValue::Str(raw.to_string()),
        ValueKind::Number => StateValue::Number(parse_number(raw)),
        ValueKind::Bool => StateValue::Bool(raw == "true"),
        ValueKind::List => StateValue::List(vec![raw.to_string()]),
    }
}

/// Numeric parse with browser `Number()` semantics.
///
/// - surrounding whitespace is ignored; an empty string is `0`
/// - `0x`, `0o` and `0b` prefixes select the radix (no sign allowed)
/// - `Infinity` with optional sign
/// - anything else that is not a plain decimal literal is `NaN`
pub fn parse_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&s[2..], radix);
    }

    let unsigned = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    if unsigned == "Infinity" {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    // Rust accepts "inf"/"nan" spellings that Number() rejects.
    let literal = unsigned
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !literal {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut acc = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * f64::from(radix) + f64::from(d),
            None => return f64::NAN,
        }
    }
    acc
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        // covers -0
        "0".to_string()
    } else {
        n.to_string()
    }
}

impl From<&str> for StateValue {
    fn from(s: &str) -> Self {
        StateValue::Str(s.to_string())
    }
}

impl From<String> for StateValue {
    fn from(s: String) -> Self {
        StateValue::Str(s)
    }
}

impl From<f64> for StateValue {
    fn from(n: f64) -> Self {
        StateValue::Number(n)
    }
}

impl From<i32> for StateValue {
    fn from(n: i32) -> Self {
        StateValue::Number(f64::from(n))
    }
}

impl From<i64> for StateValue {
    fn from(n: i64) -> Self {
        StateValue::Number(n as f64)
    }
}

impl From<bool> for StateValue {
    fn from(b: bool) -> Self {
        StateValue::Bool(b)
    }
}

impl From<Vec<String>> for StateValue {
    fn from(items: Vec<String>) -> Self {
        StateValue::List(items)
    }
}

impl From<Vec<&str>> for StateValue {
    fn from(items: Vec<&str>) -> Self {
        StateValue::List(items.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_decimal_forms() {
        assert_eq!(parse_number("5"), 5.0);
        assert_eq!(parse_number(" 42 "), 42.0);
        assert_eq!(parse_number("-3.5"), -3.5);
        assert_eq!(parse_number("+7"), 7.0);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("1e3"), 1000.0);
    }

    #[test]
    fn parse_number_empty_is_zero() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("   "), 0.0);
    }

    #[test]
    fn parse_number_radix_prefixes() {
        assert_eq!(parse_number("0x1f"), 31.0);
        assert_eq!(parse_number("0o17"), 15.0);
        assert_eq!(parse_number("0b101"), 5.0);
        assert!(parse_number("0x").is_nan());
        assert!(parse_number("0xzz").is_nan());
        assert!(parse_number("-0x10").is_nan());
    }

    #[test]
    fn parse_number_infinity_spellings() {
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("NaN").is_nan());
        assert!(parse_number("nan").is_nan());
    }

    #[test]
    fn parse_number_garbage_is_nan() {
        assert!(parse_number("abc").is_nan());
        assert!(parse_number("12px").is_nan());
        assert!(parse_number(".").is_nan());
    }

    #[test]
    fn parse_scalar_bool_exact_match() {
        assert_eq!(parse_scalar("true", ValueKind::Bool), StateValue::Bool(true));
        assert_eq!(parse_scalar("True", ValueKind::Bool), StateValue::Bool(false));
        assert_eq!(parse_scalar("1", ValueKind::Bool), StateValue::Bool(false));
    }

    #[test]
    fn parse_scalar_string_passthrough() {
        assert_eq!(
            parse_scalar("hello world", ValueKind::Str),
            StateValue::Str("hello world".into())
        );
    }

    #[test]
    fn query_value_number_formatting() {
        assert_eq!(StateValue::from(5).to_query_value(), "5");
        assert_eq!(StateValue::from(2.5).to_query_value(), "2.5");
        assert_eq!(StateValue::from(-0.0).to_query_value(), "0");
        assert_eq!(StateValue::from(f64::NAN).to_query_value(), "NaN");
        assert_eq!(
            StateValue::from(f64::NEG_INFINITY).to_query_value(),
            "-Infinity"
        );
    }

    #[test]
    fn lists_compare_element_wise() {
        let a = StateValue::from(vec!["a,b"]);
        let b = StateValue::from(vec!["a", "b"]);
        assert_ne!(a, b);
        assert_eq!(a.to_query_value(), b.to_query_value());
    }

    #[test]
    fn json_shape_matches_browser_serialization() {
        let v = serde_json::to_string(&StateValue::from(f64::NAN)).unwrap();
        assert_eq!(v, "null");
        let v = serde_json::to_string(&StateValue::from(vec!["x", "y"])).unwrap();
        assert_eq!(v, r#"["x","y"]"#);
        let v = serde_json::to_string(&StateValue::from(3)).unwrap();
        assert_eq!(v, "3.0");
    }
}
