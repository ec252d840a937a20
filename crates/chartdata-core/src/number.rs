//! Numeric coercion with the semantics chart inputs were authored against.
//!
//! Raw magnitudes arrive as strings, numbers, or the occasional nested array. They are
//! stringified and prefix-parsed the way a browser `parseFloat` would, so `"12abc"` is `12`
//! and `"abc"` is `NaN`. `NaN` is never replaced with zero here; callers decide.

use ryu_js::Buffer;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parses the longest decimal-literal prefix of `text`, or returns `NaN`.
pub fn parse_float(text: &str) -> f64 {
    let t = trim_js_whitespace(text);
    let bytes = t.as_bytes();

    let mut i = 0usize;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    if t[i..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    // The exponent only counts when at least one digit follows it.
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    t[..i].parse::<f64>().unwrap_or(f64::NAN)
}

/// Parses the longest integer prefix of `text` (decimal, or hex with a `0x` prefix).
/// Returns `NaN` when there is no such prefix.
pub fn parse_int(text: &str) -> f64 {
    let t = trim_js_whitespace(text);
    let (negative, rest) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut out = 0.0f64;
    let mut seen = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else {
            break;
        };
        out = out * f64::from(radix) + f64::from(d);
        seen = true;
    }
    if !seen {
        return f64::NAN;
    }
    if negative { -out } else { out }
}

/// Stringifies a JSON value the way the chart inputs' source runtime does before parsing.
pub fn js_to_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n.as_f64().unwrap_or(f64::NAN)),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => js_to_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Coerces a raw magnitude to a float (`NaN` when it does not parse).
pub fn coerce_float(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_float(s),
        other => parse_float(&js_to_string(other)),
    }
}

/// Coerces a raw value to an integer via integer-prefix parsing (`NaN` when it does not parse).
pub fn coerce_int(value: &Value) -> f64 {
    match value {
        Value::String(s) => parse_int(s),
        other => parse_int(&js_to_string(other)),
    }
}

/// Sums raw magnitudes. A single unparseable magnitude turns the whole sum into `NaN`.
pub fn sum_values(values: &[Value]) -> f64 {
    values.iter().fold(0.0, |acc, v| acc + coerce_float(v))
}

/// Rounds half toward positive infinity.
pub fn js_round(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Formats a float using the shortest round-trip representation (`1`, `0.5`, `NaN`).
pub fn format_number(v: f64) -> String {
    let mut b = Buffer::new();
    b.format(v).to_string()
}

pub(crate) fn to_json_number(v: f64) -> Value {
    serde_json::Number::from_f64(v)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Deserializes a stored magnitude, accepting `null` and strings.
pub(crate) fn deserialize_magnitude<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(coerce_float(&raw))
}

pub(crate) fn deserialize_optional_magnitude<'de, D>(
    deserializer: D,
) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.map(|v| coerce_float(&v)))
}

fn trim_js_whitespace(text: &str) -> &str {
    text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}
