//! Text helpers shared by every dialect.

use crate::ir::LiteralValue;

/// Render a string as a double-quoted JavaScript/JSON string literal.
///
/// # Examples
/// ```
/// use schemalect_core::utils::quote;
/// assert_eq!(quote("request-trigger"), r#""request-trigger""#);
/// assert_eq!(quote("say \"hi\""), r#""say \"hi\"""#);
/// ```
pub fn quote(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

/// Render a string as a single-quoted literal, as used inside ArkType definitions.
///
/// Only `\` and `'` are escaped; other characters are kept as-is.
///
/// # Examples
/// ```
/// use schemalect_core::utils::single_quote;
/// assert_eq!(single_quote("click"), "'click'");
/// assert_eq!(single_quote("it's"), r"'it\'s'");
/// ```
pub fn single_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Render a number the way JavaScript source would spell it.
///
/// Integral values drop the fractional part.
///
/// # Examples
/// ```
/// use schemalect_core::utils::format_number;
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(-0.25), "-0.25");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n.fract() == 0.0 && n.abs() < 1e15 {
        return format!("{}", n as i64);
    }
    format!("{n}")
}

impl LiteralValue {
    /// JavaScript source form: double-quoted string, number, or boolean.
    pub fn to_js(&self) -> String {
        match self {
            Self::String(s) => quote(s),
            Self::Number(n) => format_number(*n),
            Self::Bool(b) => b.to_string(),
        }
    }
}
