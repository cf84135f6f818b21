//! Numeric coercion for loosely-shaped inputs
//!
//! Trip drafts arrive with form-shaped values: a day count may be a number
//! or a numeric string, costs may be missing entirely. These helpers turn
//! such values into the documented defaults instead of rejecting them.

use serde_json::Value;

/// Best-effort numeric read: numbers pass through, strings are trimmed and
/// parsed. Anything else (or a non-finite result) reads as absent.
pub fn as_number(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Coerce to a non-negative amount, defaulting to 0.
pub fn non_negative_or_zero(value: Option<&Value>) -> f64 {
    match as_number(value) {
        Some(n) if n > 0.0 => n,
        _ => 0.0,
    }
}

/// Coerce to a positive whole count (fractions truncate), or absent.
pub fn positive_int(value: Option<&Value>) -> Option<u32> {
    match as_number(value) {
        Some(n) if n >= 1.0 => Some(n as u32),
        _ => None,
    }
}
