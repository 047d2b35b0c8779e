//! Typed conversion of raw string values.
//!
//! Responsibilities:
//! - Convert one raw string into a number, boolean, or JSON value.
//!
//! Does NOT handle:
//! - Defaults, strictness, or error construction: a failed conversion is
//!   `None`, and the engine attaches the key, expected type, and raw
//!   text when it surfaces the failure.

use serde::de::DeserializeOwned;

use crate::constants::{FALSY_VALUES, TRUTHY_VALUES};

/// Parse a finite numeric literal. `NaN` and infinities are rejected.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse a boolean spelling, case-insensitively: `true`, `1`, `yes`,
/// `on` are true; `false`, `0`, `no`, `off` are false.
pub fn parse_bool(raw: &str) -> Option<bool> {
    let lowered = raw.to_ascii_lowercase();
    if TRUTHY_VALUES.contains(&lowered.as_str()) {
        Some(true)
    } else if FALSY_VALUES.contains(&lowered.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Parse a JSON literal (object, array, or scalar) into any
/// deserializable shape. The parse is the only check; the caller owns
/// any expectation about the resulting structure.
pub fn parse_json<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_str(raw).ok()
}
