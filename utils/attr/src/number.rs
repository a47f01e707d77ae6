//! Serde support for numbers that may be NaN or infinite.
//!
//! Self-describing formats such as JSON have no literal for non-finite
//! doubles, so they are written as the keywords `"NaN"`, `"Infinity"` and
//! `"-Infinity"`. Finite numbers are written as plain numbers. Use it as a
//! field attribute:
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Point(#[serde(with = "canvas_attr::number")] f64);
//!
//! let json = serde_json::to_string(&Point(f64::NEG_INFINITY)).unwrap();
//! assert_eq!(json, r#""-Infinity""#);
//! let Point(x) = serde_json::from_str(&json).unwrap();
//! assert_eq!(x, f64::NEG_INFINITY);
//! ```

use core::fmt;

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

/// Returns the keyword a non-finite number is written as, or `None` for
/// finite numbers.
#[must_use]
pub fn keyword(n: f64) -> Option<&'static str> {
    if n.is_nan() {
        Some("NaN")
    } else if n.is_infinite() {
        Some(if n.is_sign_positive() { "Infinity" } else { "-Infinity" })
    } else {
        None
    }
}

/// Parses one of the non-finite keywords.
#[must_use]
pub fn from_keyword(keyword: &str) -> Option<f64> {
    match keyword {
        "NaN" => Some(f64::NAN),
        "Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

/// Serializes `n`, writing non-finite values as keywords.
///
/// # Errors
/// Propagates the serializer's error.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn serialize<S: Serializer>(n: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    match keyword(*n) {
        Some(keyword) => serializer.serialize_str(keyword),
        None => serializer.serialize_f64(*n),
    }
}

/// Deserializes a number or one of the non-finite keywords.
///
/// # Errors
/// Fails on any other string and on non-numeric input.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    deserializer.deserialize_any(NumberVisitor)
}

struct NumberVisitor;

impl Visitor<'_> for NumberVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or one of \"NaN\", \"Infinity\", \"-Infinity\"")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        from_keyword(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}
