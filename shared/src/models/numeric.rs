//! Whole-number fields
//!
//! Clients that only have one number type send `4.0` for `4`. Integer fields
//! accept any JSON number without a fractional part.

use serde::{Deserialize, Deserializer, de::Error};
use serde_json::Value;

/// Largest magnitude an `f64` holds without losing integer precision
const MAX_EXACT_F64: f64 = 9_007_199_254_740_992.0;

/// Integer value of a JSON number with no fractional part
pub fn whole_number(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() <= MAX_EXACT_F64)
        .map(|f| f as i64)
}

/// `deserialize_with` adapter for [`whole_number`]
pub fn deserialize_whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    whole_number(&value)
        .ok_or_else(|| D::Error::custom(format!("expected a whole number, found {value}")))
}
