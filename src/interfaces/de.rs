//! Lenient field deserializers.
//!
//! The Hyperliquid API encodes most decimals as strings and omits or nulls
//! fields freely. These helpers fill in a fixed default instead of failing
//! the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::positions::LeverageType;

/// Coerce a JSON number or numeric string into a finite `f64`.
pub fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

fn coerce_string(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Number or numeric string; anything else is `0.0`.
pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_f64).unwrap_or(0.0))
}

pub fn zero_string() -> String {
    "0".to_string()
}

/// Decimal kept in its string form; `"0"` when missing or null.
pub fn decimal_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(coerce_string(value).unwrap_or_else(zero_string))
}

/// String field; `""` when missing or null.
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(coerce_string(value).unwrap_or_default())
}

/// Optional string; numbers are kept in text form, other types become `None`.
pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(coerce_string(value))
}

/// Anything other than `"isolated"` is treated as cross margin.
pub fn leverage_type<'de, D>(deserializer: D) -> Result<LeverageType, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if s.eq_ignore_ascii_case("isolated") => LeverageType::Isolated,
        _ => LeverageType::Cross,
    })
}

/// Treat an explicit `null` the same as a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
