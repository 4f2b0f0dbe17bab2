//! Entry fields come straight from a form, so a value that is not a number
//! reads as absent instead of failing the whole project file.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Int(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Numbers pass through, numeric strings are parsed, anything else is `None`.
pub fn measurement<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<RawValue>::deserialize(deserializer)? {
        None => None,
        Some(RawValue::Int(value)) => Some(value as f64),
        Some(RawValue::Float(value)) => Some(value),
        Some(RawValue::Text(text)) => {
            let parsed = text.trim().parse::<f64>().ok();
            if parsed.is_none() {
                tracing::debug!("Ignoring non-numeric measurement {:?}", text);
            }
            parsed
        }
        Some(RawValue::Other(_)) => {
            tracing::debug!("Ignoring measurement that is not a number or string");
            None
        }
    };
    Ok(value)
}

/// Like [`measurement`] for whole counts. Fractions are truncated.
pub fn count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<RawValue>::deserialize(deserializer)? {
        None => None,
        Some(RawValue::Int(value)) => Some(value),
        Some(RawValue::Float(value)) => truncate(value),
        Some(RawValue::Text(text)) => {
            let text = text.trim();
            let parsed = text
                .parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(truncate));
            if parsed.is_none() {
                tracing::debug!("Ignoring non-numeric count {:?}", text);
            }
            parsed
        }
        Some(RawValue::Other(_)) => {
            tracing::debug!("Ignoring count that is not a number or string");
            None
        }
    };
    Ok(value)
}

fn truncate(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.trunc() as i64)
}
