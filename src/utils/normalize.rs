//! Normalization helpers shared by selection and labelling

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Separator between the parts of a stable identity string
pub const STABLE_ID_SEPARATOR: &str = ":";

/// Collapse a raw amount to a finite number; absent or non-finite becomes zero
pub fn finite_amount(amount: Option<f64>) -> f64 {
    match amount {
        Some(value) if value.is_finite() => value,
        Some(value) => {
            tracing::trace!(amount = %value, "non-finite candidate amount treated as zero");
            0.0
        }
        None => 0.0,
    }
}

/// Trim a value, treating blank strings as absent
pub fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Join identity parts into a lowercase, `:`-separated stable identity.
///
/// Absent parts serialize as the empty string so the arity is always visible,
/// e.g. `("Owner", 9, -, -, -)` becomes `owner:9:::`.
pub fn stable_id<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .map(|part| part.map(|p| p.as_ref().to_lowercase()).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(STABLE_ID_SEPARATOR)
}

/// Deserialize an amount leniently.
///
/// Numbers pass through, numeric strings are parsed, anything else is absent.
/// A numeric literal outside the `f64` range is still rejected by the JSON
/// parser before it reaches this function; quote it to have it absorbed.
pub fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// Deserialize an ISO calendar date, ignoring any time suffix.
///
/// Unparseable or missing dates are absent rather than an error.
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(|text| {
        let day = text.trim().get(..10)?;
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }))
}
