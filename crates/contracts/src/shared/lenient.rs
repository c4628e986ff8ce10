//! Lenient deserializers for spreadsheet-derived JSON.
//!
//! Processed sheets leak blank separator rows (`""` instead of a number),
//! `null` cells and numbers encoded as strings. Every numeric field in the
//! result DTOs goes through [`f64_or_zero`], so downstream code only ever sees
//! finite floats.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce an arbitrary JSON value into a finite `f64`, defaulting to `0.0`.
pub fn coerce_f64(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Coerce an arbitrary JSON value into a label. Numbers keep their textual form,
/// everything else that is not a string becomes empty.
pub fn coerce_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(coerce_f64).unwrap_or(0.0))
}

pub fn u64_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64_or_zero(deserializer)?;
    if value > 0.0 {
        Ok(value.round() as u64)
    } else {
        Ok(0)
    }
}

pub fn label_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(coerce_label).unwrap_or_default())
}

/// `null` and a missing field both become an empty vector.
pub fn vec_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Cell {
        #[serde(default, deserialize_with = "f64_or_zero")]
        amount: f64,
        #[serde(default, deserialize_with = "label_or_empty")]
        label: String,
    }

    #[test]
    fn test_coerce_f64() {
        assert_eq!(coerce_f64(&json!(12.5)), 12.5);
        assert_eq!(coerce_f64(&json!("7")), 7.0);
        assert_eq!(coerce_f64(&json!(" 3.25 ")), 3.25);
        assert_eq!(coerce_f64(&json!("")), 0.0);
        assert_eq!(coerce_f64(&json!("abc")), 0.0);
        assert_eq!(coerce_f64(&json!("NaN")), 0.0);
        assert_eq!(coerce_f64(&json!("inf")), 0.0);
        assert_eq!(coerce_f64(&json!(null)), 0.0);
        assert_eq!(coerce_f64(&json!(true)), 0.0);
    }

    #[test]
    fn test_missing_and_blank_cells_default_to_zero() {
        let cell: Cell = serde_json::from_str(r#"{"amount": "", "label": null}"#).unwrap();
        assert_eq!(cell.amount, 0.0);
        assert_eq!(cell.label, "");

        let cell: Cell = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(cell.amount, 0.0);
        assert_eq!(cell.label, "");

        let cell: Cell = serde_json::from_str(r#"{"amount": -4.5, "label": 351}"#).unwrap();
        assert_eq!(cell.amount, -4.5);
        assert_eq!(cell.label, "351");
    }
}
