//! Conversion between runtime values and `serde_json` values.

use crate::runtime::error::{RuntimeError, RuntimeResult};
use crate::runtime::values::Value;

/// Converts a runtime value to JSON. Functions and non-finite floats have no
/// JSON form and are rejected.
pub fn value_to_json(value: &Value) -> RuntimeResult<serde_json::Value> {
    match value {
        Value::Nil => Ok(serde_json::Value::Null),
        Value::Boolean(b) => Ok(serde_json::Value::Bool(*b)),
        Value::Integer(i) => Ok(serde_json::Value::Number(serde_json::Number::from(*i))),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .ok_or_else(|| RuntimeError::Json(format!("Invalid float value for JSON: {}", f))),
        Value::String(s) => Ok(serde_json::Value::String(s.clone())),
        Value::Vector(vec) => {
            let mut json_array = Vec::with_capacity(vec.len());
            for item in vec {
                json_array.push(value_to_json(item)?);
            }
            Ok(serde_json::Value::Array(json_array))
        }
        Value::Function(_) => Err(RuntimeError::Json(format!(
            "Cannot serialize {} to JSON",
            value.type_name()
        ))),
    }
}

/// Converts JSON to a runtime value. Objects are rejected since the value
/// model has no maps.
pub fn json_to_value(json: &serde_json::Value) -> RuntimeResult<Value> {
    match json {
        serde_json::Value::Null => Ok(Value::Nil),
        serde_json::Value::Bool(b) => Ok(Value::Boolean(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Integer(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Float(f))
            } else {
                Err(RuntimeError::Json(format!("Invalid JSON number: {}", n)))
            }
        }
        serde_json::Value::String(s) => Ok(Value::String(s.clone())),
        serde_json::Value::Array(arr) => {
            let mut values = Vec::with_capacity(arr.len());
            for item in arr {
                values.push(json_to_value(item)?);
            }
            Ok(Value::Vector(values))
        }
        serde_json::Value::Object(_) => Err(RuntimeError::Json(
            "JSON objects are not supported, expected a scalar or an array".to_string(),
        )),
    }
}

/// Parses a JSON document into a runtime value.
pub fn parse_value(source: &str) -> RuntimeResult<Value> {
    let json: serde_json::Value = serde_json::from_str(source)
        .map_err(|e| RuntimeError::Json(format!("JSON parsing error: {}", e)))?;
    json_to_value(&json)
}
