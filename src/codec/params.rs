//! Parameter encoding for query strings and form bodies

use crate::error::{Error, Result};
use crate::types::Pairs;
use serde::Serialize;
use serde_json::Value;

/// Flatten a parameter struct into ordered `(name, value)` pairs
///
/// The value must serialize to a JSON object (or `null` for "no
/// parameters"). Unset (`None`) fields are omitted.
pub fn encode_pairs<T: Serialize + ?Sized>(operation: &str, params: &T) -> Result<Pairs> {
    let value = serde_json::to_value(params).map_err(|e| Error::encode(operation, e.to_string()))?;

    match value {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) => Ok(map
            .into_iter()
            .filter_map(|(key, value)| render_scalar(&value).map(|v| (key, v)))
            .collect()),
        other => Err(Error::encode(
            operation,
            format!("parameters must be a struct or map, got {}", json_kind(&other)),
        )),
    }
}

/// Render one parameter value in the wire's textual form
///
/// Arrays are rendered comma-separated, which is how list filters such as
/// `part_nums` are passed.
pub fn render_scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let rendered: Vec<String> = items.iter().filter_map(render_scalar).collect();
            Some(rendered.join(","))
        }
        Value::Object(_) => Some(value.to_string()),
    }
}

/// Encode pairs as an `application/x-www-form-urlencoded` body
pub fn form_body(pairs: &[(String, String)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .finish()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
