//! Caller-supplied field type overrides.

use std::collections::BTreeMap;

use contentful_ir::Field;
use serde_json::Value;

use crate::error::RenderError;

/// Replacement type text keyed by content type id, then field id.
///
/// Deserializes directly from an overrides file:
/// `{ "blogPost": { "title": "CustomTitleType" } }`. Values stay raw JSON so
/// a malformed entry is reported instead of coerced.
pub type OverrideMap = BTreeMap<String, BTreeMap<String, Value>>;

/// Look up a replacement value type for `field` on the given content type.
///
/// A present entry is returned verbatim; the caller's text is trusted.
/// Absence is normal and falls through to kind-based dispatch. Overrides
/// replace the value type only, never the key, optionality, or omission.
pub fn resolve_override<'a>(
    field: &Field,
    content_type_id: &str,
    overrides: Option<&'a OverrideMap>,
) -> Result<Option<&'a str>, RenderError> {
    let Some(for_type) = overrides.and_then(|map| map.get(content_type_id)) else {
        return Ok(None);
    };
    match for_type.get(&field.id) {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(other) => Err(RenderError::InvalidOverride {
            content_type: content_type_id.to_string(),
            field: field.id.clone(),
            found: json_type_name(other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
