//! Encoding of a [`ViewedSet`] as a session storage value.
//!
//! # Format
//!
//! The current format is a JSON array of strings:
//!
//! ```json
//! ["entry-1","entry-2"]
//! ```
//!
//! Older writers stored a single scalar instead of an array. Decoding accepts
//! that shape as a one-element set:
//!
//! - a JSON scalar (`"entry-1"`, `42`, `true`)
//! - bare text that is not JSON at all (`entry-1`, `[Video] Launch recap`)
//!
//! Only values that parse as JSON but have the wrong shape are malformed:
//! `null`, objects, and arrays holding non-scalars.

use serde_json::Value;

use crate::error::{Result, ViewedError};
use crate::types::ViewedSet;

pub fn encode(set: &ViewedSet) -> Result<String> {
    serde_json::to_string(set).map_err(|source| ViewedError::Json {
        context: "encoding viewed set".to_string(),
        source,
    })
}

/// Decodes a stored value for `category`. Empty values decode to the empty set.
pub fn decode(category: &str, raw: &str) -> Result<ViewedSet> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(ViewedSet::new());
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Array(values)) => values
            .iter()
            .map(|value| {
                scalar_text(value).ok_or_else(|| malformed(category, "array holds a non-scalar"))
            })
            .collect::<Result<Vec<_>>>()
            .map(ViewedSet::from),
        Ok(Value::Null) => Err(malformed(category, "value is null")),
        Ok(Value::Object(_)) => Err(malformed(category, "value is an object")),
        Ok(scalar) => Ok(scalar_text(&scalar).into_iter().collect()),
        // Legacy bare value written without JSON encoding
        Err(_) => Ok(std::iter::once(raw.to_string()).collect()),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn malformed(category: &str, details: &str) -> ViewedError {
    ViewedError::Malformed {
        category: category.to_string(),
        details: details.to_string(),
    }
}
