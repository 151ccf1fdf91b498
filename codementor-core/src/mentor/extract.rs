//! Best-effort JSON extraction from free-form model output.

use crate::error::ExtractionError;
use serde_json::{Map, Value};

/// Locate the JSON object embedded in `text` and parse it.
///
/// The span is greedy: from the first `{` to the last `}`. Prose before and
/// after it, including markdown fences, is ignored. Anything that is not a
/// JSON object once sliced out is an error.
///
/// Slicing at these byte offsets is safe because `{` and `}` are single-byte
/// ASCII characters and therefore always on UTF-8 boundaries.
pub fn extract_json_object(text: &str) -> Result<Map<String, Value>, ExtractionError> {
    let span = match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => return Err(ExtractionError::NoJsonObject { len: text.len() }),
    };

    match serde_json::from_str::<Value>(span)? {
        Value::Object(map) => Ok(map),
        _ => Err(ExtractionError::NotAnObject),
    }
}
