use serde_json::Value;

use super::TranslateError;

#[derive(Debug, PartialEq)]
pub struct Translation {
    pub text: String,
    /// Source language as reported by the service (meaningful for `sl=auto`).
    pub detected_source: Option<String>,
}

/// Pulls the translation out of the service's nested-array body:
/// `[[["Bonjour", "Hello", ...], ...], null, "en", ...]`.
///
/// Long inputs come back split into several segments; their first elements
/// are concatenated in order.
pub fn extract_translation(body: &Value) -> Result<Translation, TranslateError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::Malformed("missing segment array".to_string()))?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if text.is_empty() {
        return Err(TranslateError::EmptyTranslation);
    }

    let detected_source = body.get(2).and_then(Value::as_str).map(str::to_string);

    Ok(Translation {
        text,
        detected_source,
    })
}
