//! Section content keys and payload validation.

use crate::error::CoreError;

/// Maximum length of a section key.
pub const MAX_KEY_LENGTH: usize = 100;

/// Normalize and validate a section key: trimmed, lowercased, non-empty,
/// within the length limit.
pub fn normalize_key(key: &str) -> Result<String, CoreError> {
    let key = key.trim().to_lowercase();
    if key.is_empty() {
        return Err(CoreError::Validation(
            "Section key must not be empty".to_string(),
        ));
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(CoreError::Validation(format!(
            "Section key exceeds maximum length of {MAX_KEY_LENGTH} characters"
        )));
    }
    Ok(key)
}

/// Validate a section content payload: must be a JSON object (its field
/// set depends on the section and is otherwise opaque to the store).
pub fn validate_content(content: &serde_json::Value) -> Result<(), CoreError> {
    if !content.is_object() {
        return Err(CoreError::Validation(
            "Section content must be a JSON object".to_string(),
        ));
    }
    Ok(())
}
