use crate::error::ApiError;

/// Trimmed value of a required form field.
///
/// `field` is the human name used in the message, e.g. `"an index number"`.
pub fn required(value: &str, field: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ApiError::Validation(format!("Please enter {}", field)))
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn required_pair(
    first: (&str, &str),
    second: (&str, &str),
) -> Result<(String, String), ApiError> {
    match (first.0.trim(), second.0.trim()) {
        (a, b) if !a.is_empty() && !b.is_empty() => Ok((a.to_string(), b.to_string())),
        _ => Err(ApiError::Validation(format!(
            "Please enter both {} and {}",
            first.1, second.1
        ))),
    }
}
