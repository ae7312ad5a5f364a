use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::TaskInput;

/// Parse and validate a raw JSON task payload.
///
/// Returns [`TaskError::InvalidPayload`] when the bytes are not JSON of the
/// task shape, and [`TaskError::Validation`] when the title is empty or too
/// long.
///
/// ```rust
/// use domain_tasks::validate_task;
///
/// let input = validate_task(br#"{"title":"Buy milk","extra":1}"#).unwrap();
/// assert_eq!(input.title, "Buy milk");
/// assert!(!input.completed);
///
/// assert!(validate_task(br#"{"title":""}"#).is_err());
/// assert!(validate_task(b"not json").is_err());
/// ```
pub fn validate_task(raw: &[u8]) -> TaskResult<TaskInput> {
    let input: TaskInput = serde_json::from_slice(raw)
        .map_err(|e| TaskError::InvalidPayload(format!("Failed to decode JSON: {}", e)))?;

    input.validate()?;
    Ok(input)
}
