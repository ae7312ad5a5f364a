use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Task identifier, assigned by the store starting at 1.
pub type TaskId = i64;

/// Longest accepted title, in Unicode scalar values.
pub const MAX_TITLE_CHARS: usize = 100;

/// Task entity - represents a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Task title
    pub title: String,
    /// Task description
    pub description: String,
    /// Whether the task is completed
    pub completed: bool,
    /// Creation timestamp, never modified
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Build a freshly created task; both timestamps are `now`.
    pub fn new(id: TaskId, input: TaskInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            completed: input.completed,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every mutable field and refresh `updated_at`.
    ///
    /// `id` and `created_at` are left untouched.
    pub fn apply(&mut self, input: TaskInput) {
        self.title = input.title;
        self.description = input.description;
        self.completed = input.completed;
        self.updated_at = touch(self.updated_at);
    }
}

/// Payload for creating or replacing a task.
///
/// Unknown fields are ignored. `description` defaults to empty and
/// `completed` to `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct TaskInput {
    #[serde(default)]
    #[validate(custom(function = "validate_title"))]
    #[schema(min_length = 1, max_length = 100)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl TaskInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::new("required")
            .with_message(Cow::Borrowed("title must not be empty")));
    }

    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(ValidationError::new("length").with_message(Cow::Owned(format!(
            "title must be at most {} characters",
            MAX_TITLE_CHARS
        ))));
    }

    Ok(())
}

/// Current time at the precision timestamps are stored with (microseconds).
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Next `updated_at` value for a task last touched at `previous`.
///
/// Always strictly later than `previous`, even when the clock has not moved
/// past it at microsecond precision.
pub fn touch(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = timestamp_now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_bounds() {
        assert!(TaskInput::new("a").validate().is_ok());
        assert!(TaskInput::new("x".repeat(100)).validate().is_ok());
        assert!(TaskInput::new("").validate().is_err());
        assert!(TaskInput::new("x".repeat(101)).validate().is_err());
    }

    #[test]
    fn test_title_length_counts_characters_not_bytes() {
        // 100 two-byte characters
        let title = "é".repeat(100);
        assert_eq!(title.len(), 200);
        assert!(TaskInput::new(title).validate().is_ok());
    }

    #[test]
    fn test_touch_is_strictly_monotonic() {
        let future = timestamp_now() + Duration::seconds(60);
        let touched = touch(future);
        assert_eq!(touched, future + Duration::microseconds(1));

        let past = timestamp_now() - Duration::seconds(60);
        assert!(touch(past) > past);
    }

    #[test]
    fn test_apply_preserves_identity() {
        let created = timestamp_now();
        let mut task = Task::new(7, TaskInput::new("Write report"), created);

        task.apply(TaskInput {
            title: "Write final report".to_string(),
            description: "Q3".to_string(),
            completed: true,
        });

        assert_eq!(task.id, 7);
        assert_eq!(task.created_at, created);
        assert!(task.updated_at > created);
        assert_eq!(task.title, "Write final report");
        assert_eq!(task.description, "Q3");
        assert!(task.completed);
    }

    #[test]
    fn test_task_serializes_camel_case() {
        let now = timestamp_now();
        let json = serde_json::to_value(Task::new(1, TaskInput::new("t"), now)).unwrap();

        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
        assert_eq!(json["completed"], false);
        assert_eq!(json["description"], "");
    }
}
