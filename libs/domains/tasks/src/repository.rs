use async_trait::async_trait;

use crate::error::TaskResult;
use crate::models::{Task, TaskId, TaskInput};

/// Repository trait for Task persistence
///
/// This trait defines the data access interface for tasks.
/// Implementations can use different storage backends (in-memory, PostgreSQL).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// All tasks in insertion order
    async fn list(&self) -> TaskResult<Vec<Task>>;

    /// Get a task by ID
    async fn get_by_id(&self, id: TaskId) -> TaskResult<Option<Task>>;

    /// Store a new task under the next identifier
    async fn create(&self, input: TaskInput) -> TaskResult<Task>;

    /// Replace the mutable fields of an existing task.
    ///
    /// Fails with `TaskError::NotFound` when no task has this id.
    async fn update(&self, id: TaskId, input: TaskInput) -> TaskResult<Task>;

    /// Delete a task by ID; `false` when it did not exist
    async fn delete(&self, id: TaskId) -> TaskResult<bool>;
}
