use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{Task, TaskId, TaskInput};
use crate::repository::TaskRepository;

/// Service layer for Task business logic
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> Clone for TaskService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all tasks in creation order
    pub async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        self.repository.list().await
    }

    /// Get a task by ID
    #[instrument(skip(self), fields(task_id = id))]
    pub async fn get_task(&self, id: TaskId) -> TaskResult<Task> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }

    /// Create a new task with validation
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create_task(&self, input: TaskInput) -> TaskResult<Task> {
        input.validate()?;
        self.repository.create(input).await
    }

    /// Replace a task's title, description and completed flag
    #[instrument(skip(self, input), fields(task_id = id, task_title = %input.title))]
    pub async fn update_task(&self, id: TaskId, input: TaskInput) -> TaskResult<Task> {
        input.validate()?;
        self.repository.update(id, input).await
    }

    /// Delete a task
    #[instrument(skip(self), fields(task_id = id))]
    pub async fn delete_task(&self, id: TaskId) -> TaskResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(TaskError::NotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::timestamp_now;
    use crate::repository::MockTaskRepository;
    use mockall::predicate::eq;

    fn task(id: TaskId, title: &str) -> Task {
        Task::new(id, TaskInput::new(title), timestamp_now())
    }

    #[tokio::test]
    async fn test_get_task_not_found() {
        let mut repo = MockTaskRepository::new();
        repo.expect_get_by_id()
            .with(eq(5))
            .times(1)
            .returning(|_| Ok(None));

        let service = TaskService::new(repo);
        let err = service.get_task(5).await.unwrap_err();
        assert!(matches!(err, TaskError::NotFound(5)));
    }

    #[tokio::test]
    async fn test_get_task_found() {
        let mut repo = MockTaskRepository::new();
        repo.expect_get_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(task(id, "Example"))));

        let service = TaskService::new(repo);
        assert_eq!(service.get_task(1).await.unwrap().title, "Example");
    }

    #[tokio::test]
    async fn test_create_task_rejects_empty_title_without_touching_store() {
        let mut repo = MockTaskRepository::new();
        repo.expect_create().never();

        let service = TaskService::new(repo);
        let err = service.create_task(TaskInput::new("")).await.unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_task_delegates() {
        let mut repo = MockTaskRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|input| Ok(Task::new(3, input, timestamp_now())));

        let service = TaskService::new(repo);
        let created = service.create_task(TaskInput::new("Buy milk")).await.unwrap();
        assert_eq!(created.id, 3);
        assert_eq!(created.created_at, created.updated_at);
    }

    #[tokio::test]
    async fn test_update_task_rejects_long_title() {
        let mut repo = MockTaskRepository::new();
        repo.expect_update().never();

        let service = TaskService::new(repo);
        let err = service
            .update_task(1, TaskInput::new("x".repeat(101)))
            .await
            .unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_task_missing() {
        let mut repo = MockTaskRepository::new();
        repo.expect_delete().with(eq(8)).returning(|_| Ok(false));

        let service = TaskService::new(repo);
        let err = service.delete_task(8).await.unwrap_err();
        assert!(matches!(err, TaskError::NotFound(8)));
    }

    #[tokio::test]
    async fn test_list_tasks_propagates_errors() {
        let mut repo = MockTaskRepository::new();
        repo.expect_list()
            .returning(|| Err(TaskError::Database("down".to_string())));

        let service = TaskService::new(repo);
        assert!(service.list_tasks().await.is_err());
    }
}
