use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder};

use crate::{
    entity,
    error::{TaskError, TaskResult},
    models::{Task, TaskId, TaskInput, timestamp_now, touch},
    repository::TaskRepository,
};

/// PostgreSQL implementation of TaskRepository
///
/// Ids come from the `tasks.id` identity column, so they are sequential and
/// never reused.
pub struct PgTaskRepository {
    db: DatabaseConnection,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn list(&self) -> TaskResult<Vec<Task>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: TaskId) -> TaskResult<Option<Task>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn create(&self, input: TaskInput) -> TaskResult<Task> {
        let model = entity::new_active_model(input, timestamp_now())
            .insert(&self.db)
            .await?;

        tracing::info!(task_id = model.id, "Created task");
        Ok(model.into())
    }

    async fn update(&self, id: TaskId, input: TaskInput) -> TaskResult<Task> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(TaskError::NotFound(id))?;

        let updated_at = touch(model.updated_at.into());

        let mut active_model = model.into_active_model();
        active_model.title = Set(input.title);
        active_model.description = Set(input.description);
        active_model.completed = Set(input.completed);
        active_model.updated_at = Set(updated_at.into());

        let updated_model = active_model.update(&self.db).await?;

        tracing::info!(task_id = id, "Updated task");
        Ok(updated_model.into())
    }

    async fn delete(&self, id: TaskId) -> TaskResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(task_id = id, "Deleted task");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
