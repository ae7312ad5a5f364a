use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{TaskError, TaskResult};
use crate::models::{Task, TaskId, TaskInput, timestamp_now};
use crate::repository::TaskRepository;

#[derive(Debug)]
struct Store {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }
}

impl Store {
    fn insert(&mut self, input: TaskInput) -> Task {
        let task = Task::new(self.next_id, input, timestamp_now());
        self.next_id += 1;
        self.tasks.push(task.clone());
        task
    }
}

/// In-memory implementation of TaskRepository
///
/// Tasks live in a `Vec` in insertion order behind a single lock that also
/// guards the id counter, so id assignment and insertion happen together.
/// Ids are never reused after a delete.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTaskRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryTaskRepository {
    /// Empty store; the first task gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with two example tasks (ids 1 and 2).
    pub fn seeded() -> Self {
        let mut store = Store::default();
        store.insert(TaskInput {
            title: "Example task 1".to_string(),
            description: "This is a predefined example task".to_string(),
            completed: false,
        });
        store.insert(TaskInput {
            title: "Example task 2".to_string(),
            description: "This is another predefined example task".to_string(),
            completed: true,
        });

        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list(&self) -> TaskResult<Vec<Task>> {
        let store = self.store.read().await;
        Ok(store.tasks.clone())
    }

    async fn get_by_id(&self, id: TaskId) -> TaskResult<Option<Task>> {
        let store = self.store.read().await;
        Ok(store.tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn create(&self, input: TaskInput) -> TaskResult<Task> {
        let mut store = self.store.write().await;
        let task = store.insert(input);

        tracing::info!(task_id = task.id, "Created task");
        Ok(task)
    }

    async fn update(&self, id: TaskId, input: TaskInput) -> TaskResult<Task> {
        let mut store = self.store.write().await;
        let task = store
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;

        task.apply(input);

        tracing::info!(task_id = id, "Updated task");
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> TaskResult<bool> {
        let mut store = self.store.write().await;
        let Some(index) = store.tasks.iter().position(|t| t.id == id) else {
            return Ok(false);
        };

        store.tasks.remove(index);

        tracing::info!(task_id = id, "Deleted task");
        Ok(true)
    }
}
