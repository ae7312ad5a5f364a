//! Tasks Domain
//!
//! This module provides a complete domain implementation for managing tasks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP routes, payload validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (in-memory or PostgreSQL)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Task, TaskInput
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use domain_tasks::{InMemoryTaskRepository, TaskService};
//!
//! let service = TaskService::new(InMemoryTaskRepository::seeded());
//! let router = domain_tasks::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use error::{TaskError, TaskResult};
pub use handlers::{ROUTES, TasksApiDoc, router};
pub use memory::InMemoryTaskRepository;
pub use models::{Task, TaskId, TaskInput};
pub use postgres::PgTaskRepository;
pub use repository::TaskRepository;
pub use service::TaskService;
pub use validation::validate_task;
