//! Database library providing the PostgreSQL connector and migration runner
//!
//! # Features
//!
//! - `postgres` (default) - PostgreSQL support with SeaORM
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let config = PostgresConfig::new("localhost", 5432, "postgres", "postgres", "todo_db");
//! let db = postgres::connect_from_config(&config).await?;
//! postgres::run_migrations::<Migrator>(&db, "todo_api").await?;
//! ```

#[cfg(feature = "postgres")]
pub mod postgres;
