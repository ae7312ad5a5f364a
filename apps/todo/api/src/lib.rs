//! Todo API - task CRUD over HTTP
//!
//! The binary in `main.rs` loads [`Config`](config::Config), installs tracing
//! and calls [`run`]. Tests build the same router through [`build_app`].

pub mod api;
pub mod config;
pub mod openapi;

use axum::Router;
use axum_helpers::{server::create_app, RequestLogger};
use database::postgres::{self, PostgresConfig};
use domain_tasks::{InMemoryTaskRepository, PgTaskRepository, TaskRepository, TaskService};
use eyre::{WrapErr, eyre};
use migration::Migrator;
use tracing::info;

use config::{Config, StoreBackend};

/// Assemble the full application router around a task service.
///
/// Adds the `/api` routes, OpenAPI document, JSON 404 fallback and the CORS,
/// logging and timeout middleware.
pub fn build_app<R: TaskRepository + 'static>(service: TaskService<R>, config: &Config) -> Router {
    let api_routes = api::routes(service, config.require_bearer_token);

    axum_helpers::create_router::<openapi::ApiDoc>(
        api_routes,
        RequestLogger::new(config.server.max_body_bytes),
        config.server.request_timeout,
    )
}

/// Connect the configured store, then serve until SIGINT/SIGTERM.
pub async fn run(config: Config) -> eyre::Result<()> {
    info!(
        app = config.app.name,
        version = config.app.version,
        store = %config.store,
        "Starting Todo API"
    );

    let router = match config.store {
        StoreBackend::Memory => {
            build_app(TaskService::new(InMemoryTaskRepository::seeded()), &config)
        }
        StoreBackend::Postgres => {
            let database = config
                .database
                .as_ref()
                .ok_or_else(|| eyre!("postgres backend selected without database config"))?;
            let repository = connect_postgres(database).await?;
            build_app(TaskService::new(repository), &config)
        }
    };

    api::log_routes(config.require_bearer_token);

    create_app(router, &config.server)
        .await
        .wrap_err("Server error")?;

    info!("Todo API shutdown complete");
    Ok(())
}

async fn connect_postgres(config: &PostgresConfig) -> eyre::Result<PgTaskRepository> {
    let db = postgres::connect_from_config(config)
        .await
        .wrap_err_with(|| format!("Failed to connect to PostgreSQL at {}:{}", config.host, config.port))?;

    postgres::run_migrations::<Migrator>(&db, "todo_api")
        .await
        .wrap_err("Failed to run migrations")?;

    Ok(PgTaskRepository::new(db))
}
