use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, Statement};
use tracing::debug;

/// Check PostgreSQL database health
///
/// Executes `SELECT 1` to verify the connection is usable. Called once right
/// after connecting so a bad DSN fails at startup rather than on the first
/// request.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DbErr> {
    debug!("Running PostgreSQL health check");

    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1".to_owned());
    db.query_one_raw(stmt).await?;

    debug!("PostgreSQL health check passed");
    Ok(())
}
