use migration::Migrator;
use sea_orm_migration::cli;

/// Migration CLI: `up`, `down`, `status`, `fresh`, `refresh`, `reset`.
///
/// Reads the connection string from `DATABASE_URL`.
#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
