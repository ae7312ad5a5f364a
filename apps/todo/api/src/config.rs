//! Configuration for the Todo API

use core_config::{app_info, env_parse, server::ServerConfig, AppInfo, FromEnv};
use database::postgres::PostgresConfig;
use strum::{Display, EnumString};

pub use core_config::Environment;

/// Where tasks are kept
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StoreBackend {
    /// Process-local store, seeded with two example tasks
    #[default]
    Memory,
    /// PostgreSQL via sea-orm
    Postgres,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub store: StoreBackend,
    /// Only loaded when `store` is [`StoreBackend::Postgres`]
    pub database: Option<PostgresConfig>,
    pub require_bearer_token: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let store: StoreBackend = env_parse("TASK_STORE", "memory")?;
        let require_bearer_token = env_parse("REQUIRE_BEARER_TOKEN", "false")?;

        let database = match store {
            StoreBackend::Postgres => Some(PostgresConfig::from_env()?),
            StoreBackend::Memory => None,
        };

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            store,
            database,
            require_bearer_token,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: app_info!(),
            server: ServerConfig::default(),
            environment: Environment::Development,
            store: StoreBackend::Memory,
            database: None,
            require_bearer_token: false,
        }
    }
}
