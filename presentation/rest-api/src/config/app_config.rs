use super::{cors_config, database_config::DatabaseSettings, server_config::ServerConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub cors: Cors,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            database: DatabaseSettings::from_env()?,
            cors: cors_config::init_cors(),
        })
    }
}
