use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("config.missing_variable: {0}")]
    MissingVariable(&'static str),
    #[error("config.invalid_variable: {name}={value}")]
    InvalidVariable { name: &'static str, value: String },
}

/// Database settings loaded from the environment
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub migrations_path: String,
    pub run_migrations: bool,
}

impl DatabaseSettings {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
    /// - MIGRATIONS_PATH: migrations directory (default: "infrastructure/persistence/migrations")
    /// - RUN_MIGRATIONS: apply migrations at startup (default: "true")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup("DATABASE_URL").ok_or(ConfigError::MissingVariable("DATABASE_URL"))?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidVariable {
                    name: "DATABASE_MAX_CONNECTIONS",
                    value,
                })?,
            None => 5,
        };

        let migrations_path =
            lookup("MIGRATIONS_PATH").unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string());

        let run_migrations = match lookup("RUN_MIGRATIONS") {
            Some(value) => value
                .parse::<bool>()
                .map_err(|_| ConfigError::InvalidVariable {
                    name: "RUN_MIGRATIONS",
                    value,
                })?,
            None => true,
        };

        Ok(Self {
            url,
            max_connections,
            migrations_path,
            run_migrations,
        })
    }
}

/// Initialize the database connection pool and apply pending migrations
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let config =
        DatabaseConfig::new(settings.url.clone()).with_max_connections(settings.max_connections);
    let pool = create_postgres_pool(&config).await?;

    if settings.run_migrations {
        run_migrations(&pool, &settings.migrations_path).await?;
    }

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn should_require_database_url() {
        let result = DatabaseSettings::from_lookup(lookup_from(&[]));

        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingVariable("DATABASE_URL")
        );
    }

    #[test]
    fn should_apply_defaults_when_only_url_is_set() {
        let settings =
            DatabaseSettings::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db/products")]))
                .unwrap();

        assert_eq!(settings.url, "postgres://db/products");
        assert_eq!(settings.max_connections, 5);
        assert_eq!(settings.migrations_path, DEFAULT_MIGRATIONS_PATH);
        assert!(settings.run_migrations);
    }

    #[test]
    fn should_reject_non_numeric_pool_size() {
        let result = DatabaseSettings::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/products"),
            ("DATABASE_MAX_CONNECTIONS", "many"),
        ]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidVariable {
                name: "DATABASE_MAX_CONNECTIONS",
                ..
            })
        ));
    }

    #[test]
    fn should_allow_disabling_migrations() {
        let settings = DatabaseSettings::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/products"),
            ("RUN_MIGRATIONS", "false"),
        ]))
        .unwrap();

        assert!(!settings.run_migrations);
    }
}
