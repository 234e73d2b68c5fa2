// src/shared/config.rs
use std::env;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub admin_api_key: String,
    pub rust_env: String,
    pub run_migrations: bool,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the
    /// process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        // Try .env.{environment} first, then fall back to .env
        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| -> Result<String, ConfigError> {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let port_raw = required("PORT")?;
        let port = port_raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
            name: "PORT",
            value: port_raw.clone(),
        })?;

        let run_migrations = match lookup("RUN_MIGRATIONS") {
            None => true,
            Some(raw) => match raw.trim().to_lowercase().as_str() {
                "" | "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "RUN_MIGRATIONS",
                        value: raw,
                    })
                }
            },
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            host: required("HOST")?,
            port,
            admin_api_key: required("ADMIN_API_KEY")?,
            rust_env: lookup("RUST_ENV").unwrap_or_else(|| "development".to_string()),
            run_migrations,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;
    use std::collections::HashMap;

    fn base_vars() -> HashMap<&'static str, &'static str> {
        hashmap! {
            "DATABASE_URL" => "postgres://localhost/portfolio",
            "HOST" => "127.0.0.1",
            "PORT" => "8080",
            "ADMIN_API_KEY" => "secret-key",
        }
    }

    fn load(vars: &HashMap<&'static str, &'static str>) -> Result<AppConfig, ConfigError> {
        AppConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()))
    }

    #[test]
    fn loads_required_values_with_defaults() {
        let config = load(&base_vars()).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.admin_api_key, "secret-key");
        assert_eq!(config.rust_env, "development");
        assert!(config.run_migrations);
        assert_eq!(config.server_url(), "127.0.0.1:8080");
    }

    #[test]
    fn missing_api_key_is_reported() {
        let mut vars = base_vars();
        vars.remove("ADMIN_API_KEY");

        assert_eq!(load(&vars).unwrap_err(), ConfigError::Missing("ADMIN_API_KEY"));
    }

    #[test]
    fn blank_value_counts_as_missing() {
        let mut vars = base_vars();
        vars.insert("DATABASE_URL", "  ");

        assert_eq!(load(&vars).unwrap_err(), ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let mut vars = base_vars();
        vars.insert("PORT", "http");

        assert!(matches!(
            load(&vars).unwrap_err(),
            ConfigError::Invalid { name: "PORT", .. }
        ));
    }

    #[test]
    fn migrations_can_be_disabled() {
        let mut vars = base_vars();
        vars.insert("RUN_MIGRATIONS", "false");

        assert!(!load(&vars).unwrap().run_migrations);

        vars.insert("RUN_MIGRATIONS", "maybe");
        assert!(load(&vars).is_err());
    }
}
