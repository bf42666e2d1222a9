use std::str::FromStr;

use serde::Deserialize;
use serde_with::serde_as;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use strum::{Display, EnumString};

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
    /// Origin of the frontend, allowed through CORS.
    pub app_url: String,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
    pub database_name: String,
    pub require_ssl: bool,
}

impl DatabaseSettings {
    pub fn without_db(&self) -> PgConnectOptions {
        let ssl_mode = if self.require_ssl {
            PgSslMode::Require
        } else {
            PgSslMode::Prefer
        };

        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .ssl_mode(ssl_mode)
    }

    pub fn with_db(&self) -> PgConnectOptions {
        self.without_db().database(&self.database_name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to determine the current directory: {0}")]
    CurrentDir(#[from] std::io::Error),
    #[error("unknown APP_ENVIRONMENT '{0}', expected 'local' or 'production'")]
    Environment(String),
    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

pub fn read_config() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir()?;
    let config_directory = base_path.join("config");

    let environment_name = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".into());
    let environment = Environment::from_str(&environment_name)
        .map_err(|_| ConfigError::Environment(environment_name.clone()))?;
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")))
        .add_source(config::File::from(
            config_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("TRACKER")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize::<Settings>()?)
}

#[derive(Display, Debug, EnumString, PartialEq, Eq)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_names_are_case_insensitive() {
        assert_eq!(Environment::from_str("LOCAL").unwrap(), Environment::Local);
        assert_eq!(
            Environment::from_str("Production").unwrap(),
            Environment::Production
        );
        assert!(Environment::from_str("staging").is_err());
        assert_eq!(Environment::Production.to_string(), "production");
    }
}
