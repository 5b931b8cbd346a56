use std::{env, net::IpAddr, str::FromStr};

use dotenvy::dotenv;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::errors::ConfigError;

// Server-specific configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub workers: usize,
}

// Application-specific configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub name: String,
    pub version: String,
    pub environment: Environment,
    pub log_level: String,
}

// Environment enum for different deployment environments
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Testing,
    Production,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "testing" | "test" => Ok(Environment::Testing),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!(
                "Invalid environment: {}. Must be one of: development, testing, production",
                s
            )),
        }
    }
}

type ConfigResult<T> = Result<T, ConfigError>;

// SQLite store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout_seconds: u64,
    pub create_if_missing: bool,
}

// Short link generation settings
#[derive(Debug, Clone, Deserialize)]
pub struct ShortenerConfig {
    /// Prefix of every returned `short_url`, always ending in `/`
    pub base_url: String,
    pub code_length: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub app: AppConfig,
    pub db: DatabaseConfig,
    pub shortener: ShortenerConfig,
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> ConfigResult<Self> {
        match dotenv() {
            Ok(_) => debug!(".env file loaded successfully"),
            Err(e) => warn!("Could not load .env file: {}", e),
        }

        let server = ServerConfig {
            host: get_env_or_default("SERVER_HOST", "0.0.0.0")?,
            port: get_env_or_default("SERVER_PORT", "8080")?,
            workers: get_env_or_default("SERVER_WORKERS", "4")?,
        };

        let version = env!("CARGO_PKG_VERSION").to_string();

        let app = AppConfig {
            name: get_env_or_default("APP_NAME", "url-shortener")?,
            version: env::var("APP_VERSION").unwrap_or(version),
            environment: get_env_or_default("APP_ENVIRONMENT", "development")?,
            log_level: get_env_or_default("RUST_LOG", "info")?,
        };

        let db = DatabaseConfig {
            url: get_env_or_default("DATABASE_URL", "sqlite://urls.db")?,
            max_connections: get_env_or_default("DATABASE_MAX_CONNECTIONS", "5")?,
            connect_timeout_seconds: get_env_or_default("DATABASE_CONNECT_TIMEOUT_SECONDS", "5")?,
            create_if_missing: get_env_or_default("DATABASE_CREATE_IF_MISSING", "true")?,
        };

        let base_url: String = get_env_or_default("SHORTENER_BASE_URL", "http://localhost:8080/")?;
        let code_length: usize = get_env_or_default("SHORTENER_CODE_LENGTH", "6")?;
        if code_length == 0 {
            return Err(ConfigError::ParseError(
                "SHORTENER_CODE_LENGTH must be greater than zero".to_string(),
            ));
        }

        let shortener = ShortenerConfig {
            base_url: normalize_base_url(&base_url),
            code_length,
        };

        let config = Config {
            server,
            app,
            db,
            shortener,
        };
        info!("Configuration loaded successfully");
        debug!("Loaded config: {:?}", config);

        Ok(config)
    }
}

/// Trims trailing slashes and appends exactly one
fn normalize_base_url(base_url: &str) -> String {
    format!("{}/", base_url.trim_end_matches('/'))
}

/// Helper function to get an env variable with a default value
fn get_env_or_default<T: FromStr>(key: &str, default: &str) -> ConfigResult<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| ConfigError::ParseError(format!("Could not parse {}: {}", key, e))),
        Err(env::VarError::NotPresent) => {
            debug!("{} not set, using default: {}", key, default);
            default.parse::<T>().map_err(|e| {
                ConfigError::ParseError(format!("Could not parse default for {}: {}", key, e))
            })
        }
        Err(e) => Err(ConfigError::EnvVarError(e)),
    }
}
