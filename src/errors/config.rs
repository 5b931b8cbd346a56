use std::env::VarError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was present but unreadable (e.g. not unicode).
    #[error("Environment variable error: {0}")]
    EnvVarError(#[from] VarError),

    /// A configuration value could not be parsed into its target type.
    #[error("Parse error: {0}")]
    ParseError(String),
}
