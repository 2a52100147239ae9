//! Error types for the bursar wallet core

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the bursar wallet core
#[derive(Debug, Clone, Error)]
pub enum WalletError {
    #[error("player {first_name} {last_name} <{email}> is already registered")]
    DuplicatePlayer {
        first_name: String,
        last_name: String,
        email: String,
    },

    #[error("login \"{login}\" is already taken")]
    LoginNotUnique { login: String },

    #[error("unknown login \"{login}\"")]
    IncorrectLogin { login: String },

    #[error("incorrect password")]
    IncorrectPassword,

    #[error("transaction id \"{id}\" has already been used")]
    DuplicateTransactionId { id: String },

    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("invalid amount: {amount}")]
    InvalidAmount { amount: Decimal },

    #[error("validation failed: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    #[error("configuration error: {message}")]
    Configuration { message: String, field: String },

    #[error("internal state error in {component}: {message}")]
    Internal { message: String, component: String },
}

impl WalletError {
    /// Error for a poisoned lock around the named shared collection
    pub(crate) fn poisoned(component: &str) -> Self {
        WalletError::Internal {
            message: "lock poisoned".to_string(),
            component: component.to_string(),
        }
    }
}

/// Type alias for the main result type used throughout the library
pub type WalletResult<T> = Result<T, WalletError>;

/// Utility functions for credential digests
pub mod utils {
    use sha2::{Digest, Sha256};

    /// Compute SHA256 hash of input data
    pub fn sha256(data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize().into()
    }

    /// Convert bytes to hexadecimal string
    pub fn to_hex(bytes: &[u8]) -> String {
        hex::encode(bytes)
    }

    /// Compute SHA256 hash and return as hex string
    pub fn sha256_hex(data: &[u8]) -> String {
        to_hex(&sha256(data))
    }
}

/// Logging configuration and initialization
pub mod logging {
    use std::env;
    use tracing::Level;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    /// Logging output format
    #[derive(Debug, Clone)]
    pub enum LogFormat {
        Human,
        Json,
    }

    /// Logging output destination
    #[derive(Debug, Clone)]
    pub enum LogOutput {
        Stdout,
        Stderr,
    }

    /// Logging configuration
    #[derive(Debug, Clone)]
    pub struct LoggingConfig {
        pub level: Level,
        pub format: LogFormat,
        pub output: LogOutput,
    }

    impl Default for LoggingConfig {
        fn default() -> Self {
            Self {
                level: Level::INFO,
                format: LogFormat::Human,
                output: LogOutput::Stdout,
            }
        }
    }

    /// Initialize structured logging with the given configuration
    pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let env_filter = EnvFilter::builder()
            .with_default_directive(config.level.into())
            .from_env_lossy()
            .add_directive("bursar=trace".parse()?);

        let registry = tracing_subscriber::registry().with(env_filter);

        match config.format {
            LogFormat::Human => {
                let fmt_layer = fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true);

                match config.output {
                    LogOutput::Stdout => registry.with(fmt_layer.with_writer(std::io::stdout)).init(),
                    LogOutput::Stderr => registry.with(fmt_layer.with_writer(std::io::stderr)).init(),
                }
            }
            LogFormat::Json => {
                let fmt_layer = fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_span_events(fmt::format::FmtSpan::CLOSE);

                match config.output {
                    LogOutput::Stdout => registry.with(fmt_layer.with_writer(std::io::stdout)).init(),
                    LogOutput::Stderr => registry.with(fmt_layer.with_writer(std::io::stderr)).init(),
                }
            }
        }

        Ok(())
    }

    /// Initialize logging with environment-based configuration
    pub fn init_from_env() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let level = env::var("BURSAR_LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .parse::<Level>()
            .unwrap_or(Level::INFO);

        let format = match env::var("BURSAR_LOG_FORMAT").as_ref().map(|s| s.as_str()) {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Human,
        };

        let output = match env::var("BURSAR_LOG_OUTPUT").as_ref().map(|s| s.as_str()) {
            Ok("stderr") => LogOutput::Stderr,
            _ => LogOutput::Stdout,
        };

        let config = LoggingConfig { level, format, output };
        init_logging(config)
    }
}
