//! Configuration management for the bursar wallet core

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::WalletError;

/// Main configuration for the wallet core
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletConfig {
    /// Registration form rules
    pub registration: RegistrationConfig,
    /// Account number issuance
    pub account: AccountConfig,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            registration: RegistrationConfig::default(),
            account: AccountConfig::default(),
        }
    }
}

/// Rules applied to registration input before it reaches the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationConfig {
    /// Maximum length of first and last names
    pub max_name_length: usize,
    /// Minimum login length
    pub min_login_length: usize,
    /// Maximum login length
    pub max_login_length: usize,
    /// Minimum password length
    pub min_password_length: usize,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            max_name_length: 64,
            min_login_length: 3,
            max_login_length: 32,
            min_password_length: 6,
        }
    }
}

/// Bounds for generated account numbers
///
/// Both bounds must stay inside the 9-digit range so every issued number is
/// a 9-digit numeric string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Inclusive lower bound of generated account numbers
    pub number_min: u32,
    /// Exclusive upper bound of generated account numbers
    pub number_max: u32,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            number_min: 100_000_000,
            number_max: 999_000_000,
        }
    }
}

impl WalletConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WalletError> {
        let content = fs::read_to_string(path).map_err(|e| WalletError::Configuration {
            message: format!("Failed to read config file: {}", e),
            field: "config_file".to_string(),
        })?;

        let config: WalletConfig = toml::from_str(&content).map_err(|e| WalletError::Configuration {
            message: format!("Failed to parse config file: {}", e),
            field: "config_format".to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), WalletError> {
        let content = toml::to_string_pretty(self).map_err(|e| WalletError::Configuration {
            message: format!("Failed to serialize config: {}", e),
            field: "config_serialization".to_string(),
        })?;

        fs::write(path, content).map_err(|e| WalletError::Configuration {
            message: format!("Failed to write config file: {}", e),
            field: "config_write".to_string(),
        })?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), WalletError> {
        // Validate registration rules
        if self.registration.min_login_length == 0 {
            return Err(WalletError::Configuration {
                message: "Minimum login length must be greater than 0".to_string(),
                field: "registration.min_login_length".to_string(),
            });
        }

        if self.registration.max_login_length < self.registration.min_login_length {
            return Err(WalletError::Configuration {
                message: "Maximum login length must not be less than the minimum".to_string(),
                field: "registration.max_login_length".to_string(),
            });
        }

        if self.registration.min_password_length == 0 {
            return Err(WalletError::Configuration {
                message: "Minimum password length must be greater than 0".to_string(),
                field: "registration.min_password_length".to_string(),
            });
        }

        if self.registration.max_name_length == 0 {
            return Err(WalletError::Configuration {
                message: "Maximum name length must be greater than 0".to_string(),
                field: "registration.max_name_length".to_string(),
            });
        }

        // Validate account number bounds
        if self.account.number_min < 100_000_000 {
            return Err(WalletError::Configuration {
                message: "Account numbers must have 9 digits".to_string(),
                field: "account.number_min".to_string(),
            });
        }

        if self.account.number_max > 1_000_000_000 {
            return Err(WalletError::Configuration {
                message: "Account numbers must have 9 digits".to_string(),
                field: "account.number_max".to_string(),
            });
        }

        if self.account.number_min >= self.account.number_max {
            return Err(WalletError::Configuration {
                message: "Account number lower bound must be less than the upper bound".to_string(),
                field: "account.number_range".to_string(),
            });
        }

        Ok(())
    }

    /// Create a production-ready configuration
    pub fn production() -> Self {
        Self {
            registration: RegistrationConfig {
                max_name_length: 64,
                min_login_length: 4,
                max_login_length: 32,
                min_password_length: 10, // Longer minimum for real deployments
            },
            account: AccountConfig::default(),
        }
    }

    /// Create a development configuration with relaxed settings
    pub fn development() -> Self {
        Self {
            registration: RegistrationConfig {
                max_name_length: 128,
                min_login_length: 1,
                max_login_length: 64,
                min_password_length: 3, // Short passwords for faster testing
            },
            account: AccountConfig::default(),
        }
    }
}
