//! Registration form validation
//!
//! Form-level checks applied by the wallet service before a registration
//! reaches the player registry. Uniqueness semantics stay in the registry;
//! failures here carry the `Validation` error kind.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::RegistrationConfig;
use crate::error::{WalletError, WalletResult};

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
    })
}

fn login_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("valid login pattern"))
}

/// Validate a registration form against the configured rules
pub fn check_registration(
    first_name: &str,
    last_name: &str,
    email: &str,
    login: &str,
    password: &str,
    rules: &RegistrationConfig,
) -> WalletResult<()> {
    check_name(first_name, "first_name", rules)?;
    check_name(last_name, "last_name", rules)?;

    if !email_pattern().is_match(email) {
        return Err(WalletError::Validation {
            message: format!("\"{}\" is not a valid email address", email),
            field: Some("email".to_string()),
        });
    }

    if login.len() < rules.min_login_length || login.len() > rules.max_login_length {
        return Err(WalletError::Validation {
            message: format!(
                "login must be between {} and {} characters",
                rules.min_login_length, rules.max_login_length
            ),
            field: Some("login".to_string()),
        });
    }

    if !login_pattern().is_match(login) {
        return Err(WalletError::Validation {
            message: "login may only contain letters, digits, '.', '_' and '-'".to_string(),
            field: Some("login".to_string()),
        });
    }

    if password.len() < rules.min_password_length {
        return Err(WalletError::Validation {
            message: format!("password must be at least {} characters", rules.min_password_length),
            field: Some("password".to_string()),
        });
    }

    Ok(())
}

fn check_name(value: &str, field: &str, rules: &RegistrationConfig) -> WalletResult<()> {
    if value.trim().is_empty() {
        return Err(WalletError::Validation {
            message: format!("{} must not be empty", field),
            field: Some(field.to_string()),
        });
    }

    if value.len() > rules.max_name_length {
        return Err(WalletError::Validation {
            message: format!("{} must be at most {} characters", field, rules.max_name_length),
            field: Some(field.to_string()),
        });
    }

    Ok(())
}
