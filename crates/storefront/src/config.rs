//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults run a local instance with
//! the production ordering channels.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL (default: <http://localhost:3000>)
//! - `ORDER_WHATSAPP_NUMBER` - WhatsApp destination in international
//!   format without `+` (default: 919108695696)
//! - `ORDER_UPI_VPA` - UPI virtual payment address of the payee
//!   (default: 9108695696@jupiteraxis)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Outbound ordering channel configuration
    pub ordering: OrderChannelConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Outbound ordering channels.
///
/// Orders are handed off to external apps: a pre-filled WhatsApp chat
/// and a UPI payment deep link. Neither is called over the network by
/// this service; both are navigation targets for the shopper's device.
#[derive(Debug, Clone)]
pub struct OrderChannelConfig {
    /// WhatsApp destination number, international format without `+`
    pub whatsapp_number: String,
    /// UPI virtual payment address (e.g. `name@bank`)
    pub upi_vpa: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;
        let base_url = get_env_or_default("STOREFRONT_BASE_URL", "http://localhost:3000");
        let ordering = OrderChannelConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            base_url,
            ordering,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl OrderChannelConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let whatsapp_number = get_env_or_default("ORDER_WHATSAPP_NUMBER", "919108695696");
        validate_whatsapp_number(&whatsapp_number)
            .map_err(|e| ConfigError::InvalidEnvVar("ORDER_WHATSAPP_NUMBER".to_string(), e))?;

        let upi_vpa = get_env_or_default("ORDER_UPI_VPA", "9108695696@jupiteraxis");
        validate_upi_vpa(&upi_vpa)
            .map_err(|e| ConfigError::InvalidEnvVar("ORDER_UPI_VPA".to_string(), e))?;

        Ok(Self {
            whatsapp_number,
            upi_vpa,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate a WhatsApp destination number (digits only, country code
/// included, no `+`).
fn validate_whatsapp_number(number: &str) -> Result<(), String> {
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err("must contain only digits (international format without '+')".to_string());
    }
    if !(10..=15).contains(&number.len()) {
        return Err(format!(
            "must be 10-15 digits including country code (got {})",
            number.len()
        ));
    }
    Ok(())
}

/// Validate a UPI virtual payment address (`handle@provider`).
fn validate_upi_vpa(vpa: &str) -> Result<(), String> {
    match vpa.split_once('@') {
        Some((handle, provider)) if !handle.is_empty() && !provider.is_empty() => Ok(()),
        _ => Err("must be of the form handle@provider".to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_whatsapp_number_valid() {
        assert!(validate_whatsapp_number("919108695696").is_ok());
        assert!(validate_whatsapp_number("9876543210").is_ok());
    }

    #[test]
    fn test_validate_whatsapp_number_rejects_plus() {
        assert!(validate_whatsapp_number("+919108695696").is_err());
    }

    #[test]
    fn test_validate_whatsapp_number_rejects_short() {
        assert!(validate_whatsapp_number("12345").is_err());
        assert!(validate_whatsapp_number("").is_err());
    }

    #[test]
    fn test_validate_upi_vpa_valid() {
        assert!(validate_upi_vpa("9108695696@jupiteraxis").is_ok());
        assert!(validate_upi_vpa("shop@okaxis").is_ok());
    }

    #[test]
    fn test_validate_upi_vpa_invalid() {
        assert!(validate_upi_vpa("no-at-sign").is_err());
        assert!(validate_upi_vpa("@bank").is_err());
        assert!(validate_upi_vpa("handle@").is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            ordering: OrderChannelConfig {
                whatsapp_number: "919108695696".to_string(),
                upi_vpa: "9108695696@jupiteraxis".to_string(),
            },
            sentry_dsn: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}
