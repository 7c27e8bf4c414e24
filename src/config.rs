//! Configuration management for the Flydaddy application
//!
//! Handles loading configuration from files and environment variables, and
//! provides validation for all configuration settings.

use crate::FlydaddyError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the Flydaddy application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlydaddyConfig {
    /// Web server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Contact dispatch configuration
    #[serde(default)]
    pub contact: ContactConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Web server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the server listens on
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Directory holding the built frontend bundle
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Contact dispatch settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Dialer number in E.164 form, e.g. "+919951125818"
    #[serde(default = "default_phone_number")]
    pub phone_number: String,
    /// WhatsApp number, digits only (no leading +)
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_server_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "frontend/dist".to_string()
}

fn default_phone_number() -> String {
    "+919951125818".to_string()
}

fn default_whatsapp_number() -> String {
    "919951125818".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone_number: default_phone_number(),
            whatsapp_number: default_whatsapp_number(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for FlydaddyConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            contact: ContactConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl FlydaddyConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with FLYDADDY_ prefix
        builder = builder.add_source(
            Environment::with_prefix("FLYDADDY")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: FlydaddyConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("flydaddy").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_contact_numbers()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the contact dispatch numbers
    fn validate_contact_numbers(&self) -> Result<()> {
        let digits = self.contact.phone_number.strip_prefix('+').unwrap_or("");
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(FlydaddyError::config(
                "Contact phone number must be in E.164 form, e.g. +919951125818",
            )
            .into());
        }

        if self.contact.whatsapp_number.is_empty()
            || !self
                .contact
                .whatsapp_number
                .chars()
                .all(|c| c.is_ascii_digit())
        {
            return Err(FlydaddyError::config(
                "WhatsApp number must contain digits only (no leading +)",
            )
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(FlydaddyError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(FlydaddyError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if self.server.static_dir.is_empty() {
            return Err(FlydaddyError::config("Static directory cannot be empty").into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FlydaddyConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.static_dir, "frontend/dist");
        assert_eq!(config.contact.phone_number, "+919951125818");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = FlydaddyConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_phone_number_needs_plus() {
        let mut config = FlydaddyConfig::default();
        config.contact.phone_number = "919951125818".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("E.164"));
    }

    #[test]
    fn test_config_validation_whatsapp_number_digits_only() {
        let mut config = FlydaddyConfig::default();
        config.contact.whatsapp_number = "+919951125818".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("digits only"));
    }

    #[test]
    fn test_config_path_generation() {
        let path = FlydaddyConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("flydaddy"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
