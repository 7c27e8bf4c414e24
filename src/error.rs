//! Error types and handling for the Flydaddy application

use thiserror::Error;

/// Main error type for the Flydaddy application
#[derive(Error, Debug)]
pub enum FlydaddyError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Catalog data errors found while loading the embedded collections
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl FlydaddyError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new catalog error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            FlydaddyError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            FlydaddyError::Catalog { .. } => {
                "The travel catalog could not be loaded. The bundled data is invalid.".to_string()
            }
            FlydaddyError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            FlydaddyError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            FlydaddyError::General { message } => message.clone(),
        }
    }
}
