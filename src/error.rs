//! Error handling for the template catalog library.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. Only a failed catalog fetch is
//! retryable from the shell; everything else points at local state (config,
//! preferences, selection).
//!
//! # Examples
//!
//! ```
//! use template_catalog::error::{Error, Result};
//!
//! fn lookup(id: &str) -> Result<()> {
//!     Err(Error::not_found(id))
//! }
//!
//! assert!(lookup("welcome").is_err());
//! ```

use thiserror::Error;

/// Message shown for every catalog fetch failure, whatever the cause.
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to fetch templates";

/// Result type for template catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for template catalog operations
#[derive(Debug, Error)]
pub enum Error {
    /// Remote catalog unavailable, non-success status or undecodable body
    #[error("Failed to fetch templates: {0}")]
    Fetch(String),

    /// The catalog was used before any fetch completed
    #[error("Template catalog not loaded")]
    NotLoaded,

    /// No template with the given id in the loaded catalog
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// An operation needed an open template but none is selected
    #[error("No template selected")]
    NoSelection,

    /// Persisted display preference could not be read or written
    #[error("Preferences error: {0}")]
    Preferences(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Usage code template failed to render
    #[error("Render error: {0}")]
    Render(#[from] tera::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a new fetch failure
    pub fn fetch<S: Into<String>>(msg: S) -> Self {
        Self::Fetch(msg.into())
    }

    /// Create a new template-not-found error
    pub fn not_found<S: Into<String>>(template_id: S) -> Self {
        Self::TemplateNotFound(template_id.into())
    }

    /// Create a new preferences error
    pub fn preferences<S: Into<String>>(msg: S) -> Self {
        Self::Preferences(msg.into())
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the user can recover by retrying the fetch
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_fetch_error_uses_fixed_message() {
        let error = Error::fetch("HTTP 503 Service Unavailable");
        assert!(error.is_fetch_failure());
        assert!(error.to_string().starts_with(FETCH_FAILURE_MESSAGE));
        assert!(error.to_string().contains("HTTP 503"));
    }

    #[test]
    fn test_not_found_creation() {
        let error = Error::not_found("welcome-email");
        assert!(matches!(error, Error::TemplateNotFound(_)));
        assert!(!error.is_fetch_failure());
        assert_eq!(error.to_string(), "Template not found: welcome-email");
    }

    #[test]
    fn test_not_loaded_is_not_retryable() {
        let error = Error::NotLoaded;
        assert!(!error.is_fetch_failure());
        assert_eq!(error.to_string(), "Template catalog not loaded");
        assert!(!error.to_string().contains(FETCH_FAILURE_MESSAGE));
    }

    #[test]
    fn test_config_creation() {
        let error = Error::config("api_url must use http or https");
        assert_eq!(
            error.to_string(),
            "Configuration error: api_url must use http or https"
        );
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
        assert!(error.to_string().contains("read-only"));
    }

    #[test]
    fn test_error_from_serde_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
        assert!(error.to_string().contains("JSON parsing error"));
    }
}
