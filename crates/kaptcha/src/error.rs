//! Error handling for the kaptcha binary.

use std::{io, result};

use thiserror::Error;

/// Convenient result type for CLI operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper for standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The properties file could not be read or parsed.
    #[error(transparent)]
    Properties(#[from] kaptcha_config::PropertiesError),
    /// A setting has an invalid value.
    #[error(transparent)]
    Config(#[from] kaptcha_config::ConfigError),
    /// The captcha could not be served.
    #[error(transparent)]
    Service(#[from] kaptcha_service::Error),
    /// Settings could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
