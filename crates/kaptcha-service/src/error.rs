//! Error handling for the captcha service.

use std::{io, result};

use thiserror::Error;

/// Convenient result type for service operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while building or serving captchas.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid service configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] kaptcha_config::ConfigError),
    /// The image could not be encoded.
    #[error("Image encoding error: {0}")]
    Encode(#[from] image::ImageError),
    /// The response body could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
