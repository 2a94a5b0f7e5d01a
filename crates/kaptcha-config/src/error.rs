//! Error types for configuration resolution.

use std::{io, num::ParseIntError, path::PathBuf};

use thiserror::Error;

use crate::{color::UnknownColorName, component::InstanceError};

#[derive(Debug, Error)]
#[error(
    "Invalid value '{value}' for config parameter '{key}'.{}",
    clause_suffix(.clause)
)]
/// Error raised when a non-empty raw value cannot be resolved for a key.
///
/// The rendered message always has the shape
/// `Invalid value '<raw>' for config parameter '<key>'.`, optionally followed by
/// a single space and a type-specific clause.
pub struct ConfigError {
    /// Configuration key being resolved.
    key: String,
    /// Raw value that failed to resolve.
    value: String,
    /// Optional type-specific clause appended to the message.
    clause: Option<String>,
    /// Low-level failure that triggered this error, if any.
    #[source]
    source: Option<ConfigErrorCause>,
}

/// Render the optional clause with its leading separator.
fn clause_suffix(clause: &Option<String>) -> String {
    clause
        .as_deref()
        .map(|c| format!(" {c}"))
        .unwrap_or_default()
}

impl ConfigError {
    /// Build a bare error for `key` with the offending raw `value`.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            clause: None,
            source: None,
        }
    }

    /// Append a type-specific clause to the message.
    pub fn with_clause(mut self, clause: impl Into<String>) -> Self {
        self.clause = Some(clause.into());
        self
    }

    /// Attach the low-level cause.
    pub fn with_cause(mut self, cause: impl Into<ConfigErrorCause>) -> Self {
        self.source = Some(cause.into());
        self
    }

    /// Key that failed to resolve.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Raw value that failed to resolve.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Type-specific clause, when one was appended.
    pub fn clause(&self) -> Option<&str> {
        self.clause.as_deref()
    }

    /// Underlying cause, when one was recorded.
    pub fn cause(&self) -> Option<&ConfigErrorCause> {
        self.source.as_ref()
    }
}

/// Low-level failures carried by [`ConfigError`] for diagnostics.
#[derive(Debug, Error)]
pub enum ConfigErrorCause {
    /// Text could not be parsed as a decimal integer.
    #[error(transparent)]
    Number(#[from] ParseIntError),
    /// A color name is not present in any registry.
    #[error(transparent)]
    ColorName(#[from] UnknownColorName),
    /// A comma separated color had the wrong number of components.
    #[error("expected 3 or 4 color components, found {found}")]
    ColorComponents {
        /// Number of components present in the raw value.
        found: usize,
    },
    /// A color channel was outside `0..=255`.
    #[error("color channel {value} is outside 0..=255")]
    ColorChannel {
        /// Offending channel value.
        value: i32,
    },
    /// A boolean was not one of the accepted literals.
    #[error("expected 'yes' or 'no'")]
    Boolean,
    /// A named component could not be constructed.
    #[error(transparent)]
    Instance(#[from] InstanceError),
}

/// Errors produced while reading a properties source into a store.
#[derive(Debug, Error)]
pub enum PropertiesError {
    /// I/O error while reading the source file.
    #[error("Read error at {}: {source}", path.display())]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// A non-comment line without a `=` or `:` separator.
    #[error("Properties parse error at line {line}: expected 'key=value', found '{text}'")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Offending line, trimmed.
        text: String,
    },
}
