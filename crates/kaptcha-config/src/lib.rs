//! Configuration resolution and pluggable components for kaptcha images.
//!
//! A [`ConfigStore`] holds raw string entries. A [`ConfigResolver`] turns raw
//! strings into typed values (colors, fonts, positive integers, character
//! sets, flags) and constructs named components from a
//! [`ComponentRegistry`]. [`Config`] pairs the two and exposes one accessor
//! per kaptcha setting.
#![warn(unsafe_op_in_unsafe_fn)]

pub mod builtin;
mod color;
mod component;
mod config;
mod defaults;
mod error;
mod font;
pub mod keys;
mod resolver;
mod store;

#[cfg(test)]
mod test_instance;
#[cfg(test)]
mod test_resolver;

pub use color::{Color, UnknownColorName};
pub use component::{
    BackgroundProducer, Component, ComponentRegistry, Configurable, GimpyEngine, InstanceError,
    NoiseProducer, Producer, TextProducer, WordRenderer,
};
pub use config::{Config, Settings};
pub use defaults::{SESSION_DATE, SESSION_KEY};
pub use error::{ConfigError, ConfigErrorCause, PropertiesError};
pub use font::{FALLBACK_FAMILY, FontCatalog, FontDescriptor, FontWeight};
pub use resolver::ConfigResolver;
pub use store::ConfigStore;
