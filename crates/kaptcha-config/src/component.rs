//! Capability contracts and the name-keyed component registry.
//!
//! Every pipeline slot (producer, text, word rendering, obscurification,
//! noise, background) is a trait object constructed by name from the
//! [`ComponentRegistry`]. Implementations that need access to the resolved
//! configuration opt in through [`Component::as_configurable`]; the resolver
//! calls [`Configurable::configure`] exactly once, right after construction.

use std::{
    any::{Any, TypeId, type_name},
    collections::HashMap,
    fmt,
    sync::Arc,
};

use image::RgbaImage;
use thiserror::Error;

use crate::{Config, ConfigError, builtin};

/// Components that read their settings from the configuration.
pub trait Configurable {
    /// Receive the configuration. Called once, before the component is used.
    ///
    /// Settings are resolved here, so an invalid value surfaces while the
    /// component is being constructed rather than when it is first used.
    fn configure(&mut self, config: &Config) -> Result<(), ConfigError>;
}

/// Base contract shared by every capability.
pub trait Component {
    /// Expose the configuration hook, if this component has one.
    fn as_configurable(&mut self) -> Option<&mut dyn Configurable> {
        None
    }
}

/// Produces the captcha answer and its image.
pub trait Producer: Component + Send + Sync {
    /// Create a new answer text.
    fn create_text(&self) -> String;
    /// Render `text` into a finished captcha image.
    fn create_image(&self, text: &str) -> RgbaImage;
}

/// Produces random answer text.
pub trait TextProducer: Component + Send + Sync {
    /// Create a new answer text.
    fn text(&self) -> String;
}

/// Draws a word onto a fresh canvas.
pub trait WordRenderer: Component + Send + Sync {
    /// Render `word` onto a `width` x `height` canvas.
    fn render_word(&self, word: &str, width: u32, height: u32) -> RgbaImage;
}

/// Distorts a rendered word.
pub trait GimpyEngine: Component + Send + Sync {
    /// Return a distorted copy of `image`.
    fn distorted_image(&self, image: RgbaImage) -> RgbaImage;
}

/// Adds noise to an image in place.
pub trait NoiseProducer: Component + Send + Sync {
    /// Draw noise; the factors position the noise across the image.
    fn make_noise(
        &self,
        image: &mut RgbaImage,
        factor_one: f32,
        factor_two: f32,
        factor_three: f32,
        factor_four: f32,
    );
}

/// Places a background behind a rendered word.
pub trait BackgroundProducer: Component + Send + Sync {
    /// Return `image` composited over the background.
    fn add_background(&self, image: RgbaImage) -> RgbaImage;
}

/// Failure to construct a named component.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
    /// No implementation is registered under the name.
    #[error("component not found: {name}")]
    NotFound {
        /// Requested implementation name.
        name: String,
    },
    /// The implementation exists but does not provide the requested capability.
    #[error("component '{name}' does not provide {capability}")]
    Incompatible {
        /// Requested implementation name.
        name: String,
        /// Type name of the expected capability.
        capability: &'static str,
    },
}

/// Type-erased constructor yielding a `Box<Box<T>>` for some capability `T`.
type Constructor = Arc<dyn Fn() -> Box<dyn Any + Send> + Send + Sync>;

/// Implementations keyed by name, then by capability.
#[derive(Clone, Default)]
pub struct ComponentRegistry {
    /// Constructors by implementation name and capability type.
    constructors: HashMap<String, HashMap<TypeId, Constructor>>,
}

impl ComponentRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in component registered.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        builtin::register_all(&mut registry);
        registry
    }

    /// Register `ctor` as the implementation `name` of capability `T`.
    ///
    /// One name may provide several capabilities; registering the same name
    /// and capability twice replaces the earlier constructor.
    pub fn register<T, F>(&mut self, name: impl Into<String>, ctor: F) -> &mut Self
    where
        T: ?Sized + Send + 'static,
        F: Fn() -> Box<T> + Send + Sync + 'static,
    {
        let erased: Constructor = Arc::new(move || Box::new(ctor()) as Box<dyn Any + Send>);
        self.constructors
            .entry(name.into())
            .or_default()
            .insert(TypeId::of::<T>(), erased);
        self
    }

    /// True when some capability is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered implementation names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Construct implementation `name` as capability `T`.
    pub fn construct<T>(&self, name: &str) -> Result<Box<T>, InstanceError>
    where
        T: ?Sized + 'static,
    {
        let incompatible = || InstanceError::Incompatible {
            name: name.to_string(),
            capability: type_name::<T>(),
        };
        let by_capability = self
            .constructors
            .get(name)
            .ok_or_else(|| InstanceError::NotFound {
                name: name.to_string(),
            })?;
        let ctor = by_capability.get(&TypeId::of::<T>()).ok_or_else(incompatible)?;
        ctor()
            .downcast::<Box<T>>()
            .map(|boxed| *boxed)
            .map_err(|_| incompatible())
    }
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("names", &self.names())
            .finish()
    }
}
