//! Typed access to every kaptcha setting.

use std::sync::Arc;

use serde::Serialize;

use crate::{
    Color, ConfigError, ConfigResolver, ConfigStore, FontDescriptor, builtin,
    component::{
        BackgroundProducer, Component, GimpyEngine, NoiseProducer, Producer, TextProducer,
        WordRenderer,
    },
    defaults, keys,
};

/// A configuration store paired with the resolver that interprets it.
///
/// This is the context handed to [`Configurable`](crate::Configurable)
/// components. Cloning is cheap; the store is shared and never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    /// Raw entries.
    store: Arc<ConfigStore>,
    /// Resolver applied to the raw entries.
    resolver: ConfigResolver,
}

impl Config {
    /// Config over `store` using the built-in components and fonts.
    pub fn new(store: ConfigStore) -> Self {
        Self::with_resolver(store, ConfigResolver::default())
    }

    /// Config over `store` using a custom resolver.
    pub fn with_resolver(store: ConfigStore, resolver: ConfigResolver) -> Self {
        Self {
            store: Arc::new(store),
            resolver,
        }
    }

    /// The raw store.
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// The resolver.
    pub fn resolver(&self) -> &ConfigResolver {
        &self.resolver
    }

    /// Raw value for `key`.
    fn raw(&self, key: &str) -> Option<&str> {
        self.store.get(key)
    }

    /// Resolve the component configured under `key`, falling back to `default`.
    ///
    /// The resolver hands the default back untouched, so a configurable
    /// default is configured here instead.
    fn component<T>(&self, key: &str, default: fn() -> Box<T>) -> Result<Box<T>, ConfigError>
    where
        T: ?Sized + Component + 'static,
    {
        let raw = self.raw(key);
        let uses_default = raw.is_none_or(|name| name.trim().is_empty());
        let mut component = self.resolver.instance(key, raw, default(), self)?;
        if uses_default {
            if let Some(configurable) = component.as_configurable() {
                configurable.configure(self)?;
            }
        }
        Ok(component)
    }

    /// Whether a border is drawn.
    pub fn is_border_drawn(&self) -> Result<bool, ConfigError> {
        self.resolver
            .boolean(keys::BORDER, self.raw(keys::BORDER), defaults::BORDER)
    }

    /// Border color.
    pub fn border_color(&self) -> Result<Color, ConfigError> {
        self.resolver.color(
            keys::BORDER_COLOR,
            self.raw(keys::BORDER_COLOR),
            defaults::BORDER_COLOR,
        )
    }

    /// Border thickness in pixels.
    pub fn border_thickness(&self) -> Result<u32, ConfigError> {
        self.resolver.positive_int(
            keys::BORDER_THICKNESS,
            self.raw(keys::BORDER_THICKNESS),
            defaults::BORDER_THICKNESS,
        )
    }

    /// Noise color.
    pub fn noise_color(&self) -> Result<Color, ConfigError> {
        self.resolver.color(
            keys::NOISE_COLOR,
            self.raw(keys::NOISE_COLOR),
            defaults::NOISE_COLOR,
        )
    }

    /// Noise producer.
    pub fn noise_impl(&self) -> Result<Box<dyn NoiseProducer>, ConfigError> {
        self.component(keys::NOISE_IMPL, builtin::default_noise)
    }

    /// Obscurificator.
    pub fn obscurificator_impl(&self) -> Result<Box<dyn GimpyEngine>, ConfigError> {
        self.component(keys::OBSCURIFICATOR_IMPL, builtin::default_gimpy)
    }

    /// Overall producer.
    pub fn producer_impl(&self) -> Result<Box<dyn Producer>, ConfigError> {
        self.component(keys::PRODUCER_IMPL, builtin::default_producer)
    }

    /// Text producer.
    pub fn text_producer_impl(&self) -> Result<Box<dyn TextProducer>, ConfigError> {
        self.component(keys::TEXTPRODUCER_IMPL, builtin::default_text_producer)
    }

    /// Characters the answer is drawn from.
    pub fn text_producer_char_string(&self) -> Result<Vec<char>, ConfigError> {
        self.resolver.chars(
            keys::TEXTPRODUCER_CHAR_STRING,
            self.raw(keys::TEXTPRODUCER_CHAR_STRING),
            defaults::chars(),
        )
    }

    /// Answer length.
    pub fn text_producer_char_length(&self) -> Result<u32, ConfigError> {
        self.resolver.positive_int(
            keys::TEXTPRODUCER_CHAR_LENGTH,
            self.raw(keys::TEXTPRODUCER_CHAR_LENGTH),
            defaults::CHAR_LENGTH,
        )
    }

    /// Spacing between rendered characters.
    pub fn text_producer_char_space(&self) -> Result<u32, ConfigError> {
        self.resolver.positive_int(
            keys::TEXTPRODUCER_CHAR_SPACE,
            self.raw(keys::TEXTPRODUCER_CHAR_SPACE),
            defaults::CHAR_SPACE,
        )
    }

    /// Fonts at `size`; defaults to bold Arial and Courier.
    pub fn text_producer_fonts(&self, size: u32) -> Result<Vec<FontDescriptor>, ConfigError> {
        self.resolver.fonts(
            keys::TEXTPRODUCER_FONT_NAMES,
            self.raw(keys::TEXTPRODUCER_FONT_NAMES),
            size,
            defaults::fonts(size),
        )
    }

    /// Font point size.
    pub fn text_producer_font_size(&self) -> Result<u32, ConfigError> {
        self.resolver.positive_int(
            keys::TEXTPRODUCER_FONT_SIZE,
            self.raw(keys::TEXTPRODUCER_FONT_SIZE),
            defaults::FONT_SIZE,
        )
    }

    /// Text color.
    pub fn text_producer_font_color(&self) -> Result<Color, ConfigError> {
        self.resolver.color(
            keys::TEXTPRODUCER_FONT_COLOR,
            self.raw(keys::TEXTPRODUCER_FONT_COLOR),
            defaults::FONT_COLOR,
        )
    }

    /// Word renderer.
    pub fn word_renderer_impl(&self) -> Result<Box<dyn WordRenderer>, ConfigError> {
        self.component(keys::WORDRENDERER_IMPL, builtin::default_word_renderer)
    }

    /// Background producer.
    pub fn background_impl(&self) -> Result<Box<dyn BackgroundProducer>, ConfigError> {
        self.component(keys::BACKGROUND_IMPL, builtin::default_background)
    }

    /// Background gradient start color.
    pub fn background_color_from(&self) -> Result<Color, ConfigError> {
        self.resolver.color(
            keys::BACKGROUND_CLR_FROM,
            self.raw(keys::BACKGROUND_CLR_FROM),
            defaults::BACKGROUND_FROM,
        )
    }

    /// Background gradient end color.
    pub fn background_color_to(&self) -> Result<Color, ConfigError> {
        self.resolver.color(
            keys::BACKGROUND_CLR_TO,
            self.raw(keys::BACKGROUND_CLR_TO),
            defaults::BACKGROUND_TO,
        )
    }

    /// Image width in pixels.
    pub fn width(&self) -> Result<u32, ConfigError> {
        self.resolver.positive_int(
            keys::IMAGE_WIDTH,
            self.raw(keys::IMAGE_WIDTH),
            defaults::IMAGE_WIDTH,
        )
    }

    /// Image height in pixels.
    pub fn height(&self) -> Result<u32, ConfigError> {
        self.resolver.positive_int(
            keys::IMAGE_HEIGHT,
            self.raw(keys::IMAGE_HEIGHT),
            defaults::IMAGE_HEIGHT,
        )
    }

    /// Session attribute name for the answer text.
    pub fn session_key(&self) -> String {
        self.resolver.string(
            keys::SESSION_CONFIG_KEY,
            self.raw(keys::SESSION_CONFIG_KEY),
            defaults::SESSION_KEY,
        )
    }

    /// Session attribute name for the creation timestamp.
    pub fn session_date(&self) -> String {
        self.resolver.string(
            keys::SESSION_CONFIG_DATE,
            self.raw(keys::SESSION_CONFIG_DATE),
            defaults::SESSION_DATE,
        )
    }

    /// Resolve every value setting into a snapshot.
    ///
    /// Component keys are not constructed here; use the `*_impl` accessors.
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let font_size = self.text_producer_font_size()?;
        Ok(Settings {
            border: self.is_border_drawn()?,
            border_color: self.border_color()?,
            border_thickness: self.border_thickness()?,
            noise_color: self.noise_color()?,
            char_string: self.text_producer_char_string()?.into_iter().collect(),
            char_length: self.text_producer_char_length()?,
            char_space: self.text_producer_char_space()?,
            font_size,
            fonts: self.text_producer_fonts(font_size)?,
            font_color: self.text_producer_font_color()?,
            background_from: self.background_color_from()?,
            background_to: self.background_color_to()?,
            width: self.width()?,
            height: self.height()?,
            session_key: self.session_key(),
            session_date: self.session_date(),
        })
    }
}

/// Fully resolved value settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Whether a border is drawn.
    pub border: bool,
    /// Border color.
    pub border_color: Color,
    /// Border thickness in pixels.
    pub border_thickness: u32,
    /// Noise color.
    pub noise_color: Color,
    /// Characters the answer is drawn from.
    pub char_string: String,
    /// Answer length.
    pub char_length: u32,
    /// Spacing between rendered characters.
    pub char_space: u32,
    /// Font point size.
    pub font_size: u32,
    /// Fonts used for the answer.
    pub fonts: Vec<FontDescriptor>,
    /// Text color.
    pub font_color: Color,
    /// Background gradient start color.
    pub background_from: Color,
    /// Background gradient end color.
    pub background_to: Color,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Session attribute name for the answer text.
    pub session_key: String,
    /// Session attribute name for the creation timestamp.
    pub session_date: String,
}
