//! Typed resolution of raw configuration strings.
//!
//! Every operation follows the same contract: an absent or empty raw value
//! returns the caller's default untouched; otherwise the value is parsed,
//! validated, and any failure is reported as a [`ConfigError`] for the key.

use std::sync::Arc;

use tracing::debug;

use crate::{
    Color, Config, ConfigError, FontCatalog, FontDescriptor,
    component::{Component, ComponentRegistry},
    error::ConfigErrorCause,
};

/// Clause appended when a color has the wrong number of components.
const COLOR_COMPONENTS_CLAUSE: &str = "Color can only have 3 (RGB) or 4 (RGB with Alpha) values.";
/// Clause appended when an integer is below 1.
const POSITIVE_INT_CLAUSE: &str = "Value must be greater than or equals to 1.";
/// Clause appended when a boolean is not a recognized literal.
const BOOLEAN_CLAUSE: &str = "Value must be either yes or no.";

/// The raw value, unless it is absent or empty.
fn present(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty())
}

/// Log and pass through a resolution failure.
fn rejected(err: ConfigError) -> ConfigError {
    debug!(key = err.key(), value = err.value(), error = %err, "config value rejected");
    err
}

/// Stateless engine turning raw strings into typed values.
///
/// The resolver only holds read-only tables (the component registry and the
/// font catalog), so it can be cloned freely and shared across threads.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    /// Implementations available to [`ConfigResolver::instance`].
    components: Arc<ComponentRegistry>,
    /// Families available to [`ConfigResolver::fonts`].
    fonts: Arc<FontCatalog>,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new(ComponentRegistry::builtin(), FontCatalog::builtin())
    }
}

impl ConfigResolver {
    /// Resolver backed by the given component registry and font catalog.
    pub fn new(components: ComponentRegistry, fonts: FontCatalog) -> Self {
        Self {
            components: Arc::new(components),
            fonts: Arc::new(fonts),
        }
    }

    /// Component registry used for dynamic instances.
    pub fn components(&self) -> &ComponentRegistry {
        &self.components
    }

    /// Font catalog used for font resolution.
    pub fn font_catalog(&self) -> &FontCatalog {
        &self.fonts
    }

    /// Resolve a color: `r,g,b[,a]` components or a named color.
    pub fn color(&self, key: &str, raw: Option<&str>, default: Color) -> Result<Color, ConfigError> {
        let Some(value) = present(raw) else {
            return Ok(default);
        };
        match value.find(',') {
            Some(idx) if idx > 0 => self.color_from_components(key, value),
            _ => self.color_from_name(key, value),
        }
    }

    /// Parse a comma separated `r,g,b` or `r,g,b,a` color.
    ///
    /// The component count is checked before channel ranges, so a value with
    /// both problems reports the count clause.
    pub fn color_from_components(&self, key: &str, value: &str) -> Result<Color, ConfigError> {
        let bare = || ConfigError::new(key, value);
        let mut parts: Vec<&str> = value.split(',').collect();
        while parts.last().is_some_and(|p| p.is_empty()) {
            parts.pop();
        }
        let found = parts.len();
        let channel = |idx: usize| -> Result<i32, ConfigError> {
            let part = parts.get(idx).ok_or_else(|| {
                rejected(bare().with_cause(ConfigErrorCause::ColorComponents { found }))
            })?;
            part.parse::<i32>()
                .map_err(|e| rejected(bare().with_cause(e)))
        };

        let (red, green, blue) = (channel(0)?, channel(1)?, channel(2)?);
        let alpha = match found {
            3 => 255,
            4 => channel(3)?,
            _ => {
                return Err(rejected(
                    bare()
                        .with_clause(COLOR_COMPONENTS_CLAUSE)
                        .with_cause(ConfigErrorCause::ColorComponents { found }),
                ));
            }
        };

        let mut channels = [0u8; 4];
        for (slot, v) in channels.iter_mut().zip([red, green, blue, alpha]) {
            *slot = u8::try_from(v).map_err(|_| {
                rejected(bare().with_cause(ConfigErrorCause::ColorChannel { value: v }))
            })?;
        }
        let [r, g, b, a] = channels;
        Ok(Color::rgba(r, g, b, a))
    }

    /// Look up a named color, ignoring case.
    pub fn color_from_name(&self, key: &str, value: &str) -> Result<Color, ConfigError> {
        Color::from_name(value).map_err(|e| rejected(ConfigError::new(key, value).with_cause(e)))
    }

    /// Resolve a comma separated list of font families into bold fonts of `size`.
    ///
    /// Families unknown to the catalog map to the fallback family; this never
    /// fails for a non-empty value.
    pub fn fonts(
        &self,
        key: &str,
        raw: Option<&str>,
        size: u32,
        default: Vec<FontDescriptor>,
    ) -> Result<Vec<FontDescriptor>, ConfigError> {
        let Some(value) = present(raw) else {
            return Ok(default);
        };
        let fonts: Vec<FontDescriptor> = value
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| {
                let family = self.fonts.resolve_family(name);
                if !family.eq_ignore_ascii_case(name) {
                    debug!(key, requested = name, family = %family, "unknown font family");
                }
                FontDescriptor::bold(family, size)
            })
            .collect();
        if fonts.is_empty() {
            return Ok(default);
        }
        Ok(fonts)
    }

    /// Resolve a decimal integer in `1..=i32::MAX`.
    ///
    /// The value must be a bare 32-bit signed integer; surrounding whitespace
    /// and out-of-range numbers fail with the parse error as cause.
    pub fn positive_int(&self, key: &str, raw: Option<&str>, default: u32) -> Result<u32, ConfigError> {
        let Some(value) = present(raw) else {
            return Ok(default);
        };
        let parsed = value
            .parse::<i32>()
            .map_err(|e| rejected(ConfigError::new(key, value).with_cause(e)))?;
        if parsed < 1 {
            return Err(rejected(
                ConfigError::new(key, value).with_clause(POSITIVE_INT_CLAUSE),
            ));
        }
        Ok(parsed.unsigned_abs())
    }

    /// Resolve a character set; the raw value is taken verbatim.
    pub fn chars(
        &self,
        _key: &str,
        raw: Option<&str>,
        default: Vec<char>,
    ) -> Result<Vec<char>, ConfigError> {
        Ok(present(raw).map_or(default, |value| value.chars().collect()))
    }

    /// Resolve a `yes`/`no` flag, ignoring case.
    pub fn boolean(&self, key: &str, raw: Option<&str>, default: bool) -> Result<bool, ConfigError> {
        let Some(value) = present(raw) else {
            return Ok(default);
        };
        if value.eq_ignore_ascii_case("yes") {
            Ok(true)
        } else if value.eq_ignore_ascii_case("no") {
            Ok(false)
        } else {
            Err(rejected(
                ConfigError::new(key, value)
                    .with_clause(BOOLEAN_CLAUSE)
                    .with_cause(ConfigErrorCause::Boolean),
            ))
        }
    }

    /// Resolve a plain string setting.
    pub fn string(&self, _key: &str, raw: Option<&str>, default: &str) -> String {
        present(raw).unwrap_or(default).to_string()
    }

    /// Construct the implementation named by `raw` as capability `T`.
    ///
    /// An absent or blank name returns `default` itself. A constructed
    /// component that exposes [`Component::as_configurable`] receives `config`
    /// exactly once before it is returned; a failure while it resolves its own
    /// settings is returned as is.
    pub fn instance<T>(
        &self,
        key: &str,
        raw: Option<&str>,
        default: Box<T>,
        config: &Config,
    ) -> Result<Box<T>, ConfigError>
    where
        T: ?Sized + Component + 'static,
    {
        let Some(value) = present(raw) else {
            return Ok(default);
        };
        let name = value.trim();
        if name.is_empty() {
            return Ok(default);
        }
        let mut instance = self
            .components
            .construct::<T>(name)
            .map_err(|e| rejected(ConfigError::new(key, value).with_cause(e)))?;
        if let Some(configurable) = instance.as_configurable() {
            debug!(key, component = name, "configuring component");
            configurable.configure(config)?;
        }
        Ok(instance)
    }
}
