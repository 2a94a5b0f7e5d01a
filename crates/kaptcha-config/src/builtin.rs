//! Built-in implementations for every capability slot.
//!
//! These are the components used when a `*.impl` key is unset. They are also
//! registered by name (see [`register_all`]) so configurations can select them
//! explicitly. Glyph rasterization and distortion effects are left to
//! registered third-party components; the built-ins only assemble the image.

use image::{Rgba, RgbaImage, imageops};
use rand::seq::SliceRandom;
use tracing::trace;

use crate::{
    Color, Config, ConfigError, defaults,
    component::{
        BackgroundProducer, Component, ComponentRegistry, Configurable, GimpyEngine,
        NoiseProducer, Producer, TextProducer, WordRenderer,
    },
};

/// Registered name of [`DefaultKaptcha`].
pub const DEFAULT_KAPTCHA: &str = "kaptcha_config::builtin::DefaultKaptcha";
/// Registered name of [`DefaultTextCreator`].
pub const DEFAULT_TEXT_CREATOR: &str = "kaptcha_config::builtin::DefaultTextCreator";
/// Registered name of [`PlainWordRenderer`].
pub const PLAIN_WORD_RENDERER: &str = "kaptcha_config::builtin::PlainWordRenderer";
/// Registered name of [`PlainGimpy`].
pub const PLAIN_GIMPY: &str = "kaptcha_config::builtin::PlainGimpy";
/// Registered name of [`NoNoise`].
pub const NO_NOISE: &str = "kaptcha_config::builtin::NoNoise";
/// Registered name of [`GradientBackground`].
pub const GRADIENT_BACKGROUND: &str = "kaptcha_config::builtin::GradientBackground";

/// Register every built-in component under its name.
pub(crate) fn register_all(registry: &mut ComponentRegistry) {
    registry
        .register(DEFAULT_KAPTCHA, default_producer)
        .register(DEFAULT_TEXT_CREATOR, default_text_producer)
        .register(PLAIN_WORD_RENDERER, default_word_renderer)
        .register(PLAIN_GIMPY, default_gimpy)
        .register(NO_NOISE, default_noise)
        .register(GRADIENT_BACKGROUND, default_background);
}

/// Unconfigured default producer.
pub(crate) fn default_producer() -> Box<dyn Producer> {
    Box::new(DefaultKaptcha::default())
}

/// Unconfigured default text producer.
pub(crate) fn default_text_producer() -> Box<dyn TextProducer> {
    Box::new(DefaultTextCreator::default())
}

/// Default word renderer.
pub(crate) fn default_word_renderer() -> Box<dyn WordRenderer> {
    Box::new(PlainWordRenderer)
}

/// Unconfigured default obscurificator.
pub(crate) fn default_gimpy() -> Box<dyn GimpyEngine> {
    Box::new(PlainGimpy::default())
}

/// Default noise producer.
pub(crate) fn default_noise() -> Box<dyn NoiseProducer> {
    Box::new(NoNoise)
}

/// Unconfigured default background.
pub(crate) fn default_background() -> Box<dyn BackgroundProducer> {
    Box::new(GradientBackground::default())
}

/// Border drawn around the finished image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Border {
    /// Border color.
    color: Color,
    /// Thickness in pixels.
    thickness: u32,
}

/// Producer assembling the configured pipeline stages.
///
/// The image is built as word renderer, then obscurificator, then background,
/// then an optional border.
pub struct DefaultKaptcha {
    /// Source of answer text.
    text_producer: Box<dyn TextProducer>,
    /// Draws the answer onto a canvas.
    word_renderer: Box<dyn WordRenderer>,
    /// Distorts the rendered word.
    gimpy: Box<dyn GimpyEngine>,
    /// Adds the background.
    background: Box<dyn BackgroundProducer>,
    /// Image width in pixels.
    width: u32,
    /// Image height in pixels.
    height: u32,
    /// Border, when enabled.
    border: Option<Border>,
}

impl Default for DefaultKaptcha {
    fn default() -> Self {
        Self {
            text_producer: default_text_producer(),
            word_renderer: default_word_renderer(),
            gimpy: default_gimpy(),
            background: default_background(),
            width: defaults::IMAGE_WIDTH,
            height: defaults::IMAGE_HEIGHT,
            border: defaults::BORDER.then_some(Border {
                color: defaults::BORDER_COLOR,
                thickness: defaults::BORDER_THICKNESS,
            }),
        }
    }
}

impl DefaultKaptcha {
    /// Paint the border over the outer `thickness` pixels.
    fn draw_border(image: &mut RgbaImage, border: Border) {
        let (width, height) = image.dimensions();
        let t = border.thickness;
        let px = Rgba(border.color.to_rgba());
        for (x, y, pixel) in image.enumerate_pixels_mut() {
            if x < t || y < t || x + t >= width || y + t >= height {
                *pixel = px;
            }
        }
    }
}

impl Component for DefaultKaptcha {
    fn as_configurable(&mut self) -> Option<&mut dyn Configurable> {
        Some(self)
    }
}

impl Configurable for DefaultKaptcha {
    fn configure(&mut self, config: &Config) -> Result<(), ConfigError> {
        self.text_producer = config.text_producer_impl()?;
        self.word_renderer = config.word_renderer_impl()?;
        self.gimpy = config.obscurificator_impl()?;
        self.background = config.background_impl()?;
        self.width = config.width()?;
        self.height = config.height()?;
        self.border = if config.is_border_drawn()? {
            Some(Border {
                color: config.border_color()?,
                thickness: config.border_thickness()?,
            })
        } else {
            None
        };
        Ok(())
    }
}

impl Producer for DefaultKaptcha {
    fn create_text(&self) -> String {
        self.text_producer.text()
    }

    fn create_image(&self, text: &str) -> RgbaImage {
        let word = self
            .word_renderer
            .render_word(text, self.width, self.height);
        let distorted = self.gimpy.distorted_image(word);
        let mut image = self.background.add_background(distorted);
        if let Some(border) = self.border {
            Self::draw_border(&mut image, border);
        }
        trace!(width = self.width, height = self.height, "captcha image created");
        image
    }
}

/// Text producer picking characters uniformly from the configured set.
#[derive(Debug, Clone)]
pub struct DefaultTextCreator {
    /// Candidate characters; duplicates weight the draw.
    chars: Vec<char>,
    /// Number of characters per answer.
    length: u32,
}

impl Default for DefaultTextCreator {
    fn default() -> Self {
        Self {
            chars: defaults::chars(),
            length: defaults::CHAR_LENGTH,
        }
    }
}

impl Component for DefaultTextCreator {
    fn as_configurable(&mut self) -> Option<&mut dyn Configurable> {
        Some(self)
    }
}

impl Configurable for DefaultTextCreator {
    fn configure(&mut self, config: &Config) -> Result<(), ConfigError> {
        self.chars = config.text_producer_char_string()?;
        self.length = config.text_producer_char_length()?;
        Ok(())
    }
}

impl TextProducer for DefaultTextCreator {
    fn text(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..self.length)
            .filter_map(|_| self.chars.choose(&mut rng))
            .collect()
    }
}

/// Word renderer producing a transparent canvas of the requested size.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainWordRenderer;

impl Component for PlainWordRenderer {}

impl WordRenderer for PlainWordRenderer {
    fn render_word(&self, _word: &str, width: u32, height: u32) -> RgbaImage {
        RgbaImage::new(width, height)
    }
}

/// Obscurificator that applies the configured noise without distorting.
pub struct PlainGimpy {
    /// Noise applied to the word image.
    noise: Box<dyn NoiseProducer>,
}

impl Default for PlainGimpy {
    fn default() -> Self {
        Self {
            noise: default_noise(),
        }
    }
}

impl Component for PlainGimpy {
    fn as_configurable(&mut self) -> Option<&mut dyn Configurable> {
        Some(self)
    }
}

impl Configurable for PlainGimpy {
    fn configure(&mut self, config: &Config) -> Result<(), ConfigError> {
        self.noise = config.noise_impl()?;
        Ok(())
    }
}

impl GimpyEngine for PlainGimpy {
    fn distorted_image(&self, mut image: RgbaImage) -> RgbaImage {
        self.noise.make_noise(&mut image, 0.1, 0.1, 0.25, 0.25);
        self.noise.make_noise(&mut image, 0.1, 0.25, 0.5, 0.9);
        image
    }
}

/// Noise producer that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNoise;

impl Component for NoNoise {}

impl NoiseProducer for NoNoise {
    fn make_noise(&self, _image: &mut RgbaImage, _: f32, _: f32, _: f32, _: f32) {}
}

/// Diagonal gradient background from `clear.from` (top left) to `clear.to`
/// (bottom right).
#[derive(Debug, Clone, Copy)]
pub struct GradientBackground {
    /// Top-left color.
    from: Color,
    /// Bottom-right color.
    to: Color,
}

impl Default for GradientBackground {
    fn default() -> Self {
        Self {
            from: defaults::BACKGROUND_FROM,
            to: defaults::BACKGROUND_TO,
        }
    }
}

impl GradientBackground {
    /// Color at `t` in `[0, 1]` between `from` and `to`.
    fn blend(&self, t: f32) -> Rgba<u8> {
        let mix = |a: u8, b: u8| {
            let v = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgba([
            mix(self.from.red, self.to.red),
            mix(self.from.green, self.to.green),
            mix(self.from.blue, self.to.blue),
            255,
        ])
    }
}

impl Component for GradientBackground {
    fn as_configurable(&mut self) -> Option<&mut dyn Configurable> {
        Some(self)
    }
}

impl Configurable for GradientBackground {
    fn configure(&mut self, config: &Config) -> Result<(), ConfigError> {
        self.from = config.background_color_from()?;
        self.to = config.background_color_to()?;
        Ok(())
    }
}

impl BackgroundProducer for GradientBackground {
    fn add_background(&self, image: RgbaImage) -> RgbaImage {
        let (width, height) = image.dimensions();
        let span = (width + height).saturating_sub(2).max(1) as f32;
        let mut out = RgbaImage::from_fn(width, height, |x, y| self.blend((x + y) as f32 / span));
        imageops::overlay(&mut out, &image, 0, 0);
        out
    }
}
