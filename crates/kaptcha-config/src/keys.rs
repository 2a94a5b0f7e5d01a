//! Configuration keys understood by [`Config`](crate::Config).

/// Whether a border is drawn around the image (`yes`/`no`).
pub const BORDER: &str = "kaptcha.border";
/// Border color.
pub const BORDER_COLOR: &str = "kaptcha.border.color";
/// Border thickness in pixels.
pub const BORDER_THICKNESS: &str = "kaptcha.border.thickness";
/// Noise color.
pub const NOISE_COLOR: &str = "kaptcha.noise.color";
/// Noise producer implementation.
pub const NOISE_IMPL: &str = "kaptcha.noise.impl";
/// Obscurificator (gimpy engine) implementation.
pub const OBSCURIFICATOR_IMPL: &str = "kaptcha.obscurificator.impl";
/// Overall producer implementation.
pub const PRODUCER_IMPL: &str = "kaptcha.producer.impl";
/// Text producer implementation.
pub const TEXTPRODUCER_IMPL: &str = "kaptcha.textproducer.impl";
/// Characters the answer text is drawn from.
pub const TEXTPRODUCER_CHAR_STRING: &str = "kaptcha.textproducer.char.string";
/// Number of characters in the answer text.
pub const TEXTPRODUCER_CHAR_LENGTH: &str = "kaptcha.textproducer.char.length";
/// Spacing between rendered characters.
pub const TEXTPRODUCER_CHAR_SPACE: &str = "kaptcha.textproducer.char.space";
/// Comma separated font families.
pub const TEXTPRODUCER_FONT_NAMES: &str = "kaptcha.textproducer.font.names";
/// Font point size.
pub const TEXTPRODUCER_FONT_SIZE: &str = "kaptcha.textproducer.font.size";
/// Text color.
pub const TEXTPRODUCER_FONT_COLOR: &str = "kaptcha.textproducer.font.color";
/// Word renderer implementation.
pub const WORDRENDERER_IMPL: &str = "kaptcha.word.impl";
/// Background producer implementation.
pub const BACKGROUND_IMPL: &str = "kaptcha.background.impl";
/// Background gradient start color.
pub const BACKGROUND_CLR_FROM: &str = "kaptcha.background.clear.from";
/// Background gradient end color.
pub const BACKGROUND_CLR_TO: &str = "kaptcha.background.clear.to";
/// Image width in pixels.
pub const IMAGE_WIDTH: &str = "kaptcha.image.width";
/// Image height in pixels.
pub const IMAGE_HEIGHT: &str = "kaptcha.image.height";
/// Session attribute name for the answer text.
pub const SESSION_CONFIG_KEY: &str = "kaptcha.session.key";
/// Session attribute name for the creation timestamp.
pub const SESSION_CONFIG_DATE: &str = "kaptcha.session.date";
