//! Serve captcha images and record answers in the session.

use std::{io::Write, time::SystemTime};

use image::{DynamicImage, RgbaImage, codecs::jpeg::JpegEncoder};
use kaptcha_config::{Config, ConfigResolver, ConfigStore, Producer, keys};
use tracing::{debug, info};

use crate::{
    Result,
    session::{Response, Session, SessionValue},
};

/// Settings the service applies unless overridden.
const SERVICE_DEFAULTS: &[(&str, &str)] = &[
    (keys::BORDER, "no"),
    (keys::TEXTPRODUCER_FONT_COLOR, "black"),
    (keys::TEXTPRODUCER_CHAR_SPACE, "5"),
];

/// JPEG quality used for captcha images.
const JPEG_QUALITY: u8 = 85;

/// Generates captcha images for clients and stores the answers in their session.
pub struct CaptchaService {
    /// Configured producer.
    producer: Box<dyn Producer>,
    /// Session attribute for the answer text.
    session_key: String,
    /// Session attribute for the generation time.
    session_date: String,
}

impl CaptchaService {
    /// Build a service with the built-in components.
    ///
    /// `overrides` are layered over the service defaults (no border, black
    /// text, character spacing 5).
    pub fn new(overrides: &ConfigStore) -> Result<Self> {
        Self::with_resolver(overrides, ConfigResolver::default())
    }

    /// Build a service whose components come from `resolver`.
    pub fn with_resolver(overrides: &ConfigStore, resolver: ConfigResolver) -> Result<Self> {
        let defaults: ConfigStore = SERVICE_DEFAULTS.iter().copied().collect();
        let store = ConfigStore::merged(&defaults, overrides);
        let config = Config::with_resolver(store, resolver);
        let producer = config.producer_impl()?;
        let session_key = config.session_key();
        let session_date = config.session_date();
        info!(%session_key, %session_date, "captcha service ready");
        Ok(Self {
            producer,
            session_key,
            session_date,
        })
    }

    /// Session attribute holding the answer text.
    pub fn session_key(&self) -> &str {
        &self.session_key
    }

    /// Session attribute holding the generation time.
    pub fn session_date(&self) -> &str {
        &self.session_date
    }

    /// Write a fresh captcha to `response` and record its answer in `session`.
    ///
    /// The session is only updated after the image was written, so a failed
    /// write leaves no stale answer behind. Returns the answer text.
    pub fn serve(&self, session: &mut dyn Session, response: &mut dyn Response) -> Result<String> {
        response.set_header("Cache-Control", "no-store, no-cache");
        response.set_content_type("image/jpeg");

        let text = self.producer.create_text();
        let image = self.producer.create_image(&text);
        let jpeg = encode_jpeg(&image)?;

        let body = response.body();
        body.write_all(&jpeg)?;
        body.flush()?;
        debug!(bytes = jpeg.len(), "captcha image written");

        session.set_attribute(&self.session_key, SessionValue::Text(text.clone()));
        session.set_attribute(&self.session_date, SessionValue::Timestamp(SystemTime::now()));
        Ok(text)
    }

    /// The answer currently stored in `session`, if any.
    pub fn generated_text<'a>(&self, session: &'a dyn Session) -> Option<&'a str> {
        match session.attribute(&self.session_key) {
            Some(SessionValue::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Encode `image` as an opaque JPEG in memory.
fn encode_jpeg(image: &RgbaImage) -> Result<Vec<u8>> {
    let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY).encode_image(&rgb)?;
    Ok(out)
}
