//! Session-facing captcha image service.
//!
//! [`CaptchaService`] resolves the configured producer once, then for each
//! request writes a JPEG to the response and records the answer text and its
//! generation time in the client's session.

mod error;
mod service;
mod session;

pub use error::{Error, Result};
pub use service::CaptchaService;
pub use session::{MemoryResponse, MemorySession, Response, Session, SessionValue};
