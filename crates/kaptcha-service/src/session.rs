//! Session and response abstractions used by the service.

use std::{collections::HashMap, io::Write, time::SystemTime};

/// Value stored in a session attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionValue {
    /// Generated answer text.
    Text(String),
    /// Time the answer was generated.
    Timestamp(SystemTime),
}

/// Per-client attribute storage.
pub trait Session {
    /// Store `value` under `key`, replacing any previous value.
    fn set_attribute(&mut self, key: &str, value: SessionValue);
    /// Value stored under `key`.
    fn attribute(&self, key: &str) -> Option<&SessionValue>;
}

/// Outgoing HTTP response.
pub trait Response {
    /// Set a response header.
    fn set_header(&mut self, name: &str, value: &str);
    /// Set the response content type.
    fn set_content_type(&mut self, content_type: &str);
    /// Response body writer.
    fn body(&mut self) -> &mut dyn Write;
}

/// In-memory [`Session`].
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    /// Stored attributes.
    attributes: HashMap<String, SessionValue>,
}

impl MemorySession {
    /// Empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no attribute has been stored.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl Session for MemorySession {
    fn set_attribute(&mut self, key: &str, value: SessionValue) {
        self.attributes.insert(key.to_string(), value);
    }

    fn attribute(&self, key: &str) -> Option<&SessionValue> {
        self.attributes.get(key)
    }
}

/// In-memory [`Response`] that buffers headers and body.
#[derive(Debug, Clone, Default)]
pub struct MemoryResponse {
    /// Headers in the order they were set.
    headers: Vec<(String, String)>,
    /// Content type, once set.
    content_type: Option<String>,
    /// Body bytes.
    body: Vec<u8>,
}

impl MemoryResponse {
    /// Empty response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value set for header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .rev()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Content type, once set.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Body bytes written so far.
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }
}

impl Response for MemoryResponse {
    fn set_header(&mut self, name: &str, value: &str) {
        self.headers.push((name.to_string(), value.to_string()));
    }

    fn set_content_type(&mut self, content_type: &str) {
        self.content_type = Some(content_type.to_string());
    }

    fn body(&mut self) -> &mut dyn Write {
        &mut self.body
    }
}
