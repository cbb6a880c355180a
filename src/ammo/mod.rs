//! Synthetic request model and the tank ammo wire format.
//!
//! An ammo artifact is a sequence of self-describing records:
//! a `"{size} {tag}\n"` header, exactly `size` bytes of a raw HTTP/1.1
//! request block, and a `"\r\n"` terminator. The declared size lets a
//! consumer skip records without parsing HTTP.
mod encoder;
mod reader;


pub use encoder::{AmmoEncoder, write_ammo};
pub use reader::{AmmoReader, AmmoRecord, read_records};

use crate::error::{AmmoError, AmmoResult};

/// Request body as supplied by the caller.
///
/// A structured value is serialized exactly once, when the [`Request`] is
/// constructed, so every downstream length computation sees the same bytes.
#[derive(Debug, Clone)]
pub enum Body {
    Raw(Vec<u8>),
    Structured(serde_json::Value),
}

impl Body {
    #[must_use]
    pub const fn empty() -> Self {
        Body::Raw(Vec::new())
    }

    fn into_bytes(self) -> AmmoResult<Vec<u8>> {
        match self {
            Body::Raw(bytes) => Ok(bytes),
            Body::Structured(value) => {
                serde_json::to_vec(&value).map_err(|err| AmmoError::SerializeBody { source: err })
            }
        }
    }
}

/// One synthetic HTTP request. Immutable once constructed; consumed by the
/// encoder and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: String,
    path: String,
    tag: String,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl Request {
    /// Builds a request. Headers keep their insertion order; the order is
    /// part of the serialized byte sequence.
    ///
    /// # Errors
    ///
    /// Returns `AmmoError::InvalidRequest` when the method or path is empty
    /// and `AmmoError::SerializeBody` when a structured body fails to
    /// serialize.
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        tag: impl Into<String>,
        headers: Vec<(String, String)>,
        body: Body,
    ) -> AmmoResult<Self> {
        let method = method.into();
        let path = path.into();
        if method.is_empty() {
            return Err(AmmoError::InvalidRequest {
                reason: "method must not be empty",
            });
        }
        if path.is_empty() {
            return Err(AmmoError::InvalidRequest {
                reason: "path must not be empty",
            });
        }
        Ok(Self {
            method,
            path,
            tag: tag.into(),
            headers,
            body: body.into_bytes()?,
        })
    }

    /// GET request with no headers and no body.
    ///
    /// # Errors
    ///
    /// Returns `AmmoError::InvalidRequest` when the path is empty.
    pub fn get(path: impl Into<String>, tag: impl Into<String>) -> AmmoResult<Self> {
        Self::new("GET", path, tag, Vec::new(), Body::empty())
    }

    /// POST request carrying a JSON-encoded body.
    ///
    /// # Errors
    ///
    /// Returns `AmmoError::InvalidRequest` when the path is empty and
    /// `AmmoError::SerializeBody` when the value fails to serialize.
    pub fn post_json(
        path: impl Into<String>,
        tag: impl Into<String>,
        value: serde_json::Value,
    ) -> AmmoResult<Self> {
        Self::new("POST", path, tag, Vec::new(), Body::Structured(value))
    }

    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Renders the request block exactly as it appears on the wire: request
    /// line, headers in insertion order, the blank line ending the header
    /// block, then the body bytes.
    #[must_use]
    pub fn to_wire(&self) -> Vec<u8> {
        let mut block = Vec::with_capacity(self.wire_size_hint());
        block.extend_from_slice(self.method.as_bytes());
        block.push(b' ');
        block.extend_from_slice(self.path.as_bytes());
        block.extend_from_slice(b" HTTP/1.1\r\n");
        for (key, value) in &self.headers {
            block.extend_from_slice(key.as_bytes());
            block.extend_from_slice(b": ");
            block.extend_from_slice(value.as_bytes());
            block.extend_from_slice(b"\r\n");
        }
        block.extend_from_slice(b"\r\n");
        block.extend_from_slice(&self.body);
        block
    }

    fn wire_size_hint(&self) -> usize {
        let headers: usize = self
            .headers
            .iter()
            .map(|(key, value)| key.len().saturating_add(value.len()).saturating_add(4))
            .sum();
        self.method
            .len()
            .saturating_add(self.path.len())
            .saturating_add(headers)
            .saturating_add(self.body.len())
            .saturating_add(16)
    }
}
