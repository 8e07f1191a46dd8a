//! HTTP Request
use crate::{body::Body, headers::HeaderMap};

pub mod parser;

/// HTTP Request Parts.
///
/// The method, target and version tokens are carried verbatim from the
/// request line: no method whitelist, no target decomposition, no version
/// check.
#[derive(Debug, Clone, Default)]
pub struct Parts {
    /// Peer address the request arrived from.
    pub remote_addr: String,
    /// Request method token.
    pub method: String,
    /// Request target token.
    pub target: String,
    /// Protocol version token.
    pub version: String,
    /// Request headers.
    pub headers: HeaderMap,
}

/// HTTP Request.
#[derive(Debug)]
pub struct Request {
    parts: Parts,
    body: Body,
}

/// Constructor
impl Request {
    /// Create [`Request`] from [`Parts`] and [`Body`].
    #[inline]
    pub fn from_parts(parts: Parts, body: Body) -> Self {
        Self { parts, body }
    }
}

impl Request {
    /// Returns shared reference to [`Parts`].
    #[inline]
    pub fn parts(&self) -> &Parts {
        &self.parts
    }

    /// Returns mutable reference to [`Parts`].
    #[inline]
    pub fn parts_mut(&mut self) -> &mut Parts {
        &mut self.parts
    }

    /// Returns the peer address.
    #[inline]
    pub fn remote_addr(&self) -> &str {
        &self.parts.remote_addr
    }

    /// Returns the method token.
    #[inline]
    pub fn method(&self) -> &str {
        &self.parts.method
    }

    /// Returns the request target token.
    #[inline]
    pub fn target(&self) -> &str {
        &self.parts.target
    }

    /// Returns the protocol version token.
    #[inline]
    pub fn version(&self) -> &str {
        &self.parts.version
    }

    /// Returns shared reference to [`HeaderMap`].
    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.parts.headers
    }

    /// Returns shared reference to [`Body`].
    #[inline]
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Returns mutable reference to [`Body`].
    #[inline]
    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

/// Destructor
impl Request {
    /// Destruct request into [`Parts`] and [`Body`].
    #[inline]
    pub fn into_parts(self) -> (Parts, Body) {
        (self.parts, self.body)
    }

    /// Destruct request into [`Body`].
    #[inline]
    pub fn into_body(self) -> Body {
        self.body
    }
}
