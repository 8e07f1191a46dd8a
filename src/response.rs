//! HTTP Response
use bytes::BytesMut;

use crate::headers::HeaderMap;

pub mod write;

/// HTTP Response.
///
/// Accumulates a status, headers and body bytes, then renders once through
/// [`write`]. Headers and body only ever grow; nothing is overwritten.
#[derive(Debug, Default)]
pub struct Response {
    status: u16,
    headers: HeaderMap,
    body: BytesMut,
}

impl Response {
    /// Create new empty [`Response`] with no status set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status code.
    ///
    /// # Panics
    ///
    /// Panics unless `100 <= status <= 999`. The status always comes from
    /// handler code, never from the peer, so a violation is a bug in the
    /// handler.
    pub fn set_status(&mut self, status: u16) {
        assert!(
            (100..=999).contains(&status),
            "invalid status code {status}",
        );
        self.status = status;
    }

    /// Returns the status code, `0` when unset.
    #[inline]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Append `value` under the header `name`.
    ///
    /// Values accumulate; earlier ones are never replaced.
    pub fn append_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.append(name, value);
    }

    /// Returns shared reference to [`HeaderMap`].
    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns mutable reference to [`HeaderMap`].
    #[inline]
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Append bytes to the response body.
    pub fn write(&mut self, data: &[u8]) {
        self.body.extend_from_slice(data);
    }

    /// Returns the accumulated body bytes.
    #[inline]
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn status_bounds_are_inclusive() {
        let mut res = Response::new();
        assert_eq!(res.status(), 0);

        res.set_status(100);
        assert_eq!(res.status(), 100);

        res.set_status(999);
        assert_eq!(res.status(), 999);
    }

    #[test]
    #[should_panic(expected = "invalid status code 42")]
    fn status_below_range() {
        Response::new().set_status(42);
    }

    #[test]
    #[should_panic(expected = "invalid status code 1000")]
    fn status_above_range() {
        Response::new().set_status(1000);
    }

    #[test]
    fn body_accumulates() {
        let mut res = Response::new();
        res.write(b"hello ");
        res.write(b"world");
        assert_eq!(res.body(), b"hello world");
    }

    #[test]
    fn headers_accumulate() {
        let mut res = Response::new();
        res.append_header("Set-Cookie", "a=1");
        res.append_header("Set-Cookie", "b=2");

        let all: Vec<_> = res.headers().get_all("Set-Cookie").collect();
        assert_eq!(all, ["a=1", "b=2"]);
    }
}
