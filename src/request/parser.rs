//! Request wire parsing.
//!
//! Turns a buffered byte stream into request line tokens, a header multimap
//! and a resolved content length, or fails without producing any of them.
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{error::Error, headers::HeaderMap};

/// Parse the request line into `(method, target, version)` tokens.
///
/// The line is split on its first space into method and remainder, and the
/// remainder on its first space into target and version. The tokens are
/// taken verbatim; the two spaces are the only structure required.
pub async fn request_line<R>(io: &mut R) -> Result<(String, String, String), Error>
where
    R: AsyncBufRead + Unpin,
{
    // First line: GET /index.html HTTP/1.0
    let line = read_line(io).await?;

    let Some((method, rest)) = line.split_once(' ') else {
        return Err(Error::InvalidRequestLine);
    };
    let Some((target, version)) = rest.split_once(' ') else {
        return Err(Error::InvalidRequestLine);
    };

    Ok((method.to_owned(), target.to_owned(), version.to_owned()))
}

/// Parse header lines up to and including the blank line.
///
/// Each line is split on its first colon; name and value are trimmed of
/// surrounding whitespace. Names keep the exact casing they first appear
/// under, and repeated names accumulate their values in order.
pub async fn header_block<R>(io: &mut R) -> Result<HeaderMap, Error>
where
    R: AsyncBufRead + Unpin,
{
    let mut headers = HeaderMap::new();

    loop {
        let line = read_line(io).await?;
        let line = line.trim();

        if line.is_empty() {
            return Ok(headers);
        }

        let Some((name, value)) = line.split_once(':') else {
            return Err(Error::InvalidHeader(line.to_owned()));
        };
        headers.append(name.trim(), value.trim());
    }
}

/// Resolve the request body length from the header map.
///
/// `Content-Length` is probed under its canonical casing first; when that
/// is absent or empty, the single all-lowercase spelling is probed as a
/// narrow compatibility fallback. A missing or empty value resolves to
/// `None`, which bounds the body at zero bytes rather than leaving it
/// unbounded.
pub fn content_length(headers: &HeaderMap) -> Result<Option<u64>, Error> {
    let value = match headers.get("Content-Length") {
        Some(value) if !value.is_empty() => value,
        _ => headers.get("content-length").unwrap_or(""),
    };

    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    match value.parse::<u64>() {
        Ok(length) => Ok(Some(length)),
        Err(_) => Err(Error::InvalidContentLength(value.to_owned())),
    }
}

/// Read one line, stripping the `\n` or `\r\n` terminator.
///
/// End-of-stream before a terminator is a read failure, never a truncated
/// line.
async fn read_line<R>(io: &mut R) -> Result<String, Error>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    io.read_until(b'\n', &mut buf).await.map_err(Error::Read)?;

    if buf.last() != Some(&b'\n') {
        return Err(Error::Read(io::ErrorKind::UnexpectedEof.into()));
    }
    buf.pop();
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }

    String::from_utf8(buf)
        .map_err(|err| Error::Read(io::Error::new(io::ErrorKind::InvalidData, err)))
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn request_line_splits_verbatim() {
        let mut io: &[u8] = b"GET /index.html HTTP/1.0\n";
        let (method, target, version) = request_line(&mut io).await.unwrap();
        assert_eq!(method, "GET");
        assert_eq!(target, "/index.html");
        assert_eq!(version, "HTTP/1.0");
    }

    #[tokio::test]
    async fn request_line_tolerates_crlf() {
        let mut io: &[u8] = b"POST /submit HTTP/1.1\r\n";
        let (method, target, version) = request_line(&mut io).await.unwrap();
        assert_eq!(method, "POST");
        assert_eq!(target, "/submit");
        assert_eq!(version, "HTTP/1.1");
    }

    #[tokio::test]
    async fn request_line_splits_on_first_spaces_only() {
        // the second split takes everything after the target
        let mut io: &[u8] = b"GET /a b c\n";
        let (method, target, version) = request_line(&mut io).await.unwrap();
        assert_eq!(method, "GET");
        assert_eq!(target, "/a");
        assert_eq!(version, "b c");
    }

    #[tokio::test]
    async fn request_line_missing_separator() {
        let mut io: &[u8] = b"GET/index.htmlHTTP/1.0\n";
        assert!(matches!(
            request_line(&mut io).await,
            Err(Error::InvalidRequestLine),
        ));

        let mut io: &[u8] = b"GET /index.html\n";
        assert!(matches!(
            request_line(&mut io).await,
            Err(Error::InvalidRequestLine),
        ));
    }

    #[tokio::test]
    async fn request_line_eof_before_terminator() {
        let mut io: &[u8] = b"GET /index.html HTTP/1.0";
        assert!(matches!(request_line(&mut io).await, Err(Error::Read(_))));

        let mut io: &[u8] = b"";
        assert!(matches!(request_line(&mut io).await, Err(Error::Read(_))));
    }

    #[tokio::test]
    async fn header_block_keeps_casing_and_order() {
        let mut io: &[u8] = b"Host: localhost\nX-Tag: one\nx-tag: two\nX-Tag: three\n\n";
        let headers = header_block(&mut io).await.unwrap();

        assert_eq!(headers.get("Host"), Some("localhost"));
        assert_eq!(headers.get("host"), None);

        let tags: Vec<_> = headers.get_all("X-Tag").collect();
        assert_eq!(tags, ["one", "three"]);
        assert_eq!(headers.get("x-tag"), Some("two"));
    }

    #[tokio::test]
    async fn header_block_trims_name_and_value() {
        let mut io: &[u8] = b"  Content-Type :  text/plain  \n\n";
        let headers = header_block(&mut io).await.unwrap();
        assert_eq!(headers.get("Content-Type"), Some("text/plain"));
    }

    #[tokio::test]
    async fn header_block_without_colon() {
        let mut io: &[u8] = b"Host localhost\n\n";
        match header_block(&mut io).await {
            Err(Error::InvalidHeader(line)) => assert_eq!(line, "Host localhost"),
            other => panic!("expected invalid header, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn header_block_empty() {
        let mut io: &[u8] = b"\n";
        let headers = header_block(&mut io).await.unwrap();
        assert!(headers.is_empty());
    }

    #[tokio::test]
    async fn header_block_eof_before_blank_line() {
        let mut io: &[u8] = b"Host: localhost\n";
        assert!(matches!(header_block(&mut io).await, Err(Error::Read(_))));
    }

    #[test]
    fn content_length_canonical() {
        let mut headers = HeaderMap::new();
        headers.append("Content-Length", "5");
        assert_eq!(content_length(&headers).unwrap(), Some(5));
    }

    #[test]
    fn content_length_lowercase_fallback() {
        let mut headers = HeaderMap::new();
        headers.append("content-length", "12");
        assert_eq!(content_length(&headers).unwrap(), Some(12));

        // an empty canonical value also falls through to the probe
        let mut headers = HeaderMap::new();
        headers.append("Content-Length", "");
        headers.append("content-length", "7");
        assert_eq!(content_length(&headers).unwrap(), Some(7));
    }

    #[test]
    fn content_length_only_one_alternate_casing() {
        let mut headers = HeaderMap::new();
        headers.append("CONTENT-LENGTH", "5");
        assert_eq!(content_length(&headers).unwrap(), None);
    }

    #[test]
    fn content_length_missing_or_empty() {
        let headers = HeaderMap::new();
        assert_eq!(content_length(&headers).unwrap(), None);

        let mut headers = HeaderMap::new();
        headers.append("Content-Length", "   ");
        assert_eq!(content_length(&headers).unwrap(), None);
    }

    #[test]
    fn content_length_not_a_number() {
        let mut headers = HeaderMap::new();
        headers.append("Content-Length", "abc");
        match content_length(&headers) {
            Err(Error::InvalidContentLength(value)) => assert_eq!(value, "abc"),
            other => panic!("expected invalid content length, got {other:?}"),
        }

        let mut headers = HeaderMap::new();
        headers.append("Content-Length", "-1");
        assert!(matches!(
            content_length(&headers),
            Err(Error::InvalidContentLength(_)),
        ));
    }
}
