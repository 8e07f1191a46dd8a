//! Response serialization.
//!
//! The output is this system's own HTTP/1.x dialect: a fixed `OK` reason
//! phrase whatever the status, and single `\n` line terminators. Both are
//! part of the wire contract, bit-exact.
use bytes::BufMut;

use crate::response::Response;

/// Write the status line and header block, including the synthesized
/// trailing `Content-Length`, into `bufm`.
///
/// # Panics
///
/// Panics when no status has been set on `res`.
pub fn write_head<B: BufMut>(res: &Response, mut bufm: B) {
    assert!(res.status() != 0, "response status is not set");

    let mut digits = itoa::Buffer::new();

    bufm.put_slice(b"HTTP/1.1 ");
    bufm.put_slice(digits.format(res.status()).as_bytes());
    bufm.put_slice(b" OK\n");

    for (name, value) in res.headers().iter() {
        bufm.put_slice(name.as_bytes());
        bufm.put_slice(b": ");
        bufm.put_slice(value.as_bytes());
        bufm.put_slice(b"\n");
    }

    // always derived from the accumulated body, after the handler's
    // headers, even when the handler already set one
    bufm.put_slice(b"Content-Length: ");
    bufm.put_slice(digits.format(res.body().len()).as_bytes());
    bufm.put_slice(b"\n\n");
}

/// Render the whole response, head then body, into `bufm`.
pub fn encode<B: BufMut>(res: &Response, mut bufm: B) {
    write_head(res, &mut bufm);
    bufm.put_slice(res.body());
}
