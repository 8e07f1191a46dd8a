//! Request Body.
use bytes::{Bytes, BytesMut};
use std::{
    io,
    sync::{
        Arc,
        atomic::{
            AtomicU64,
            Ordering::{Relaxed, SeqCst},
        },
    },
};
use tokio::{
    io::{AsyncReadExt, BufReader},
    net::tcp::OwnedReadHalf,
    sync::Mutex,
};

// ===== BodyInner =====

/// Shared between the [`Body`] handed to the handler and the connection
/// driver, which drains whatever the handler left unread before the stream
/// is closed.
#[derive(Debug)]
pub(crate) struct BodyInner {
    io: Mutex<BufReader<OwnedReadHalf>>,
    /// Unread body bytes left on the stream.
    ///
    /// Always decremented by exactly the amount read.
    remaining: AtomicU64,
}

impl BodyInner {
    pub(crate) fn new(io: BufReader<OwnedReadHalf>, length: Option<u64>) -> Self {
        Self {
            io: Mutex::new(io),
            // no resolved length means no readable bytes, not unbounded
            remaining: AtomicU64::new(length.unwrap_or(0)),
        }
    }

    pub(crate) fn remaining(&self) -> u64 {
        self.remaining.load(Relaxed)
    }

    pub(crate) fn has_remaining(&self) -> bool {
        self.remaining() != 0
    }

    pub(crate) async fn read(&self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = self.remaining();
        if remaining == 0 || buf.is_empty() {
            return Ok(0);
        }

        let limit = usize::try_from(remaining)
            .unwrap_or(usize::MAX)
            .min(buf.len());

        let mut io = self.io.lock().await;
        let read = io.read(&mut buf[..limit]).await?;
        self.remaining.fetch_sub(read as u64, SeqCst);
        Ok(read)
    }

    /// Discard unread body bytes so nothing of this body is left on the
    /// stream. Stops early if the peer closed before sending them all.
    pub(crate) async fn drain(&self) -> io::Result<()> {
        let mut scratch = [0u8; 4096];
        while self.has_remaining() {
            if self.read(&mut scratch).await? == 0 {
                break;
            }
        }
        Ok(())
    }
}

// ===== Body =====

/// HTTP Request Body.
///
/// A read view over the connection stream bounded by the resolved content
/// length. The body is consumed by reading it, at most once; closing it
/// discards whatever was not read.
#[derive(Debug)]
pub struct Body {
    inner: Arc<BodyInner>,
}

impl Body {
    #[inline]
    pub(crate) fn from_shared(inner: Arc<BodyInner>) -> Self {
        Self { inner }
    }

    /// Returns the unread body length.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.inner.remaining()
    }

    /// Returns `true` once no body bytes are left to read.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        !self.inner.has_remaining()
    }

    /// Read body bytes into `buf`.
    ///
    /// Yields `0` once the bounded length is consumed, regardless of how
    /// many further bytes sit on the underlying stream, and likewise when
    /// the peer closes early.
    pub async fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf).await
    }

    /// Buffer the entire remaining body.
    pub async fn collect(&mut self) -> io::Result<Bytes> {
        let mut bufm = BytesMut::with_capacity(self.remaining().min(16 * 1024) as usize);
        let mut chunk = [0u8; 4096];

        loop {
            let read = self.inner.read(&mut chunk).await?;
            if read == 0 {
                return Ok(bufm.freeze());
            }
            bufm.extend_from_slice(&chunk[..read]);
        }
    }

    /// Close the body, discarding any unread remainder from the stream.
    pub async fn close(&mut self) -> io::Result<()> {
        self.inner.drain().await
    }
}
