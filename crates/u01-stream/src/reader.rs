//! Fixed-size buffered reader decoding little-endian `u32` draws.

use std::io::{self, Read};
use std::num::NonZeroUsize;

use crate::error::StreamError;

/// Default buffer size in bytes. Not observable in the decoded values.
pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(4096) {
    Some(capacity) => capacity,
    None => panic!("buffer capacity must be non-zero"),
};

/// Buffered source of 32-bit draws.
///
/// Bytes in `buf[position..length]` are unread; the buffer is refilled in
/// place only once it is fully drained, so no byte is read twice or skipped.
pub struct StreamReader<R> {
    source: R,
    /// Always `capacity` bytes long; only `[0, length)` holds data.
    buf: Vec<u8>,
    position: usize,
    length: usize,
    /// Complete values handed out so far
    draws: u64,
    /// Bytes taken from the buffer, including a trailing partial value
    bytes_consumed: u64,
}

impl<R> core::fmt::Debug for StreamReader<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StreamReader")
            .field("capacity", &self.buf.len())
            .field("position", &self.position)
            .field("length", &self.length)
            .field("draws", &self.draws)
            .field("bytes_consumed", &self.bytes_consumed)
            .finish()
    }
}

impl<R> StreamReader<R> {
    /// Size of the refill buffer in bytes
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Number of complete 4-byte values produced so far
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Number of bytes consumed from the buffer so far
    pub fn bytes_consumed(&self) -> u64 {
        self.bytes_consumed
    }

    /// Bytes read from the source but not consumed yet
    pub fn buffered(&self) -> usize {
        self.length - self.position
    }

    /// Give back the underlying source. Buffered bytes are dropped.
    pub fn into_inner(self) -> R {
        self.source
    }
}

impl<R: Read> StreamReader<R> {
    /// Create a reader with the default 4096-byte buffer.
    pub fn new(source: R) -> Result<Self, StreamError> {
        Self::with_capacity(source, DEFAULT_CAPACITY)
    }

    /// Create a reader with a buffer of `capacity` bytes.
    ///
    /// Nothing is read from `source` until the first draw.
    pub fn with_capacity(source: R, capacity: NonZeroUsize) -> Result<Self, StreamError> {
        let capacity = capacity.get();
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity)
            .map_err(|_| StreamError::AllocationFailure {
                what: "stream buffer",
                bytes: capacity,
            })?;
        buf.resize(capacity, 0);

        Ok(Self {
            source,
            buf,
            position: 0,
            length: 0,
            draws: 0,
            bytes_consumed: 0,
        })
    }

    /// Read up to `capacity` bytes into the buffer, replacing its content.
    ///
    /// Returns `false` on end of stream.
    pub fn refill(&mut self) -> Result<bool, StreamError> {
        let read = loop {
            match self.source.read(&mut self.buf) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(StreamError::Read(e)),
            }
        };

        self.length = read;
        self.position = 0;
        log::trace!("refilled {} of {} buffer bytes", read, self.buf.len());
        Ok(read > 0)
    }

    /// Decode the next 4 bytes as a little-endian `u32`.
    ///
    /// Refills transparently across buffer boundaries. If the stream ends
    /// before 4 bytes are available the call fails with
    /// [`StreamError::Exhausted`]; a partial value is never returned.
    pub fn read_u32(&mut self) -> Result<u32, StreamError> {
        let mut value = 0u32;

        for i in 0..4usize {
            if self.position == self.length && !self.refill()? {
                return Err(StreamError::Exhausted {
                    draws: self.draws,
                    partial: i,
                });
            }
            value |= u32::from(self.buf[self.position]) << (8 * i);
            self.position += 1;
            self.bytes_consumed += 1;
        }

        self.draws += 1;
        Ok(value)
    }
}
