//! Errors raised while drawing values from the input stream.

use std::io;

use thiserror::Error;

/// Stream errors. None of them are recoverable: a battery run on a truncated
/// stream is meaningless, so callers abort the run.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("input stream exhausted after {draws} draws ({partial} of 4 bytes of the next value read)")]
    Exhausted { draws: u64, partial: usize },

    #[error("failed to allocate {bytes} bytes for the {what}")]
    AllocationFailure { what: &'static str, bytes: usize },

    #[error("read error: {0}")]
    Read(#[from] io::Error),
}

impl StreamError {
    /// True when the stream ended before a full value could be assembled.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, StreamError::Exhausted { .. })
    }
}
