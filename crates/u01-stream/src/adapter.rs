//! [`Generator`] implementation over a shared [`StreamReader`].

use std::io::{self, Read, Write};

use crate::error::StreamError;
use crate::generator::Generator;
use crate::reader::StreamReader;

/// Name used when the caller does not provide one.
pub const DEFAULT_NAME: &str = "Rust RNG";

/// 2^32, the divisor mapping a `u32` draw into `[0, 1)`
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Generator handed to a battery for the duration of one run.
///
/// Holds only its display name; all sequencing state lives in the borrowed
/// reader, which outlives the adapter and keeps its counters afterwards.
pub struct GeneratorAdapter<'r, R> {
    name: String,
    reader: &'r mut StreamReader<R>,
}

impl<'r, R: Read> GeneratorAdapter<'r, R> {
    /// Bind a display name (or [`DEFAULT_NAME`]) to the reader.
    pub fn new(name: Option<&str>, reader: &'r mut StreamReader<R>) -> Result<Self, StreamError> {
        let name = name.unwrap_or(DEFAULT_NAME);

        let mut owned = String::new();
        owned
            .try_reserve_exact(name.len())
            .map_err(|_| StreamError::AllocationFailure {
                what: "generator name",
                bytes: name.len(),
            })?;
        owned.push_str(name);

        log::debug!("created generator '{}'", owned);
        Ok(Self { name: owned, reader })
    }
}

impl<R> GeneratorAdapter<'_, R> {
    /// The reader this generator draws from
    pub fn reader(&self) -> &StreamReader<R> {
        &*self.reader
    }
}

impl<R: Read> Generator for GeneratorAdapter<'_, R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_bits(&mut self) -> Result<u32, StreamError> {
        self.reader.read_u32()
    }

    fn next_unit_interval(&mut self) -> Result<f64, StreamError> {
        Ok(f64::from(self.reader.read_u32()?) / TWO_POW_32)
    }

    /// A byte stream has no state to snapshot; emit the blank line TestU01
    /// expects in its place.
    fn write_state(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(b"\n")
    }
}

impl<R> Drop for GeneratorAdapter<'_, R> {
    fn drop(&mut self) {
        log::debug!(
            "released generator '{}' after {} draws",
            self.name,
            self.reader.draws()
        );
    }
}
