//! Capability set a TestU01 battery expects from a generator.

use std::io::{self, Write};

use crate::error::StreamError;

/// A source a battery can pull from.
///
/// Every call to [`next_bits`](Generator::next_bits) or
/// [`next_unit_interval`](Generator::next_unit_interval) consumes the next
/// undrawn value; the two methods share one sequence.
pub trait Generator {
    /// Name shown in the battery report header
    fn name(&self) -> &str;

    /// Next raw 32-bit output
    fn next_bits(&mut self) -> Result<u32, StreamError>;

    /// Next output scaled into `[0, 1)`
    fn next_unit_interval(&mut self) -> Result<f64, StreamError>;

    /// Print the generator state as part of the report
    fn write_state(&self, out: &mut dyn Write) -> io::Result<()>;
}
