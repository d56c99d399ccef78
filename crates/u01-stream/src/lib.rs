//! Byte stream to TestU01 generator adapter
//!
//! Turns an unbounded byte source (normally standard input fed by an external
//! RNG process) into the two numeric views a TestU01 battery asks for:
//!
//! - **raw bits**: the next 4 bytes as a little-endian `u32`
//! - **unit interval**: the same kind of draw divided by 2^32, in `[0, 1)`
//!
//! Both views pull from one shared [`StreamReader`], so every byte of the
//! input is consumed exactly once no matter how the battery interleaves its
//! calls.

pub mod adapter;
pub mod error;
pub mod generator;
pub mod reader;

pub use adapter::{DEFAULT_NAME, GeneratorAdapter};
pub use error::StreamError;
pub use generator::Generator;
pub use reader::{DEFAULT_CAPACITY, StreamReader};
