//! TestU01 batteries for u01-stream generators
//!
//! - `ffi`: `unif01_Gen` layout and battery entry points (plus a hidden C test harness)
//! - `cgen`: safe `unif01_Gen` wrapper with callback trampolines
//! - `battery`: SmallCrush / Crush / BigCrush selection and launch
//!
//! TestU01 is located at build time (see `build.rs`). Without it every
//! battery reports [`BatteryError::Unavailable`].

pub mod battery;
pub mod cgen;
pub mod error;
pub mod ffi;

pub use battery::Battery;
pub use cgen::CGenerator;
pub use error::BatteryError;
