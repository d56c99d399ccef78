use thiserror::Error;

use crate::battery::Battery;

/// Errors raised before a battery gets to call the generator
#[derive(Debug, Error)]
pub enum BatteryError {
    #[error("{battery} is unavailable: built without TestU01 (set TESTU01_DIR and rebuild)")]
    Unavailable { battery: Battery },

    #[error("generator name {name:?} contains a NUL byte")]
    InvalidName { name: String },
}
