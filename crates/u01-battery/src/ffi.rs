//! FFI bindings to TestU01's generator interface and batteries.
//!
//! The `u01_harness_*` functions come from a small C file built into this
//! crate. They call a `unif01_Gen` the way a battery does and exist only so
//! the callback tests can run without TestU01; they are hidden from the docs.

use libc::{c_char, c_double, c_long, c_ulong, c_void, size_t};

/// Generator handle - matches `unif01_Gen` from unif01.h
#[repr(C)]
pub struct Unif01Gen {
    pub state: *mut c_void,
    pub param: *mut c_void,
    pub name: *mut c_char,
    pub get_u01: unsafe extern "C" fn(param: *mut c_void, state: *mut c_void) -> c_double,
    pub get_bits: unsafe extern "C" fn(param: *mut c_void, state: *mut c_void) -> c_ulong,
    pub write: unsafe extern "C" fn(state: *mut c_void),
}

#[cfg(testu01)]
unsafe extern "C" {
    /// SmallCrush: 10 tests, about 10 seconds
    pub fn bbattery_SmallCrush(generator: *mut Unif01Gen);

    /// Crush: 96 tests, about 30 minutes
    pub fn bbattery_Crush(generator: *mut Unif01Gen);

    /// BigCrush: 106 tests, about 4 hours
    pub fn bbattery_BigCrush(generator: *mut Unif01Gen);
}

// Built from c_src/unif01_harness.c
unsafe extern "C" {
    /// Call the generator following `pattern` ('b' bits, 'u' unit interval,
    /// 'w' write). Returns the number of draws or -1 on a bad pattern.
    #[doc(hidden)]
    pub fn u01_harness_sample(
        generator: *mut Unif01Gen,
        pattern: *const c_char,
        bits: *mut c_ulong,
        u01: *mut c_double,
    ) -> c_long;

    /// `strlen` of the generator name as seen from C
    #[doc(hidden)]
    pub fn u01_harness_name_len(generator: *const Unif01Gen) -> size_t;
}
