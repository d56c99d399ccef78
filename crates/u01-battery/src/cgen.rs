//! Safe wrapper exposing a Rust [`Generator`] as a TestU01 `unif01_Gen`.
//!
//! The `state` pointer of the C handle points at the borrowed generator and
//! the three function pointers are trampolines monomorphized for its type,
//! so no global state is involved.

use std::ffi::CString;
use std::io::{self, Write};
use std::marker::PhantomData;
use std::ptr;

use libc::{c_double, c_int, c_ulong, c_void};
use u01_stream::{Generator, StreamError};

use crate::error::BatteryError;
use crate::ffi::Unif01Gen;

/// Process exit status when a draw fails inside a battery
pub const EXIT_STREAM_FAILURE: i32 = 1;

/// A `unif01_Gen` bound to an exclusively borrowed generator.
pub struct CGenerator<'g, G> {
    raw: Unif01Gen,
    /// Backing storage for `raw.name`
    _name: CString,
    _generator: PhantomData<&'g mut G>,
}

impl<'g, G: Generator> CGenerator<'g, G> {
    /// Build the C handle. Fails if the name cannot be passed as a C string.
    pub fn new(generator: &'g mut G) -> Result<Self, BatteryError> {
        let name = CString::new(generator.name()).map_err(|_| BatteryError::InvalidName {
            name: generator.name().to_string(),
        })?;

        let raw = Unif01Gen {
            state: (generator as *mut G).cast::<c_void>(),
            param: ptr::null_mut(),
            name: name.as_ptr().cast_mut(),
            get_u01: get_u01::<G>,
            get_bits: get_bits::<G>,
            write: write_state::<G>,
        };

        Ok(Self {
            raw,
            _name: name,
            _generator: PhantomData,
        })
    }

    /// Pointer handed to TestU01. Valid while `self` is neither moved nor
    /// dropped.
    pub fn as_mut_ptr(&mut self) -> *mut Unif01Gen {
        &mut self.raw
    }

    pub fn as_ptr(&self) -> *const Unif01Gen {
        &self.raw
    }
}

/// Report a draw failure and terminate.
///
/// TestU01 has no way to receive an error from a generator, and handing it a
/// made-up value would corrupt the report, so the run ends here.
fn fatal(err: &StreamError) -> ! {
    let _ = io::stdout().flush();
    eprintln!("Error: {}", err);
    std::process::exit(EXIT_STREAM_FAILURE);
}

/// # Safety
/// `state` must be the pointer installed by [`CGenerator::new`] for a `G`.
unsafe extern "C" fn get_bits<G: Generator>(_param: *mut c_void, state: *mut c_void) -> c_ulong {
    // SAFETY: guaranteed by the caller; the CGenerator holds the unique borrow
    let generator = unsafe { &mut *state.cast::<G>() };
    match generator.next_bits() {
        Ok(bits) => c_ulong::from(bits),
        Err(err) => fatal(&err),
    }
}

/// # Safety
/// Same contract as [`get_bits`].
unsafe extern "C" fn get_u01<G: Generator>(_param: *mut c_void, state: *mut c_void) -> c_double {
    // SAFETY: guaranteed by the caller; the CGenerator holds the unique borrow
    let generator = unsafe { &mut *state.cast::<G>() };
    match generator.next_unit_interval() {
        Ok(u) => u,
        Err(err) => fatal(&err),
    }
}

/// # Safety
/// Same contract as [`get_bits`].
unsafe extern "C" fn write_state<G: Generator>(state: *mut c_void) {
    // SAFETY: guaranteed by the caller; only a shared reference is needed
    let generator = unsafe { &*state.cast::<G>() };
    if let Err(err) = generator.write_state(&mut CStdout) {
        log::warn!("failed to write state of '{}': {}", generator.name(), err);
    }
}

/// Writer over the C library's `stdout`, so output lands in order with the
/// battery's own `printf` calls.
struct CStdout;

impl Write for CStdout {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().flush()?;
        for &byte in buf {
            // SAFETY: putchar only touches the C stdout stream
            if unsafe { libc::putchar(c_int::from(byte)) } == libc::EOF {
                return Err(io::Error::last_os_error());
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        // SAFETY: a null stream flushes every open C output stream
        if unsafe { libc::fflush(ptr::null_mut()) } != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}
