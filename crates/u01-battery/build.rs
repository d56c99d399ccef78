//! Build script for u01-battery
//!
//! Compiles the C callback harness and links TestU01 when it can be found.

use std::env;
use std::path::{Path, PathBuf};

/// Libraries installed by TestU01's `make install`
const TESTU01_LIBS: [&str; 3] = ["testu01", "probdist", "mylib"];

/// Where a system-wide TestU01 install usually lands
const SEARCH_DIRS: [&str; 6] = [
    "/usr/local/lib",
    "/usr/lib",
    "/usr/lib/x86_64-linux-gnu",
    "/usr/lib/aarch64-linux-gnu",
    "/opt/homebrew/lib",
    "/opt/local/lib",
];

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let c_src = PathBuf::from(&manifest_dir).join("c_src");

    println!("cargo:rustc-check-cfg=cfg(testu01)");

    // The harness is always built; tests drive generators through it
    let mut harness = cc::Build::new();
    harness.opt_level(2);
    harness.file(c_src.join("unif01_harness.c"));
    harness.compile("unif01_harness");

    match find_testu01() {
        Some(lib_dir) => {
            println!("cargo:rustc-cfg=testu01");
            println!("cargo:rustc-link-search=native={}", lib_dir.display());
            for lib in TESTU01_LIBS {
                println!("cargo:rustc-link-lib={}", lib);
            }
            println!("cargo:rustc-link-lib=m");
        }
        None => {
            println!(
                "cargo:warning=TestU01 not found, batteries will be unavailable (set TESTU01_DIR to its install prefix)"
            );
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=c_src/");
    println!("cargo:rerun-if-env-changed=TESTU01_DIR");
}

/// Locate the directory holding `libtestu01`.
///
/// `TESTU01_DIR` (the `--prefix` given to TestU01's configure) wins over the
/// system directories.
fn find_testu01() -> Option<PathBuf> {
    if let Ok(prefix) = env::var("TESTU01_DIR") {
        let lib_dir = PathBuf::from(prefix).join("lib");
        return has_testu01(&lib_dir).then_some(lib_dir);
    }

    SEARCH_DIRS
        .iter()
        .map(PathBuf::from)
        .find(|dir| has_testu01(dir))
}

fn has_testu01(dir: &Path) -> bool {
    ["libtestu01.so", "libtestu01.a", "libtestu01.dylib"]
        .iter()
        .any(|file| dir.join(file).exists())
}
