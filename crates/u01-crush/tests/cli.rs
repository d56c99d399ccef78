//! Process-level checks of the u01-crush binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn u01_crush(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_u01-crush"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn u01-crush");

    // The child may exit without reading; a broken pipe here is expected
    let mut child_stdin = child.stdin.take().unwrap();
    let _ = child_stdin.write_all(stdin);
    drop(child_stdin);

    child.wait_with_output().expect("failed to wait for u01-crush")
}

#[test]
fn help_exits_zero_without_running() {
    for flag in ["-h", "--help"] {
        let out = Command::new(env!("CARGO_BIN_EXE_u01-crush"))
            .arg(flag)
            .stdin(Stdio::null())
            .output()
            .unwrap();

        assert!(out.status.success(), "{} failed: {:?}", flag, out);
        let stdout = String::from_utf8_lossy(&out.stdout);
        assert!(stdout.contains("--small"));
        assert!(stdout.contains("--medium"));
        assert!(stdout.contains("--big"));
        assert!(stdout.contains("--name"));
        assert!(!stdout.contains("Running"));
    }
}

#[test]
fn help_ignores_pending_stdin() {
    // Help must not wait for (or consume) the random stream
    let out = u01_crush(&["--help"], &[0u8; 4096]);
    assert!(out.status.success());
    assert!(!String::from_utf8_lossy(&out.stdout).contains("Running"));
}

#[test]
fn version_exits_zero() {
    let out = u01_crush(&["--version"], &[]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("u01-crush"));
}

#[test]
fn empty_stream_fails() {
    let out = u01_crush(&["--small", "--name", "empty"], &[]);

    assert!(!out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Running SmallCrush on 'empty'..."));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error:"));
}

#[test]
fn startup_line_uses_default_name_and_battery() {
    let out = u01_crush(&[], &[1, 2, 3]);

    assert!(!out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Running BigCrush on 'Rust RNG'..."));
}

#[test]
fn unknown_flag_is_usage_error() {
    let out = u01_crush(&["--huge"], &[]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
}
