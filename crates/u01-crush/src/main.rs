//! u01-crush
//!
//! Reads random bytes from stdin and runs one TestU01 battery on them.
//!
//! ```text
//! ./target/release/rng_test | u01-crush --small --name "my rng"
//! ```

use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use u01_battery::Battery;
use u01_stream::{DEFAULT_CAPACITY, Generator, GeneratorAdapter, StreamReader};

/// Run a TestU01 battery on random bytes read from stdin
#[derive(Parser, Debug)]
#[command(name = "u01-crush")]
#[command(version, about = "Reads random bytes from stdin and runs a TestU01 battery", long_about = None)]
#[command(after_help = "Example:\n  ./target/release/rng_test | u01-crush --small")]
#[command(args_override_self = true)]
struct Args {
    /// Run SmallCrush (~10 seconds)
    #[arg(short = 's', long = "small", overrides_with_all = ["medium", "big"])]
    small: bool,

    /// Run Crush (~30 minutes)
    #[arg(short = 'm', long = "medium", overrides_with_all = ["small", "big"])]
    medium: bool,

    /// Run BigCrush (~4 hours) [default]
    #[arg(short = 'b', long = "big", overrides_with_all = ["small", "medium"])]
    big: bool,

    /// Generator name for the report
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    name: Option<String>,

    /// Size of the stdin read buffer in bytes
    #[arg(long = "buffer-size", value_name = "BYTES", default_value_t = DEFAULT_CAPACITY)]
    buffer_size: NonZeroUsize,
}

impl Args {
    /// Selected battery; the last battery flag wins, BigCrush when none
    fn battery(&self) -> Battery {
        if self.small {
            Battery::Small
        } else if self.medium {
            Battery::Medium
        } else {
            Battery::Big
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // --help and --version exit here, before stdin is touched
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let battery = args.battery();

    let stdin = io::stdin();
    let mut reader = StreamReader::with_capacity(stdin.lock(), args.buffer_size)
        .context("failed to set up the stdin reader")?;

    {
        let mut generator = GeneratorAdapter::new(args.name.as_deref(), &mut reader)
            .context("failed to create the generator")?;

        println!("Running {} on '{}'...", battery, generator.name());
        io::stdout().flush()?;

        battery.run(&mut generator)?;
    }

    log::info!(
        "{} finished after {} draws ({} bytes, {} left unread in the buffer)",
        battery,
        reader.draws(),
        reader.bytes_consumed(),
        reader.buffered()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("u01-crush").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_default_battery_is_big() {
        let args = parse(&[]);
        assert_eq!(args.battery(), Battery::Big);
        assert_eq!(args.name, None);
        assert_eq!(args.buffer_size.get(), 4096);
    }

    #[test]
    fn test_battery_flags() {
        assert_eq!(parse(&["-s"]).battery(), Battery::Small);
        assert_eq!(parse(&["--small"]).battery(), Battery::Small);
        assert_eq!(parse(&["-m"]).battery(), Battery::Medium);
        assert_eq!(parse(&["--medium"]).battery(), Battery::Medium);
        assert_eq!(parse(&["-b"]).battery(), Battery::Big);
        assert_eq!(parse(&["--big"]).battery(), Battery::Big);
    }

    #[test]
    fn test_last_battery_flag_wins() {
        assert_eq!(parse(&["-s", "-m"]).battery(), Battery::Medium);
        assert_eq!(parse(&["-m", "-s"]).battery(), Battery::Small);
        assert_eq!(parse(&["-s", "-b"]).battery(), Battery::Big);
        assert_eq!(parse(&["--big", "--small"]).battery(), Battery::Small);
        assert_eq!(parse(&["-s", "-s"]).battery(), Battery::Small);
        assert_eq!(parse(&["-s", "-m", "-s"]).battery(), Battery::Small);
        assert_eq!(parse(&["-m", "--medium"]).battery(), Battery::Medium);
    }

    #[test]
    fn test_name() {
        assert_eq!(parse(&["-n", "xorshift"]).name.as_deref(), Some("xorshift"));
        assert_eq!(
            parse(&["--name", "chacha20", "-s"]).name.as_deref(),
            Some("chacha20")
        );
        assert_eq!(parse(&["-n", "a", "-n", "b"]).name.as_deref(), Some("b"));
        assert_eq!(
            parse(&["--name", "first", "-s", "--name", "second"]).name.as_deref(),
            Some("second")
        );
    }

    #[test]
    fn test_buffer_size() {
        assert_eq!(parse(&["--buffer-size", "3"]).buffer_size.get(), 3);
        assert!(Args::try_parse_from(["u01-crush", "--buffer-size", "0"]).is_err());
    }

    #[test]
    fn test_help_is_not_a_run() {
        let err = Args::try_parse_from(["u01-crush", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        let err = Args::try_parse_from(["u01-crush", "-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_name_requires_value() {
        assert!(Args::try_parse_from(["u01-crush", "-n"]).is_err());
    }
}
