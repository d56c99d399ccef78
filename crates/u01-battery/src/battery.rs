//! The three predefined TestU01 batteries.

use strum::{Display, EnumIter};
use u01_stream::Generator;

use crate::cgen::CGenerator;
use crate::error::BatteryError;

/// A predefined suite of statistical tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum Battery {
    #[strum(to_string = "SmallCrush")]
    Small,
    #[strum(to_string = "Crush")]
    Medium,
    #[default]
    #[strum(to_string = "BigCrush")]
    Big,
}

impl Battery {
    /// Whether this build links TestU01
    pub const fn is_available() -> bool {
        cfg!(testu01)
    }

    /// Rough wall-clock time on a fast generator
    pub fn approximate_duration(self) -> &'static str {
        match self {
            Battery::Small => "~10 seconds",
            Battery::Medium => "~30 minutes",
            Battery::Big => "~4 hours",
        }
    }

    /// Run the battery against `generator`.
    ///
    /// The report is printed on stdout by TestU01. The battery decides how
    /// many values it draws; a draw failure terminates the process (see
    /// [`crate::cgen`]).
    pub fn run<G: Generator>(self, generator: &mut G) -> Result<(), BatteryError> {
        let mut cgen = CGenerator::new(generator)?;
        log::info!("starting {} ({})", self, self.approximate_duration());
        self.launch(&mut cgen)
    }

    #[cfg(testu01)]
    fn launch<G: Generator>(self, cgen: &mut CGenerator<'_, G>) -> Result<(), BatteryError> {
        use crate::ffi::{bbattery_BigCrush, bbattery_Crush, bbattery_SmallCrush};

        let raw = cgen.as_mut_ptr();
        // SAFETY: `raw` stays valid for the whole call; `cgen` is borrowed
        // mutably until the battery returns
        unsafe {
            match self {
                Battery::Small => bbattery_SmallCrush(raw),
                Battery::Medium => bbattery_Crush(raw),
                Battery::Big => bbattery_BigCrush(raw),
            }
        }
        Ok(())
    }

    #[cfg(not(testu01))]
    fn launch<G: Generator>(self, _cgen: &mut CGenerator<'_, G>) -> Result<(), BatteryError> {
        Err(BatteryError::Unavailable { battery: self })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_names_match_testu01() {
        let names: Vec<String> = Battery::iter().map(|b| b.to_string()).collect();
        assert_eq!(names, ["SmallCrush", "Crush", "BigCrush"]);
    }

    #[test]
    fn test_default_is_bigcrush() {
        assert_eq!(Battery::default(), Battery::Big);
    }

    #[cfg(not(testu01))]
    #[test]
    fn test_unavailable_without_testu01() {
        use std::io::Cursor;
        use u01_stream::{GeneratorAdapter, StreamReader};

        assert!(!Battery::is_available());

        let mut reader = StreamReader::new(Cursor::new(vec![0u8; 64])).unwrap();
        for battery in Battery::iter() {
            let mut generator = GeneratorAdapter::new(None, &mut reader).unwrap();
            match battery.run(&mut generator) {
                Err(BatteryError::Unavailable { battery: b }) => assert_eq!(b, battery),
                other => panic!("unexpected result: {:?}", other),
            }
        }
        assert_eq!(reader.draws(), 0);
    }
}
