use crate::error::ExifPropsError;
use serde::Serialize;
use std::fmt;

/// The exposure program (preset) the camera used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[repr(u8)]
pub enum ExposureProgramSetting {
    #[default]
    Undefined = 0,
    Manual = 1,
    /// Normal program.
    Program = 2,
    AperturePriority = 3,
    ShutterPriority = 4,
    /// Biased towards depth of field.
    Creative = 5,
    /// Biased towards fast shutter speed.
    Action = 6,
    /// Close-up with the background out of focus.
    Portrait = 7,
    /// Background in focus.
    Landscape = 8,
}

impl ExposureProgramSetting {
    pub const ALL: [ExposureProgramSetting; 9] = [
        ExposureProgramSetting::Undefined,
        ExposureProgramSetting::Manual,
        ExposureProgramSetting::Program,
        ExposureProgramSetting::AperturePriority,
        ExposureProgramSetting::ShutterPriority,
        ExposureProgramSetting::Creative,
        ExposureProgramSetting::Action,
        ExposureProgramSetting::Portrait,
        ExposureProgramSetting::Landscape,
    ];

    /// Total conversion: values above 8 become [`ExposureProgramSetting::Undefined`].
    pub fn from_byte(value: u8) -> Self {
        Self::try_from(value).unwrap_or_else(|_| {
            log::debug!("Exposure program value {} out of range, using Undefined", value);
            ExposureProgramSetting::Undefined
        })
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            ExposureProgramSetting::Undefined => "Undefined",
            ExposureProgramSetting::Manual => "Manual",
            ExposureProgramSetting::Program => "Program",
            ExposureProgramSetting::AperturePriority => "AperturePriority",
            ExposureProgramSetting::ShutterPriority => "ShutterPriority",
            ExposureProgramSetting::Creative => "Creative",
            ExposureProgramSetting::Action => "Action",
            ExposureProgramSetting::Portrait => "Portrait",
            ExposureProgramSetting::Landscape => "Landscape",
        }
    }
}

impl TryFrom<u8> for ExposureProgramSetting {
    type Error = ExifPropsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(ExifPropsError::OutOfRange {
                name: "ExposureProgramSetting",
                value,
                max: 8,
            })
    }
}

impl fmt::Display for ExposureProgramSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_known_values() {
        assert_eq!(
            ExposureProgramSetting::from_byte(0),
            ExposureProgramSetting::Undefined
        );
        assert_eq!(
            ExposureProgramSetting::from_byte(2),
            ExposureProgramSetting::Program
        );
        assert_eq!(
            ExposureProgramSetting::from_byte(8),
            ExposureProgramSetting::Landscape
        );
        for (i, program) in ExposureProgramSetting::ALL.iter().enumerate() {
            assert_eq!(program.value() as usize, i);
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            ExposureProgramSetting::from_byte(9),
            ExposureProgramSetting::Undefined
        );
        assert_matches!(
            ExposureProgramSetting::try_from(42),
            Err(ExifPropsError::OutOfRange { value: 42, .. })
        );
    }
}
