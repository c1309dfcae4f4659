use crate::error::ExifPropsError;
use serde::Serialize;
use std::fmt;

/// Orientation of the camera relative to the captured scene.
///
/// "Sky" is the top of the scene, "left" is the photographer's left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[repr(u8)]
pub enum CameraOrientation {
    /// No orientation recorded, or a value the standard does not define.
    #[default]
    Undefined = 0,
    /// Sky at the top, photographer's left at the left.
    Normal = 1,
    /// Sky at the top, photographer's left at the right. Rare.
    Reversed = 2,
    /// Sky at the bottom, photographer's left at the right.
    UpsideDown = 3,
    /// Sky at the bottom, photographer's left at the left. Rare.
    Inverted = 4,
    /// Sky on the left, photographer's left at the top; the camera was
    /// turned 90° counterclockwise and the picture mirrored. Rare.
    ReverseSkyOnTheLeft = 5,
    /// Sky on the left, photographer's left at the top; the camera was
    /// turned 90° clockwise.
    LeftSideOfCameraTowardsSky = 6,
    /// Sky on the right, photographer's left at the top; the camera was
    /// turned 90° clockwise and the picture mirrored. Rare.
    ReverseSkyOnTheRight = 7,
    /// Sky on the right, photographer's left at the bottom; the camera was
    /// turned 90° counterclockwise.
    LeftSideOfCameraTowardsGround = 8,
}

impl CameraOrientation {
    pub const ALL: [CameraOrientation; 9] = [
        CameraOrientation::Undefined,
        CameraOrientation::Normal,
        CameraOrientation::Reversed,
        CameraOrientation::UpsideDown,
        CameraOrientation::Inverted,
        CameraOrientation::ReverseSkyOnTheLeft,
        CameraOrientation::LeftSideOfCameraTowardsSky,
        CameraOrientation::ReverseSkyOnTheRight,
        CameraOrientation::LeftSideOfCameraTowardsGround,
    ];

    /// Total conversion: values above 8 become [`CameraOrientation::Undefined`].
    pub fn from_byte(value: u8) -> Self {
        Self::try_from(value).unwrap_or_else(|_| {
            log::debug!("Orientation value {} out of range, using Undefined", value);
            CameraOrientation::Undefined
        })
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            CameraOrientation::Undefined => "Undefined",
            CameraOrientation::Normal => "Normal",
            CameraOrientation::Reversed => "Reversed",
            CameraOrientation::UpsideDown => "UpsideDown",
            CameraOrientation::Inverted => "Inverted",
            CameraOrientation::ReverseSkyOnTheLeft => "ReverseSkyOnTheLeft",
            CameraOrientation::LeftSideOfCameraTowardsSky => "LeftSideOfCameraTowardsSky",
            CameraOrientation::ReverseSkyOnTheRight => "ReverseSkyOnTheRight",
            CameraOrientation::LeftSideOfCameraTowardsGround => "LeftSideOfCameraTowardsGround",
        }
    }
}

impl TryFrom<u8> for CameraOrientation {
    type Error = ExifPropsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(ExifPropsError::OutOfRange {
                name: "CameraOrientation",
                value,
                max: 8,
            })
    }
}

impl fmt::Display for CameraOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
