pub mod exposure_program;
pub mod orientation;

pub use exposure_program::ExposureProgramSetting;
pub use orientation::CameraOrientation;
