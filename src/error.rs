use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExifPropsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("EXIF read error: {0}")]
    Exif(#[from] exif::Error),

    #[error("Unknown EXIF data type code: {0}")]
    UnknownTagType(u16),

    #[error("Value {value} is out of range for {name} (expected 0..={max})")]
    OutOfRange {
        name: &'static str,
        value: u8,
        max: u8,
    },
}
