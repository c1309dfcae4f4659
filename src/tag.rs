use crate::error::ExifPropsError;
use std::fmt;

/// Numeric identifier of an EXIF field, as stored in the image file directory.
///
/// Any `u16` is a legal id; ids the decoder has no property for are simply
/// never looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagId(pub u16);

impl TagId {
    pub const IMAGE_DESCRIPTION: TagId = TagId(0x010E);
    pub const MAKE: TagId = TagId(0x010F);
    pub const MODEL: TagId = TagId(0x0110);
    pub const ORIENTATION: TagId = TagId(0x0112);
    pub const SOFTWARE: TagId = TagId(0x0131);
    /// Date/time the file was last changed ("ModifyDate").
    pub const DATE_TIME: TagId = TagId(0x0132);
    pub const COPYRIGHT: TagId = TagId(0x8298);
    pub const EXPOSURE_PROGRAM: TagId = TagId(0x8822);
    pub const EXIF_VERSION: TagId = TagId(0x9000);
    pub const DATE_TIME_ORIGINAL: TagId = TagId(0x9003);
    pub const DATE_TIME_DIGITIZED: TagId = TagId(0x9004);

    pub fn number(self) -> u16 {
        self.0
    }
}

impl From<u16> for TagId {
    fn from(value: u16) -> Self {
        TagId(value)
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04x}", self.0)
    }
}

/// The twelve primitive data formats an EXIF directory entry can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagType {
    /// Unsigned 8-bit values.
    UnsignedByte,
    /// NUL-terminated 7-bit ASCII text.
    Ascii,
    UnsignedShort,
    UnsignedLong,
    /// Two unsigned longs: numerator then denominator.
    UnsignedRational,
    SignedByte,
    /// Opaque bytes whose meaning depends on the tag.
    Undefined,
    SignedShort,
    SignedLong,
    /// Two signed longs: numerator then denominator.
    SignedRational,
    Float,
    Double,
}

impl TagType {
    /// Maps the format code found in a directory entry to its type.
    ///
    /// Codes outside `1..=12` are not defined by the format and are reported
    /// as [`ExifPropsError::UnknownTagType`].
    pub fn from_code(code: u16) -> Result<Self, ExifPropsError> {
        use TagType::*;
        Ok(match code {
            1 => UnsignedByte,
            2 => Ascii,
            3 => UnsignedShort,
            4 => UnsignedLong,
            5 => UnsignedRational,
            6 => SignedByte,
            7 => Undefined,
            8 => SignedShort,
            9 => SignedLong,
            10 => SignedRational,
            11 => Float,
            12 => Double,
            other => return Err(ExifPropsError::UnknownTagType(other)),
        })
    }

    pub fn code(self) -> u16 {
        use TagType::*;
        match self {
            UnsignedByte => 1,
            Ascii => 2,
            UnsignedShort => 3,
            UnsignedLong => 4,
            UnsignedRational => 5,
            SignedByte => 6,
            Undefined => 7,
            SignedShort => 8,
            SignedLong => 9,
            SignedRational => 10,
            Float => 11,
            Double => 12,
        }
    }

    /// Size in bytes of a single component of this type.
    pub fn component_size(self) -> usize {
        use TagType::*;
        match self {
            UnsignedByte | Ascii | SignedByte | Undefined => 1,
            UnsignedShort | SignedShort => 2,
            UnsignedLong | SignedLong | Float => 4,
            UnsignedRational | SignedRational | Double => 8,
        }
    }
}

impl TryFrom<u16> for TagType {
    type Error = ExifPropsError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        TagType::from_code(code)
    }
}
