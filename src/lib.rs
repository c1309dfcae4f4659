//! # exif-props
//!
//! Typed, tolerant access to the EXIF tags embedded in JPEG and TIFF images.
//!
//! An image metadata reader produces a map of tag id → (declared type, raw
//! bytes). [`TagDecoder`] layers typed properties over that map: strings,
//! optional date/times and enumerations. Absent or malformed tags never
//! produce an error, they fall back to `""`, `None` or `Undefined`.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use exif_props::{ExifPropsError, ExifReader};
//! use std::path::Path;
//!
//! fn main() -> Result<(), ExifPropsError> {
//!     let exif = ExifReader::new().read_path(Path::new("path/to/your/image.jpg"))?;
//!
//!     println!("Orientation:      {}", exif.orientation());
//!     println!("Photo taken:      {:?}", exif.date_time_original());
//!     println!("Camera model:     {}", exif.camera_model());
//!     println!("Exposure program: {}", exif.exposure_program());
//!     Ok(())
//! }
//! ```
//!
//! Decoders can also be built from entries obtained elsewhere:
//!
//! ```
//! use exif_props::{ExposureProgramSetting, RawTagValue, TagDecoder, TagId};
//!
//! let exif = TagDecoder::new([
//!     (TagId::DATE_TIME_ORIGINAL, RawTagValue::ascii("2016:03:21 02:30:00 PM")),
//!     (TagId::EXPOSURE_PROGRAM, RawTagValue::unsigned_shorts(&[2])),
//! ]);
//! assert_eq!(
//!     exif.date_time_original().map(|dt| dt.to_string()),
//!     Some("2016-03-21 14:30:00".to_string())
//! );
//! assert_eq!(exif.exposure_program(), ExposureProgramSetting::Program);
//! ```

mod decoder;
mod error;
mod raw;
mod reader;
mod summary;
mod tag;

pub use decoder::TagDecoder;
pub use error::ExifPropsError;
pub use raw::RawTagValue;
pub use reader::ExifReader;
pub use summary::ExifSummary;
pub use tag::{TagId, TagType};

pub mod lookup;
pub mod parse_fn;
pub use lookup::{CameraOrientation, ExposureProgramSetting};
