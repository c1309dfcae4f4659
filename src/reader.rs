use crate::decoder::TagDecoder;
use crate::error::ExifPropsError;
use crate::raw::RawTagValue;
use crate::tag::{TagId, TagType};
use exif::{Context, In, Value};
use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

/// Reads the EXIF directory of an image and hands its entries to a [`TagDecoder`].
///
/// Container parsing is delegated to `kamadak-exif`. Only primary-image
/// fields from the TIFF and Exif directories are collected; their decoded
/// values are re-encoded as little-endian payloads tagged with their
/// declared type, and ASCII components keep their NUL terminators.
///
/// ```no_run
/// use exif_props::{ExifPropsError, ExifReader};
/// use std::path::Path;
///
/// fn main() -> Result<(), ExifPropsError> {
///     let decoder = ExifReader::new()
///         .continue_on_error(true)
///         .read_path(Path::new("data/image.jpg"))?;
///     println!("Taken: {:?}", decoder.date_time_original());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExifReader {
    continue_on_error: bool,
}

impl ExifReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep whatever could be read when some directory entries are malformed.
    /// The skipped entries are logged as warnings.
    pub fn continue_on_error(mut self, continue_on_error: bool) -> Self {
        self.continue_on_error = continue_on_error;
        self
    }

    /// Opens a JPEG, TIFF, HEIF, PNG or WebP file and reads its EXIF entries.
    /// The file is closed before this returns.
    pub fn read_path(&self, path: &Path) -> Result<TagDecoder, ExifPropsError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        log::debug!("Reading EXIF from {}", path.display());
        self.read_container(&mut reader)
    }

    /// Reads EXIF entries from an in-memory or buffered image container.
    pub fn read_container<R: BufRead + Seek>(
        &self,
        reader: &mut R,
    ) -> Result<TagDecoder, ExifPropsError> {
        let exif = accept_partial(self.exif_reader().read_from_container(reader))?;
        Ok(collect_entries(&exif))
    }

    /// Reads EXIF entries from a bare TIFF structure (an APP1 payload
    /// without its `Exif\0\0` prefix).
    pub fn read_raw(&self, data: Vec<u8>) -> Result<TagDecoder, ExifPropsError> {
        let exif = accept_partial(self.exif_reader().read_raw(data))?;
        Ok(collect_entries(&exif))
    }

    fn exif_reader(&self) -> exif::Reader {
        let mut reader = exif::Reader::new();
        reader.continue_on_error(self.continue_on_error);
        reader
    }
}

/// Keeps a partial result (only produced with `continue_on_error`), logging
/// the entries that were skipped.
fn accept_partial(
    result: Result<exif::Exif, exif::Error>,
) -> Result<exif::Exif, ExifPropsError> {
    result
        .or_else(|e| {
            e.distill_partial_result(|errors| {
                for err in errors {
                    log::warn!("Skipped malformed EXIF entry: {}", err);
                }
            })
        })
        .map_err(ExifPropsError::from)
}

fn collect_entries(exif: &exif::Exif) -> TagDecoder {
    let decoder: TagDecoder = exif
        .fields()
        .filter(|field| field.ifd_num == In::PRIMARY)
        .filter(|field| matches!(field.tag.context(), Context::Tiff | Context::Exif))
        .filter_map(|field| {
            let raw = encode_value(&field.value);
            if raw.is_none() {
                log::debug!("Skipping tag {} with unknown type", field.tag);
            }
            raw.map(|raw| (TagId(field.tag.number()), raw))
        })
        .collect();
    log::debug!("Collected {} EXIF entries", decoder.len());
    decoder
}

fn le_bytes<T, const N: usize>(values: &[T], to_bytes: impl Fn(&T) -> [u8; N]) -> Vec<u8> {
    values.iter().flat_map(to_bytes).collect()
}

/// Turns a decoded value back into its declared type and raw payload.
fn encode_value(value: &Value) -> Option<RawTagValue> {
    let (tag_type, bytes) = match value {
        Value::Byte(v) => (TagType::UnsignedByte, v.clone()),
        Value::Ascii(parts) => (
            TagType::Ascii,
            parts
                .iter()
                .flat_map(|part| part.iter().copied().chain(std::iter::once(0)))
                .collect(),
        ),
        Value::Short(v) => (TagType::UnsignedShort, le_bytes(v, |x| x.to_le_bytes())),
        Value::Long(v) => (TagType::UnsignedLong, le_bytes(v, |x| x.to_le_bytes())),
        Value::Rational(v) => (
            TagType::UnsignedRational,
            le_bytes(v, |r| {
                let mut out = [0u8; 8];
                out[..4].copy_from_slice(&r.num.to_le_bytes());
                out[4..].copy_from_slice(&r.denom.to_le_bytes());
                out
            }),
        ),
        Value::SByte(v) => (TagType::SignedByte, le_bytes(v, |x| x.to_le_bytes())),
        Value::Undefined(v, _) => (TagType::Undefined, v.clone()),
        Value::SShort(v) => (TagType::SignedShort, le_bytes(v, |x| x.to_le_bytes())),
        Value::SLong(v) => (TagType::SignedLong, le_bytes(v, |x| x.to_le_bytes())),
        Value::SRational(v) => (
            TagType::SignedRational,
            le_bytes(v, |r| {
                let mut out = [0u8; 8];
                out[..4].copy_from_slice(&r.num.to_le_bytes());
                out[4..].copy_from_slice(&r.denom.to_le_bytes());
                out
            }),
        ),
        Value::Float(v) => (TagType::Float, le_bytes(v, |x| x.to_le_bytes())),
        Value::Double(v) => (TagType::Double, le_bytes(v, |x| x.to_le_bytes())),
        Value::Unknown(..) => return None,
    };
    Some(RawTagValue::new(tag_type, bytes))
}
