use crate::lookup::{CameraOrientation, ExposureProgramSetting};
use crate::parse_fn::ascii::decode_ascii;
use crate::parse_fn::datetime::parse_exif_datetime;
use crate::raw::RawTagValue;
use crate::summary::ExifSummary;
use crate::tag::TagId;
use chrono::NaiveDateTime;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Typed, read-only view over the raw EXIF entries of one image.
///
/// Every property is recomputed from the raw entries on access. Missing or
/// malformed values never produce an error: strings fall back to `""`,
/// dates to `None` and enumerations to their `Undefined` variant.
///
/// ```
/// use exif_props::{RawTagValue, TagDecoder, TagId};
///
/// let decoder = TagDecoder::new([
///     (TagId::MAKE, RawTagValue::ascii("Acme")),
///     (TagId::ORIENTATION, RawTagValue::unsigned_shorts(&[1])),
/// ]);
/// assert_eq!(decoder.camera_make(), "Acme\0");
/// assert_eq!(decoder.orientation().to_string(), "Normal");
/// assert_eq!(decoder.camera_model(), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TagDecoder {
    entries: HashMap<TagId, RawTagValue>,
}

impl TagDecoder {
    /// Builds a decoder from reader output. If a tag id is reported more
    /// than once, the first payload is kept.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (TagId, RawTagValue)>,
    {
        let mut map = HashMap::new();
        for (tag, value) in entries {
            match map.entry(tag) {
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
                Entry::Occupied(_) => {
                    log::debug!("Ignoring duplicate entry for tag {}", tag);
                }
            }
        }
        Self { entries: map }
    }

    // --- Presence ---

    pub fn contains(&self, tag: TagId) -> bool {
        self.entries.contains_key(&tag)
    }

    pub fn raw(&self, tag: TagId) -> Option<&RawTagValue> {
        self.entries.get(&tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (TagId, &RawTagValue)> {
        self.entries.iter().map(|(tag, value)| (*tag, value))
    }

    // --- Primitives ---

    /// First byte of the payload, or `None` if the tag is absent or its
    /// payload is not longer than one byte.
    pub fn try_byte(&self, tag: TagId) -> Option<u8> {
        self.raw(tag)
            .map(RawTagValue::bytes)
            .filter(|bytes| bytes.len() > 1)
            .map(|bytes| bytes[0])
    }

    /// First byte of the payload, `0` when there is none.
    ///
    /// Single-byte enumerations are usually stored as a little-endian short,
    /// hence the first byte. Absence, a short payload and an explicit zero
    /// all read as `0`; use [`TagDecoder::try_byte`] to tell them apart.
    pub fn get_byte(&self, tag: TagId) -> u8 {
        self.try_byte(tag).unwrap_or(0)
    }

    /// Payload decoded as ASCII, NUL terminators included. `""` when absent.
    pub fn get_ascii_string(&self, tag: TagId) -> String {
        self.raw(tag)
            .map(|value| decode_ascii(value.bytes()))
            .unwrap_or_default()
    }

    /// Payload parsed as an EXIF date/time, `None` when absent or unparseable.
    pub fn get_date_time(&self, tag: TagId) -> Option<NaiveDateTime> {
        parse_exif_datetime(&self.get_ascii_string(tag))
    }

    // --- Properties ---

    pub fn image_description(&self) -> String {
        self.get_ascii_string(TagId::IMAGE_DESCRIPTION)
    }

    pub fn camera_make(&self) -> String {
        self.get_ascii_string(TagId::MAKE)
    }

    pub fn camera_model(&self) -> String {
        self.get_ascii_string(TagId::MODEL)
    }

    pub fn software(&self) -> String {
        self.get_ascii_string(TagId::SOFTWARE)
    }

    pub fn copyright(&self) -> String {
        self.get_ascii_string(TagId::COPYRIGHT)
    }

    /// Four ASCII digits, e.g. `"0230"` for version 2.30.
    pub fn exif_version(&self) -> String {
        self.get_ascii_string(TagId::EXIF_VERSION)
    }

    /// When the file was last changed.
    pub fn date_time_modified(&self) -> Option<NaiveDateTime> {
        self.get_date_time(TagId::DATE_TIME)
    }

    /// When the picture was taken. `None` also covers cameras without a clock.
    pub fn date_time_original(&self) -> Option<NaiveDateTime> {
        self.get_date_time(TagId::DATE_TIME_ORIGINAL)
    }

    /// When the picture was digitized, usually equal to [`TagDecoder::date_time_original`].
    pub fn date_time_digitized(&self) -> Option<NaiveDateTime> {
        self.get_date_time(TagId::DATE_TIME_DIGITIZED)
    }

    pub fn orientation(&self) -> CameraOrientation {
        CameraOrientation::from_byte(self.get_byte(TagId::ORIENTATION))
    }

    pub fn exposure_program(&self) -> ExposureProgramSetting {
        ExposureProgramSetting::from_byte(self.get_byte(TagId::EXPOSURE_PROGRAM))
    }

    /// Snapshot of every typed property.
    pub fn summary(&self) -> ExifSummary {
        ExifSummary::from(self)
    }
}

impl FromIterator<(TagId, RawTagValue)> for TagDecoder {
    fn from_iter<I: IntoIterator<Item = (TagId, RawTagValue)>>(iter: I) -> Self {
        TagDecoder::new(iter)
    }
}
