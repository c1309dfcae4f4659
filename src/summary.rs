use crate::decoder::TagDecoder;
use crate::lookup::{CameraOrientation, ExposureProgramSetting};
use chrono::NaiveDateTime;
use serde::Serialize;

/// All typed properties of a [`TagDecoder`], taken at once.
///
/// Text fields have their trailing NUL terminators removed, everything else
/// is exactly what the decoder's accessors return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExifSummary {
    pub image_description: String,
    pub camera_make: String,
    pub camera_model: String,
    pub software: String,
    pub copyright: String,
    pub exif_version: String,
    pub date_time_modified: Option<NaiveDateTime>,
    pub date_time_original: Option<NaiveDateTime>,
    pub date_time_digitized: Option<NaiveDateTime>,
    pub orientation: CameraOrientation,
    pub exposure_program: ExposureProgramSetting,
}

fn trim_nul(mut text: String) -> String {
    let len = text.trim_end_matches('\0').len();
    text.truncate(len);
    text
}

impl From<&TagDecoder> for ExifSummary {
    fn from(decoder: &TagDecoder) -> Self {
        Self {
            image_description: trim_nul(decoder.image_description()),
            camera_make: trim_nul(decoder.camera_make()),
            camera_model: trim_nul(decoder.camera_model()),
            software: trim_nul(decoder.software()),
            copyright: trim_nul(decoder.copyright()),
            exif_version: trim_nul(decoder.exif_version()),
            date_time_modified: decoder.date_time_modified(),
            date_time_original: decoder.date_time_original(),
            date_time_digitized: decoder.date_time_digitized(),
            orientation: decoder.orientation(),
            exposure_program: decoder.exposure_program(),
        }
    }
}
