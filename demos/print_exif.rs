use exif_props::{ExifPropsError, ExifReader};
use std::path::PathBuf;

const IMAGE_PATH: &str = "data/image.jpg";

fn main() -> Result<(), ExifPropsError> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(IMAGE_PATH));

    let exif = ExifReader::new().continue_on_error(true).read_path(&path)?;

    println!("Orientation:        {}", exif.orientation());
    println!(
        "Photo Taken:        {}",
        exif.date_time_original()
            .map(|dt| dt.to_string())
            .unwrap_or_default()
    );
    println!("Camera Model:       {}", exif.camera_model().trim_end_matches('\0'));
    println!("Exposure Program:   {}", exif.exposure_program());

    match serde_json::to_string_pretty(&exif.summary()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::warn!("Could not serialize summary: {}", e),
    }

    Ok(())
}
