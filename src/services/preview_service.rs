use crate::error::AppError;
use crate::models::media_types::{MediaKind, MediaPreview};
use crate::services::media_service;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::ImageReader;
use std::io::{Cursor, Read};
use std::path::Path;

const PREVIEW_SIZE: u32 = 512;
const PREVIEW_QUALITY: u8 = 75;

/// Build a preview data URI for the selected file.
///
/// Images are decoded, rotated per EXIF orientation, downscaled, and
/// re-encoded as JPEG. Videos are embedded verbatim with their container
/// MIME type, the way the analysis form previews them. Regenerated from the
/// file contents on every call.
pub fn generate_preview(path: &Path) -> Result<MediaPreview, AppError> {
    match media_service::sniff_kind(path) {
        MediaKind::Image => image_preview(path),
        MediaKind::Video => video_preview(path),
    }
}

fn image_preview(path: &Path) -> Result<MediaPreview, AppError> {
    let mut img = ImageReader::open(path)
        .map_err(|e| AppError {
            message: format!("Failed to open image {}: {}", path.display(), e),
        })?
        .decode()
        .map_err(|e| AppError {
            message: format!("Failed to decode image {}: {}", path.display(), e),
        })?;

    // Resize before rotating; the bounding box is square so orientation
    // doesn't change the target.
    let intermediate_size = PREVIEW_SIZE * 4;
    if img.width() > intermediate_size * 2 || img.height() > intermediate_size * 2 {
        img = img.resize(intermediate_size, intermediate_size, FilterType::Nearest);
    }
    img = img.resize(PREVIEW_SIZE, PREVIEW_SIZE, FilterType::Triangle);

    let orientation = read_exif_orientation(path);
    if orientation != 1 {
        img = apply_orientation(img, orientation);
    }

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, PREVIEW_QUALITY);
    img.write_with_encoder(encoder).map_err(|e| AppError {
        message: format!("Failed to encode preview: {}", e),
    })?;

    let b64 = base64::engine::general_purpose::STANDARD.encode(buffer.into_inner());
    Ok(MediaPreview {
        kind: MediaKind::Image,
        data_uri: format!("data:image/jpeg;base64,{}", b64),
    })
}

fn video_preview(path: &Path) -> Result<MediaPreview, AppError> {
    let bytes = std::fs::read(path).map_err(|e| AppError {
        message: format!("Failed to read video {}: {}", path.display(), e),
    })?;

    let b64 = base64::engine::general_purpose::STANDARD.encode(&bytes);
    Ok(MediaPreview {
        kind: MediaKind::Video,
        data_uri: format!("data:{};base64,{}", media_service::mime_for(path), b64),
    })
}

/// Read the EXIF orientation from the file header. Defaults to 1.
fn read_exif_orientation(path: &Path) -> u32 {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(_) => return 1,
    };

    // First 128KB covers most EXIF headers
    let mut header_buf = Vec::with_capacity(128 * 1024);
    if file.take(128 * 1024).read_to_end(&mut header_buf).is_err() {
        return 1;
    }

    let exif = match exif::Reader::new().read_from_container(&mut Cursor::new(&header_buf)) {
        Ok(e) => e,
        Err(_) => return 1,
    };

    match exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY) {
        Some(field) => match field.value {
            exif::Value::Short(ref v) => *v.first().unwrap_or(&1) as u32,
            exif::Value::Long(ref v) => *v.first().unwrap_or(&1),
            _ => 1,
        },
        None => 1,
    }
}

fn apply_orientation(img: image::DynamicImage, orientation: u32) -> image::DynamicImage {
    match orientation {
        2 => img.fliph(),
        3 => img.rotate180(),
        4 => img.flipv(),
        5 => img.fliph().rotate90(),
        6 => img.rotate90(),
        7 => img.fliph().rotate270(),
        8 => img.rotate270(),
        _ => img,
    }
}
