use crate::error::AppError;
use crate::models::media_types::{MediaKind, MediaSelection};
use std::path::Path;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

pub fn is_image_file(path: &Path) -> bool {
    extension(path)
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Sniff the media kind from the file extension. Anything that is not a
/// known image extension is treated as video, matching the analysis
/// service's own image/video split.
pub fn sniff_kind(path: &Path) -> MediaKind {
    if is_image_file(path) {
        MediaKind::Image
    } else {
        MediaKind::Video
    }
}

/// MIME type for the multipart part and for video data URIs.
pub fn mime_for(path: &Path) -> &'static str {
    match extension(path).as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("webp") => "image/webp",
        Some("mp4") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("avi") => "video/x-msvideo",
        Some("mkv") => "video/x-matroska",
        Some("webm") => "video/webm",
        _ => "application/octet-stream",
    }
}

/// Describe a picked file. No validation beyond the kind sniff; size is
/// informational only.
pub fn describe_selection(path: &str) -> Result<MediaSelection, AppError> {
    let file_path = Path::new(path);
    if !file_path.is_file() {
        return Err(format!("File does not exist: {}", path).into());
    }

    let file_name = file_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let size = std::fs::metadata(file_path).map(|m| m.len()).unwrap_or(0);

    Ok(MediaSelection {
        file_name,
        path: path.to_string(),
        kind: sniff_kind(file_path),
        size,
    })
}
