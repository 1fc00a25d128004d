use crate::models::analysis_types::{AnalysisReport, DetailRow, ReportView, VideoDetails};
use crate::models::media_types::MediaKind;

/// Display order of the video metric rows. Rows for absent fields are
/// omitted, not rendered empty.
const DISPLAY_ORDER: &[&str] = &[
    "framesTotal",
    "framesExtracted",
    "faceDetected",
    "realFrames",
    "fakeFrames",
];

pub fn verdict_label(is_fake: bool) -> &'static str {
    if is_fake {
        "Deepfake Detected"
    } else {
        "Authentic"
    }
}

/// Two-decimal percentage, e.g. 87.345 -> "87.35%".
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.2}%", confidence)
}

fn readable_label(key: &str) -> String {
    match key {
        "framesTotal" => "Total Video Frames".to_string(),
        "framesExtracted" => "Extracted Frames".to_string(),
        "faceDetected" => "Faces Detected".to_string(),
        "realFrames" => "Real Frames".to_string(),
        "fakeFrames" => "Deepfake Frames".to_string(),
        other => humanize_key(other),
    }
}

/// Fallback for keys without a curated label: split camelCase into words
/// and capitalize the first letter.
fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i == 0 {
            out.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            out.push(' ');
            out.push(c);
        } else {
            out.push(c);
        }
    }
    out
}

fn detail_value(key: &str, details: &VideoDetails) -> Option<f64> {
    match key {
        "framesTotal" => details.frames_total,
        "framesExtracted" => details.frames_extracted,
        "faceDetected" => details.face_detected,
        "realFrames" => details.real_frames,
        "fakeFrames" => details.fake_frames,
        _ => None,
    }
}

fn detail_row(key: &str, value: f64) -> DetailRow {
    // Frame counters render as whole numbers, everything else as a
    // percentage with a progress value.
    let is_count = key.starts_with("frames");
    let (value_str, progress) = if is_count {
        (format!("{}", value.round() as i64), None)
    } else {
        (format!("{:.2}%", value), Some(value))
    };

    DetailRow {
        key: key.to_string(),
        label: readable_label(key),
        value: value_str,
        progress,
    }
}

/// Project a raw report into the render-ready form the webview displays.
pub fn render(report: &AnalysisReport) -> ReportView {
    let details = if report.kind == MediaKind::Video {
        report
            .details
            .as_ref()
            .map(|d| {
                DISPLAY_ORDER
                    .iter()
                    .filter_map(|key| detail_value(key, d).map(|v| detail_row(key, v)))
                    .collect()
            })
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    ReportView {
        is_fake: report.is_fake,
        verdict: verdict_label(report.is_fake).to_string(),
        confidence: format_confidence(report.confidence),
        kind: report.kind,
        details,
    }
}
