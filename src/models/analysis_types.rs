use crate::models::media_types::{MediaKind, MediaSelection};
use serde::{Deserialize, Serialize};

/// Analysis response as the service reports it. The contract is provisional
/// (inferred from the service's rendering fields), so every detail field is
/// optional and unknown fields are ignored.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnalysisReport {
    #[serde(rename = "isFake")]
    pub is_fake: bool,
    pub confidence: f64,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(default)]
    pub details: Option<VideoDetails>,
}

/// Video-only secondary metrics. `framesTotal` and `framesExtracted` are
/// counts; the remaining fields are percentages in 0..=100.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct VideoDetails {
    #[serde(rename = "framesTotal", default)]
    pub frames_total: Option<f64>,
    #[serde(rename = "framesExtracted", default)]
    pub frames_extracted: Option<f64>,
    #[serde(rename = "faceDetected", default)]
    pub face_detected: Option<f64>,
    #[serde(rename = "realFrames", default)]
    pub real_frames: Option<f64>,
    #[serde(rename = "fakeFrames", default)]
    pub fake_frames: Option<f64>,
}

/// Error payload a non-2xx response may carry.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

/// Render-ready projection of a report for the webview.
#[derive(Debug, Serialize, Clone)]
pub struct ReportView {
    pub is_fake: bool,
    pub verdict: String,
    pub confidence: String,
    pub kind: MediaKind,
    pub details: Vec<DetailRow>,
}

/// One formatted metric row. `progress` is set for percentage metrics only,
/// carrying the raw value for a progress bar.
#[derive(Debug, Serialize, Clone)]
pub struct DetailRow {
    pub key: String,
    pub label: String,
    pub value: String,
    pub progress: Option<f64>,
}

/// Everything the webview needs to draw the current session.
#[derive(Debug, Serialize, Clone)]
pub struct SessionSnapshot {
    pub selection: Option<MediaSelection>,
    pub analyzing: bool,
    pub result: Option<ReportView>,
    pub error: Option<String>,
}
