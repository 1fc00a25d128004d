use crate::error::AppError;
use crate::models::analysis_types::{AnalysisReport, ApiErrorBody, HealthStatus};
use crate::models::media_types::MediaSelection;
use crate::services::media_service;
use log::{info, warn};
use std::path::Path;

const DEFAULT_API_URL: &str = "http://localhost:5000";
const API_URL_ENV: &str = "DEEPFAKE_API_URL";
const GENERIC_ANALYZE_ERROR: &str = "Something went wrong while analyzing the file";

/// HTTP client for the analysis service. One request, one outcome: no
/// retry, timeout, or cancellation.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Base URL from `DEEPFAKE_API_URL`, falling back to the local default.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        info!("Analysis service: {}", base_url);
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upload the selected file as one multipart `file` field and parse the
    /// classification from the response.
    pub async fn analyze(&self, selection: &MediaSelection) -> Result<AnalysisReport, AppError> {
        let path = Path::new(&selection.path);
        let bytes = tokio::fs::read(path).await.map_err(|e| AppError {
            message: format!("Failed to read {}: {}", selection.file_name, e),
        })?;

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(selection.file_name.clone())
            .mime_str(media_service::mime_for(path))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/api/analyze", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!("Analyze request failed: {}", e);
                AppError::from(GENERIC_ANALYZE_ERROR)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Analyze request rejected: HTTP {}", status);
            return Err(extract_error_message(&body).into());
        }

        let body = response.text().await.map_err(|e| {
            warn!("Analyze response read failed: {}", e);
            AppError::from(GENERIC_ANALYZE_ERROR)
        })?;
        parse_report(&body)
    }

    /// Service liveness probe.
    pub async fn health(&self) -> Result<HealthStatus, AppError> {
        let response = self
            .client
            .get(format!("{}/api/health", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(format!("Analysis service unavailable: HTTP {}", response.status()).into());
        }

        Ok(response.json::<HealthStatus>().await?)
    }
}

/// Parse a 2xx body into a report. A malformed body collapses into the
/// generic failure message, matching the single error taxonomy.
pub fn parse_report(body: &str) -> Result<AnalysisReport, AppError> {
    serde_json::from_str::<AnalysisReport>(body).map_err(|e| {
        warn!("Unparseable analyze response: {}", e);
        AppError::from(GENERIC_ANALYZE_ERROR)
    })
}

/// The server-supplied `error` string when the failure body carries one,
/// otherwise the generic fallback.
pub fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| GENERIC_ANALYZE_ERROR.to_string())
}
