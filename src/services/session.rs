use crate::error::AppError;
use crate::models::analysis_types::{AnalysisReport, SessionSnapshot};
use crate::models::media_types::MediaSelection;
use crate::services::report_service;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct SessionInner {
    selection: Option<MediaSelection>,
    analyzing: bool,
    report: Option<AnalysisReport>,
    error: Option<String>,
}

/// The one analysis session: current selection, in-flight flag, and the
/// latest report or error. One request at a time; a new selection or a
/// reset supersedes everything derived from the previous one.
#[derive(Clone)]
pub struct AnalysisSession {
    inner: Arc<Mutex<SessionInner>>,
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionInner::default())),
        }
    }

    /// Record a new selection. Any prior report and error are always
    /// invalidated with it.
    pub async fn select(&self, selection: MediaSelection) -> Result<(), AppError> {
        let mut inner = self.inner.lock().await;
        if inner.analyzing {
            return Err("Analysis in progress, cannot change the file".into());
        }
        inner.selection = Some(selection);
        inner.report = None;
        inner.error = None;
        Ok(())
    }

    /// Move into the analyzing state and hand back the selection to upload.
    /// Fails when nothing is selected or a request is already in flight.
    pub async fn begin_analysis(&self) -> Result<MediaSelection, AppError> {
        let mut inner = self.inner.lock().await;
        if inner.analyzing {
            return Err("Analysis already in progress".into());
        }
        let selection = inner
            .selection
            .clone()
            .ok_or_else(|| AppError::from("No file selected"))?;

        inner.analyzing = true;
        inner.report = None;
        inner.error = None;
        Ok(selection)
    }

    pub async fn finish_with_report(&self, report: AnalysisReport) {
        let mut inner = self.inner.lock().await;
        inner.analyzing = false;
        inner.report = Some(report);
        inner.error = None;
    }

    pub async fn finish_with_error(&self, message: String) {
        let mut inner = self.inner.lock().await;
        inner.analyzing = false;
        inner.report = None;
        inner.error = Some(message);
    }

    /// Clear selection, report, and error in one step.
    pub async fn reset(&self) {
        let mut inner = self.inner.lock().await;
        inner.selection = None;
        inner.analyzing = false;
        inner.report = None;
        inner.error = None;
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let inner = self.inner.lock().await;
        SessionSnapshot {
            selection: inner.selection.clone(),
            analyzing: inner.analyzing,
            result: inner.report.as_ref().map(report_service::render),
            error: inner.error.clone(),
        }
    }
}
