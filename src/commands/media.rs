use crate::error::AppError;
use crate::models::media_types::{MediaPreview, MediaSelection};
use crate::services::media_service;
use crate::services::preview_service;
use crate::services::session::AnalysisSession;
use std::path::Path;
use tauri::State;

/// Record a picked file as the current selection. Any prior result and
/// error are cleared with it.
#[tauri::command]
pub async fn select_media(
    session: State<'_, AnalysisSession>,
    path: String,
) -> Result<MediaSelection, AppError> {
    let selection = media_service::describe_selection(&path)?;
    session.select(selection.clone()).await?;
    Ok(selection)
}

#[tauri::command]
pub fn load_preview(path: String) -> Result<MediaPreview, AppError> {
    preview_service::generate_preview(Path::new(&path))
}
