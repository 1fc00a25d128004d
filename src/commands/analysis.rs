use crate::error::AppError;
use crate::models::analysis_types::{HealthStatus, SessionSnapshot};
use crate::services::api_client::ApiClient;
use crate::services::session::AnalysisSession;
use tauri::State;

/// Upload the current selection and store the outcome on the session.
/// Request failures land in the snapshot's error field rather than
/// rejecting the command; only a missing selection or an in-flight
/// request rejects.
#[tauri::command]
pub async fn analyze_media(
    session: State<'_, AnalysisSession>,
    client: State<'_, ApiClient>,
) -> Result<SessionSnapshot, AppError> {
    let selection = session.begin_analysis().await?;

    match client.analyze(&selection).await {
        Ok(report) => session.finish_with_report(report).await,
        Err(e) => session.finish_with_error(e.message).await,
    }

    Ok(session.snapshot().await)
}

#[tauri::command]
pub async fn get_session(session: State<'_, AnalysisSession>) -> Result<SessionSnapshot, AppError> {
    Ok(session.snapshot().await)
}

#[tauri::command]
pub async fn reset_session(session: State<'_, AnalysisSession>) -> Result<(), AppError> {
    session.reset().await;
    Ok(())
}

#[tauri::command]
pub async fn check_api_health(client: State<'_, ApiClient>) -> Result<HealthStatus, AppError> {
    client.health().await
}
