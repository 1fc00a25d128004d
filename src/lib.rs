pub mod commands;
pub mod error;
pub mod models;
pub mod services;

use services::api_client::ApiClient;
use services::session::AnalysisSession;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_window_state::Builder::default().build())
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(log::LevelFilter::Info)
                .build(),
        )
        .setup(|app| {
            use tauri::Manager;

            // .env may carry DEEPFAKE_API_URL; absence is fine
            let _ = dotenvy::dotenv();

            app.manage(ApiClient::from_env());
            app.manage(AnalysisSession::new());

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::media::select_media,
            commands::media::load_preview,
            commands::analysis::analyze_media,
            commands::analysis::get_session,
            commands::analysis::reset_session,
            commands::analysis::check_api_health,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
