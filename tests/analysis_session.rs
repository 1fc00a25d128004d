mod common;

use deepfake_lense_lib::models::media_types::MediaKind;
use deepfake_lense_lib::services::api_client::{extract_error_message, parse_report};
use deepfake_lense_lib::services::media_service;
use deepfake_lense_lib::services::preview_service;
use deepfake_lense_lib::services::session::AnalysisSession;
use image::{Rgb, RgbImage};
use std::path::PathBuf;

fn write_sample_image(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("sample.png");
    RgbImage::from_pixel(24, 24, Rgb([10, 120, 200]))
        .save(&path)
        .unwrap();
    path
}

// Full happy path against a simulated service response: select, preview,
// analyze, render, reset.
#[tokio::test(flavor = "multi_thread")]
async fn image_analysis_lifecycle() {
    common::init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample_image(&dir);
    let path_str = path.to_str().unwrap();

    let session = AnalysisSession::new();
    let selection = media_service::describe_selection(path_str).unwrap();
    assert_eq!(selection.kind, MediaKind::Image);
    session.select(selection).await.unwrap();

    let preview = preview_service::generate_preview(&path).unwrap();
    assert!(preview.data_uri.starts_with("data:image/jpeg;base64,"));

    let picked = session.begin_analysis().await.unwrap();
    assert_eq!(picked.file_name, "sample.png");
    assert!(session.snapshot().await.analyzing);

    let report =
        parse_report(r#"{"isFake": false, "confidence": 87.345, "type": "image"}"#).unwrap();
    session.finish_with_report(report).await;

    let snap = session.snapshot().await;
    let view = snap.result.expect("report stored");
    assert_eq!(view.verdict, "Authentic");
    assert_eq!(view.confidence, "87.35%");
    assert!(view.details.is_empty());
    assert!(snap.error.is_none());

    session.reset().await;
    let snap = session.snapshot().await;
    assert!(snap.selection.is_none() && snap.result.is_none() && snap.error.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn video_analysis_renders_ordered_metric_rows() {
    common::init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clip.mp4");
    std::fs::write(&path, b"container bytes").unwrap();

    let session = AnalysisSession::new();
    let selection = media_service::describe_selection(path.to_str().unwrap()).unwrap();
    assert_eq!(selection.kind, MediaKind::Video);
    session.select(selection).await.unwrap();
    session.begin_analysis().await.unwrap();

    // faceDetected deliberately absent; its row must be omitted
    let body = r#"{
        "isFake": true,
        "confidence": 91.237,
        "type": "video",
        "details": {
            "framesTotal": 300,
            "framesExtracted": 30,
            "realFrames": 12.5,
            "fakeFrames": 87.5
        }
    }"#;
    session.finish_with_report(parse_report(body).unwrap()).await;

    let view = session.snapshot().await.result.unwrap();
    assert_eq!(view.verdict, "Deepfake Detected");
    assert_eq!(view.confidence, "91.24%");

    let keys: Vec<&str> = view.details.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, ["framesTotal", "framesExtracted", "realFrames", "fakeFrames"]);

    assert_eq!(view.details[0].value, "300");
    assert_eq!(view.details[0].progress, None);
    assert_eq!(view.details[3].value, "87.50%");
    assert_eq!(view.details[3].progress, Some(87.5));
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_request_stores_the_server_message() {
    common::init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample_image(&dir);

    let session = AnalysisSession::new();
    session
        .select(media_service::describe_selection(path.to_str().unwrap()).unwrap())
        .await
        .unwrap();
    session.begin_analysis().await.unwrap();
    session
        .finish_with_error(extract_error_message(r#"{"error": "bad file"}"#))
        .await;

    let snap = session.snapshot().await;
    assert_eq!(snap.error.as_deref(), Some("bad file"));
    assert!(snap.result.is_none());

    // a new selection clears the failure
    session
        .select(media_service::describe_selection(path.to_str().unwrap()).unwrap())
        .await
        .unwrap();
    assert!(session.snapshot().await.error.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_request_without_body_falls_back_to_generic() {
    common::init_logging();
    let session = AnalysisSession::new();
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample_image(&dir);
    session
        .select(media_service::describe_selection(path.to_str().unwrap()).unwrap())
        .await
        .unwrap();
    session.begin_analysis().await.unwrap();
    session.finish_with_error(extract_error_message("")).await;

    assert_eq!(
        session.snapshot().await.error.as_deref(),
        Some("Something went wrong while analyzing the file")
    );
}
