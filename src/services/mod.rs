pub mod api_client;
pub mod media_service;
pub mod preview_service;
pub mod report_service;
pub mod session;
