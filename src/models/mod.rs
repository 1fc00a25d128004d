pub mod analysis_types;
pub mod media_types;
