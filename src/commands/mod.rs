pub mod analysis;
pub mod media;
