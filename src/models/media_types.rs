use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Serialize, Clone)]
pub struct MediaSelection {
    pub file_name: String,
    pub path: String,
    pub kind: MediaKind,
    pub size: u64,
}

#[derive(Debug, Serialize, Clone)]
pub struct MediaPreview {
    pub kind: MediaKind,
    pub data_uri: String,
}
