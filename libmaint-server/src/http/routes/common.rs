//! Request and response shapes shared by several endpoints

use serde::{Deserialize, Serialize};

/// Artist-name substring filter. A missing `artist` matches every artist.
#[derive(Debug, Deserialize)]
pub struct ArtistSearchRequest {
    #[serde(default)]
    pub artist: String,
}

/// Acknowledgement returned by every write endpoint
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn updated() -> Self {
        Self { status: "updated" }
    }
}
