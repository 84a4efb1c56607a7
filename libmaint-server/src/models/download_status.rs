//! Track download status
//!
//! The download worker owns every transition except `queued`, which this
//! service writes when a retry is requested. Values the worker invents are
//! kept verbatim in `Other` so they round-trip unchanged.

use std::fmt;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DownloadStatus {
    Pending,
    Queued,
    Downloading,
    Downloaded,
    Failed,
    Other(String),
}

impl DownloadStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Queued => "queued",
            Self::Downloading => "downloading",
            Self::Downloaded => "downloaded",
            Self::Failed => "failed",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for DownloadStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pending" => Self::Pending,
            "queued" => Self::Queued,
            "downloading" => Self::Downloading,
            "downloaded" => Self::Downloaded,
            "failed" => Self::Failed,
            _ => Self::Other(s),
        }
    }
}

impl fmt::Display for DownloadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DownloadStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
