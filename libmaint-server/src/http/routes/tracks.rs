//! YouTube track endpoints

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use super::common::{ArtistSearchRequest, StatusResponse};
use crate::db::repos::{TrackMatch, TrackRepo};
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::DownloadStatus;

/// Track search result
#[derive(Debug, Serialize)]
pub struct TrackResponse {
    pub track_id: i32,
    pub artist: String,
    pub album: String,
    pub album_mbid: String,
    pub title: String,
    pub track_mbid: String,
    pub youtube_code: Option<String>,
    pub download_status: DownloadStatus,
    pub file_path: Option<String>,
}

impl From<TrackMatch> for TrackResponse {
    fn from(t: TrackMatch) -> Self {
        Self {
            track_id: t.track_id,
            artist: t.artist,
            album: t.album,
            album_mbid: t.album_mbid,
            title: t.title,
            track_mbid: t.track_mbid,
            youtube_code: t.youtube_code,
            download_status: DownloadStatus::from(t.download_status),
            file_path: t.file_path,
        }
    }
}

/// Retry request
#[derive(Debug, Deserialize)]
pub struct RetryRequest {
    #[serde(default)]
    pub track_mbid: String,
    #[serde(default)]
    pub youtube_code: String,
    #[serde(default)]
    pub retry_download: bool,
}

/// POST /youtube/search - tracks by artist-name substring
async fn search(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<ArtistSearchRequest>,
) -> Result<Json<Vec<TrackResponse>>, ApiError> {
    let tracks = TrackRepo::new(&state.pool)
        .search_by_artist(&req.artist)
        .await?;

    Ok(Json(tracks.into_iter().map(TrackResponse::from).collect()))
}

/// POST /youtube/retry - set YouTube code, optionally queue a download
async fn retry(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<RetryRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    TrackRepo::new(&state.pool)
        .retry(&req.track_mbid, &req.youtube_code, req.retry_download)
        .await?;

    Ok(Json(StatusResponse::updated()))
}

/// Track routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/youtube/search", post(search))
        .route("/youtube/retry", post(retry))
}
