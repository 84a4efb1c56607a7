//! Artist genre tagging endpoints

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use super::common::{ArtistSearchRequest, StatusResponse};
use crate::db::repos::{ArtistGenreRepo, ArtistGenres};
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{ArtistId, GenreName};

/// Artist with genres
#[derive(Debug, Serialize)]
pub struct ArtistGenresResponse {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
}

impl From<ArtistGenres> for ArtistGenresResponse {
    fn from(a: ArtistGenres) -> Self {
        Self {
            id: a.id,
            name: a.name,
            genres: a.genres,
        }
    }
}

/// Tag add/remove request
#[derive(Debug, Deserialize)]
pub struct GenreTagRequest {
    pub artist_id: ArtistId,
    pub genre: String,
}

fn respond(rows: Vec<ArtistGenres>) -> Json<Vec<ArtistGenresResponse>> {
    Json(rows.into_iter().map(ArtistGenresResponse::from).collect())
}

/// POST /artistgenres - artists matching a name substring
async fn search(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<ArtistSearchRequest>,
) -> Result<Json<Vec<ArtistGenresResponse>>, ApiError> {
    let rows = ArtistGenreRepo::new(&state.pool).search(&req.artist).await?;
    Ok(respond(rows))
}

/// POST /artistgenres/all
async fn list_all(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ArtistGenresResponse>>, ApiError> {
    let rows = ArtistGenreRepo::new(&state.pool).list_all().await?;
    Ok(respond(rows))
}

/// POST /artistgenres/all/nogenre - artists with no genre tags
async fn list_untagged(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ArtistGenresResponse>>, ApiError> {
    let rows = ArtistGenreRepo::new(&state.pool).list_untagged().await?;
    Ok(respond(rows))
}

/// POST /artistgenres/deletebyname
///
/// The name is matched verbatim against stored genres, which may carry
/// whitespace from ingestion. Unknown or empty names remove nothing.
async fn delete_by_name(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<GenreTagRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    ArtistGenreRepo::new(&state.pool)
        .remove_by_name(req.artist_id, &req.genre)
        .await?;

    Ok(Json(StatusResponse::updated()))
}

/// POST /artistgenres/addbyname
async fn add_by_name(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<GenreTagRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let genre = GenreName::new(&req.genre)?;
    ArtistGenreRepo::new(&state.pool)
        .add_by_name(req.artist_id, &genre)
        .await?;

    Ok(Json(StatusResponse::updated()))
}

/// Artist genre routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/artistgenres", post(search))
        .route("/artistgenres/all", post(list_all))
        .route("/artistgenres/all/nogenre", post(list_untagged))
        .route("/artistgenres/deletebyname", post(delete_by_name))
        .route("/artistgenres/addbyname", post(add_by_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_artist_serializes_empty_list() {
        let response = ArtistGenresResponse::from(ArtistGenres {
            id: 4,
            name: "Nobody".into(),
            genres: vec![],
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"id": 4, "name": "Nobody", "genres": []}));
    }

    #[test]
    fn tag_request_accepts_string_id() {
        let req: GenreTagRequest =
            serde_json::from_str(r#"{"artist_id": "12", "genre": "Jazz"}"#).unwrap();
        assert_eq!(req.artist_id, ArtistId::new(12));
        assert_eq!(req.genre, "Jazz");
    }
}
