//! Genre listing endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::db::repos::{Genre, GenreRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Genre response
#[derive(Debug, Serialize)]
pub struct GenreResponse {
    pub id: i32,
    pub name: String,
}

impl From<Genre> for GenreResponse {
    fn from(g: Genre) -> Self {
        Self {
            id: g.id,
            name: g.name,
        }
    }
}

/// POST /genres - every known genre
async fn list_genres(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GenreResponse>>, ApiError> {
    let genres = GenreRepo::new(&state.pool).list().await?;
    Ok(Json(genres.into_iter().map(GenreResponse::from).collect()))
}

/// Genre routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/genres", post(list_genres))
}
