//! Shared harness for database-backed tests.
//!
//! Each `TestDb` lives in its own uniquely named PostgreSQL schema so tests
//! can run in parallel against one database. Requires `DATABASE_URL`.

#![allow(dead_code)]

use std::str::FromStr;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use libmaint_server::{build_router, AppState, ServerConfig};
use serde_json::Value;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

const SCHEMA_SQL: &str = include_str!("schema.sql");

pub struct TestDb {
    pub pool: PgPool,
    admin: PgPool,
    schema: String,
}

impl TestDb {
    pub async fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("libmaint_server=debug")
            .with_test_writer()
            .try_init();

        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let schema = format!("libmaint_test_{}", Uuid::new_v4().simple());

        let admin = PgPoolOptions::new()
            .max_connections(1)
            .connect(&url)
            .await
            .expect("connect to test database");
        sqlx::query(&format!("CREATE SCHEMA {}", schema))
            .execute(&admin)
            .await
            .expect("create test schema");

        let options = PgConnectOptions::from_str(&url)
            .expect("parse DATABASE_URL")
            .options([("search_path", schema.as_str())]);
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .expect("connect with search_path");

        sqlx::raw_sql(SCHEMA_SQL)
            .execute(&pool)
            .await
            .expect("create library tables");

        Self {
            pool,
            admin,
            schema,
        }
    }

    pub fn app(&self) -> Router {
        build_router(AppState::new(self.pool.clone()), &ServerConfig::default())
            .expect("router")
    }

    pub async fn cleanup(self) {
        self.pool.close().await;
        sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .execute(&self.admin)
            .await
            .expect("drop test schema");
    }

    pub async fn artist(&self, name: &str) -> i32 {
        sqlx::query_scalar("INSERT INTO artists (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .expect("insert artist")
    }

    pub async fn album(&self, title: &str, mbid: &str) -> i32 {
        sqlx::query_scalar("INSERT INTO albums (title, mbid) VALUES ($1, $2) RETURNING id")
            .bind(title)
            .bind(mbid)
            .fetch_one(&self.pool)
            .await
            .expect("insert album")
    }

    /// Insert a track credited to `artist_id` on `album_id`.
    pub async fn track(&self, artist_id: i32, album_id: i32, title: &str, mbid: &str) -> i32 {
        let track_id: i32 =
            sqlx::query_scalar("INSERT INTO tracks (title, mbid) VALUES ($1, $2) RETURNING id")
                .bind(title)
                .bind(mbid)
                .fetch_one(&self.pool)
                .await
                .expect("insert track");
        self.credit(artist_id, album_id, track_id).await;
        track_id
    }

    /// Attach an existing track to another artist and album.
    pub async fn credit(&self, artist_id: i32, album_id: i32, track_id: i32) {
        sqlx::query("INSERT INTO artist_tracks (artist_id, track_id) VALUES ($1, $2) ON CONFLICT DO NOTHING")
            .bind(artist_id)
            .bind(track_id)
            .execute(&self.pool)
            .await
            .expect("insert artist_tracks");
        sqlx::query("INSERT INTO album_tracks (album_id, track_id) VALUES ($1, $2) ON CONFLICT DO NOTHING")
            .bind(album_id)
            .bind(track_id)
            .execute(&self.pool)
            .await
            .expect("insert album_tracks");
    }

    pub async fn set_track_state(
        &self,
        mbid: &str,
        youtube_code: Option<&str>,
        status: &str,
        file_path: Option<&str>,
    ) {
        sqlx::query(
            "UPDATE tracks SET youtube_code = $1, download_status = $2, file_path = $3 WHERE mbid = $4",
        )
        .bind(youtube_code)
        .bind(status)
        .bind(file_path)
        .bind(mbid)
        .execute(&self.pool)
        .await
        .expect("update track");
    }

    /// (youtube_code, download_status) for a track
    pub async fn track_state(&self, mbid: &str) -> (Option<String>, String) {
        sqlx::query_as("SELECT youtube_code, download_status FROM tracks WHERE mbid = $1")
            .bind(mbid)
            .fetch_one(&self.pool)
            .await
            .expect("select track")
    }

    /// Insert a genre row exactly as given, bypassing the API's trimming.
    pub async fn genre(&self, name: &str) -> i32 {
        sqlx::query_scalar("INSERT INTO genres (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .expect("insert genre")
    }

    pub async fn tag(&self, artist_id: i32, genre_id: i32) {
        sqlx::query("INSERT INTO artist_genres (artist_id, genre_id) VALUES ($1, $2)")
            .bind(artist_id)
            .bind(genre_id)
            .execute(&self.pool)
            .await
            .expect("insert artist_genres");
    }

    pub async fn genre_rows(&self, name: &str) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM genres WHERE name = $1")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .expect("count genres")
    }

    pub async fn tag_rows(&self, artist_id: i32) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM artist_genres WHERE artist_id = $1")
            .bind(artist_id)
            .fetch_one(&self.pool)
            .await
            .expect("count artist_genres")
    }
}

/// POST `body` (or nothing) to `path`, returning status and parsed JSON.
pub async fn post(app: &Router, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(body)
        .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}
