//! Artist genre repository
//!
//! Lookups aggregate genres per artist in a single query:
//! - LEFT JOIN so untagged artists still appear
//! - NULLs filtered before ARRAY_AGG, COALESCE to an empty array
//!
//! Tagging writes use ON CONFLICT so repeated or concurrent calls are no-ops.

use sqlx::{FromRow, PgPool};

use super::{contains_pattern, DbError};
use crate::models::{ArtistId, GenreName};

/// Artist with its sorted, deduplicated genre names
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ArtistGenres {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
}

/// Artist genre repository
pub struct ArtistGenreRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ArtistGenreRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Artists whose name contains `artist` (case-insensitive), with genres.
    pub async fn search(&self, artist: &str) -> Result<Vec<ArtistGenres>, DbError> {
        self.fetch(Some(contains_pattern(artist))).await
    }

    /// Every artist, with genres.
    pub async fn list_all(&self) -> Result<Vec<ArtistGenres>, DbError> {
        self.fetch(None).await
    }

    async fn fetch(&self, pattern: Option<String>) -> Result<Vec<ArtistGenres>, DbError> {
        let rows = sqlx::query_as::<_, ArtistGenres>(
            r#"
            SELECT
                a.id,
                a.name,
                COALESCE(
                    ARRAY_AGG(DISTINCT g.name ORDER BY g.name)
                        FILTER (WHERE g.name IS NOT NULL),
                    ARRAY[]::text[]
                ) AS genres
            FROM artists a
            LEFT JOIN artist_genres ag ON ag.artist_id = a.id
            LEFT JOIN genres g ON g.id = ag.genre_id
            WHERE $1::text IS NULL OR LOWER(a.name) LIKE LOWER($1)
            GROUP BY a.id, a.name
            ORDER BY a.name
            "#,
        )
        .bind(pattern)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Artists with no genre associations at all.
    pub async fn list_untagged(&self) -> Result<Vec<ArtistGenres>, DbError> {
        let rows = sqlx::query_as::<_, ArtistGenres>(
            r#"
            SELECT
                a.id,
                a.name,
                ARRAY[]::text[] AS genres
            FROM artists a
            WHERE NOT EXISTS (
                SELECT 1
                FROM artist_genres ag
                WHERE ag.artist_id = a.id
            )
            ORDER BY a.name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Remove the tag `genre` from an artist. The genre row itself stays.
    ///
    /// `genre` is compared byte-for-byte with `genres.name`, untrimmed.
    /// Returns the number of associations removed (0 or 1).
    pub async fn remove_by_name(&self, artist_id: ArtistId, genre: &str) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            DELETE FROM artist_genres ag
            USING genres g
            WHERE ag.artist_id = $1
              AND g.name = $2
              AND ag.genre_id = g.id
            "#,
        )
        .bind(artist_id.get())
        .bind(genre)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let removed = result.rows_affected();
        tracing::info!(artist_id = artist_id.get(), genre, removed, "genre tag removed");
        Ok(removed)
    }

    /// Tag an artist with `genre`, creating the genre if needed.
    ///
    /// Genre upsert and association insert are one statement in one
    /// transaction, so a failed association leaves no new genre behind.
    /// Returns whether a new association was created.
    pub async fn add_by_name(&self, artist_id: ArtistId, genre: &GenreName) -> Result<bool, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            WITH genre AS (
                INSERT INTO genres (name)
                VALUES ($2)
                ON CONFLICT (name) DO UPDATE
                    SET name = EXCLUDED.name
                RETURNING id
            )
            INSERT INTO artist_genres (artist_id, genre_id)
            SELECT $1, id
            FROM genre
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(artist_id.get())
        .bind(genre.as_str())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let created = result.rows_affected() > 0;
        tracing::info!(artist_id = artist_id.get(), genre = genre.as_str(), created, "genre tag added");
        Ok(created)
    }
}
