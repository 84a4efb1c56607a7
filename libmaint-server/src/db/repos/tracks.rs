//! Track repository
//!
//! - search_by_artist: five-table join, one row per (track, album, artist)
//! - retry: conditional status update in a single statement

use sqlx::{FromRow, PgPool};

use super::{contains_pattern, DbError};
use crate::models::DownloadStatus;

/// Track joined with one of its albums and one of its artists
#[derive(Debug, Clone, FromRow)]
pub struct TrackMatch {
    pub track_id: i32,
    pub artist: String,
    pub album: String,
    pub album_mbid: String,
    pub title: String,
    pub track_mbid: String,
    pub youtube_code: Option<String>,
    pub download_status: String,
    pub file_path: Option<String>,
}

/// Track repository
pub struct TrackRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TrackRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Tracks by every artist whose name contains `artist` (case-insensitive).
    ///
    /// Ordered by artist name, album title, track title.
    pub async fn search_by_artist(&self, artist: &str) -> Result<Vec<TrackMatch>, DbError> {
        let rows = sqlx::query_as::<_, TrackMatch>(
            r#"
            SELECT
                t.id AS track_id,
                a.name AS artist,
                al.title AS album,
                al.mbid AS album_mbid,
                t.title,
                t.mbid AS track_mbid,
                t.youtube_code,
                t.download_status,
                t.file_path
            FROM tracks t
            JOIN album_tracks alt ON alt.track_id = t.id
            JOIN albums al ON al.id = alt.album_id
            JOIN artist_tracks art ON art.track_id = t.id
            JOIN artists a ON a.id = art.artist_id
            WHERE LOWER(a.name) LIKE LOWER($1)
            ORDER BY a.name, al.title, t.title
            "#,
        )
        .bind(contains_pattern(artist))
        .fetch_all(self.pool)
        .await?;

        tracing::debug!(artist, rows = rows.len(), "track search");
        Ok(rows)
    }

    /// Set a track's YouTube code and optionally queue it for download.
    ///
    /// `download_status` only changes when `retry_download` is set; the
    /// decision happens inside the UPDATE, never read-then-write.
    /// Returns the number of tracks updated (0 when the mbid is unknown).
    pub async fn retry(
        &self,
        track_mbid: &str,
        youtube_code: &str,
        retry_download: bool,
    ) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE tracks
            SET youtube_code = $1,
                download_status = CASE
                    WHEN $2 THEN $3
                    ELSE download_status
                END
            WHERE mbid = $4
            "#,
        )
        .bind(youtube_code)
        .bind(retry_download)
        .bind(DownloadStatus::Queued.as_str())
        .bind(track_mbid)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let affected = result.rows_affected();
        if affected == 0 {
            tracing::debug!(track_mbid, "retry matched no track");
        } else {
            tracing::info!(track_mbid, retry_download, affected, "track updated");
        }
        Ok(affected)
    }
}
