//! Genre repository

use sqlx::{FromRow, PgPool};

use super::DbError;

/// Genre record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

/// Genre repository
pub struct GenreRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> GenreRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All genres, sorted by name for stable output.
    pub async fn list(&self) -> Result<Vec<Genre>, DbError> {
        let genres = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres ORDER BY name, id")
            .fetch_all(self.pool)
            .await?;
        Ok(genres)
    }
}
