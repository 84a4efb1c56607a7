//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the pool, one short-lived repo per request
//! - Handles conflicts via ON CONFLICT (no check-then-insert)
//! - Uses transactions for every write

pub mod tracks;
pub mod artist_genres;
pub mod genres;

pub use tracks::{TrackRepo, TrackMatch};
pub use artist_genres::{ArtistGenreRepo, ArtistGenres};
pub use genres::{GenreRepo, Genre};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Build a LIKE pattern matching `needle` anywhere in a string.
///
/// `%`, `_` and `\` in the needle are escaped so they match literally.
pub(crate) fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_needle_matches_everything() {
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn plain_needle_is_wrapped() {
        assert_eq!(contains_pattern("Floyd"), "%Floyd%");
    }

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(contains_pattern("100%"), r"%100\%%");
        assert_eq!(contains_pattern("a_b"), r"%a\_b%");
        assert_eq!(contains_pattern(r"AC\DC"), r"%AC\\DC%");
    }
}
