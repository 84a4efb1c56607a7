//! Genre name validation

use super::ValidationError;

/// Maximum length for genre names
const MAX_GENRE_NAME_LEN: usize = 255;

/// Validated genre name
///
/// Used for names the service writes. Names are trimmed but otherwise kept
/// as given, so "Jazz" and "jazz" are distinct genres.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenreName(String);

impl GenreName {
    /// Create a genre name.
    ///
    /// # Example
    /// ```
    /// use libmaint_server::models::GenreName;
    ///
    /// assert_eq!(GenreName::new("  Jazz ").unwrap().as_str(), "Jazz");
    /// assert!(GenreName::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "genre" });
        }

        if trimmed.chars().count() > MAX_GENRE_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "genre",
                max: MAX_GENRE_NAME_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
