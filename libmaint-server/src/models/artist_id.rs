//! Artist identifier accepted from request bodies
//!
//! The web UI sends `artist_id` either as a JSON number or as a numeric
//! string, so both are accepted and normalized to `i32`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::ValidationError;

/// Validated artist primary key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ArtistId(i32);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawArtistId {
    Number(i64),
    Text(String),
}

impl ArtistId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Parse an id from its decimal string form (surrounding whitespace allowed).
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "artist_id" });
        }
        trimmed
            .parse::<i32>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "artist_id",
                value: s.to_owned(),
            })
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl<'de> Deserialize<'de> for ArtistId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawArtistId::deserialize(deserializer)? {
            RawArtistId::Number(n) => i32::try_from(n).map(Self).map_err(|_| {
                D::Error::custom(ValidationError::InvalidFormat {
                    field: "artist_id",
                    value: n.to_string(),
                })
            }),
            RawArtistId::Text(s) => Self::parse(&s).map_err(D::Error::custom),
        }
    }
}
