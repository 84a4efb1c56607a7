//! Route handlers organized by resource

pub mod common;
pub mod health;
pub mod tracks;
pub mod artist_genres;
pub mod genres;
