//! Domain models with validation at construction
//!
//! Request input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod artist_id;
pub mod genre_name;
pub mod download_status;

pub use validation::ValidationError;
pub use artist_id::ArtistId;
pub use genre_name::GenreName;
pub use download_status::DownloadStatus;
