//! Errors surfaced to the user through the shared error banner

use thiserror::Error;

use super::types::SongId;

/// A recoverable dashboard failure. `Display` is the message shown to the user;
/// `cause` only goes to the log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("Failed to fetch records")]
    Fetch { cause: String },

    #[error("Song {id} not found")]
    RecordNotFound { id: SongId },

    #[error("Failed to update favorite for song {id}")]
    FavoriteSync { id: SongId, cause: String },
}

impl DashboardError {
    /// The underlying failure, for the log.
    pub fn cause(&self) -> Option<&str> {
        match self {
            DashboardError::Fetch { cause } | DashboardError::FavoriteSync { cause, .. } => {
                Some(cause)
            }
            DashboardError::RecordNotFound { .. } => None,
        }
    }
}
