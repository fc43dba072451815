//! Canonical song catalog and the shared error slot

use super::error::DashboardError;
use super::song_client::ServiceError;
use super::types::{Song, SongId};

/// Songs in server response order, plus the latest error shown to the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogStore {
    songs: Vec<Song>,
    last_error: Option<DashboardError>,
}

impl CatalogStore {
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn get(&self, id: SongId) -> Option<&Song> {
        self.songs.iter().find(|s| s.id == id)
    }

    /// Apply the outcome of a catalog request.
    ///
    /// Success replaces every record and clears the error slot. Failure keeps the
    /// current records and stores a [`DashboardError::Fetch`].
    pub fn finish_load(
        &mut self,
        result: Result<Vec<Song>, ServiceError>,
    ) -> Result<usize, DashboardError> {
        match result {
            Ok(songs) => {
                self.songs = songs;
                self.last_error = None;
                if self.is_empty() {
                    tracing::warn!("Song service returned an empty catalog");
                }
                Ok(self.len())
            }
            Err(e) => {
                let error = DashboardError::Fetch {
                    cause: e.to_string(),
                };
                self.set_error(error.clone());
                Err(error)
            }
        }
    }

    /// Replace the record with the same id in place. Returns the record it replaced.
    pub fn apply_update(&mut self, record: Song) -> Option<Song> {
        match self.songs.iter_mut().find(|s| s.id == record.id) {
            Some(slot) => Some(std::mem::replace(slot, record)),
            None => {
                tracing::warn!(id = record.id, "Update for a song that is not in the catalog");
                None
            }
        }
    }

    pub fn last_error(&self) -> Option<&DashboardError> {
        self.last_error.as_ref()
    }

    /// Latest wins: a new error always replaces the previous one.
    pub fn set_error(&mut self, error: DashboardError) {
        self.last_error = Some(error);
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}
