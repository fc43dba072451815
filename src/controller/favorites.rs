//! Favorite toggles
//!
//! A toggle is not optimistic: the catalog only changes once the service has answered,
//! and the answer replaces the local record wholesale. Concurrent toggles of one song
//! are not coalesced, so whichever response lands last wins.

use crate::log_api_result;
use crate::model::{DashboardError, Song, SongId};

use super::AppController;

impl AppController {
    pub async fn toggle_favorite(&self, id: SongId) -> Result<Song, DashboardError> {
        let request = {
            let mut model = self.model.lock().await;
            match model.catalog.get(id) {
                Some(song) => song.with_favorite_toggled(),
                None => {
                    let error = DashboardError::RecordNotFound { id };
                    model.set_error(error.clone());
                    return Err(error);
                }
            }
        };

        tracing::debug!(id, is_favorite = request.is_favorite, "Toggling favorite");
        let result = self.service.update_song(&request).await;
        log_api_result!("update_song", result);

        let mut model = self.model.lock().await;
        match result {
            Ok(stored) => {
                model.apply_song_update(stored.clone());
                tracing::info!(id, is_favorite = stored.is_favorite, "Favorite updated");
                Ok(stored)
            }
            Err(e) => {
                let error = DashboardError::FavoriteSync {
                    id,
                    cause: e.to_string(),
                };
                model.set_error(error.clone());
                Err(error)
            }
        }
    }

    /// Toggle the favorite flag of the highlighted song without blocking input handling.
    pub async fn toggle_selected_favorite(&self) {
        let selected = self.model.lock().await.selected_song();
        if let Some(song) = selected {
            let controller = self.clone();
            tokio::spawn(async move {
                let _ = controller.toggle_favorite(song.id).await;
            });
        }
    }
}
