//! Playback control methods

use crate::model::{AudioCommand, SongId};

use super::AppController;

impl AppController {
    /// Play or pause the highlighted song.
    pub async fn activate_selected(&self) {
        let selected = self.model.lock().await.selected_song();
        if let Some(song) = selected {
            self.activate_track(song.id).await;
        }
    }

    /// A click on a song: pause/resume it if it is selected, otherwise switch to it.
    pub async fn activate_track(&self, id: SongId) {
        let mut model = self.model.lock().await;
        let Some(song) = model.catalog.get(id).cloned() else {
            tracing::warn!(id, "Cannot play a song that is not in the catalog");
            return;
        };
        let command = model.playback.activate(&song);
        drop(model);
        self.dispatch(command);
    }

    /// Pause or resume whatever is selected.
    pub async fn toggle_playback(&self) {
        let command = self.model.lock().await.playback.toggle();
        self.dispatch(command);
    }

    fn dispatch(&self, command: Option<AudioCommand>) {
        if let Some(command) = command {
            tracing::debug!(?command, "Audio command");
            self.audio.send(command);
        }
    }
}
