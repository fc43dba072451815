//! Main application model with state management

use super::catalog::CatalogStore;
use super::error::DashboardError;
use super::filter;
use super::playback::PlaybackController;
use super::song_client::ServiceError;
use super::types::{ActiveTab, ArtistFilter, Song, UiState};

/// The now-playing line, resolved against the catalog at read time.
#[derive(Clone, Debug, PartialEq)]
pub struct NowPlaying {
    pub song: Song,
    pub is_playing: bool,
}

/// Everything the view needs for one frame
#[derive(Clone, Debug)]
pub struct DashboardSnapshot {
    pub ui_state: UiState,
    pub artist_filter: ArtistFilter,
    pub artist_options: Vec<ArtistFilter>,
    pub songs: Vec<Song>,
    pub now_playing: Option<NowPlaying>,
    pub error_message: Option<String>,
}

/// Main application model containing all state
#[derive(Debug, Default)]
pub struct AppModel {
    pub catalog: CatalogStore,
    pub playback: PlaybackController,
    artist_filter: ArtistFilter,
    ui_state: UiState,
    should_quit: bool,
}

impl AppModel {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Catalog view
    // ========================================================================

    pub fn artist_filter(&self) -> &ArtistFilter {
        &self.artist_filter
    }

    pub fn set_artist_filter(&mut self, selection: ArtistFilter) {
        tracing::debug!(filter = %selection, "Artist filter changed");
        self.artist_filter = selection;
        self.ui_state.selected_index = 0;
    }

    pub fn cycle_artist_filter_forward(&mut self) {
        self.cycle_artist_filter(1);
    }

    pub fn cycle_artist_filter_backward(&mut self) {
        self.cycle_artist_filter(-1);
    }

    fn cycle_artist_filter(&mut self, step: isize) {
        let options = filter::artist_options(self.catalog.songs());
        // A stale selection is not in the list; restart from All.
        let current = options
            .iter()
            .position(|o| *o == self.artist_filter)
            .unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(options.len() as isize) as usize;
        self.set_artist_filter(options[next].clone());
    }

    pub fn visible_songs(&self) -> Vec<&Song> {
        filter::filter(self.catalog.songs(), &self.artist_filter)
    }

    pub fn selected_song(&self) -> Option<Song> {
        self.visible_songs()
            .get(self.ui_state.selected_index)
            .map(|s| (*s).clone())
    }

    /// Apply a catalog load and keep the selection on a visible row.
    pub fn finish_load(
        &mut self,
        result: Result<Vec<Song>, ServiceError>,
    ) -> Result<usize, DashboardError> {
        let outcome = self.catalog.finish_load(result);
        self.clamp_selection();
        outcome
    }

    /// Apply a record returned by the service. The stored record may have moved out
    /// of the current filter, so the selection is clamped afterwards.
    pub fn apply_song_update(&mut self, song: Song) -> Option<Song> {
        let previous = self.catalog.apply_update(song);
        self.clamp_selection();
        previous
    }

    fn clamp_selection(&mut self) {
        let last = self.visible_songs().len().saturating_sub(1);
        if self.ui_state.selected_index > last {
            self.ui_state.selected_index = last;
        }
    }

    pub fn move_selection_up(&mut self) {
        self.ui_state.selected_index = self.ui_state.selected_index.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        let last = self.visible_songs().len().saturating_sub(1);
        if self.ui_state.selected_index < last {
            self.ui_state.selected_index += 1;
        }
    }

    pub fn now_playing(&self) -> Option<NowPlaying> {
        let id = self.playback.current_song()?;
        self.catalog.get(id).map(|song| NowPlaying {
            song: song.clone(),
            is_playing: self.playback.is_playing(),
        })
    }

    // ========================================================================
    // UI state
    // ========================================================================

    pub fn ui_state(&self) -> &UiState {
        &self.ui_state
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.ui_state.is_loading = is_loading;
    }

    pub fn next_tab(&mut self) {
        self.ui_state.active_tab = self.ui_state.active_tab.next();
    }

    pub fn prev_tab(&mut self) {
        self.ui_state.active_tab = self.ui_state.active_tab.prev();
    }

    pub fn active_tab(&self) -> ActiveTab {
        self.ui_state.active_tab
    }

    pub fn show_help_popup(&mut self) {
        self.ui_state.show_help_popup = true;
    }

    pub fn hide_help_popup(&mut self) {
        self.ui_state.show_help_popup = false;
    }

    pub fn is_help_popup_open(&self) -> bool {
        self.ui_state.show_help_popup
    }

    pub fn set_error(&mut self, error: DashboardError) {
        tracing::warn!(
            error = %error,
            cause = error.cause().unwrap_or("-"),
            "Surfacing error to user"
        );
        self.catalog.set_error(error);
    }

    pub fn clear_error(&mut self) {
        self.catalog.clear_error();
    }

    pub fn has_error(&self) -> bool {
        self.catalog.last_error().is_some()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_should_quit(&mut self, quit: bool) {
        self.should_quit = quit;
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            ui_state: self.ui_state().clone(),
            artist_filter: self.artist_filter().clone(),
            artist_options: filter::artist_options(self.catalog.songs()),
            songs: self.visible_songs().into_iter().cloned().collect(),
            now_playing: self.now_playing(),
            error_message: self.catalog.last_error().map(|e| e.to_string()),
        }
    }
}
