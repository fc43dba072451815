//! Core type definitions for the dashboard

use std::fmt;

use serde::{Deserialize, Serialize};

pub type SongId = i64;

/// One playable track as exposed by the song service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: SongId,
    pub title: String,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub length_in_seconds: u32,
    pub is_favorite: bool,
}

impl Song {
    /// The artist, treating an empty string the same as a missing one.
    pub fn artist_name(&self) -> Option<&str> {
        self.artist.as_deref().filter(|a| !a.is_empty())
    }

    /// Copy of this record with the favorite flag inverted, as sent to the service.
    pub fn with_favorite_toggled(&self) -> Self {
        Self {
            is_favorite: !self.is_favorite,
            ..self.clone()
        }
    }
}

/// Artist selection applied to the catalog
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ArtistFilter {
    #[default]
    All,
    Artist(String),
}

impl fmt::Display for ArtistFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtistFilter::All => f.write_str("All"),
            ArtistFilter::Artist(name) => f.write_str(name),
        }
    }
}

/// Which dashboard tab is shown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveTab {
    #[default]
    Songs,
    Sermons,
    Podcast,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 3] = [ActiveTab::Songs, ActiveTab::Sermons, ActiveTab::Podcast];

    pub fn next(self) -> Self {
        match self {
            ActiveTab::Songs => ActiveTab::Sermons,
            ActiveTab::Sermons => ActiveTab::Podcast,
            ActiveTab::Podcast => ActiveTab::Songs,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActiveTab::Songs => ActiveTab::Podcast,
            ActiveTab::Sermons => ActiveTab::Songs,
            ActiveTab::Podcast => ActiveTab::Sermons,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActiveTab::Songs => "Songs",
            ActiveTab::Sermons => "Sermons",
            ActiveTab::Podcast => "Podcast",
        }
    }
}

/// UI state for the dashboard
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_tab: ActiveTab,
    /// Row in the filtered song list
    pub selected_index: usize,
    pub is_loading: bool,
    pub show_help_popup: bool,
}
