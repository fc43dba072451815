//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the dashboard.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (song record, artist filter, UI state)
//! - `error`: Errors surfaced to the user
//! - `catalog`: The canonical song catalog and shared error slot
//! - `filter`: Pure artist filtering over the catalog
//! - `playback`: Single-track playback state machine and audio source resolution
//! - `song_client`: Song service trait and its HTTP client
//! - `app_model`: Main application model tying the state containers together

mod types;
mod error;
mod catalog;
pub mod filter;
mod playback;
mod song_client;
mod app_model;

// Re-export all public types for convenient access
pub use types::{ActiveTab, Song, SongId};

pub use error::DashboardError;

pub use playback::{AudioCommand, AudioEvent, StopReason};

pub use song_client::{HttpSongClient, SongService, API_BASE_URL};

pub use app_model::{AppModel, DashboardSnapshot, NowPlaying};

// Only the tests reach into these directly.
#[cfg(test)]
pub use types::ArtistFilter;
#[cfg(test)]
pub use catalog::CatalogStore;
#[cfg(test)]
pub use playback::{audio_source_url, PlaybackController, PlaybackState};
#[cfg(test)]
pub use song_client::ServiceError;

#[cfg(test)]
mod tests;
