//! Single-track playback state machine
//!
//! The controller only remembers *which* song is selected (by id) and whether it is
//! playing. Everything shown about the song is looked up in the catalog when needed.
//! Each transition returns the [`AudioCommand`] to send to the audio resource, so the
//! machine can be driven and tested without any audio device.

use super::types::{Song, SongId};

/// Where the song files are served from.
pub const SONGS_ASSET_BASE: &str = "http://localhost:8080/songs";
pub const AUDIO_EXTENSION: &str = "mp3";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing { song: SongId },
    Paused { song: SongId },
}

/// Instructions for the one audio resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AudioCommand {
    /// Replace whatever is bound with this source and start it.
    Load { url: String },
    Pause,
    Resume,
    Shutdown,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StopReason {
    Paused,
    EndOfTrack,
    MediaError(String),
}

/// Notifications coming back from the audio resource. They reflect what the resource
/// did, whoever asked for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AudioEvent {
    Started,
    Stopped { reason: StopReason },
}

/// `SONGS_ASSET_BASE/<escaped title>.mp3`
pub fn audio_source_url(title: &str) -> String {
    format!(
        "{}/{}.{}",
        SONGS_ASSET_BASE,
        urlencoding::encode(title),
        AUDIO_EXTENSION
    )
}

#[derive(Clone, Debug, Default)]
pub struct PlaybackController {
    state: PlaybackState,
}

impl PlaybackController {
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn current_song(&self) -> Option<SongId> {
        match self.state {
            PlaybackState::Idle => None,
            PlaybackState::Playing { song } | PlaybackState::Paused { song } => Some(song),
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing { .. })
    }

    pub fn is_selected(&self, id: SongId) -> bool {
        self.current_song() == Some(id)
    }

    /// Select `song` and start it, dropping whatever was bound before.
    /// Selecting the song that is already selected changes nothing.
    pub fn select_track(&mut self, song: &Song) -> Option<AudioCommand> {
        if self.is_selected(song.id) {
            return None;
        }
        tracing::debug!(id = song.id, title = %song.title, "Selecting track");
        self.state = PlaybackState::Playing { song: song.id };
        Some(AudioCommand::Load {
            url: audio_source_url(&song.title),
        })
    }

    /// Pause or resume the selected song. No-op while idle.
    pub fn toggle(&mut self) -> Option<AudioCommand> {
        match self.state {
            PlaybackState::Idle => None,
            PlaybackState::Playing { song } => {
                self.state = PlaybackState::Paused { song };
                Some(AudioCommand::Pause)
            }
            PlaybackState::Paused { song } => {
                self.state = PlaybackState::Playing { song };
                Some(AudioCommand::Resume)
            }
        }
    }

    /// What a click on `song` does: toggle it if selected, otherwise switch to it.
    pub fn activate(&mut self, song: &Song) -> Option<AudioCommand> {
        if self.is_selected(song.id) {
            self.toggle()
        } else {
            self.select_track(song)
        }
    }

    /// Follow the audio resource. The selection never changes here.
    pub fn handle_event(&mut self, event: &AudioEvent) {
        self.state = match (self.state, event) {
            (PlaybackState::Idle, _) => {
                tracing::trace!(?event, "Audio event while idle, ignoring");
                PlaybackState::Idle
            }
            (PlaybackState::Playing { song } | PlaybackState::Paused { song }, AudioEvent::Started) => {
                PlaybackState::Playing { song }
            }
            (
                PlaybackState::Playing { song } | PlaybackState::Paused { song },
                AudioEvent::Stopped { .. },
            ) => PlaybackState::Paused { song },
        };
    }
}
