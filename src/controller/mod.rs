//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! talks to the song service and drives the audio resource.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `catalog`: The initial catalog load
//! - `favorites`: Favorite toggles against the song service
//! - `playback`: Track selection and play/pause
//! - `player_events`: Audio resource notification listener

mod input;
mod catalog;
mod favorites;
mod playback;
mod player_events;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::audio::AudioOutput;
use crate::model::{AppModel, SongService};

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    pub(crate) service: Arc<dyn SongService>,
    pub(crate) audio: Arc<dyn AudioOutput>,
}

impl AppController {
    pub fn new(
        model: Arc<Mutex<AppModel>>,
        service: Arc<dyn SongService>,
        audio: Arc<dyn AudioOutput>,
    ) -> Self {
        Self {
            model,
            service,
            audio,
        }
    }
}
