//! Listener for audio resource notifications

use tokio::sync::mpsc::UnboundedReceiver;

use crate::model::{AudioEvent, StopReason};

use super::AppController;

impl AppController {
    pub fn start_player_event_listener(&self, mut events: UnboundedReceiver<AudioEvent>) {
        let controller = self.clone();
        tracing::info!("Starting audio event listener");

        tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                controller.handle_audio_event(event).await;
            }
            tracing::debug!("Audio event listener shutting down");
        });
    }

    /// Bring the playing flag in line with what the audio resource reports.
    pub async fn handle_audio_event(&self, event: AudioEvent) {
        match &event {
            AudioEvent::Started => tracing::debug!("AudioEvent::Started"),
            AudioEvent::Stopped { reason: StopReason::MediaError(e) } => {
                tracing::warn!(error = %e, "AudioEvent::Stopped (media error)");
            }
            AudioEvent::Stopped { reason } => tracing::debug!(?reason, "AudioEvent::Stopped"),
        }
        let mut model = self.model.lock().await;
        model.playback.handle_event(&event);
        tracing::trace!(state = ?model.playback.state(), "Playback state after audio event");
    }
}
