//! The dashboard's single audio resource
//!
//! One thread owns the rodio output stream and at most one sink. The controller talks
//! to it through [`AudioCommand`]s and hears back through [`AudioEvent`]s, which mirror
//! what the sink actually did, in order.

use std::io::Cursor;
use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::Result;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use tokio::sync::mpsc::UnboundedSender;

use crate::model::{AudioCommand, AudioEvent, StopReason};

const POLL_INTERVAL: Duration = Duration::from_millis(200);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Anything that can receive playback commands.
pub trait AudioOutput: Send + Sync {
    fn send(&self, command: AudioCommand);
}

pub struct AudioBackend {
    tx: Sender<AudioCommand>,
    thread: Mutex<Option<JoinHandle<()>>>,
}

impl AudioBackend {
    pub fn spawn(events: UnboundedSender<AudioEvent>) -> Result<Self> {
        let (tx, rx) = mpsc::channel::<AudioCommand>();
        let thread = thread::Builder::new()
            .name("audio".to_string())
            .spawn(move || run_audio_thread(rx, events))?;

        Ok(Self {
            tx,
            thread: Mutex::new(Some(thread)),
        })
    }

    /// Stop playback and wait for the audio thread to exit.
    pub fn shutdown(&self) {
        self.send(AudioCommand::Shutdown);
        let handle = self.thread.lock().ok().and_then(|mut t| t.take());
        if let Some(handle) = handle {
            if handle.join().is_err() {
                tracing::error!("Audio thread panicked");
            }
        }
    }
}

impl AudioOutput for AudioBackend {
    fn send(&self, command: AudioCommand) {
        if self.tx.send(command).is_err() {
            tracing::warn!("Audio thread is gone, dropping command");
        }
    }
}

fn run_audio_thread(rx: Receiver<AudioCommand>, events: UnboundedSender<AudioEvent>) {
    let stream = match OutputStreamBuilder::open_default_stream() {
        Ok(mut stream) => {
            // rodio logs to stderr when the stream is dropped, which would draw over the TUI.
            stream.log_on_drop(false);
            Some(stream)
        }
        Err(e) => {
            tracing::error!(error = %e, "No audio output device");
            None
        }
    };

    let http = match source_client() {
        Ok(http) => Some(http),
        Err(e) => {
            tracing::error!(error = %e, "Could not build the audio source client");
            None
        }
    };

    let mut player = Player {
        stream,
        http,
        sink: None,
        current_url: None,
        playing: false,
        events,
    };

    loop {
        match rx.recv_timeout(POLL_INTERVAL) {
            Ok(AudioCommand::Shutdown) => break,
            Ok(command) => player.handle(command),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
        player.check_end_of_track();
    }

    if let Some(sink) = player.sink.take() {
        sink.stop();
    }
    tracing::debug!("Audio thread exiting");
}

/// Client for fetching audio files. A whole track is downloaded before it starts, so
/// only the connect phase is bounded.
fn source_client() -> reqwest::Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(None)
        .build()
}

fn fetch_source(http: &reqwest::blocking::Client, url: &str) -> Result<Vec<u8>> {
    let bytes = http.get(url).send()?.error_for_status()?.bytes()?;
    Ok(bytes.to_vec())
}

struct Player {
    stream: Option<OutputStream>,
    http: Option<reqwest::blocking::Client>,
    /// The one bound source. Loading replaces it.
    sink: Option<Sink>,
    current_url: Option<String>,
    playing: bool,
    events: UnboundedSender<AudioEvent>,
}

impl Player {
    fn handle(&mut self, command: AudioCommand) {
        match command {
            AudioCommand::Load { url } => self.load(url),
            AudioCommand::Pause => {
                if let Some(sink) = &self.sink {
                    sink.pause();
                    self.playing = false;
                    self.emit(AudioEvent::Stopped {
                        reason: StopReason::Paused,
                    });
                }
            }
            AudioCommand::Resume => match &self.sink {
                Some(sink) if !sink.empty() => {
                    sink.play();
                    self.playing = true;
                    self.emit(AudioEvent::Started);
                }
                // Ended or never loaded: start the same source over.
                _ => {
                    if let Some(url) = self.current_url.clone() {
                        self.load(url);
                    }
                }
            },
            AudioCommand::Shutdown => {}
        }
    }

    fn load(&mut self, url: String) {
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        self.playing = false;
        self.current_url = Some(url.clone());

        tracing::info!(%url, "Loading audio source");
        match self.open_sink(&url) {
            Ok(sink) => {
                sink.play();
                self.sink = Some(sink);
                self.playing = true;
                self.emit(AudioEvent::Started);
            }
            Err(e) => {
                tracing::warn!(%url, error = %e, "Audio source failed");
                self.emit(AudioEvent::Stopped {
                    reason: StopReason::MediaError(e.to_string()),
                });
            }
        }
    }

    fn open_sink(&self, url: &str) -> Result<Sink> {
        let stream = self
            .stream
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("no audio output device"))?;

        let http = self
            .http
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("no audio source client"))?;

        let bytes = fetch_source(http, url)?;
        let source = Decoder::new(Cursor::new(bytes))?;

        let sink = Sink::connect_new(stream.mixer());
        sink.pause();
        sink.append(source);
        Ok(sink)
    }

    fn check_end_of_track(&mut self) {
        if self.playing && self.sink.as_ref().is_some_and(Sink::empty) {
            tracing::debug!(url = ?self.current_url, "End of track");
            self.playing = false;
            self.emit(AudioEvent::Stopped {
                reason: StopReason::EndOfTrack,
            });
        }
    }

    fn emit(&self, event: AudioEvent) {
        if self.events.send(event).is_err() {
            tracing::debug!("Audio event receiver dropped");
        }
    }
}
