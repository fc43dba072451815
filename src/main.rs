mod audio;
mod controller;
mod logging;
mod model;
mod view;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::Mutex;

use audio::AudioBackend;
use controller::AppController;
use model::{AppModel, HttpSongClient, API_BASE_URL};
use view::AppView;

const TICK_RATE: Duration = Duration::from_millis(100);

// Everything except the audio thread runs on this one thread; network continuations,
// key events and audio notifications never overlap.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== Radio Heaven Starting ===");

    let (audio_events_tx, audio_events_rx) = tokio::sync::mpsc::unbounded_channel();
    let audio_backend = Arc::new(AudioBackend::spawn(audio_events_tx)?);

    let service = Arc::new(HttpSongClient::new(API_BASE_URL));
    let model = Arc::new(Mutex::new(AppModel::new()));
    let controller = AppController::new(model.clone(), service, audio_backend.clone());

    controller.start_player_event_listener(audio_events_rx);

    // The one automatic catalog load. Failures land in the error banner.
    let loader = controller.clone();
    tokio::spawn(async move {
        let _ = loader.load_catalog().await;
    });

    set_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller).await;

    restore_terminal()?;
    terminal.show_cursor()?;

    audio_backend.shutdown();

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Radio Heaven shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
) -> io::Result<()> {
    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(TICK_RATE);

    loop {
        let snapshot = {
            let model = model.lock().await;
            if model.should_quit() {
                break;
            }
            model.snapshot()
        };

        terminal.draw(|f| {
            AppView::render(f, &snapshot);
        })?;

        tokio::select! {
            _ = tick.tick() => {}
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => controller.handle_key_event(key).await,
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => break,
            },
        }
    }

    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        hook(panic_info);
    }));
}
