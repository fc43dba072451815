//! Now-playing bar

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::NowPlaying;
use super::utils::format_duration;

pub fn render_now_playing(frame: &mut Frame, area: Rect, now_playing: Option<&NowPlaying>) {
    let status_text = match now_playing {
        None => "No track playing".to_string(),
        Some(np) => {
            let icon = if np.is_playing { "▶" } else { "⏸ " };
            let favorite = if np.song.is_favorite { " ♥" } else { "" };
            let artist = np.song.artist_name().unwrap_or("Unknown artist");
            let album = np
                .song
                .album
                .as_deref()
                .map(|a| format!(" ({})", a))
                .unwrap_or_default();
            format!(
                "{} {}{} | {}{} [{}]",
                icon,
                np.song.title,
                favorite,
                artist,
                album,
                format_duration(np.song.length_in_seconds)
            )
        }
    };

    let bar = Paragraph::new(status_text)
        .style(Style::default().fg(if now_playing.is_some() { Color::Green } else { Color::DarkGray }))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Now Playing ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(bar, area);
}
