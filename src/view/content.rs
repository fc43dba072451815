//! Main content area rendering (artist filter, song list, placeholder tabs)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveTab, DashboardSnapshot, NowPlaying, Song};
use super::utils::{calculate_num_width, format_duration, truncate_string};

pub fn render_main_content(frame: &mut Frame, area: Rect, snapshot: &DashboardSnapshot) {
    match snapshot.ui_state.active_tab {
        ActiveTab::Songs => render_songs_tab(frame, area, snapshot),
        tab @ (ActiveTab::Sermons | ActiveTab::Podcast) => {
            let placeholder = Paragraph::new(tab.label()).block(
                Block::default()
                    .borders(Borders::ALL)
                    .padding(Padding::uniform(1)),
            );
            frame.render_widget(placeholder, area);
        }
    }
}

fn render_songs_tab(frame: &mut Frame, area: Rect, snapshot: &DashboardSnapshot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Artist filter
            Constraint::Min(0),    // Song list
        ])
        .split(area);

    render_artist_filter(frame, chunks[0], snapshot);

    if snapshot.ui_state.is_loading {
        let loading = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title(" Songs "));
        frame.render_widget(loading, chunks[1]);
        return;
    }

    if snapshot.songs.is_empty() {
        let empty = Paragraph::new("No songs found.")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Songs ")
                    .padding(Padding::horizontal(1)),
            );
        frame.render_widget(empty, chunks[1]);
        return;
    }

    render_song_list(frame, chunks[1], snapshot);
}

fn render_artist_filter(frame: &mut Frame, area: Rect, snapshot: &DashboardSnapshot) {
    let mut spans = Vec::new();
    for (i, option) in snapshot.artist_options.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *option == snapshot.artist_filter {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!(" {} ", option), style));
    }
    // A selection that is no longer in the catalog still shows, so the empty list makes sense.
    if !snapshot.artist_options.contains(&snapshot.artist_filter) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!(" {} ", snapshot.artist_filter),
            Style::default().fg(Color::Red).add_modifier(Modifier::REVERSED),
        ));
    }

    let filter_bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Artist (←/→) ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(filter_bar, area);
}

fn render_song_list(frame: &mut Frame, area: Rect, snapshot: &DashboardSnapshot) {
    let content_width = area.width.saturating_sub(4) as usize;
    let items = render_song_items(
        &snapshot.songs,
        snapshot.ui_state.selected_index,
        snapshot.now_playing.as_ref(),
        content_width,
    );

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Songs ({}) ", snapshot.songs.len()))
                .padding(Padding::horizontal(1))
                .border_style(Style::default().fg(Color::Green)),
        )
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(Some(snapshot.ui_state.selected_index + 1)); // +1 for header

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_song_items(
    songs: &[Song],
    selected_index: usize,
    now_playing: Option<&NowPlaying>,
    content_width: usize,
) -> Vec<ListItem<'static>> {
    let num_width = calculate_num_width(songs.len());
    let favorite_width = 2;
    let duration_width = 6;
    let fixed_width = 1 + num_width + 3 + favorite_width + 3 + 3 + 3 + duration_width;
    let remaining_width = content_width.saturating_sub(fixed_width);
    let title_width = (remaining_width * 35) / 100;
    let artist_width = (remaining_width * 25) / 100;
    let description_width = remaining_width.saturating_sub(title_width + artist_width);

    let mut items = vec![
        ListItem::new(format!(
            " {:<num_width$}   {}   {:<title_width$}   {:<artist_width$}   {:<description_width$}   {}",
            "#", "  ", "Title", "Artist", "Description", "Length",
        ))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    ];

    items.extend(songs.iter().enumerate().map(|(i, song)| {
        let is_current = now_playing.is_some_and(|np| np.song.id == song.id);
        let style = if i == selected_index {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else if is_current {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let playing_indicator = match now_playing {
            Some(np) if np.song.id == song.id && np.is_playing => "▶",
            Some(np) if np.song.id == song.id => "⏸",
            _ => " ",
        };
        let favorite_indicator = if song.is_favorite { "♥ " } else { "  " };
        let number = format!("{}{:<num_width$}", playing_indicator, i + 1);

        ListItem::new(format!(
            "{}   {}   {}   {}   {}   {}",
            number,
            favorite_indicator,
            truncate_string(&song.title, title_width),
            truncate_string(song.artist_name().unwrap_or(""), artist_width),
            truncate_string(song.description.as_deref().unwrap_or(""), description_width),
            format_duration(song.length_in_seconds),
        ))
        .style(style)
    }));

    items
}
