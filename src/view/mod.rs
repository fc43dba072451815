//! View module - UI rendering
//!
//! This module handles all UI rendering for the dashboard using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, truncation)
//! - `layout`: Header and tab bar
//! - `content`: Songs tab (artist filter and song list) and placeholder tabs
//! - `now_playing`: Now-playing bar
//! - `overlays`: Modal overlays (error, help)

mod utils;
mod layout;
mod content;
mod now_playing;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::DashboardSnapshot;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, snapshot: &DashboardSnapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Title + tagline
                Constraint::Length(3), // Tabs
                Constraint::Min(0),    // Tab content
                Constraint::Length(3), // Now playing
            ])
            .split(frame.area());

        layout::render_header(frame, chunks[0]);
        layout::render_tabs(frame, chunks[1], snapshot.ui_state.active_tab);
        content::render_main_content(frame, chunks[2], snapshot);
        now_playing::render_now_playing(frame, chunks[3], snapshot.now_playing.as_ref());

        // Error notification overlay (if there's an error)
        if let Some(message) = &snapshot.error_message {
            overlays::render_error_notification(frame, message);
        } else if snapshot.ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
