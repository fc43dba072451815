//! Key event handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::ActiveTab;
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let mut model = self.model.lock().await;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            model.set_should_quit(true);
            return;
        }

        // Handle error message first (blocks all other interactions)
        if model.has_error() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                model.clear_error();
            }
            return;
        }

        // Handle help popup
        if model.is_help_popup_open() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H')) {
                model.hide_help_popup();
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => model.set_should_quit(true),
            KeyCode::Char('h') | KeyCode::Char('H') => model.show_help_popup(),
            KeyCode::BackTab => model.prev_tab(),
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => model.prev_tab(),
            KeyCode::Tab => model.next_tab(),
            _ if model.active_tab() != ActiveTab::Songs => {}
            KeyCode::Up | KeyCode::Char('k') => model.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => model.move_selection_down(),
            KeyCode::Left => model.cycle_artist_filter_backward(),
            KeyCode::Right => model.cycle_artist_filter_forward(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                drop(model);
                self.activate_selected().await;
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                drop(model);
                self.toggle_playback().await;
            }
            KeyCode::Char('f') | KeyCode::Char('F') => {
                drop(model);
                self.toggle_selected_favorite().await;
            }
            _ => {}
        }
    }
}
