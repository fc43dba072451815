//! Layout rendering (header, tab bar)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Tabs},
    Frame,
};

use crate::model::ActiveTab;

const TITLE: &str = "Radio Heaven";
const TAGLINE: &str = "Whoever has ears, let them hear - Matthew 11:15";

pub fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            TAGLINE,
            Style::default().add_modifier(Modifier::ITALIC),
        )),
    ])
    .block(Block::default().padding(Padding::new(1, 1, 1, 0)));
    frame.render_widget(header, area);
}

pub fn render_tabs(frame: &mut Frame, area: Rect, active: ActiveTab) {
    let selected = ActiveTab::ALL
        .iter()
        .position(|t| *t == active)
        .unwrap_or(0);

    let tabs = Tabs::new(ActiveTab::ALL.iter().map(|t| t.label()))
        .select(selected)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .divider(" | ");
    frame.render_widget(tabs, area);
}
