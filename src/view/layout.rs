//! Layout rendering (top bar with screen tabs)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{PlaybackStatus, Screen, SessionState};

pub fn render_top_bar(frame: &mut Frame, area: Rect, screen: Screen, playback: &SessionState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),        // Tabs
            Constraint::Length(20),    // Player status
        ])
        .split(area);

    let has_episode = playback.current_episode().is_some();
    let mut spans = Vec::new();
    for (i, tab) in Screen::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        let style = if *tab == screen {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else if *tab == Screen::Player && !has_episode {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(tab.title(), style));
    }

    let tabs = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" podcast-rs ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(tabs, chunks[0]);

    let status = match playback.status() {
        PlaybackStatus::Stopped => "■ Idle",
        PlaybackStatus::Paused => "⏸  Paused",
        PlaybackStatus::Playing => "▶ Playing",
    };
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL).title(" Player "));
    frame.render_widget(status, chunks[1]);
}
