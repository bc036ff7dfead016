//! Full now-playing screen

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{format_time, AppModel, SessionState};

pub fn render_now_playing(frame: &mut Frame, area: Rect, model: &AppModel, playback: &SessionState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Now Playing (Esc to close) ")
        .padding(Padding::uniform(1))
        .border_style(Style::default().fg(Color::Green));

    let Some(episode) = playback.current_episode() else {
        frame.render_widget(Paragraph::new("Nothing is playing").block(block), area);
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),    // Title + description
            Constraint::Length(3), // Progress
            Constraint::Length(1), // Transport hints
            Constraint::Length(3), // Volume
            Constraint::Length(1), // Flags
        ])
        .split(inner);

    let saved = model.profile.is_saved(&episode.id);
    let info = Paragraph::new(vec![
        Line::from(Span::styled(
            episode.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(episode.podcast_title.clone(), Style::default().fg(Color::Cyan))),
        Line::from(Span::styled(
            format!("{}  ·  {}", episode.display_date(), episode.audio_url),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(episode.description.clone()),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(info, chunks[0]);

    let progress = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(if playback.is_playing() {
            " ▶ Playing "
        } else {
            " ⏸  Paused "
        }))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(playback.progress_ratio())
        .label(format!(
            "{} / {}",
            format_time(playback.progress()),
            format_time(episode.duration)
        ));
    frame.render_widget(progress, chunks[1]);

    let hints = Paragraph::new("←  -15s    Space play/pause    →  +30s    0-9 seek")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, chunks[2]);

    let volume_title = if model.ui_state.muted { " Volume (muted, M) " } else { " Volume (+/-, M) " };
    let volume = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(volume_title))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(playback.volume().clamp(0.0, 1.0))
        .label(format!("{:.0}%", playback.volume() * 100.0));
    frame.render_widget(volume, chunks[3]);

    let flags = Paragraph::new(if saved {
        Span::styled("♥ Saved (X to remove)", Style::default().fg(Color::Green))
    } else {
        Span::styled("♡ Not saved (X to save)", Style::default().fg(Color::DarkGray))
    });
    frame.render_widget(flags, chunks[4]);
}
