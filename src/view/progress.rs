//! Mini player bar rendering

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::model::{format_time, SessionState};

pub fn render_mini_player(frame: &mut Frame, area: Rect, playback: &SessionState) {
    let Some(episode) = playback.current_episode() else {
        let idle = Block::default()
            .borders(Borders::ALL)
            .title(" Nothing playing - pick an episode and press Enter ")
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(idle, area);
        return;
    };

    let status_text = if playback.is_playing() {
        format!(" ▶ {} | {} ", episode.title, episode.podcast_title)
    } else {
        format!(" ⏸  {} | {} ", episode.title, episode.podcast_title)
    };

    let time_str = format!(
        "{} / {}",
        format_time(playback.progress()),
        format_time(episode.duration)
    );

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(status_text)
                .title_bottom(Line::from(" Space play/pause · → +30s · P open player ").right_aligned()),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(playback.progress_ratio())
        .label(time_str);

    frame.render_widget(gauge, area);
}
