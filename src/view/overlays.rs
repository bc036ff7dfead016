//! Overlay rendering (notice, help popup)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::UiState;

pub fn render_notice(frame: &mut Frame, ui_state: &UiState) {
    if let Some(notice) = &ui_state.notice {
        let area = frame.area();

        let popup_width = 52u16.min(area.width.saturating_sub(4));
        let inner_width = popup_width.saturating_sub(4).max(1) as usize;
        let line_count = notice.chars().count().div_ceil(inner_width) as u16;
        let popup_height = (2 + line_count.max(1)).min(area.height.saturating_sub(2));

        // Bottom-right corner, above the mini player
        let popup_area = Rect {
            x: area.width.saturating_sub(popup_width + 1),
            y: area.height.saturating_sub(popup_height + 3),
            width: popup_width,
            height: popup_height,
        };

        frame.render_widget(Clear, popup_area);

        let widget = Paragraph::new(notice.to_string())
            .style(Style::default().fg(Color::Green))
            .wrap(ratatui::widgets::Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green))
                    .style(Style::default().bg(Color::Black)),
            );

        frame.render_widget(widget, popup_area);
    }
}

pub fn render_help_popup(frame: &mut Frame) {
    let area = frame.area();

    let keybindings = [
        ("", "── Navigation ──"),
        ("Tab / Shift+Tab", "Next / previous screen"),
        ("↑ / ↓", "Move selection"),
        ("Enter", "Open / Play / Toggle"),
        ("Esc / Backspace", "Go back"),
        ("P", "Open player"),
        ("", ""),
        ("", "── Playback ──"),
        ("Space", "Play / Pause"),
        ("→ / ←", "Skip +30s / -15s"),
        ("0-9", "Seek to 0%..90%"),
        ("+ / -", "Volume up / down"),
        ("M", "Mute / Unmute"),
        ("", ""),
        ("", "── Library ──"),
        ("S", "Subscribe / Unsubscribe"),
        ("X", "Save / Unsave episode"),
        ("R", "Reset preference list (Profile)"),
        ("", ""),
        ("", "── For You / Community ──"),
        ("N", "Next clip"),
        ("Enter", "Play full episode / Like / Join"),
        ("E", "Discussions / Events"),
        ("R", "Remind me about event"),
        ("", ""),
        ("", "── General ──"),
        ("H", "Toggle this help"),
        ("Q", "Quit"),
    ];

    let popup_width = 52u16.min(area.width);
    let popup_height = (keybindings.len() as u16 + 2).min(area.height.saturating_sub(2));

    let popup_area = Rect {
        x: area.width.saturating_sub(popup_width) / 2,
        y: area.height.saturating_sub(popup_height) / 2,
        width: popup_width,
        height: popup_height,
    };

    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                Line::from(Span::styled(
                    format!("{:^48}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>18}", key),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help (H or Esc to close) ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help_text, popup_area);
}
