//! Community screen (discussions and live Q&A events)

use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{AppModel, CommunityTab};
use super::content::focused_block;
use super::utils::{row_style, truncate_string};

pub fn render_community(frame: &mut Frame, area: Rect, model: &AppModel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(6)])
        .split(area);

    let tab = model.ui_state.community_tab;
    let tab_style = |active: bool| {
        if active {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };
    let tabs = Paragraph::new(Line::from(vec![
        Span::styled("Discussions", tab_style(tab == CommunityTab::Discussions)),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled("Live Q&A Events", tab_style(tab == CommunityTab::Events)),
        Span::styled("   (E to switch)", Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL).padding(Padding::horizontal(1)));
    frame.render_widget(tabs, chunks[0]);

    match tab {
        CommunityTab::Discussions => render_discussions(frame, chunks[1], chunks[2], model),
        CommunityTab::Events => render_events(frame, chunks[1], chunks[2], model),
    }
}

fn render_discussions(frame: &mut Frame, list_area: Rect, detail_area: Rect, model: &AppModel) {
    let now = Utc::now();
    let selected = model.ui_state.discussion_selected;
    let title_width = (list_area.width as usize).saturating_sub(44).max(12);

    let items: Vec<ListItem> = model
        .catalog()
        .discussions()
        .iter()
        .enumerate()
        .map(|(i, discussion)| {
            let liked = model.profile.has_liked(&discussion.id);
            let likes = discussion.likes_count + u32::from(liked);
            let text = format!(
                " {} {}  {:<22} 💬 {:<3} 👍 {:<3}",
                if liked { "♥" } else { " " },
                truncate_string(&discussion.title, title_width),
                truncate_string(&discussion.topic, 22),
                discussion.comments_count,
                likes,
            );
            ListItem::new(text).style(row_style(i == selected, false))
        })
        .collect();

    let list = List::new(items).block(focused_block(" Popular Discussions (Enter to like) ".to_string()));
    let mut list_state = ListState::default();
    list_state.select(Some(selected));
    frame.render_stateful_widget(list, list_area, &mut list_state);

    let detail = match model.selected_discussion() {
        Some(discussion) => vec![
            Line::from(vec![
                Span::styled(discussion.author.clone(), Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("  ·  {}", discussion.relative_date(now)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(discussion.content.clone()),
        ],
        None => vec![Line::from("No discussions yet")],
    };
    let detail = Paragraph::new(detail)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).padding(Padding::horizontal(1)));
    frame.render_widget(detail, detail_area);
}

fn render_events(frame: &mut Frame, list_area: Rect, detail_area: Rect, model: &AppModel) {
    let now = Utc::now();
    let selected = model.ui_state.event_selected;
    let title_width = (list_area.width as usize).saturating_sub(50).max(12);

    let items: Vec<ListItem> = model
        .catalog()
        .live_events()
        .iter()
        .enumerate()
        .map(|(i, event)| {
            let tag = if event.is_live_at(now) { "LIVE NOW" } else { "UPCOMING" };
            let joined = model.profile.has_joined(&event.id);
            let reminder = if model.profile.has_reminder(&event.id) { "⏰" } else { "  " };
            let text = format!(
                " {:<8} {}  {}  {} {}",
                tag,
                truncate_string(&event.title, title_width),
                event.display_schedule(),
                reminder,
                if joined { "✓ joined" } else { "" },
            );
            ListItem::new(text).style(row_style(i == selected, joined))
        })
        .collect();

    let list = List::new(items).block(focused_block(
        " Upcoming & Live Events (Enter to join, R to remind) ".to_string(),
    ));
    let mut list_state = ListState::default();
    list_state.select(Some(selected));
    frame.render_stateful_widget(list, list_area, &mut list_state);

    let detail = match model.selected_event() {
        Some(event) => vec![
            Line::from(vec![
                Span::styled(format!("Hosted by {}", event.host), Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("  ·  {} attending", event.attendees_count + u32::from(model.profile.has_joined(&event.id))),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(event.description.clone()),
        ],
        None => vec![Line::from("No events scheduled")],
    };
    let detail = Paragraph::new(detail)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).padding(Padding::horizontal(1)));
    frame.render_widget(detail, detail_area);
}
