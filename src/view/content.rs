//! Main content area rendering (podcast list, clip feed, podcast detail, profile)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{format_time, AppModel, PreferenceKind, SessionState};
use super::utils::{rating_stars, row_style, truncate_string};

pub(super) fn focused_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::horizontal(1))
        .border_style(Style::default().fg(Color::Green))
}

pub fn render_home(frame: &mut Frame, area: Rect, model: &AppModel) {
    let podcasts = model.catalog().podcasts();
    let selected = model.ui_state.podcast_selected;
    let title_width = (area.width as usize).saturating_sub(40).max(12);

    let items: Vec<ListItem> = podcasts
        .iter()
        .enumerate()
        .map(|(i, podcast)| {
            let subscribed = if model.profile.is_subscribed(&podcast.id) { "♥" } else { " " };
            let rating = podcast.rating.map(|r| format!("★ {:.1}", r)).unwrap_or_default();
            let text = format!(
                " {} {}  {:<18} {}",
                subscribed,
                truncate_string(&podcast.title, title_width),
                truncate_string(&podcast.language, 18),
                rating,
            );
            ListItem::new(text).style(row_style(i == selected, false))
        })
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(6)])
        .split(area);

    let list = List::new(items).block(focused_block(format!(
        " Discover ({} podcasts · {} episodes) ",
        podcasts.len(),
        model.catalog().episodes().len()
    )));
    let mut list_state = ListState::default();
    list_state.select(Some(selected));
    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    // Summary of the highlighted show
    let summary = match model.selected_podcast() {
        Some(podcast) => vec![
            Line::from(vec![
                Span::styled(podcast.creator.clone(), Style::default().fg(Color::Cyan)),
                Span::raw(format!("  ·  {} episodes", podcast.total_episodes)),
                Span::raw(
                    podcast
                        .subscribers
                        .map(|s| format!("  ·  {} subscribers", s))
                        .unwrap_or_default(),
                ),
            ]),
            Line::from(Span::styled(
                podcast.tags.join(" · "),
                Style::default().fg(Color::Yellow),
            )),
            Line::from(podcast.description.clone()),
        ],
        None => vec![Line::from("No podcasts available")],
    };
    let summary = Paragraph::new(summary)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).padding(Padding::horizontal(1)));
    frame.render_widget(summary, chunks[1]);
}

pub fn render_for_you(frame: &mut Frame, area: Rect, model: &AppModel, playback: &SessionState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    let current = match model.selected_clip() {
        Some(clip) => {
            let playing = playback
                .current_episode()
                .is_some_and(|e| e.id == clip.episode.id);
            vec![
                Line::from(Span::styled(
                    clip.title.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled(clip.podcast_title.clone(), Style::default().fg(Color::Cyan)),
                    Span::raw(format!("  ·  {} clip", format_time(clip.duration))),
                ]),
                Line::from(Span::styled(
                    if playing {
                        "▶ Full episode playing".to_string()
                    } else {
                        format!("Full episode {} (Enter to play)", format_time(clip.episode.duration))
                    },
                    Style::default().fg(if playing { Color::Green } else { Color::DarkGray }),
                )),
            ]
        }
        None => vec![Line::from("No clips available")],
    };
    let current = Paragraph::new(current)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Selected for you (N for next clip) ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(current, chunks[0]);

    let clips = model.catalog().clips();
    let selected = model.ui_state.clip_selected;
    let title_width = (chunks[1].width as usize).saturating_sub(36).max(12);
    let items: Vec<ListItem> = clips
        .iter()
        .enumerate()
        .map(|(i, clip)| {
            let text = format!(
                " {:>2}  {}  {:<22} {:>5}",
                i + 1,
                truncate_string(&clip.title, title_width),
                truncate_string(&clip.podcast_title, 22),
                format_time(clip.duration),
            );
            ListItem::new(text).style(row_style(i == selected, false))
        })
        .collect();

    let list = List::new(items).block(focused_block(format!(" For You ({} clips) ", clips.len())));
    let mut list_state = ListState::default();
    list_state.select(Some(selected));
    frame.render_stateful_widget(list, chunks[1], &mut list_state);
}

pub fn render_podcast_detail(frame: &mut Frame, area: Rect, model: &AppModel, playback: &SessionState) {
    let Some(podcast) = model.focused_podcast() else {
        let empty = Paragraph::new("Podcast not found\n\nPress Esc to go back")
            .style(Style::default().fg(Color::DarkGray))
            .block(focused_block(" Podcast ".to_string()));
        frame.render_widget(empty, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0), Constraint::Length(5)])
        .split(area);

    let catalog = model.catalog();
    let subscribed = model.profile.is_subscribed(&podcast.id);
    let header = vec![
        Line::from(Span::styled(
            podcast.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(podcast.creator.clone(), Style::default().fg(Color::Cyan)),
            Span::raw(format!("  ·  {}  ·  ", podcast.language)),
            Span::styled(
                rating_stars(catalog.average_rating(&podcast.id)),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(if subscribed {
            Span::styled("✓ Subscribed (S to unsubscribe)", Style::default().fg(Color::Green))
        } else {
            Span::styled("Not subscribed (S to subscribe)", Style::default().fg(Color::DarkGray))
        }),
        Line::from(podcast.description.clone()),
    ];
    let header = Paragraph::new(header)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).padding(Padding::horizontal(1)));
    frame.render_widget(header, chunks[0]);

    let episodes = model.focused_episodes();
    let selected = model.ui_state.episode_selected;
    let playing_id = playback.current_episode().map(|e| e.id.as_str());
    let title_width = (chunks[1].width as usize).saturating_sub(30).max(12);

    let items: Vec<ListItem> = if episodes.is_empty() {
        vec![ListItem::new("No episodes yet").style(Style::default().fg(Color::DarkGray))]
    } else {
        episodes
            .iter()
            .enumerate()
            .map(|(i, episode)| {
                let is_playing = playing_id == Some(episode.id.as_str());
                let marker = if is_playing { "▶" } else { " " };
                let saved = if model.profile.is_saved(&episode.id) { "+" } else { " " };
                let text = format!(
                    " {}{} {}  {:>7}  {}",
                    marker,
                    saved,
                    truncate_string(&episode.title, title_width),
                    format_time(episode.duration),
                    episode.display_date(),
                );
                ListItem::new(text).style(row_style(i == selected, is_playing))
            })
            .collect()
    };

    let list = List::new(items).block(focused_block(format!(" Episodes ({}) ", episodes.len())));
    let mut list_state = ListState::default();
    list_state.select(Some(selected));
    frame.render_stateful_widget(list, chunks[1], &mut list_state);

    let reviews = catalog.reviews_for(&podcast.id);
    let review_lines: Vec<Line> = if reviews.is_empty() {
        vec![Line::from(Span::styled("No reviews yet", Style::default().fg(Color::DarkGray)))]
    } else {
        reviews
            .iter()
            .map(|review| {
                Line::from(vec![
                    Span::styled(
                        format!("{} {} ", "★".repeat(review.rating as usize), review.user_name),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(
                        format!("({}) ", review.created_at.format("%b %-d, %Y")),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(review.content.clone()),
                ])
            })
            .collect()
    };
    let reviews = Paragraph::new(review_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Reviews ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(reviews, chunks[2]);
}

pub fn render_profile(frame: &mut Frame, area: Rect, model: &AppModel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let profile = &model.profile;
    let saved_titles: Vec<String> = profile
        .saved_episodes()
        .iter()
        .filter_map(|id| model.catalog().episode(id))
        .map(|episode| episode.title.clone())
        .collect();
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(profile.email.clone(), Style::default().fg(Color::DarkGray))),
        Line::from(format!(
            "{} subscriptions  ·  {} saved episodes  ·  {} liked discussions",
            profile.subscriptions().len(),
            profile.saved_episodes().len(),
            profile.liked_discussions().len(),
        )),
        Line::from(Span::styled(
            if saved_titles.is_empty() {
                "Saved: none".to_string()
            } else {
                format!("Saved: {}", saved_titles.join(", "))
            },
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).padding(Padding::horizontal(1)));
    frame.render_widget(header, chunks[0]);

    let events: Vec<String> = profile
        .joined_events()
        .iter()
        .filter_map(|id| model.catalog().live_event(id))
        .map(|event| event.title.clone())
        .collect();
    let events = Paragraph::new(if events.is_empty() {
        "Joined events: none".to_string()
    } else {
        format!("Joined events: {}", events.join(", "))
    })
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL).padding(Padding::horizontal(1)));
    frame.render_widget(events, chunks[1]);

    let selected = model.ui_state.preference_selected;
    let mut current_kind: Option<PreferenceKind> = None;
    let mut items = Vec::new();
    let mut selected_row = 0;

    for (i, (kind, option)) in model.preference_rows().into_iter().enumerate() {
        if current_kind != Some(kind) {
            current_kind = Some(kind);
            items.push(
                ListItem::new(format!("── {} ──", kind.label()))
                    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            );
        }
        if i == selected {
            selected_row = items.len();
        }
        let checked = if profile.has_preference(kind, &option.id) { "[x]" } else { "[ ]" };
        items.push(
            ListItem::new(format!("  {} {}", checked, option.name))
                .style(row_style(i == selected, false)),
        );
    }

    let list = List::new(items).block(focused_block(
        " Preferences (Enter to toggle, R to reset list) ".to_string(),
    ));
    let mut list_state = ListState::default();
    list_state.select(Some(selected_row));
    frame.render_stateful_widget(list, chunks[2], &mut list_state);
}
