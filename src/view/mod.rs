//! View module - UI rendering
//!
//! - `utils`: Shared helpers (truncation, selection styles)
//! - `layout`: Top bar with screen tabs
//! - `content`: Home, For You, podcast detail and profile screens
//! - `community`: Discussions and live events
//! - `player`: Full now-playing screen
//! - `progress`: Mini player bar
//! - `overlays`: Notice and help popups

mod utils;
mod layout;
mod content;
mod community;
mod player;
mod progress;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{AppModel, Screen, SessionState};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, model: &AppModel, playback: &SessionState) {
        let show_mini_player = model.screen() != Screen::Player;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(if show_mini_player { 3 } else { 0 }),
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], model.screen(), playback);

        match model.screen() {
            Screen::Home => content::render_home(frame, chunks[1], model),
            Screen::ForYou => content::render_for_you(frame, chunks[1], model, playback),
            Screen::Community => community::render_community(frame, chunks[1], model),
            Screen::Podcast => content::render_podcast_detail(frame, chunks[1], model, playback),
            Screen::Player => player::render_now_playing(frame, chunks[1], model, playback),
            Screen::Profile => content::render_profile(frame, chunks[1], model),
        }

        if show_mini_player {
            progress::render_mini_player(frame, chunks[2], playback);
        }

        if model.ui_state.notice.is_some() {
            overlays::render_notice(frame, &model.ui_state);
        }

        if model.ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
