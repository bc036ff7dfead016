//! Main application model with state management

use std::sync::Arc;
use std::time::{Duration, Instant};

use super::catalog::Catalog;
use super::profile::{Preferences, UserProfile};
use super::types::{
    Clip, CommunityTab, Discussion, Episode, LiveEvent, NamedOption, Podcast, PreferenceKind,
    Screen, UiState,
};

pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Main application model containing all non-playback state
pub struct AppModel {
    catalog: Catalog,
    pub profile: UserProfile,
    pub ui_state: UiState,
    should_quit: bool,
}

impl AppModel {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            profile: UserProfile::default(),
            ui_state: UiState::default(),
            should_quit: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_should_quit(&mut self, quit: bool) {
        self.should_quit = quit;
    }

    // ========================================================================
    // Screens
    // ========================================================================

    pub fn screen(&self) -> Screen {
        self.ui_state.screen
    }

    /// Switch screens. The player screen needs a loaded episode; without one
    /// the request lands on Home instead.
    pub fn set_screen(&mut self, screen: Screen, has_episode: bool) {
        let target = match screen {
            Screen::Player if !has_episode => Screen::Home,
            other => other,
        };
        if target == Screen::Podcast && self.ui_state.focused_podcast.is_none() {
            self.focus_selected_podcast();
        }
        if target != self.ui_state.screen {
            if target == Screen::Player {
                self.ui_state.previous_screen = self.ui_state.screen;
            }
            self.ui_state.screen = target;
        }
    }

    pub fn cycle_screen_forward(&mut self, has_episode: bool) {
        let mut next = self.ui_state.screen.next();
        if next == Screen::Player && !has_episode {
            next = next.next();
        }
        self.set_screen(next, has_episode);
    }

    pub fn cycle_screen_backward(&mut self, has_episode: bool) {
        let mut prev = self.ui_state.screen.prev();
        if prev == Screen::Player && !has_episode {
            prev = prev.prev();
        }
        self.set_screen(prev, has_episode);
    }

    pub fn go_back(&mut self) {
        self.ui_state.screen = match self.ui_state.screen {
            Screen::Player => self.ui_state.previous_screen,
            Screen::ForYou | Screen::Community | Screen::Podcast | Screen::Profile => Screen::Home,
            Screen::Home => Screen::Home,
        };
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Cursor of the list shown on the current screen
    fn cursor_mut(&mut self) -> Option<&mut usize> {
        let state = &mut self.ui_state;
        match state.screen {
            Screen::Home => Some(&mut state.podcast_selected),
            Screen::ForYou => Some(&mut state.clip_selected),
            Screen::Community => match state.community_tab {
                CommunityTab::Discussions => Some(&mut state.discussion_selected),
                CommunityTab::Events => Some(&mut state.event_selected),
            },
            Screen::Podcast => Some(&mut state.episode_selected),
            Screen::Profile => Some(&mut state.preference_selected),
            Screen::Player => None,
        }
    }

    fn list_len(&self) -> usize {
        match self.ui_state.screen {
            Screen::Home => self.catalog.podcasts().len(),
            Screen::ForYou => self.catalog.clips().len(),
            Screen::Community => match self.ui_state.community_tab {
                CommunityTab::Discussions => self.catalog.discussions().len(),
                CommunityTab::Events => self.catalog.live_events().len(),
            },
            Screen::Podcast => self.focused_episodes().len(),
            Screen::Profile => self.preference_rows().len(),
            Screen::Player => 0,
        }
    }

    pub fn move_selection_up(&mut self) {
        if let Some(selected) = self.cursor_mut() {
            *selected = selected.saturating_sub(1);
        }
    }

    pub fn move_selection_down(&mut self) {
        let len = self.list_len();
        if let Some(selected) = self.cursor_mut() {
            if *selected + 1 < len {
                *selected += 1;
            }
        }
    }

    pub fn selected_podcast(&self) -> Option<&Podcast> {
        self.catalog.podcasts().get(self.ui_state.podcast_selected)
    }

    /// Show the podcast under the Home cursor on the detail screen
    pub fn focus_selected_podcast(&mut self) {
        let id = self.selected_podcast().map(|p| p.id.clone());
        if id != self.ui_state.focused_podcast {
            self.ui_state.episode_selected = 0;
        }
        self.ui_state.focused_podcast = id;
    }

    pub fn open_selected_podcast(&mut self) {
        self.focus_selected_podcast();
        if self.ui_state.focused_podcast.is_some() {
            self.ui_state.screen = Screen::Podcast;
        }
    }

    pub fn focused_podcast(&self) -> Option<&Podcast> {
        self.ui_state
            .focused_podcast
            .as_deref()
            .and_then(|id| self.catalog.podcast(id))
    }

    pub fn focused_episodes(&self) -> Vec<Arc<Episode>> {
        self.ui_state
            .focused_podcast
            .as_deref()
            .map(|id| self.catalog.episodes_for(id))
            .unwrap_or_default()
    }

    pub fn selected_episode(&self) -> Option<Arc<Episode>> {
        self.focused_episodes()
            .into_iter()
            .nth(self.ui_state.episode_selected)
    }

    /// Flattened preference lists as shown on the profile screen
    pub fn preference_rows(&self) -> Vec<(PreferenceKind, &NamedOption)> {
        PreferenceKind::ALL
            .iter()
            .flat_map(|&kind| self.catalog.options(kind).iter().map(move |opt| (kind, opt)))
            .collect()
    }

    pub fn toggle_selected_preference(&mut self) -> Option<(PreferenceKind, String, bool)> {
        let (kind, option) = self
            .preference_rows()
            .get(self.ui_state.preference_selected)
            .map(|(kind, opt)| (*kind, NamedOption::clone(opt)))?;
        let selected = self.profile.toggle_preference(kind, &option.id);
        Some((kind, option.name, selected))
    }

    /// Restore the default choices of the list the cursor is in
    pub fn reset_selected_preferences(&mut self) -> Option<PreferenceKind> {
        let kind = self
            .preference_rows()
            .get(self.ui_state.preference_selected)
            .map(|(kind, _)| *kind)?;
        let defaults = Preferences::default().get(kind).to_vec();
        self.profile.update_preferences(kind, defaults);
        Some(kind)
    }

    // ========================================================================
    // For You
    // ========================================================================

    pub fn selected_clip(&self) -> Option<&Clip> {
        self.catalog.clips().get(self.ui_state.clip_selected)
    }

    /// Move to the next clip, wrapping to the first after the last
    pub fn next_clip(&mut self) {
        let len = self.catalog.clips().len();
        if len > 0 {
            self.ui_state.clip_selected = (self.ui_state.clip_selected + 1) % len;
        }
    }

    // ========================================================================
    // Community
    // ========================================================================

    pub fn toggle_community_tab(&mut self) {
        self.ui_state.community_tab = self.ui_state.community_tab.toggle();
    }

    pub fn selected_discussion(&self) -> Option<&Discussion> {
        self.catalog.discussions().get(self.ui_state.discussion_selected)
    }

    pub fn selected_event(&self) -> Option<&LiveEvent> {
        self.catalog.live_events().get(self.ui_state.event_selected)
    }

    // ========================================================================
    // Notices
    // ========================================================================

    pub fn set_notice(&mut self, message: String) {
        self.ui_state.notice = Some(message);
        self.ui_state.notice_timestamp = Some(Instant::now());
    }

    pub fn clear_notice(&mut self) {
        self.ui_state.notice = None;
        self.ui_state.notice_timestamp = None;
    }

    pub fn auto_clear_old_notices(&mut self) {
        if let Some(timestamp) = self.ui_state.notice_timestamp {
            if timestamp.elapsed() >= NOTICE_TTL {
                self.clear_notice();
            }
        }
    }

    // ========================================================================
    // Help popup
    // ========================================================================

    pub fn toggle_help_popup(&mut self) {
        self.ui_state.show_help_popup = !self.ui_state.show_help_popup;
    }

    pub fn is_help_popup_open(&self) -> bool {
        self.ui_state.show_help_popup
    }
}
