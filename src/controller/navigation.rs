//! Navigation-related controller methods (screens, selection, profile toggles)

use crate::model::{CommunityTab, Screen};
use super::AppController;

impl AppController {
    pub fn next_screen(&mut self) {
        let has_episode = self.session.has_episode();
        self.model.cycle_screen_forward(has_episode);
        tracing::debug!(screen = ?self.model.screen(), "Screen changed");
    }

    pub fn previous_screen(&mut self) {
        let has_episode = self.session.has_episode();
        self.model.cycle_screen_backward(has_episode);
        tracing::debug!(screen = ?self.model.screen(), "Screen changed");
    }

    /// Enter on the current screen
    pub fn activate_selection(&mut self) {
        match self.model.screen() {
            Screen::Home => self.model.open_selected_podcast(),
            Screen::ForYou => self.play_selected_clip(),
            Screen::Community => match self.model.ui_state.community_tab {
                CommunityTab::Discussions => self.toggle_discussion_like(),
                CommunityTab::Events => self.toggle_event_attendance(),
            },
            Screen::Podcast => self.play_selected_episode(),
            Screen::Profile => {
                if let Some((kind, name, selected)) = self.model.toggle_selected_preference() {
                    let verb = if selected { "Added" } else { "Removed" };
                    self.model.set_notice(format!("{} {} ({})", verb, name, kind.label()));
                }
            }
            Screen::Player => self.toggle_playback(),
        }
    }

    /// R: set an event reminder on Community, restore default preferences on Profile
    pub fn secondary_action(&mut self) {
        match self.model.screen() {
            Screen::Community if self.model.ui_state.community_tab == CommunityTab::Events => {
                self.toggle_event_reminder();
            }
            Screen::Profile => {
                if let Some(kind) = self.model.reset_selected_preferences() {
                    tracing::info!(kind = kind.label(), "Preferences reset");
                    self.model.set_notice(format!("Reset {} to defaults", kind.label()));
                }
            }
            _ => {}
        }
    }

    /// Subscribe to or unsubscribe from the podcast in focus
    pub fn toggle_subscription(&mut self) {
        let podcast = match self.model.screen() {
            Screen::Home => self.model.selected_podcast(),
            _ => self.model.focused_podcast(),
        };
        let Some((id, title)) = podcast.map(|p| (p.id.clone(), p.title.clone())) else {
            return;
        };

        let subscribed = self.model.profile.toggle_subscription(&id);
        tracing::info!(podcast_id = %id, subscribed, "Subscription toggled");
        let message = if subscribed {
            format!("Subscribed to {}", title)
        } else {
            format!("Unsubscribed from {}", title)
        };
        self.model.set_notice(message);
    }

    /// Save or unsave the episode under the cursor, or the playing one on the player screen
    pub fn toggle_episode_save(&mut self) {
        let episode = match self.model.screen() {
            Screen::Podcast => self.model.selected_episode(),
            _ => self.session.snapshot().current_episode().cloned(),
        };
        let Some(episode) = episode else {
            return;
        };

        let saved = self.model.profile.toggle_episode_save(&episode.id);
        tracing::info!(episode_id = %episode.id, saved, "Episode save toggled");
        let message = if saved {
            format!("Saved \"{}\"", episode.title)
        } else {
            format!("Removed \"{}\" from saved", episode.title)
        };
        self.model.set_notice(message);
    }
}

#[cfg(test)]
mod tests {
    use crate::controller::{AppController, PlaybackSession};
    use crate::model::{AppModel, Catalog, PlayerConfig, PreferenceKind, Screen};

    fn controller() -> AppController {
        let model = AppModel::new(Catalog::mock().unwrap());
        AppController::new(model, PlaybackSession::new(PlayerConfig::default()))
    }

    #[tokio::test(start_paused = true)]
    async fn enter_walks_from_home_to_playback() {
        let mut controller = controller();
        controller.activate_selection();
        assert_eq!(controller.model.screen(), Screen::Podcast);

        controller.activate_selection();
        let state = controller.playback();
        assert_eq!(state.current_episode().unwrap().id, "101");
        assert!(state.is_playing());
    }

    #[tokio::test(start_paused = true)]
    async fn cycling_includes_player_once_playing() {
        let mut controller = controller();
        controller.previous_screen();
        assert_eq!(controller.model.screen(), Screen::Profile);
        controller.previous_screen();
        assert_eq!(controller.model.screen(), Screen::Podcast);

        controller.activate_selection();
        controller.next_screen();
        assert_eq!(controller.model.screen(), Screen::Player);
    }

    #[test]
    fn r_resets_preferences_on_profile() {
        let mut controller = controller();
        controller.model.set_screen(Screen::Profile, false);
        controller.activate_selection();
        assert!(!controller.model.profile.has_preference(PreferenceKind::Languages, "1"));

        controller.secondary_action();
        assert!(controller.model.profile.has_preference(PreferenceKind::Languages, "1"));
        assert_eq!(
            controller.model.ui_state.notice.as_deref(),
            Some("Reset Languages to defaults")
        );
    }

    #[test]
    fn r_is_ignored_on_discussions() {
        let mut controller = controller();
        controller.model.set_screen(Screen::Community, false);
        controller.secondary_action();
        assert!(controller.model.ui_state.notice.is_none());
    }

    #[test]
    fn subscription_toggle_from_home() {
        let mut controller = controller();
        controller.model.move_selection_down();
        controller.toggle_subscription();
        assert!(controller.model.profile.is_subscribed("2"));
        assert_eq!(
            controller.model.ui_state.notice.as_deref(),
            Some("Subscribed to Naija Stories")
        );

        controller.toggle_subscription();
        assert!(!controller.model.profile.is_subscribed("2"));
    }

    #[test]
    fn save_requires_an_episode() {
        let mut controller = controller();
        controller.toggle_episode_save();
        assert!(controller.model.profile.saved_episodes().is_empty());

        controller.model.open_selected_podcast();
        controller.toggle_episode_save();
        assert!(controller.model.profile.is_saved("101"));
    }

    #[test]
    fn enter_on_profile_toggles_preference() {
        let mut controller = controller();
        controller.model.set_screen(Screen::Profile, false);
        controller.activate_selection();

        assert!(!controller.model.profile.has_preference(PreferenceKind::Languages, "1"));
        assert_eq!(
            controller.model.ui_state.notice.as_deref(),
            Some("Removed English (Languages)")
        );
    }
}
