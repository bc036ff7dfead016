//! Key event handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::Screen;
use super::AppController;

impl AppController {
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Help popup swallows everything except its close keys
        if self.model.is_help_popup_open() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H')) {
                self.model.toggle_help_popup();
            }
            return;
        }

        if self.model.ui_state.notice.is_some() && key.code == KeyCode::Esc {
            self.model.clear_notice();
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.model.set_should_quit(true);
            }
            KeyCode::Tab => self.next_screen(),
            KeyCode::BackTab => self.previous_screen(),
            KeyCode::Up => self.model.move_selection_up(),
            KeyCode::Down => self.model.move_selection_down(),
            KeyCode::Enter => self.activate_selection(),
            KeyCode::Esc | KeyCode::Backspace => self.model.go_back(),
            KeyCode::Char(' ') => self.toggle_playback(),
            KeyCode::Right => self.skip_forward(),
            KeyCode::Left => self.skip_backward(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.volume_up(),
            KeyCode::Char('-') => self.volume_down(),
            KeyCode::Char('m') | KeyCode::Char('M') => self.toggle_mute(),
            KeyCode::Char('s') | KeyCode::Char('S') => self.toggle_subscription(),
            KeyCode::Char('x') | KeyCode::Char('X') => self.toggle_episode_save(),
            KeyCode::Char('p') | KeyCode::Char('P') => self.open_player(),
            KeyCode::Char('n') | KeyCode::Char('N') => {
                if self.model.screen() == Screen::ForYou {
                    self.model.next_clip();
                }
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                if self.model.screen() == Screen::Community {
                    self.model.toggle_community_tab();
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.secondary_action(),
            KeyCode::Char('h') | KeyCode::Char('H') => self.model.toggle_help_popup(),
            KeyCode::Char(c) if c.is_ascii_digit() && !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(tenths) = c.to_digit(10) {
                    self.seek_to_fraction(tenths);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    use crate::controller::{AppController, PlaybackSession};
    use crate::model::{AppModel, Catalog, PlayerConfig, Screen};

    fn controller() -> AppController {
        let model = AppModel::new(Catalog::mock().unwrap());
        AppController::new(model, PlaybackSession::new(PlayerConfig::default()))
    }

    fn press(controller: &mut AppController, code: KeyCode) {
        controller.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[tokio::test(start_paused = true)]
    async fn keys_drive_the_player() {
        let mut controller = controller();
        press(&mut controller, KeyCode::Enter);
        press(&mut controller, KeyCode::Enter);
        assert!(controller.playback().is_playing());

        press(&mut controller, KeyCode::Right);
        assert_eq!(controller.playback().progress(), 30);
        press(&mut controller, KeyCode::Left);
        assert_eq!(controller.playback().progress(), 15);

        press(&mut controller, KeyCode::Char(' '));
        assert!(!controller.playback().is_playing());

        press(&mut controller, KeyCode::Char('-'));
        assert_eq!(controller.playback().volume(), 0.7);

        press(&mut controller, KeyCode::Char('p'));
        assert_eq!(controller.model.screen(), Screen::Player);
        press(&mut controller, KeyCode::Esc);
        assert_eq!(controller.model.screen(), Screen::Podcast);
    }

    #[test]
    fn community_keys() {
        let mut controller = controller();
        press(&mut controller, KeyCode::Tab);
        press(&mut controller, KeyCode::Tab);
        assert_eq!(controller.model.screen(), Screen::Community);

        press(&mut controller, KeyCode::Char('e'));
        press(&mut controller, KeyCode::Char('r'));
        assert!(controller.model.profile.has_reminder("1"));
        press(&mut controller, KeyCode::Enter);
        assert!(controller.model.profile.has_joined("1"));
    }

    #[tokio::test(start_paused = true)]
    async fn for_you_keys() {
        let mut controller = controller();
        press(&mut controller, KeyCode::Tab);
        assert_eq!(controller.model.screen(), Screen::ForYou);

        press(&mut controller, KeyCode::Char('n'));
        assert_eq!(controller.model.ui_state.clip_selected, 1);
        press(&mut controller, KeyCode::Enter);
        assert_eq!(controller.playback().current_episode().unwrap().id, "102");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut controller = controller();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        controller.handle_key_event(key);
        assert!(!controller.should_quit());

        press(&mut controller, KeyCode::Char('q'));
        assert!(controller.should_quit());
    }

    #[test]
    fn help_popup_blocks_other_keys() {
        let mut controller = controller();
        press(&mut controller, KeyCode::Char('h'));
        assert!(controller.model.is_help_popup_open());

        press(&mut controller, KeyCode::Char('q'));
        assert!(!controller.should_quit());

        press(&mut controller, KeyCode::Esc);
        assert!(!controller.model.is_help_popup_open());
    }
}
