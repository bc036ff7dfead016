//! Playback control methods

use crate::model::{PlaybackStatus, Screen};
use super::AppController;

pub const VOLUME_STEP: f64 = 0.1;

/// Round to two decimals so repeated steps land on exact values like 1.0
fn step_volume(volume: f64, delta: f64) -> f64 {
    ((volume + delta) * 100.0).round() / 100.0
}

impl AppController {
    pub fn toggle_playback(&mut self) {
        self.session.toggle_play();
    }

    /// Play the episode under the cursor on the podcast screen
    pub fn play_selected_episode(&mut self) {
        if let Some(episode) = self.model.selected_episode() {
            self.session.play_episode(episode);
        }
    }

    /// Play the full episode behind the clip under the cursor on the For You screen
    pub fn play_selected_clip(&mut self) {
        let Some(clip) = self.model.selected_clip() else {
            return;
        };
        tracing::debug!(clip_id = %clip.id, "Playing episode behind clip");
        let episode = clip.episode.clone();
        let notice = format!("Playing full episode: {}", episode.title);
        self.session.play_episode(episode);
        self.model.set_notice(notice);
    }

    pub fn skip_forward(&mut self) {
        self.session.skip_forward();
    }

    pub fn skip_backward(&mut self) {
        self.session.skip_backward();
    }

    /// Seek to `tenths` of the episode (0 = start, 9 = 90%)
    pub fn seek_to_fraction(&mut self, tenths: u32) {
        let duration = self.session.snapshot().duration();
        let target = u64::from(duration) * u64::from(tenths) / 10;
        self.session.seek_to(target as i64);
    }

    pub fn volume_up(&mut self) {
        self.step_volume_by(VOLUME_STEP);
    }

    pub fn volume_down(&mut self) {
        self.step_volume_by(-VOLUME_STEP);
    }

    /// Stepping to silence counts as muted so the next M unmutes
    fn step_volume_by(&mut self, delta: f64) {
        let volume = self.session.snapshot().volume();
        self.session.change_volume(step_volume(volume, delta));
        self.model.ui_state.muted = self.session.snapshot().volume() == 0.0;
    }

    /// Mute drops the volume to 0; unmuting restores the default level.
    pub fn toggle_mute(&mut self) {
        if self.model.ui_state.muted {
            self.session.change_volume(self.session.config().default_volume);
        } else {
            self.session.change_volume(0.0);
        }
        self.model.ui_state.muted = !self.model.ui_state.muted;
    }

    pub fn open_player(&mut self) {
        if self.session.status() == PlaybackStatus::Stopped {
            self.model.set_notice("Nothing is playing yet".to_string());
            return;
        }
        self.model.set_screen(Screen::Player, true);
    }
}
