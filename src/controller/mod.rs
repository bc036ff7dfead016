//! Controller module - Application logic and event handling
//!
//! - `session`: Simulated playback session and its tick task
//! - `input`: Key event handling
//! - `playback`: Playback commands bound to keys
//! - `navigation`: Screen and selection changes, profile toggles
//! - `community`: Discussion likes, event attendance and reminders

mod session;
mod input;
mod playback;
mod navigation;
mod community;

pub use session::PlaybackSession;

use crate::model::{AppModel, SessionState};

pub struct AppController {
    pub(crate) model: AppModel,
    pub(crate) session: PlaybackSession,
}

impl AppController {
    pub fn new(model: AppModel, session: PlaybackSession) -> Self {
        Self { model, session }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn playback(&self) -> SessionState {
        self.session.snapshot()
    }

    pub fn should_quit(&self) -> bool {
        self.model.should_quit()
    }

    /// Per-frame housekeeping
    pub fn tick(&mut self) {
        self.model.auto_clear_old_notices();
        if self.model.screen() == crate::model::Screen::Player && !self.session.has_episode() {
            self.model.go_back();
        }
    }
}
