//! Playback session state and the rules for changing it
//!
//! `SessionState` is the record behind the simulated player. It has no timer
//! of its own: `controller::session::PlaybackSession` owns the tick task and
//! calls [`SessionState::advance`] once per tick.

use std::sync::Arc;
use std::time::Duration;

use super::types::Episode;

pub const DEFAULT_VOLUME: f64 = 0.8;
pub const SKIP_FORWARD_SECS: u32 = 30;
pub const SKIP_BACKWARD_SECS: u32 = 15;
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Tunables for a playback session
#[derive(Clone, Debug)]
pub struct PlayerConfig {
    pub tick_interval: Duration,
    pub skip_forward_secs: u32,
    pub skip_backward_secs: u32,
    pub default_volume: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            tick_interval: TICK_INTERVAL,
            skip_forward_secs: SKIP_FORWARD_SECS,
            skip_backward_secs: SKIP_BACKWARD_SECS,
            default_volume: DEFAULT_VOLUME,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// No episode loaded
    Stopped,
    Paused,
    Playing,
}

/// What a single tick did to the session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Advanced,
    /// Reached the end of the episode: playback stopped and rewound
    Finished,
    /// The tick belongs to a timer that has since been replaced or stopped
    Stale,
}

#[derive(Clone, Debug)]
pub struct SessionState {
    current_episode: Option<Arc<Episode>>,
    is_playing: bool,
    progress: u32,
    volume: f64,
    generation: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(DEFAULT_VOLUME)
    }
}

impl SessionState {
    pub fn new(volume: f64) -> Self {
        Self {
            current_episode: None,
            is_playing: false,
            progress: 0,
            volume,
            generation: 0,
        }
    }

    pub fn current_episode(&self) -> Option<&Arc<Episode>> {
        self.current_episode.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn duration(&self) -> u32 {
        self.current_episode.as_ref().map_or(0, |e| e.duration)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn status(&self) -> PlaybackStatus {
        match (&self.current_episode, self.is_playing) {
            (None, _) => PlaybackStatus::Stopped,
            (Some(_), false) => PlaybackStatus::Paused,
            (Some(_), true) => PlaybackStatus::Playing,
        }
    }

    /// Fraction of the episode already played, in `[0, 1]`
    pub fn progress_ratio(&self) -> f64 {
        match self.duration() {
            0 => 0.0,
            duration => (self.progress as f64 / duration as f64).clamp(0.0, 1.0),
        }
    }

    /// Load an episode and start playing it from the beginning.
    /// Returns the generation the new tick stream must carry.
    pub fn load(&mut self, episode: Arc<Episode>) -> u64 {
        self.current_episode = Some(episode);
        self.progress = 0;
        self.is_playing = true;
        self.generation += 1;
        self.generation
    }

    /// Flip between playing and paused. `None` when there is nothing loaded,
    /// otherwise the new `is_playing` value.
    pub fn toggle(&mut self) -> Option<bool> {
        self.current_episode.as_ref()?;
        self.is_playing = !self.is_playing;
        self.generation += 1;
        Some(self.is_playing)
    }

    /// Returns true when the position changed.
    pub fn seek_to(&mut self, seconds: i64) -> bool {
        let Some(episode) = &self.current_episode else {
            return false;
        };
        if seconds < 0 || seconds > i64::from(episode.duration) {
            return false;
        }

        let seconds = seconds as u32;
        let changed = self.progress != seconds;
        self.progress = seconds;
        changed
    }

    pub fn skip_forward(&mut self, seconds: u32) -> bool {
        let Some(episode) = &self.current_episode else {
            return false;
        };
        let next = self.progress.saturating_add(seconds).min(episode.duration);
        let changed = next != self.progress;
        self.progress = next;
        changed
    }

    pub fn skip_backward(&mut self, seconds: u32) -> bool {
        if self.current_episode.is_none() {
            return false;
        }
        let next = self.progress.saturating_sub(seconds);
        let changed = next != self.progress;
        self.progress = next;
        changed
    }

    /// Out-of-range values (including NaN) are ignored.
    pub fn change_volume(&mut self, value: f64) -> bool {
        if !(0.0..=1.0).contains(&value) {
            return false;
        }
        let changed = self.volume != value;
        self.volume = value;
        changed
    }

    /// One tick of simulated playback.
    ///
    /// Reaching the duration stops playback and rewinds to 0 rather than
    /// holding at the end.
    pub fn advance(&mut self, generation: u64) -> TickOutcome {
        if generation != self.generation || !self.is_playing {
            return TickOutcome::Stale;
        }
        let Some(episode) = &self.current_episode else {
            return TickOutcome::Stale;
        };

        let next = self.progress.saturating_add(1);
        if next >= episode.duration {
            self.is_playing = false;
            self.progress = 0;
            self.generation += 1;
            TickOutcome::Finished
        } else {
            self.progress = next;
            TickOutcome::Advanced
        }
    }
}

/// Render whole seconds as `M:SS`; minutes are not padded or wrapped into hours.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    pub(crate) fn episode(id: &str, duration: u32) -> Arc<Episode> {
        Arc::new(Episode {
            id: id.to_string(),
            podcast_id: "1".to_string(),
            podcast_title: "African Tech Roundup".to_string(),
            title: format!("Episode {}", id),
            description: String::new(),
            audio_url: format!("https://example.com/episodes/{}.mp3", id),
            duration,
            publish_date: Utc.with_ymd_and_hms(2023, 9, 15, 10, 0, 0).unwrap(),
        })
    }

    #[test]
    fn starts_stopped_with_default_volume() {
        let state = SessionState::default();
        assert_eq!(state.status(), PlaybackStatus::Stopped);
        assert!(state.current_episode().is_none());
        assert!(!state.is_playing());
        assert_eq!(state.progress(), 0);
        assert_eq!(state.volume(), 0.8);
    }

    #[test]
    fn load_resets_progress_and_plays() {
        let mut state = SessionState::default();
        state.load(episode("101", 100));
        state.seek_to(40);
        state.load(episode("102", 200));

        assert_eq!(state.current_episode().unwrap().id, "102");
        assert_eq!(state.progress(), 0);
        assert_eq!(state.status(), PlaybackStatus::Playing);
    }

    #[test]
    fn toggle_without_episode_is_noop() {
        let mut state = SessionState::default();
        assert_eq!(state.toggle(), None);
        assert!(!state.is_playing());
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn toggle_keeps_progress() {
        let mut state = SessionState::default();
        state.load(episode("101", 100));
        state.seek_to(42);

        assert_eq!(state.toggle(), Some(false));
        assert_eq!(state.progress(), 42);
        assert_eq!(state.status(), PlaybackStatus::Paused);
        assert_eq!(state.toggle(), Some(true));
        assert_eq!(state.progress(), 42);
    }

    #[test]
    fn seek_accepts_every_in_range_target() {
        let mut state = SessionState::default();
        state.load(episode("101", 90));
        for target in 0..=90 {
            state.seek_to(target);
            assert_eq!(state.progress(), target as u32);
            assert!(state.is_playing());
        }
    }

    #[test]
    fn seek_out_of_range_is_ignored() {
        let mut state = SessionState::default();
        state.load(episode("101", 90));
        state.seek_to(30);

        assert!(!state.seek_to(-1));
        assert!(!state.seek_to(91));
        assert_eq!(state.progress(), 30);
    }

    #[test]
    fn seek_without_episode_is_ignored() {
        let mut state = SessionState::default();
        assert!(!state.seek_to(0));
        assert_eq!(state.progress(), 0);
    }

    #[test]
    fn skip_forward_saturates_at_duration() {
        let mut state = SessionState::default();
        state.load(episode("101", 100));

        state.skip_forward(SKIP_FORWARD_SECS);
        assert_eq!(state.progress(), 30);
        for _ in 0..5 {
            state.skip_forward(SKIP_FORWARD_SECS);
            assert!(state.progress() <= 100);
        }
        assert_eq!(state.progress(), 100);
    }

    #[test]
    fn skip_backward_saturates_at_zero() {
        let mut state = SessionState::default();
        state.load(episode("101", 100));
        state.seek_to(40);

        state.skip_backward(SKIP_BACKWARD_SECS);
        assert_eq!(state.progress(), 25);
        for _ in 0..4 {
            state.skip_backward(SKIP_BACKWARD_SECS);
        }
        assert_eq!(state.progress(), 0);
    }

    #[test]
    fn skips_without_episode_are_noops() {
        let mut state = SessionState::default();
        assert!(!state.skip_forward(SKIP_FORWARD_SECS));
        assert!(!state.skip_backward(SKIP_BACKWARD_SECS));
        assert_eq!(state.progress(), 0);
    }

    #[test]
    fn volume_only_accepts_unit_range() {
        let mut state = SessionState::default();

        assert!(!state.change_volume(1.5));
        assert!(!state.change_volume(-0.1));
        assert!(!state.change_volume(f64::NAN));
        assert_eq!(state.volume(), 0.8);

        assert!(state.change_volume(0.0));
        assert_eq!(state.volume(), 0.0);
        assert!(state.change_volume(1.0));
        assert_eq!(state.volume(), 1.0);
    }

    #[test]
    fn volume_applies_without_episode() {
        let mut state = SessionState::default();
        state.change_volume(0.3);
        assert_eq!(state.volume(), 0.3);
    }

    #[test]
    fn ticks_advance_then_rewind_at_end() {
        let mut state = SessionState::default();
        let generation = state.load(episode("101", 10));

        for _ in 0..9 {
            assert_eq!(state.advance(generation), TickOutcome::Advanced);
        }
        assert_eq!(state.progress(), 9);
        assert!(state.is_playing());

        assert_eq!(state.advance(generation), TickOutcome::Finished);
        assert_eq!(state.progress(), 0);
        assert!(!state.is_playing());
        assert_eq!(state.status(), PlaybackStatus::Paused);
    }

    #[test]
    fn tick_that_overshoots_also_finishes() {
        let mut state = SessionState::default();
        let generation = state.load(episode("101", 10));
        state.seek_to(10);

        assert_eq!(state.advance(generation), TickOutcome::Finished);
        assert_eq!(state.progress(), 0);
    }

    #[test]
    fn stale_ticks_are_ignored() {
        let mut state = SessionState::default();
        let old = state.load(episode("101", 100));
        state.advance(old);
        let current = state.load(episode("102", 100));

        assert_eq!(state.advance(old), TickOutcome::Stale);
        assert_eq!(state.progress(), 0);
        assert_eq!(state.advance(current), TickOutcome::Advanced);
        assert_eq!(state.progress(), 1);

        state.toggle();
        assert_eq!(state.advance(current), TickOutcome::Stale);
        assert_eq!(state.progress(), 1);
    }

    #[test]
    fn progress_ratio_handles_empty_session() {
        let mut state = SessionState::default();
        assert_eq!(state.progress_ratio(), 0.0);

        state.load(episode("101", 200));
        state.seek_to(50);
        assert_eq!(state.progress_ratio(), 0.25);
    }

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(59), "0:59");
        assert_eq!(format_time(60), "1:00");
        assert_eq!(format_time(125), "2:05");
        assert_eq!(format_time(3725), "62:05");
    }
}
