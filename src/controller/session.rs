//! Simulated playback session
//!
//! `PlaybackSession` owns a [`SessionState`] and the single tick task that
//! advances it. State lives in a `watch` channel so views can either take a
//! snapshot every frame or subscribe to changes.

use std::sync::{Arc, Weak};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::model::{Episode, PlaybackStatus, PlayerConfig, SessionState, TickOutcome};

/// Handle to the running tick task. Dropping it stops the task.
struct Ticker {
    handle: JoinHandle<()>,
    generation: u64,
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            tracing::trace!(generation = self.generation, "Stopping tick task");
        }
        self.handle.abort();
    }
}

pub struct PlaybackSession {
    state: Arc<watch::Sender<SessionState>>,
    ticker: Option<Ticker>,
    config: PlayerConfig,
}

impl PlaybackSession {
    pub fn new(config: PlayerConfig) -> Self {
        let (sender, _) = watch::channel(SessionState::new(config.default_volume));
        Self {
            state: Arc::new(sender),
            ticker: None,
            config,
        }
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn status(&self) -> PlaybackStatus {
        self.state.borrow().status()
    }

    pub fn has_episode(&self) -> bool {
        self.state.borrow().current_episode().is_some()
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Load `episode` and play it from the start, replacing whatever was playing.
    pub fn play_episode(&mut self, episode: Arc<Episode>) {
        tracing::info!(
            episode_id = %episode.id,
            title = %episode.title,
            duration = episode.duration,
            "Playing episode"
        );

        let mut generation = 0;
        self.state.send_modify(|state| {
            generation = state.load(episode);
        });
        self.start_ticker(generation);
    }

    pub fn toggle_play(&mut self) {
        let mut toggled = None;
        self.state.send_if_modified(|state| {
            toggled = state.toggle().map(|playing| (playing, state.generation()));
            toggled.is_some()
        });

        match toggled {
            Some((true, generation)) => {
                tracing::debug!("Playback resumed");
                self.start_ticker(generation);
            }
            Some((false, _)) => {
                tracing::debug!("Playback paused");
                self.ticker = None;
            }
            None => tracing::debug!("Toggle ignored: no episode loaded"),
        }
    }

    pub fn seek_to(&mut self, seconds: i64) {
        let applied = self.state.send_if_modified(|state| state.seek_to(seconds));
        if applied {
            tracing::debug!(seconds, "Seeked");
        }
    }

    pub fn skip_forward(&mut self) {
        let seconds = self.config.skip_forward_secs;
        self.state.send_if_modified(|state| state.skip_forward(seconds));
    }

    pub fn skip_backward(&mut self) {
        let seconds = self.config.skip_backward_secs;
        self.state.send_if_modified(|state| state.skip_backward(seconds));
    }

    pub fn change_volume(&mut self, value: f64) {
        let applied = self.state.send_if_modified(|state| state.change_volume(value));
        if applied {
            tracing::debug!(volume = value, "Volume changed");
        }
    }

    /// Replace the tick task with a fresh one bound to `generation`.
    fn start_ticker(&mut self, generation: u64) {
        // At most one task per session: the old one is aborted before the new one exists.
        self.ticker = None;

        let weak: Weak<watch::Sender<SessionState>> = Arc::downgrade(&self.state);
        let period = self.config.tick_interval;
        let start = Instant::now() + period;

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(start, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;

                let Some(state) = weak.upgrade() else {
                    break;
                };

                let mut outcome = TickOutcome::Stale;
                state.send_if_modified(|s| {
                    outcome = s.advance(generation);
                    outcome != TickOutcome::Stale
                });

                match outcome {
                    TickOutcome::Advanced => {}
                    TickOutcome::Finished => {
                        tracing::info!(generation, "Episode finished, rewinding");
                        break;
                    }
                    TickOutcome::Stale => {
                        tracing::trace!(generation, "Tick task superseded");
                        break;
                    }
                }
            }
        });

        self.ticker = Some(Ticker { handle, generation });
    }
}
