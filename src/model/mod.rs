//! Model module - Application state and data types
//!
//! - `types`: Core type definitions (catalog records, screens, UI state)
//! - `playback`: Playback session state and its transition rules
//! - `catalog`: Static catalog (podcasts, episodes, clips, discussions, events)
//! - `profile`: Listener preferences, subscriptions, saved episodes, community activity
//! - `app_model`: Main application model with navigation state

mod types;
pub(crate) mod playback;
mod catalog;
mod profile;
mod app_model;

pub use types::{CommunityTab, Episode, PreferenceKind, Screen, UiState};

pub use playback::{
    format_time, PlaybackStatus, PlayerConfig, SessionState, TickOutcome,
};

pub use catalog::Catalog;

pub use app_model::AppModel;
