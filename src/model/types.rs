//! Core type definitions for the application

use std::sync::Arc;
use std::time::Instant;
use chrono::{DateTime, Utc};

/// A podcast show in the catalog
#[derive(Clone, Debug)]
pub struct Podcast {
    pub id: String,
    pub title: String,
    pub description: String,
    pub creator: String,
    pub language: String,
    pub tags: Vec<String>,
    pub total_episodes: u32,
    pub subscribers: Option<u32>,
    pub rating: Option<f32>,
}

/// A single playable episode. Immutable once it leaves the catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct Episode {
    pub id: String,
    pub podcast_id: String,
    pub podcast_title: String,
    pub title: String,
    pub description: String,
    pub audio_url: String,
    /// Total length in whole seconds
    pub duration: u32,
    pub publish_date: DateTime<Utc>,
}

impl Episode {
    /// Publish date as shown in episode lists, e.g. "Sep 15, 2023"
    pub fn display_date(&self) -> String {
        self.publish_date.format("%b %-d, %Y").to_string()
    }
}

/// A listener review of a podcast
#[derive(Clone, Debug)]
pub struct Review {
    pub user_name: String,
    pub podcast_id: String,
    pub rating: u8,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// An entry of one of the selectable option tables (categories, languages, regions)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedOption {
    pub id: String,
    pub name: String,
}

/// The three preference lists a listener can curate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreferenceKind {
    Languages,
    Regions,
    Genres,
}

impl PreferenceKind {
    pub const ALL: [PreferenceKind; 3] = [
        PreferenceKind::Languages,
        PreferenceKind::Regions,
        PreferenceKind::Genres,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PreferenceKind::Languages => "Languages",
            PreferenceKind::Regions => "Regions",
            PreferenceKind::Genres => "Genres",
        }
    }
}

/// A short highlight cut from an episode, shown in the For You feed
#[derive(Clone, Debug)]
pub struct Clip {
    pub id: String,
    pub title: String,
    pub podcast_title: String,
    /// Clip length in whole seconds
    pub duration: u32,
    /// The full episode the clip was cut from
    pub episode: Arc<Episode>,
}

/// A community discussion thread
#[derive(Clone, Debug)]
pub struct Discussion {
    pub id: String,
    pub title: String,
    pub content: String,
    pub topic: String,
    pub created_at: DateTime<Utc>,
    pub author: String,
    pub comments_count: u32,
    pub likes_count: u32,
}

impl Discussion {
    /// "5h ago" within a day, "yesterday" within two, otherwise "Sep 10"
    pub fn relative_date(&self, now: DateTime<Utc>) -> String {
        let hours = (now - self.created_at).num_hours();
        if hours < 24 {
            format!("{}h ago", hours.max(0))
        } else if hours < 48 {
            "yesterday".to_string()
        } else {
            self.created_at.format("%b %-d").to_string()
        }
    }
}

/// A scheduled live Q&A session
#[derive(Clone, Debug)]
pub struct LiveEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub host: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub attendees_count: u32,
}

impl LiveEvent {
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        self.start_time <= now && now <= self.end_time
    }

    /// e.g. "Wed, Sep 20 · 06:00 PM - 07:30 PM"
    pub fn display_schedule(&self) -> String {
        format!(
            "{} · {} - {}",
            self.start_time.format("%a, %b %-d"),
            self.start_time.format("%I:%M %p"),
            self.end_time.format("%I:%M %p"),
        )
    }
}

/// Which list the community screen shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CommunityTab {
    #[default]
    Discussions,
    Events,
}

impl CommunityTab {
    pub fn toggle(self) -> Self {
        match self {
            CommunityTab::Discussions => CommunityTab::Events,
            CommunityTab::Events => CommunityTab::Discussions,
        }
    }
}

/// Which screen is currently shown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Home,
    ForYou,
    Community,
    Podcast,
    Player,
    Profile,
}

impl Screen {
    /// Tab order, also used by the top bar
    pub const ALL: [Screen; 6] = [
        Screen::Home,
        Screen::ForYou,
        Screen::Community,
        Screen::Podcast,
        Screen::Player,
        Screen::Profile,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Discover",
            Screen::ForYou => "For You",
            Screen::Community => "Community",
            Screen::Podcast => "Podcast",
            Screen::Player => "Now Playing",
            Screen::Profile => "Profile",
        }
    }
}

/// UI state for the application
#[derive(Clone, Debug)]
pub struct UiState {
    pub screen: Screen,
    /// Screen to return to when the player is closed
    pub previous_screen: Screen,
    pub podcast_selected: usize,
    /// Podcast shown on the detail screen
    pub focused_podcast: Option<String>,
    pub episode_selected: usize,
    pub preference_selected: usize,
    pub clip_selected: usize,
    pub community_tab: CommunityTab,
    pub discussion_selected: usize,
    pub event_selected: usize,
    pub muted: bool,
    pub notice: Option<String>,
    pub notice_timestamp: Option<Instant>,
    pub show_help_popup: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            screen: Screen::Home,
            previous_screen: Screen::Home,
            podcast_selected: 0,
            focused_podcast: None,
            episode_selected: 0,
            preference_selected: 0,
            clip_selected: 0,
            community_tab: CommunityTab::Discussions,
            discussion_selected: 0,
            event_selected: 0,
            muted: false,
            notice: None,
            notice_timestamp: None,
            show_help_popup: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn screens_cycle_in_tab_order() {
        assert_eq!(Screen::Home.next(), Screen::ForYou);
        assert_eq!(Screen::Profile.next(), Screen::Home);
        assert_eq!(Screen::Home.prev(), Screen::Profile);
        assert_eq!(Screen::Podcast.prev(), Screen::Community);
    }

    #[test]
    fn discussion_dates_are_relative() {
        let discussion = Discussion {
            id: "1".to_string(),
            title: "Title".to_string(),
            content: String::new(),
            topic: "Topic".to_string(),
            created_at: at(2023, 9, 10, 8, 30),
            author: "Jabari Kimathi".to_string(),
            comments_count: 0,
            likes_count: 0,
        };
        assert_eq!(discussion.relative_date(at(2023, 9, 10, 13, 45)), "5h ago");
        assert_eq!(discussion.relative_date(at(2023, 9, 11, 9, 0)), "yesterday");
        assert_eq!(discussion.relative_date(at(2023, 9, 20, 9, 0)), "Sep 10");
    }

    #[test]
    fn live_window_includes_both_ends() {
        let event = LiveEvent {
            id: "1".to_string(),
            title: "Panel".to_string(),
            description: String::new(),
            host: "Chimamanda Adichie".to_string(),
            start_time: at(2023, 9, 20, 18, 0),
            end_time: at(2023, 9, 20, 19, 30),
            attendees_count: 0,
        };
        assert!(!event.is_live_at(at(2023, 9, 20, 17, 59)));
        assert!(event.is_live_at(at(2023, 9, 20, 18, 0)));
        assert!(event.is_live_at(at(2023, 9, 20, 19, 30)));
        assert!(!event.is_live_at(at(2023, 9, 20, 19, 31)));
        assert_eq!(event.display_schedule(), "Wed, Sep 20 · 06:00 PM - 07:30 PM");
    }
}
