//! Listener profile: preferences, subscriptions, saved episodes and
//! community activity

use super::types::PreferenceKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preferences {
    pub languages: Vec<String>,
    pub regions: Vec<String>,
    pub genres: Vec<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            languages: vec!["1".to_string(), "3".to_string()],
            regions: vec!["1".to_string(), "2".to_string()],
            genres: vec!["1".to_string(), "2".to_string(), "4".to_string()],
        }
    }
}

impl Preferences {
    pub fn get(&self, kind: PreferenceKind) -> &[String] {
        match kind {
            PreferenceKind::Languages => &self.languages,
            PreferenceKind::Regions => &self.regions,
            PreferenceKind::Genres => &self.genres,
        }
    }

    fn get_mut(&mut self, kind: PreferenceKind) -> &mut Vec<String> {
        match kind {
            PreferenceKind::Languages => &mut self.languages,
            PreferenceKind::Regions => &mut self.regions,
            PreferenceKind::Genres => &mut self.genres,
        }
    }
}

#[derive(Clone, Debug)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub preferences: Preferences,
    saved_episodes: Vec<String>,
    subscribed_podcasts: Vec<String>,
    liked_discussions: Vec<String>,
    joined_events: Vec<String>,
    event_reminders: Vec<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            preferences: Preferences::default(),
            saved_episodes: Vec::new(),
            subscribed_podcasts: Vec::new(),
            liked_discussions: Vec::new(),
            joined_events: Vec::new(),
            event_reminders: Vec::new(),
        }
    }
}

/// Add `id` if missing, remove it otherwise. Returns whether it is now present.
fn toggle_membership(list: &mut Vec<String>, id: &str) -> bool {
    if let Some(pos) = list.iter().position(|x| x == id) {
        list.remove(pos);
        false
    } else {
        list.push(id.to_string());
        true
    }
}

impl UserProfile {
    pub fn update_preferences(&mut self, kind: PreferenceKind, values: Vec<String>) {
        *self.preferences.get_mut(kind) = values;
    }

    pub fn toggle_preference(&mut self, kind: PreferenceKind, id: &str) -> bool {
        let selected = toggle_membership(self.preferences.get_mut(kind), id);
        tracing::debug!(kind = kind.label(), id, selected, "Preference toggled");
        selected
    }

    pub fn has_preference(&self, kind: PreferenceKind, id: &str) -> bool {
        self.preferences.get(kind).iter().any(|x| x == id)
    }

    pub fn toggle_subscription(&mut self, podcast_id: &str) -> bool {
        toggle_membership(&mut self.subscribed_podcasts, podcast_id)
    }

    pub fn is_subscribed(&self, podcast_id: &str) -> bool {
        self.subscribed_podcasts.iter().any(|x| x == podcast_id)
    }

    pub fn subscriptions(&self) -> &[String] {
        &self.subscribed_podcasts
    }

    pub fn toggle_episode_save(&mut self, episode_id: &str) -> bool {
        toggle_membership(&mut self.saved_episodes, episode_id)
    }

    pub fn is_saved(&self, episode_id: &str) -> bool {
        self.saved_episodes.iter().any(|x| x == episode_id)
    }

    pub fn saved_episodes(&self) -> &[String] {
        &self.saved_episodes
    }

    // Community

    pub fn toggle_discussion_like(&mut self, discussion_id: &str) -> bool {
        toggle_membership(&mut self.liked_discussions, discussion_id)
    }

    pub fn has_liked(&self, discussion_id: &str) -> bool {
        self.liked_discussions.iter().any(|x| x == discussion_id)
    }

    pub fn liked_discussions(&self) -> &[String] {
        &self.liked_discussions
    }

    pub fn toggle_event_attendance(&mut self, event_id: &str) -> bool {
        toggle_membership(&mut self.joined_events, event_id)
    }

    pub fn has_joined(&self, event_id: &str) -> bool {
        self.joined_events.iter().any(|x| x == event_id)
    }

    pub fn joined_events(&self) -> &[String] {
        &self.joined_events
    }

    pub fn toggle_event_reminder(&mut self, event_id: &str) -> bool {
        toggle_membership(&mut self.event_reminders, event_id)
    }

    pub fn has_reminder(&self, event_id: &str) -> bool {
        self.event_reminders.iter().any(|x| x == event_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preferences() {
        let profile = UserProfile::default();
        assert!(profile.has_preference(PreferenceKind::Languages, "1"));
        assert!(profile.has_preference(PreferenceKind::Languages, "3"));
        assert!(!profile.has_preference(PreferenceKind::Languages, "2"));
        assert_eq!(profile.preferences.get(PreferenceKind::Genres), ["1", "2", "4"]);
    }

    #[test]
    fn update_replaces_only_one_list() {
        let mut profile = UserProfile::default();
        profile.update_preferences(PreferenceKind::Regions, vec!["5".to_string()]);

        assert_eq!(profile.preferences.regions, vec!["5"]);
        assert_eq!(profile.preferences.languages, vec!["1", "3"]);
    }

    #[test]
    fn toggle_preference_adds_and_removes() {
        let mut profile = UserProfile::default();
        assert!(profile.toggle_preference(PreferenceKind::Genres, "8"));
        assert!(profile.has_preference(PreferenceKind::Genres, "8"));
        assert!(!profile.toggle_preference(PreferenceKind::Genres, "1"));
        assert_eq!(profile.preferences.genres, vec!["2", "4", "8"]);
    }

    #[test]
    fn subscriptions_toggle() {
        let mut profile = UserProfile::default();
        assert!(profile.toggle_subscription("3"));
        assert!(profile.toggle_subscription("5"));
        assert!(profile.is_subscribed("3"));
        assert!(!profile.toggle_subscription("3"));
        assert!(!profile.is_subscribed("3"));
        assert_eq!(profile.subscriptions(), ["5"]);
    }

    #[test]
    fn community_activity_is_tracked_separately() {
        let mut profile = UserProfile::default();
        assert!(profile.toggle_discussion_like("2"));
        assert!(profile.toggle_event_attendance("1"));
        assert!(profile.toggle_event_reminder("2"));

        assert!(profile.has_liked("2"));
        assert!(!profile.has_liked("1"));
        assert!(profile.has_joined("1"));
        assert!(!profile.has_reminder("1"));
        assert_eq!(profile.joined_events(), ["1"]);

        assert!(!profile.toggle_event_attendance("1"));
        assert!(profile.joined_events().is_empty());
        assert_eq!(profile.liked_discussions(), ["2"]);
    }

    #[test]
    fn saved_episodes_toggle() {
        let mut profile = UserProfile::default();
        assert!(profile.toggle_episode_save("101"));
        assert!(profile.is_saved("101"));
        assert!(!profile.toggle_episode_save("101"));
        assert!(profile.saved_episodes().is_empty());
    }
}
