//! Community screen actions: discussion likes, live event attendance and reminders

use super::AppController;

impl AppController {
    pub fn toggle_discussion_like(&mut self) {
        let Some((id, title)) = self
            .model
            .selected_discussion()
            .map(|d| (d.id.clone(), d.title.clone()))
        else {
            return;
        };

        let liked = self.model.profile.toggle_discussion_like(&id);
        tracing::info!(discussion_id = %id, liked, "Discussion like toggled");
        let message = if liked {
            format!("Liked \"{}\"", title)
        } else {
            format!("Removed like from \"{}\"", title)
        };
        self.model.set_notice(message);
    }

    pub fn toggle_event_attendance(&mut self) {
        let Some((id, title)) = self
            .model
            .selected_event()
            .map(|e| (e.id.clone(), e.title.clone()))
        else {
            return;
        };

        let joined = self.model.profile.toggle_event_attendance(&id);
        tracing::info!(event_id = %id, joined, "Event attendance toggled");
        let message = if joined {
            format!("Joined \"{}\"", title)
        } else {
            format!("Left \"{}\"", title)
        };
        self.model.set_notice(message);
    }

    pub fn toggle_event_reminder(&mut self) {
        let Some((id, title)) = self
            .model
            .selected_event()
            .map(|e| (e.id.clone(), e.title.clone()))
        else {
            return;
        };

        let reminded = self.model.profile.toggle_event_reminder(&id);
        tracing::info!(event_id = %id, reminded, "Event reminder toggled");
        let message = if reminded {
            format!("Reminder set for \"{}\"", title)
        } else {
            format!("Reminder cleared for \"{}\"", title)
        };
        self.model.set_notice(message);
    }
}

#[cfg(test)]
mod tests {
    use crate::controller::{AppController, PlaybackSession};
    use crate::model::{AppModel, Catalog, CommunityTab, PlayerConfig, Screen};

    fn controller() -> AppController {
        let mut model = AppModel::new(Catalog::mock().unwrap());
        model.set_screen(Screen::Community, false);
        AppController::new(model, PlaybackSession::new(PlayerConfig::default()))
    }

    #[test]
    fn enter_likes_the_selected_discussion() {
        let mut controller = controller();
        controller.model.move_selection_down();
        controller.activate_selection();

        assert!(controller.model.profile.has_liked("2"));
        assert_eq!(
            controller.model.ui_state.notice.as_deref(),
            Some("Liked \"The importance of local language podcasts\"")
        );

        controller.activate_selection();
        assert!(!controller.model.profile.has_liked("2"));
    }

    #[test]
    fn enter_joins_and_leaves_events() {
        let mut controller = controller();
        controller.model.toggle_community_tab();
        assert_eq!(controller.model.ui_state.community_tab, CommunityTab::Events);

        controller.activate_selection();
        assert!(controller.model.profile.has_joined("1"));
        assert_eq!(
            controller.model.ui_state.notice.as_deref(),
            Some("Joined \"The Future of African Storytelling\"")
        );

        controller.activate_selection();
        assert!(!controller.model.profile.has_joined("1"));
        assert!(controller.model.profile.liked_discussions().is_empty());
    }

    #[test]
    fn reminders_do_not_join() {
        let mut controller = controller();
        controller.model.toggle_community_tab();
        controller.model.move_selection_down();
        controller.toggle_event_reminder();

        assert!(controller.model.profile.has_reminder("2"));
        assert!(!controller.model.profile.has_joined("2"));
        assert_eq!(
            controller.model.ui_state.notice.as_deref(),
            Some("Reminder set for \"Building a Podcast Studio on a Budget\"")
        );
    }
}
