//! Static podcast catalog
//!
//! Stands in for a catalog service. Everything is built once at startup and
//! handed out read-only; episodes are shared as `Arc<Episode>` so the player
//! can hold one without copying.

use std::sync::Arc;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use super::types::{
    Clip, Discussion, Episode, LiveEvent, NamedOption, Podcast, PreferenceKind, Review,
};

pub struct Catalog {
    podcasts: Vec<Podcast>,
    episodes: Vec<Arc<Episode>>,
    reviews: Vec<Review>,
    clips: Vec<Clip>,
    discussions: Vec<Discussion>,
    live_events: Vec<LiveEvent>,
    categories: Vec<NamedOption>,
    languages: Vec<NamedOption>,
    regions: Vec<NamedOption>,
}

fn timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("invalid catalog timestamp: {}", value))
}

fn options(names: &[&str]) -> Vec<NamedOption> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| NamedOption {
            id: (i + 1).to_string(),
            name: name.to_string(),
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn podcast(
    id: &str,
    title: &str,
    description: &str,
    creator: &str,
    language: &str,
    tags: &[&str],
    total_episodes: u32,
    subscribers: u32,
    rating: f32,
) -> Podcast {
    Podcast {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        creator: creator.to_string(),
        language: language.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        total_episodes,
        subscribers: Some(subscribers),
        rating: Some(rating),
    }
}

const CLIP_MIN_SECS: u32 = 30;
const CLIP_SPREAD_SECS: u32 = 61;

/// Highlight lengths spread over 30..=90 seconds, never longer than the episode
fn clip_length(episode: &Episode, episode_index: usize, clip_index: usize) -> u32 {
    let spread = ((episode_index * 37 + clip_index * 23) as u32) % CLIP_SPREAD_SECS;
    (CLIP_MIN_SECS + spread).min(episode.duration)
}

/// Two or three highlights per episode, interleaved so neighbouring clips
/// come from different episodes.
fn highlights(episodes: &[Arc<Episode>]) -> Vec<Clip> {
    let per_episode: Vec<Vec<Clip>> = episodes
        .iter()
        .enumerate()
        .map(|(i, episode)| {
            (0..2 + i % 2)
                .map(|n| Clip {
                    id: format!("{}-clip-{}", episode.id, n + 1),
                    title: format!("{} - Highlight {}", episode.title, n + 1),
                    podcast_title: episode.podcast_title.clone(),
                    duration: clip_length(episode, i, n),
                    episode: Arc::clone(episode),
                })
                .collect()
        })
        .collect();

    let rounds = per_episode.iter().map(Vec::len).max().unwrap_or(0);
    let mut clips = Vec::new();
    for round in 0..rounds {
        clips.extend(per_episode.iter().filter_map(|list| list.get(round).cloned()));
    }
    clips
}

impl Catalog {
    pub fn new(
        podcasts: Vec<Podcast>,
        episodes: Vec<Episode>,
        reviews: Vec<Review>,
    ) -> Self {
        let episodes: Vec<Arc<Episode>> = episodes.into_iter().map(Arc::new).collect();
        Self {
            podcasts,
            clips: highlights(&episodes),
            episodes,
            reviews,
            discussions: Vec::new(),
            live_events: Vec::new(),
            categories: Vec::new(),
            languages: Vec::new(),
            regions: Vec::new(),
        }
    }

    /// The built-in demo catalog
    pub fn mock() -> Result<Self> {
        let podcasts = vec![
            podcast(
                "1",
                "African Tech Roundup",
                "Weekly discussions on technology developments across the African continent with leading entrepreneurs and innovators.",
                "Andile Masuku",
                "English",
                &["Technology", "Business"],
                128,
                15000,
                4.8,
            ),
            podcast(
                "2",
                "Naija Stories",
                "Contemporary storytelling celebrating Nigerian culture, traditions, and modern life experiences.",
                "Chioma Nnadi",
                "English/Pidgin",
                &["Culture", "Stories"],
                45,
                8500,
                4.6,
            ),
            podcast(
                "3",
                "Le Journal de l'Afrique",
                "Actualités quotidiennes sur les développements politiques, économiques et culturels à travers l'Afrique francophone.",
                "Radio Africa",
                "French",
                &["News", "Politics"],
                312,
                22000,
                4.5,
            ),
            podcast(
                "4",
                "Sauti za Afrika",
                "Conversations with change-makers across East Africa on social innovation, entrepreneurship, and sustainable development.",
                "Makena Wanjiru",
                "Swahili/English",
                &["Society", "Development"],
                86,
                12300,
                4.7,
            ),
            podcast(
                "5",
                "Ìtàn Àlóre",
                "Traditional Yoruba folktales and contemporary stories exploring the rich cultural heritage of West Africa.",
                "Folake Adeyemi",
                "Yoruba/English",
                &["Culture", "Stories"],
                52,
                9800,
                4.9,
            ),
            podcast(
                "6",
                "Cairo Calling",
                "Interviews with Egyptian artists, musicians, and creatives navigating the dynamic cultural landscape of modern Cairo.",
                "Ahmed Hassan",
                "Arabic/English",
                &["Culture", "Arts"],
                74,
                11200,
                4.5,
            ),
        ];

        let tech = ("1", "African Tech Roundup");
        let naija = ("2", "Naija Stories");

        let episode_rows = [
            (
                "101",
                tech,
                "The Rise of African Fintech Startups",
                "In this episode, we explore the explosive growth of financial technology companies across Africa and their impact on financial inclusion.",
                2845,
                "2023-09-15T10:00:00Z",
            ),
            (
                "102",
                tech,
                "E-commerce Revolution in Africa",
                "Discussing how digital marketplaces are transforming retail across the continent despite infrastructure challenges.",
                3120,
                "2023-09-01T10:00:00Z",
            ),
            (
                "103",
                tech,
                "Internet Connectivity: Bridging the Digital Divide",
                "Examining innovative solutions to expand internet access in rural and underserved communities across Africa.",
                2730,
                "2023-08-15T10:00:00Z",
            ),
            (
                "201",
                naija,
                "Lagos Life: Hustle and Flow",
                "Stories from the vibrant streets of Lagos, exploring the resilience and creativity of its inhabitants.",
                1800,
                "2023-09-10T14:30:00Z",
            ),
            (
                "202",
                naija,
                "Family Traditions: Old Meets New",
                "Exploring how traditional family values evolve in contemporary Nigerian society.",
                2100,
                "2023-08-27T14:30:00Z",
            ),
        ];

        let mut episodes = Vec::with_capacity(episode_rows.len());
        for (id, (podcast_id, podcast_title), title, description, duration, published) in episode_rows {
            episodes.push(Episode {
                id: id.to_string(),
                podcast_id: podcast_id.to_string(),
                podcast_title: podcast_title.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                audio_url: format!("https://example.com/episodes/{}.mp3", id),
                duration,
                publish_date: timestamp(published)?,
            });
        }

        let review_rows = [
            (
                "Kwame", "1", 5,
                "This podcast keeps me informed about the latest tech developments in Africa. The hosts are knowledgeable and the discussions are insightful.",
                "2023-08-20T15:30:00Z",
            ),
            (
                "Fatima", "1", 4,
                "Great content but sometimes the episodes are too technical for a casual listener. Nevertheless, I learn something new each time.",
                "2023-07-12T09:45:00Z",
            ),
            (
                "Olusegun", "2", 5,
                "The storytelling is captivating! It brings me back to the stories my grandmother used to tell, but with a modern twist.",
                "2023-09-05T18:20:00Z",
            ),
        ];

        let mut reviews = Vec::with_capacity(review_rows.len());
        for (user_name, podcast_id, rating, content, created) in review_rows {
            reviews.push(Review {
                user_name: user_name.to_string(),
                podcast_id: podcast_id.to_string(),
                rating,
                content: content.to_string(),
                created_at: timestamp(created)?,
            });
        }

        let discussions = vec![
            Discussion {
                id: "1".to_string(),
                title: "What are your favorite podcasts in Swahili?".to_string(),
                content: "I'm trying to improve my Swahili and I'm looking for engaging podcasts. I enjoy storytelling and educational content. Any recommendations would be appreciated!".to_string(),
                topic: "Recommendations".to_string(),
                created_at: timestamp("2023-09-10T08:30:00Z")?,
                author: "Jabari Kimathi".to_string(),
                comments_count: 12,
                likes_count: 24,
            },
            Discussion {
                id: "2".to_string(),
                title: "The importance of local language podcasts".to_string(),
                content: "I believe podcasts in indigenous African languages are crucial for preserving cultures and reaching audiences who may not be fluent in colonial languages. What are your thoughts on this?".to_string(),
                topic: "Cultural Preservation".to_string(),
                created_at: timestamp("2023-09-08T14:45:00Z")?,
                author: "Amara Nwosu".to_string(),
                comments_count: 35,
                likes_count: 67,
            },
            Discussion {
                id: "3".to_string(),
                title: "Internet accessibility issues for podcast listeners".to_string(),
                content: "Many rural areas still struggle with reliable internet access, making streaming podcasts difficult. How can creators better serve these audiences? Should more focus be put on downloadable content?".to_string(),
                topic: "Accessibility".to_string(),
                created_at: timestamp("2023-09-05T11:20:00Z")?,
                author: "Tendai Mutasa".to_string(),
                comments_count: 28,
                likes_count: 41,
            },
        ];

        let live_events = vec![
            LiveEvent {
                id: "1".to_string(),
                title: "The Future of African Storytelling".to_string(),
                description: "Join our panel of renowned storytellers as they discuss how traditional narrative techniques are evolving in the digital age.".to_string(),
                host: "Chimamanda Adichie".to_string(),
                start_time: timestamp("2023-09-20T18:00:00Z")?,
                end_time: timestamp("2023-09-20T19:30:00Z")?,
                attendees_count: 450,
            },
            LiveEvent {
                id: "2".to_string(),
                title: "Building a Podcast Studio on a Budget".to_string(),
                description: "Learn how to create professional-sounding podcasts without breaking the bank, with tips on equipment, software, and techniques.".to_string(),
                host: "David Oyelowo".to_string(),
                start_time: timestamp("2023-09-25T15:00:00Z")?,
                end_time: timestamp("2023-09-25T16:00:00Z")?,
                attendees_count: 325,
            },
        ];

        let mut catalog = Self::new(podcasts, episodes, reviews);
        catalog.discussions = discussions;
        catalog.live_events = live_events;
        catalog.categories = options(&[
            "Technology", "Culture", "News", "Stories", "Business", "Politics", "Arts", "Music",
        ]);
        catalog.languages = options(&[
            "English", "French", "Swahili", "Arabic", "Yoruba", "Zulu", "Amharic", "Hausa", "Pidgin",
        ]);
        catalog.regions = options(&[
            "West Africa", "East Africa", "North Africa", "Southern Africa", "Central Africa",
        ]);

        tracing::debug!(
            podcasts = catalog.podcasts.len(),
            episodes = catalog.episodes.len(),
            reviews = catalog.reviews.len(),
            clips = catalog.clips.len(),
            discussions = catalog.discussions.len(),
            events = catalog.live_events.len(),
            "Catalog loaded"
        );

        Ok(catalog)
    }

    pub fn podcasts(&self) -> &[Podcast] {
        &self.podcasts
    }

    pub fn podcast(&self, id: &str) -> Option<&Podcast> {
        self.podcasts.iter().find(|p| p.id == id)
    }

    pub fn episodes(&self) -> &[Arc<Episode>] {
        &self.episodes
    }

    pub fn episode(&self, id: &str) -> Option<Arc<Episode>> {
        self.episodes.iter().find(|e| e.id == id).cloned()
    }

    pub fn episodes_for(&self, podcast_id: &str) -> Vec<Arc<Episode>> {
        self.episodes
            .iter()
            .filter(|e| e.podcast_id == podcast_id)
            .cloned()
            .collect()
    }

    pub fn reviews_for(&self, podcast_id: &str) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| r.podcast_id == podcast_id)
            .collect()
    }

    /// Mean review rating, or 0 when the podcast has no reviews
    pub fn average_rating(&self, podcast_id: &str) -> f64 {
        let reviews = self.reviews_for(podcast_id);
        if reviews.is_empty() {
            return 0.0;
        }
        let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
        total as f64 / reviews.len() as f64
    }

    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    pub fn discussions(&self) -> &[Discussion] {
        &self.discussions
    }

    pub fn live_events(&self) -> &[LiveEvent] {
        &self.live_events
    }

    pub fn live_event(&self, id: &str) -> Option<&LiveEvent> {
        self.live_events.iter().find(|e| e.id == id)
    }

    pub fn categories(&self) -> &[NamedOption] {
        &self.categories
    }

    pub fn languages(&self) -> &[NamedOption] {
        &self.languages
    }

    pub fn regions(&self) -> &[NamedOption] {
        &self.regions
    }

    pub fn options(&self, kind: PreferenceKind) -> &[NamedOption] {
        match kind {
            PreferenceKind::Languages => self.languages(),
            PreferenceKind::Regions => self.regions(),
            PreferenceKind::Genres => self.categories(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_catalog_is_complete() {
        let catalog = Catalog::mock().unwrap();
        assert_eq!(catalog.podcasts().len(), 6);
        assert_eq!(catalog.episodes().len(), 5);
        assert_eq!(catalog.categories().len(), 8);
        assert_eq!(catalog.languages().len(), 9);
        assert_eq!(catalog.regions().len(), 5);
    }

    #[test]
    fn episodes_are_grouped_by_podcast() {
        let catalog = Catalog::mock().unwrap();
        let ids: Vec<String> = catalog
            .episodes_for("1")
            .iter()
            .map(|e| e.id.clone())
            .collect();
        assert_eq!(ids, vec!["101", "102", "103"]);
        assert_eq!(catalog.episodes_for("2").len(), 2);
        assert!(catalog.episodes_for("6").is_empty());
    }

    #[test]
    fn lookups_by_id() {
        let catalog = Catalog::mock().unwrap();
        assert_eq!(catalog.podcast("3").unwrap().language, "French");
        assert!(catalog.podcast("42").is_none());

        let episode = catalog.episode("201").unwrap();
        assert_eq!(episode.podcast_title, "Naija Stories");
        assert_eq!(episode.duration, 1800);
        assert_eq!(episode.display_date(), "Sep 10, 2023");
        assert!(catalog.episode("999").is_none());
    }

    #[test]
    fn average_rating_from_reviews() {
        let catalog = Catalog::mock().unwrap();
        assert_eq!(catalog.average_rating("1"), 4.5);
        assert_eq!(catalog.average_rating("2"), 5.0);
        assert_eq!(catalog.average_rating("4"), 0.0);
    }

    #[test]
    fn preference_options_map_to_tables() {
        let catalog = Catalog::mock().unwrap();
        assert_eq!(catalog.options(PreferenceKind::Genres)[0].name, "Technology");
        assert_eq!(catalog.options(PreferenceKind::Languages)[2].name, "Swahili");
        assert_eq!(catalog.options(PreferenceKind::Regions)[1].id, "2");
    }

    #[test]
    fn clips_cover_every_episode() {
        let catalog = Catalog::mock().unwrap();
        let clips = catalog.clips();
        assert_eq!(clips.len(), 2 + 3 + 2 + 3 + 2);
        assert_eq!(clips[0].id, "101-clip-1");
        assert_eq!(clips[1].id, "102-clip-1");
        assert_eq!(clips.last().unwrap().id, "201-clip-3");

        for episode in catalog.episodes() {
            let count = clips.iter().filter(|c| c.episode.id == episode.id).count();
            assert!((2..=3).contains(&count), "{} has {} clips", episode.id, count);
        }
        for clip in clips {
            assert!((30..=90).contains(&clip.duration), "{} lasts {}", clip.id, clip.duration);
            assert!(clip.title.starts_with(&clip.episode.title));
            assert_eq!(clip.podcast_title, clip.episode.podcast_title);
        }
    }

    #[test]
    fn short_episodes_cap_clip_length() {
        let catalog = Catalog::mock().unwrap();
        let mut episode = (*catalog.episode("101").unwrap()).clone();
        episode.duration = 20;
        let catalog = Catalog::new(Vec::new(), vec![episode], Vec::new());
        assert!(catalog.clips().iter().all(|c| c.duration == 20));
    }

    #[test]
    fn community_tables() {
        let catalog = Catalog::mock().unwrap();
        assert_eq!(catalog.discussions().len(), 3);
        assert_eq!(catalog.discussions()[1].likes_count, 67);
        assert_eq!(catalog.discussions()[2].author, "Tendai Mutasa");

        assert_eq!(catalog.live_events().len(), 2);
        let event = catalog.live_event("1").unwrap();
        assert_eq!(event.host, "Chimamanda Adichie");
        assert_eq!(event.attendees_count, 450);
        assert!(event.start_time < event.end_time);
        assert!(catalog.live_event("3").is_none());
    }

    #[test]
    fn rejects_malformed_timestamps() {
        assert!(timestamp("2023-13-45").is_err());
    }
}
