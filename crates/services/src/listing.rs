//! Filtering and ordering of the cards on listing views.

use std::cmp::Ordering;
use std::str::FromStr;

use portal_core::model::{CourseCard, Difficulty, NewsItem};

//
// ─── COURSES ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CourseSort {
    /// Authoring order.
    #[default]
    Default,
    DurationAsc,
    DurationDesc,
    Az,
    DifficultyAsc,
    DifficultyDesc,
}

impl CourseSort {
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::DurationAsc,
        Self::DurationDesc,
        Self::Az,
        Self::DifficultyAsc,
        Self::DifficultyDesc,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::DurationAsc => "duration-asc",
            Self::DurationDesc => "duration-desc",
            Self::Az => "az",
            Self::DifficultyAsc => "difficulty-asc",
            Self::DifficultyDesc => "difficulty-desc",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Recommended",
            Self::DurationAsc => "Shortest first",
            Self::DurationDesc => "Longest first",
            Self::Az => "A-Z",
            Self::DifficultyAsc => "Easiest first",
            Self::DifficultyDesc => "Hardest first",
        }
    }
}

impl FromStr for CourseSort {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sort| sort.key() == raw)
            .ok_or(())
    }
}

/// Search text and difficulty filter for the course grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseQuery {
    pub search: String,
    /// `None` matches every tier.
    pub difficulty: Option<Difficulty>,
    pub sort: CourseSort,
}

impl CourseQuery {
    pub fn clear_filters(&mut self) {
        *self = Self::default();
    }

    /// Matching cards in display order.
    #[must_use]
    pub fn apply<'a>(&self, cards: &'a [CourseCard]) -> Vec<&'a CourseCard> {
        let needle = self.search.trim().to_lowercase();
        let mut visible: Vec<&CourseCard> = cards
            .iter()
            .filter(|card| {
                let title = card.title.to_lowercase();
                let tags = card.tags.join(" ").to_lowercase();
                title.contains(&needle) || tags.contains(&needle)
            })
            .filter(|card| match self.difficulty {
                None => true,
                Some(wanted) => card_difficulty(card) == Some(wanted),
            })
            .collect();
        visible.sort_by(|a, b| compare_courses(self.sort, a, b));
        visible
    }
}

/// Tier of a card; a missing tier counts as `Beginner`, an unknown one as none.
fn card_difficulty(card: &CourseCard) -> Option<Difficulty> {
    match card.difficulty.as_deref() {
        None => Some(Difficulty::Beginner),
        Some(raw) => Difficulty::parse(raw),
    }
}

fn compare_courses(sort: CourseSort, a: &CourseCard, b: &CourseCard) -> Ordering {
    let duration = |card: &CourseCard| card.duration.unwrap_or(0);
    let weight = |card: &CourseCard| card_difficulty(card).map_or(0, Difficulty::weight);
    match sort {
        CourseSort::Default => Ordering::Equal,
        CourseSort::DurationAsc => duration(a).cmp(&duration(b)),
        CourseSort::DurationDesc => duration(b).cmp(&duration(a)),
        CourseSort::Az => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        CourseSort::DifficultyAsc => weight(a).cmp(&weight(b)),
        CourseSort::DifficultyDesc => weight(b).cmp(&weight(a)),
    }
}

//
// ─── NEWS ──────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NewsSort {
    #[default]
    Newest,
    Oldest,
}

impl FromStr for NewsSort {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsQuery {
    pub search: String,
    /// `None` matches every topic.
    pub topic: Option<String>,
    pub sort: NewsSort,
}

impl NewsQuery {
    #[must_use]
    pub fn apply<'a>(&self, items: &'a [NewsItem]) -> Vec<&'a NewsItem> {
        let needle = self.search.trim().to_lowercase();
        let topic = self.topic.as_ref().map(|topic| topic.to_lowercase());
        let mut visible: Vec<&NewsItem> = items
            .iter()
            .filter(|item| item.searchable_text().to_lowercase().contains(&needle))
            .filter(|item| match &topic {
                None => true,
                Some(topic) => item.tags.join(" ").to_lowercase().contains(topic.as_str()),
            })
            .collect();
        match self.sort {
            NewsSort::Newest => visible.sort_by(|a, b| b.date.cmp(&a.date)),
            NewsSort::Oldest => visible.sort_by(|a, b| a.date.cmp(&b.date)),
        }
        visible
    }
}

/// Distinct tags across the archive, for the topic selector.
#[must_use]
pub fn news_topics(items: &[NewsItem]) -> Vec<String> {
    let mut topics: Vec<String> = items.iter().flat_map(|item| item.tags.clone()).collect();
    topics.sort();
    topics.dedup();
    topics
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use portal_core::model::ViewId;

    fn course(title: &str, tags: &[&str], difficulty: Option<&str>, duration: Option<u32>) -> CourseCard {
        CourseCard {
            target: ViewId::new(format!("view-{}", title.to_lowercase().replace(' ', "-"))).unwrap(),
            title: title.into(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            difficulty: difficulty.map(str::to_string),
            duration,
        }
    }

    fn courses() -> Vec<CourseCard> {
        vec![
            course("Server Tagging", &["GTM"], Some("Advanced"), Some(35)),
            course("GA4 Basics", &["GA4"], None, Some(15)),
            course("Consent Mode", &["Privacy", "GTM"], Some("intermediate"), None),
        ]
    }

    fn titles(cards: &[&CourseCard]) -> Vec<String> {
        cards.iter().map(|card| card.title.clone()).collect()
    }

    #[test]
    fn search_matches_title_or_tags_case_insensitively() {
        let cards = courses();
        let query = CourseQuery {
            search: "gtm".into(),
            ..CourseQuery::default()
        };
        assert_eq!(titles(&query.apply(&cards)), ["Server Tagging", "Consent Mode"]);
    }

    #[test]
    fn missing_difficulty_counts_as_beginner() {
        let cards = courses();
        let query = CourseQuery {
            difficulty: Some(Difficulty::Beginner),
            ..CourseQuery::default()
        };
        assert_eq!(titles(&query.apply(&cards)), ["GA4 Basics"]);
    }

    #[test]
    fn sorts_by_duration_and_difficulty() {
        let cards = courses();
        let mut query = CourseQuery {
            sort: CourseSort::DurationAsc,
            ..CourseQuery::default()
        };
        assert_eq!(
            titles(&query.apply(&cards)),
            ["Consent Mode", "GA4 Basics", "Server Tagging"]
        );

        query.sort = CourseSort::DifficultyDesc;
        assert_eq!(
            titles(&query.apply(&cards)),
            ["Server Tagging", "Consent Mode", "GA4 Basics"]
        );

        query.sort = CourseSort::Az;
        assert_eq!(
            titles(&query.apply(&cards)),
            ["Consent Mode", "GA4 Basics", "Server Tagging"]
        );
    }

    #[test]
    fn clear_restores_authoring_order() {
        let cards = courses();
        let mut query = CourseQuery {
            search: "zzz".into(),
            difficulty: Some(Difficulty::Advanced),
            sort: CourseSort::Az,
        };
        query.clear_filters();
        assert_eq!(
            titles(&query.apply(&cards)),
            ["Server Tagging", "GA4 Basics", "Consent Mode"]
        );
    }

    #[test]
    fn sort_keys_round_trip_through_from_str() {
        assert_eq!("difficulty-asc".parse::<CourseSort>(), Ok(CourseSort::DifficultyAsc));
        assert!("sideways".parse::<CourseSort>().is_err());
    }

    #[test]
    fn news_filters_by_topic_and_orders_by_date() {
        let item = |title: &str, tags: &[&str], date: (i32, u32, u32)| NewsItem {
            target: ViewId::new("view-detail-1").unwrap(),
            title: title.into(),
            summary: String::new(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        };
        let items = vec![
            item("Old", &["Privacy"], (2023, 5, 1)),
            item("New", &["Privacy", "GA4"], (2025, 1, 1)),
            item("Other", &["Roadmap"], (2024, 6, 1)),
        ];

        let mut query = NewsQuery {
            topic: Some("privacy".into()),
            ..NewsQuery::default()
        };
        let found: Vec<_> = query.apply(&items).iter().map(|i| i.title.clone()).collect();
        assert_eq!(found, ["New", "Old"]);

        query.sort = NewsSort::Oldest;
        query.topic = None;
        let found: Vec<_> = query.apply(&items).iter().map(|i| i.title.clone()).collect();
        assert_eq!(found, ["Old", "Other", "New"]);

        assert_eq!(news_topics(&items), ["GA4", "Privacy", "Roadmap"]);
    }
}
