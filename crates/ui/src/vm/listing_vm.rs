use portal_core::model::{CourseCard, Difficulty, NewsItem, ViewId};

use super::time_fmt::format_news_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub target: ViewId,
    pub title: String,
    pub tags: Vec<String>,
    pub difficulty: String,
    pub duration: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewsItemVm {
    pub target: ViewId,
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub date: String,
}

#[must_use]
pub fn map_course_cards(cards: &[&CourseCard]) -> Vec<CourseCardVm> {
    cards
        .iter()
        .map(|card| CourseCardVm {
            target: card.target.clone(),
            title: card.title.clone(),
            tags: card.tags.clone(),
            // Known tiers are shown capitalised; anything else verbatim.
            difficulty: match card.difficulty.as_deref() {
                None => Difficulty::Beginner.label().to_string(),
                Some(raw) => Difficulty::parse(raw).map_or_else(|| raw.to_string(), |tier| tier.label().to_string()),
            },
            duration: card.duration.map(|minutes| format!("{minutes} Min")),
        })
        .collect()
}

#[must_use]
pub fn map_news_items(items: &[&NewsItem]) -> Vec<NewsItemVm> {
    items
        .iter()
        .map(|item| NewsItemVm {
            target: item.target.clone(),
            title: item.title.clone(),
            summary: item.summary.clone(),
            tags: item.tags.clone(),
            date: format_news_date(item.date),
        })
        .collect()
}
