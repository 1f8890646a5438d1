use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::ViewId;

/// Card shown on a course listing. Links to a lesson view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCard {
    pub target: ViewId,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-form tier name; unknown or missing tiers sort as `Beginner`.
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Minutes; missing durations sort as zero.
    #[serde(default)]
    pub duration: Option<u32>,
}

/// Newsletter entry shown on the archive listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub target: ViewId,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub date: NaiveDate,
}

impl NewsItem {
    /// All visible text of the item, as searched by the archive filter.
    #[must_use]
    pub fn searchable_text(&self) -> String {
        format!("{}\n{}\n{}", self.title, self.summary, self.tags.join(" "))
    }
}
