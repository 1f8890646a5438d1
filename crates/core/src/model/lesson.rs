use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use url::Url;

use crate::model::quiz::{QuestionDraft, QuizDefinition, QuizError};
use crate::model::ViewId;

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Parse a tier name case-insensitively (`"advanced"`, `"ADVANCED"`, ...).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Sort weight used by the listing; 1 = easiest.
    #[must_use]
    pub fn weight(self) -> u8 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── LESSON PARTS ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSection {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningRow {
    #[serde(rename = "type")]
    pub kind: String,
    pub cause: String,
    pub solution: String,
}

/// Link to another view inside the portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedLink {
    pub link_id: ViewId,
    pub title: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLinkDraft {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub icon: String,
}

/// External resource opened outside the portal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLink {
    pub url: Url,
    pub title: String,
    pub icon: String,
}

//
// ─── LESSON DRAFT ──────────────────────────────────────────────────────────────
//

/// Lesson as authored by the content provider, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonDraft {
    pub title: String,
    pub difficulty: String,
    /// Minutes.
    pub duration: u32,
    pub updated: String,
    #[serde(default)]
    pub video: String,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub notes: Vec<NoteSection>,
    #[serde(default)]
    pub warning_panel: Option<Vec<WarningRow>>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub related: Option<Vec<RelatedLink>>,
    #[serde(default)]
    pub resources: Option<Vec<ResourceLinkDraft>>,
    #[serde(default)]
    pub quiz: Option<Vec<QuestionDraft>>,
}

impl LessonDraft {
    /// Validate the draft.
    ///
    /// # Errors
    ///
    /// Returns `LessonError` for an unknown difficulty tier, a resource link that
    /// is not an absolute URL, or a malformed quiz.
    pub fn validate(self) -> Result<LessonData, LessonError> {
        let difficulty = Difficulty::parse(&self.difficulty).ok_or_else(|| {
            LessonError::UnknownDifficulty {
                raw: self.difficulty.clone(),
            }
        })?;

        let resources = self
            .resources
            .unwrap_or_default()
            .into_iter()
            .map(|draft| {
                let url = Url::parse(&draft.url).map_err(|_| LessonError::InvalidResourceUrl {
                    title: draft.title.clone(),
                    raw: draft.url.clone(),
                })?;
                Ok(ResourceLink {
                    url,
                    title: draft.title,
                    icon: draft.icon,
                })
            })
            .collect::<Result<Vec<_>, LessonError>>()?;

        let quiz = self.quiz.map(QuizDefinition::from_drafts).transpose()?;

        Ok(LessonData {
            title: self.title,
            difficulty,
            duration_minutes: self.duration,
            updated: self.updated,
            media: self.video,
            objectives: self.objectives,
            notes: self.notes,
            warnings: self.warning_panel.unwrap_or_default(),
            tags: self.tags,
            related: self.related.unwrap_or_default(),
            resources,
            quiz,
        })
    }
}

//
// ─── LESSON DATA ───────────────────────────────────────────────────────────────
//

/// Validated lesson content. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonData {
    pub title: String,
    pub difficulty: Difficulty,
    pub duration_minutes: u32,
    pub updated: String,
    pub media: String,
    pub objectives: Vec<String>,
    pub notes: Vec<NoteSection>,
    pub warnings: Vec<WarningRow>,
    pub tags: Vec<String>,
    pub related: Vec<RelatedLink>,
    pub resources: Vec<ResourceLink>,
    pub quiz: Option<QuizDefinition>,
}

impl LessonData {
    /// The quiz, if present and non-empty.
    #[must_use]
    pub fn playable_quiz(&self) -> Option<&QuizDefinition> {
        self.quiz.as_ref().filter(|quiz| !quiz.is_empty())
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("unknown difficulty tier: {raw:?}")]
    UnknownDifficulty { raw: String },
    #[error("resource {title:?} has an invalid url: {raw:?}")]
    InvalidResourceUrl { title: String, raw: String },
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_json(quiz: &str) -> String {
        format!(
            r#"{{
                "title": "Consent Mode",
                "difficulty": "intermediate",
                "duration": 12,
                "updated": "Jan 2025",
                "video": "https://video.example/consent",
                "objectives": ["Understand signals"],
                "notes": [{{"title": "Intro", "content": "**hello**"}}],
                "tags": ["GA4"],
                "resources": [{{"url": "https://docs.example/consent", "title": "Docs", "icon": "fa-book"}}],
                "quiz": {quiz}
            }}"#
        )
    }

    #[test]
    fn validates_full_lesson() {
        let draft: LessonDraft =
            serde_json::from_str(&draft_json(r#"[{"q":"?","options":["a","b"],"correct":0}]"#))
                .unwrap();
        let lesson = draft.validate().unwrap();
        assert_eq!(lesson.difficulty, Difficulty::Intermediate);
        assert_eq!(lesson.duration_minutes, 12);
        assert!(!lesson.has_warnings());
        assert!(lesson.related.is_empty());
        assert_eq!(lesson.resources[0].url.as_str(), "https://docs.example/consent");
        assert_eq!(lesson.playable_quiz().map(QuizDefinition::len), Some(1));
    }

    #[test]
    fn malformed_quiz_fails_fast() {
        let draft: LessonDraft =
            serde_json::from_str(&draft_json(r#"[{"q":"?","options":["a"],"correct":3}]"#))
                .unwrap();
        assert!(matches!(
            draft.validate(),
            Err(LessonError::Quiz(QuizError::CorrectIndexOutOfRange { .. }))
        ));
    }

    #[test]
    fn empty_quiz_is_not_playable() {
        let draft: LessonDraft = serde_json::from_str(&draft_json("[]")).unwrap();
        let lesson = draft.validate().unwrap();
        assert!(lesson.quiz.is_some());
        assert!(lesson.playable_quiz().is_none());
    }

    #[test]
    fn difficulty_parsing_is_case_insensitive() {
        assert_eq!(Difficulty::parse("ADVANCED"), Some(Difficulty::Advanced));
        assert_eq!(Difficulty::parse(" beginner "), Some(Difficulty::Beginner));
        assert_eq!(Difficulty::parse("expert"), None);
    }
}
