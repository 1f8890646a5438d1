//! JSON description of a portal page: its views, listing cards and lessons.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use portal_core::model::{CourseCard, LessonDraft, NewsItem, ViewCategory, ViewId, ViewSpec};
use serde::Deserialize;

use crate::catalog::{CatalogError, InMemoryCatalog};

const SAMPLE_MANIFEST: &str = include_str!("../assets/sample_portal.json");

#[derive(Debug, Deserialize)]
struct ManifestDraft {
    views: Vec<ViewSpec>,
    #[serde(default)]
    courses: Vec<CourseCard>,
    #[serde(default)]
    news: Vec<NewsItem>,
    #[serde(default)]
    lessons: BTreeMap<String, LessonDraft>,
}

/// Validated portal content.
#[derive(Clone)]
pub struct PortalManifest {
    views: Vec<ViewSpec>,
    courses: Vec<CourseCard>,
    news: Vec<NewsItem>,
    catalog: InMemoryCatalog,
}

impl PortalManifest {
    /// Parse and validate a manifest.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for malformed JSON, duplicate view ids, lessons
    /// without a detail view, or invalid lesson content (including malformed
    /// quizzes).
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let draft: ManifestDraft = serde_json::from_str(raw)?;
        Self::from_draft(draft)
    }

    /// Read and validate a manifest file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, or any error of
    /// [`PortalManifest::from_json_str`].
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await?;
        let manifest = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            views = manifest.views.len(),
            lessons = manifest.catalog.len(),
            "loaded portal manifest"
        );
        Ok(manifest)
    }

    /// The manifest bundled with the crate.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled asset is broken.
    pub fn sample() -> Result<Self, CatalogError> {
        Self::from_json_str(SAMPLE_MANIFEST)
    }

    fn from_draft(draft: ManifestDraft) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for view in &draft.views {
            if !seen.insert(view.id.clone()) {
                return Err(CatalogError::DuplicateView(view.id.clone()));
            }
        }

        let mut lessons = Vec::with_capacity(draft.lessons.len());
        for (raw_id, lesson) in draft.lessons {
            let id = ViewId::new(raw_id)?;
            let is_detail = draft
                .views
                .iter()
                .any(|view| view.id == id && view.category == ViewCategory::Detail);
            if !is_detail {
                return Err(CatalogError::LessonWithoutView(id));
            }
            let lesson = lesson
                .validate()
                .map_err(|source| CatalogError::InvalidLesson {
                    lesson: id.clone(),
                    source,
                })?;
            for link in &lesson.related {
                if !seen.contains(&link.link_id) {
                    tracing::warn!(lesson = %id, target = %link.link_id, "related link targets an unknown view");
                }
            }
            lessons.push((id, lesson));
        }

        Ok(Self {
            views: draft.views,
            courses: draft.courses,
            news: draft.news,
            catalog: InMemoryCatalog::new(lessons),
        })
    }

    #[must_use]
    pub fn views(&self) -> &[ViewSpec] {
        &self.views
    }

    #[must_use]
    pub fn courses(&self) -> &[CourseCard] {
        &self.courses
    }

    #[must_use]
    pub fn news(&self) -> &[NewsItem] {
        &self.news
    }

    #[must_use]
    pub fn catalog(&self) -> &InMemoryCatalog {
        &self.catalog
    }

    /// The view shown when nothing else is requested.
    #[must_use]
    pub fn landing_view(&self) -> Option<&ViewId> {
        self.views
            .iter()
            .find(|view| view.category.is_listing())
            .map(|view| &view.id)
    }
}
