use std::collections::HashMap;
use std::sync::Arc;

use portal_core::model::{LessonData, LessonError, ViewId, ViewIdError};
use thiserror::Error;

/// Errors surfaced while loading portal content.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid view id: {0}")]
    InvalidViewId(#[from] ViewIdError),

    #[error("lesson {lesson} is invalid: {source}")]
    InvalidLesson {
        lesson: ViewId,
        #[source]
        source: LessonError,
    },

    #[error("view {0} is declared more than once")]
    DuplicateView(ViewId),

    #[error("lesson {0} has no matching detail view")]
    LessonWithoutView(ViewId),
}

/// Read-only source of lesson content keyed by view id.
pub trait LessonCatalog: Send + Sync {
    /// Fetch the lesson shown by the given view, if that view is a lesson.
    fn lesson(&self, id: &ViewId) -> Option<Arc<LessonData>>;

    /// Ids of every known lesson, in no particular order.
    fn lesson_ids(&self) -> Vec<ViewId>;

    fn contains(&self, id: &ViewId) -> bool {
        self.lesson(id).is_some()
    }
}

/// Catalog backed by a map that never changes after construction.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    lessons: Arc<HashMap<ViewId, Arc<LessonData>>>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new(lessons: impl IntoIterator<Item = (ViewId, LessonData)>) -> Self {
        let lessons = lessons
            .into_iter()
            .map(|(id, lesson)| (id, Arc::new(lesson)))
            .collect();
        Self {
            lessons: Arc::new(lessons),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

impl LessonCatalog for InMemoryCatalog {
    fn lesson(&self, id: &ViewId) -> Option<Arc<LessonData>> {
        self.lessons.get(id).cloned()
    }

    fn lesson_ids(&self) -> Vec<ViewId> {
        self.lessons.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::model::LessonDraft;

    fn lesson(title: &str) -> LessonData {
        LessonDraft {
            title: title.to_string(),
            difficulty: "Beginner".into(),
            duration: 5,
            updated: "2025".into(),
            video: String::new(),
            objectives: Vec::new(),
            notes: Vec::new(),
            warning_panel: None,
            tags: Vec::new(),
            related: None,
            resources: None,
            quiz: None,
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn looks_up_lessons_by_view_id() {
        let id = ViewId::new("view-lesson-1").unwrap();
        let catalog = InMemoryCatalog::new([(id.clone(), lesson("Tagging 101"))]);

        assert!(catalog.contains(&id));
        assert_eq!(catalog.lesson(&id).unwrap().title, "Tagging 101");
        assert!(
            catalog
                .lesson(&ViewId::new("view-archive").unwrap())
                .is_none()
        );
        assert_eq!(catalog.lesson_ids(), vec![id]);
    }
}
