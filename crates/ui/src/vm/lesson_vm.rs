use portal_core::model::{LessonData, ViewId, WarningRow};

use super::markdown_vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteVm {
    pub title: String,
    /// Sanitised HTML.
    pub html: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkVm {
    pub title: String,
    pub icon: String,
    pub href: String,
}

/// Display strings for one lesson page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonVm {
    pub title: String,
    pub difficulty: &'static str,
    pub duration: String,
    pub updated: String,
    pub media: Option<String>,
    pub objectives: Vec<String>,
    pub notes: Vec<NoteVm>,
    pub warnings: Vec<WarningRow>,
    pub tags: Vec<String>,
    /// Portal-internal links; `href` is the target view id.
    pub related: Vec<(ViewId, LinkVm)>,
    pub resources: Vec<LinkVm>,
}

impl LessonVm {
    #[must_use]
    pub fn show_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    #[must_use]
    pub fn show_related(&self) -> bool {
        !self.related.is_empty()
    }

    #[must_use]
    pub fn show_resources(&self) -> bool {
        !self.resources.is_empty()
    }
}

#[must_use]
pub fn map_lesson(lesson: &LessonData) -> LessonVm {
    LessonVm {
        title: lesson.title.clone(),
        difficulty: lesson.difficulty.label(),
        duration: format!("{} Min", lesson.duration_minutes),
        updated: format!("Updated: {}", lesson.updated),
        media: (!lesson.media.trim().is_empty()).then(|| lesson.media.clone()),
        objectives: lesson.objectives.clone(),
        notes: lesson
            .notes
            .iter()
            .map(|note| NoteVm {
                title: note.title.clone(),
                html: markdown_to_html(&note.content),
            })
            .collect(),
        warnings: lesson.warnings.clone(),
        tags: lesson.tags.clone(),
        related: lesson
            .related
            .iter()
            .map(|link| {
                (
                    link.link_id.clone(),
                    LinkVm {
                        title: link.title.clone(),
                        icon: link.icon.clone(),
                        href: format!("#{}", link.link_id),
                    },
                )
            })
            .collect(),
        resources: lesson
            .resources
            .iter()
            .map(|link| LinkVm {
                title: link.title.clone(),
                icon: link.icon.clone(),
                href: link.url.to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::PortalManifest;

    fn lesson(id: &str) -> LessonVm {
        let manifest = PortalManifest::sample().unwrap();
        let id = ViewId::new(id).unwrap();
        let lesson = storage::LessonCatalog::lesson(manifest.catalog(), &id).unwrap();
        map_lesson(&lesson)
    }

    #[test]
    fn maps_meta_strings() {
        let vm = lesson("view-lesson-ga4-basics");
        assert_eq!(vm.title, "GA4 Fundamentals");
        assert_eq!(vm.difficulty, "Beginner");
        assert_eq!(vm.duration, "15 Min");
        assert_eq!(vm.updated, "Updated: Mar 2025");
        assert!(vm.media.is_some());
    }

    #[test]
    fn warning_panel_only_when_rows_exist() {
        assert!(!lesson("view-lesson-ga4-basics").show_warnings());
        assert!(lesson("view-lesson-consent-mode").show_warnings());
    }
}
