use portal_core::model::{ViewCategory, ViewId, ViewSpec};

/// The exclusive set of views and which one is visible.
///
/// Visibility is stored as a single slot, so at most one view can be visible.
#[derive(Debug, Clone)]
pub struct ViewRegistry {
    views: Vec<ViewSpec>,
    visible: Option<usize>,
}

impl ViewRegistry {
    #[must_use]
    pub fn new(views: impl IntoIterator<Item = ViewSpec>) -> Self {
        Self {
            views: views.into_iter().collect(),
            visible: None,
        }
    }

    #[must_use]
    pub fn views(&self) -> &[ViewSpec] {
        &self.views
    }

    #[must_use]
    pub fn contains(&self, id: &ViewId) -> bool {
        self.position(id).is_some()
    }

    #[must_use]
    pub fn category(&self, id: &ViewId) -> Option<ViewCategory> {
        self.position(id).map(|idx| self.views[idx].category)
    }

    /// The visible view, or `None` when every view is hidden.
    #[must_use]
    pub fn visible(&self) -> Option<&ViewSpec> {
        self.visible.map(|idx| &self.views[idx])
    }

    #[must_use]
    pub fn is_visible(&self, id: &ViewId) -> bool {
        self.visible().is_some_and(|view| view.id == *id)
    }

    pub fn hide_all(&mut self) {
        self.visible = None;
    }

    /// Make `id` the visible view. Returns `false` and leaves every view
    /// hidden if `id` is not registered.
    pub fn show(&mut self, id: &ViewId) -> bool {
        self.visible = self.position(id);
        self.visible.is_some()
    }

    fn position(&self, id: &ViewId) -> Option<usize> {
        self.views.iter().position(|view| view.id == *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> ViewId {
        ViewId::new(raw).unwrap()
    }

    #[test]
    fn showing_one_view_hides_the_previous() {
        let mut registry = ViewRegistry::new([
            ViewSpec::listing(id("view-archive")),
            ViewSpec::detail(id("view-detail-1")),
        ]);
        assert!(registry.visible().is_none());

        assert!(registry.show(&id("view-archive")));
        assert!(registry.show(&id("view-detail-1")));
        assert!(registry.is_visible(&id("view-detail-1")));
        assert!(!registry.is_visible(&id("view-archive")));
    }

    #[test]
    fn showing_unknown_view_leaves_all_hidden() {
        let mut registry = ViewRegistry::new([ViewSpec::listing(id("view-archive"))]);
        registry.show(&id("view-archive"));

        assert!(!registry.show(&id("missing")));
        assert!(registry.visible().is_none());
        assert_eq!(registry.category(&id("missing")), None);
    }
}
