use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use portal_core::model::{NavigationAffordance, ViewCategory, ViewId, ViewSpec};
use storage::LessonCatalog;

use super::{AddressBar, ViewRegistry};
use crate::lesson::LessonLoader;

/// What a call to [`Router::switch_view`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchOutcome {
    pub target: ViewId,
    /// `false` when the target is not registered; every view is then hidden.
    pub shown: bool,
    pub category: Option<ViewCategory>,
    pub lesson_loaded: bool,
    pub affordance: NavigationAffordance,
    /// The host should scroll to the top once this delay has elapsed.
    pub scroll_to_top_after: Duration,
}

/// Makes exactly one view visible and keeps the address fragment in step.
pub struct Router {
    registry: ViewRegistry,
    address: AddressBar,
    affordance: NavigationAffordance,
    catalog: Arc<dyn LessonCatalog>,
    scroll_settle_delay: Duration,
    switches: u64,
}

impl Router {
    #[must_use]
    pub fn new(
        views: impl IntoIterator<Item = ViewSpec>,
        catalog: Arc<dyn LessonCatalog>,
        scroll_settle_delay: Duration,
    ) -> Self {
        Self {
            registry: ViewRegistry::new(views),
            address: AddressBar::new(),
            affordance: NavigationAffordance::default(),
            catalog,
            scroll_settle_delay,
            switches: 0,
        }
    }

    /// Replace the initial history, e.g. when the host was opened on a deep link.
    #[must_use]
    pub fn with_address_bar(mut self, address: AddressBar) -> Self {
        self.address = address;
        self
    }

    #[must_use]
    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    #[must_use]
    pub fn active_view(&self) -> Option<&ViewId> {
        self.registry.visible().map(|view| &view.id)
    }

    #[must_use]
    pub fn affordance(&self) -> NavigationAffordance {
        self.affordance
    }

    #[must_use]
    pub fn address_bar(&self) -> &AddressBar {
        &self.address
    }

    /// Host-side access for back/forward and external rewrites.
    pub fn address_bar_mut(&mut self) -> &mut AddressBar {
        &mut self.address
    }

    /// Number of times `switch_view` has run.
    #[must_use]
    pub fn switch_count(&self) -> u64 {
        self.switches
    }

    /// Show `target` and hide every other view.
    ///
    /// Unknown targets are not an error: every view ends up hidden and the
    /// navigation affordance and fragment are left as they were. Calling this
    /// twice with the same target leaves the same state as calling it once.
    pub fn switch_view(&mut self, target: &ViewId, lessons: &mut dyn LessonLoader) -> SwitchOutcome {
        self.switches += 1;

        self.registry.hide_all();
        let shown = self.registry.show(target);
        let category = self.registry.category(target);

        let lesson_loaded = match self.catalog.lesson(target) {
            Some(lesson) => {
                lessons.load_lesson(target, lesson);
                true
            }
            None => {
                lessons.unload_lesson();
                false
            }
        };

        match category {
            Some(category) => {
                self.affordance = NavigationAffordance::for_category(category);
                match category {
                    ViewCategory::Listing => self.address.clear_in_place(),
                    ViewCategory::Detail => self.address.push(target),
                }
            }
            None => {
                tracing::debug!(target = %target, "switch to unregistered view; all views hidden");
            }
        }

        tracing::debug!(target = %target, shown, lesson_loaded, "switched view");

        SwitchOutcome {
            target: target.clone(),
            shown,
            category,
            lesson_loaded,
            affordance: self.affordance,
            scroll_to_top_after: self.scroll_settle_delay,
        }
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("active", &self.active_view())
            .field("fragment", &self.address.fragment())
            .field("affordance", &self.affordance)
            .field("switches", &self.switches)
            .finish_non_exhaustive()
    }
}
