use std::sync::Arc;

use portal_core::PortalTimings;
use portal_core::model::{NavigationAffordance, ViewId, ViewSpec};
use storage::{LessonCatalog, PortalManifest};
use url::Url;

use crate::lesson::LessonWorkspace;
use crate::navigation::{AddressBar, HashReconciler, ReconcileOutcome, Router, SwitchOutcome};
use crate::quiz::{AdvanceOutcome, AnswerOutcome, Certificate, PendingAdvance, PendingCertificate};

/// Single owner of navigation and lesson state for one document.
///
/// UI code holds one `Portal` and drives it from click handlers, the
/// reconciliation tick and elapsed timers; nothing else mutates its state.
#[derive(Debug)]
pub struct Portal {
    router: Router,
    reconciler: HashReconciler,
    lessons: LessonWorkspace,
}

impl Portal {
    #[must_use]
    pub fn new(
        views: impl IntoIterator<Item = ViewSpec>,
        catalog: Arc<dyn LessonCatalog>,
        timings: PortalTimings,
    ) -> Self {
        Self {
            router: Router::new(views, catalog, timings.scroll_settle_delay),
            reconciler: HashReconciler::new(timings.reconcile_period),
            lessons: LessonWorkspace::new(timings),
        }
    }

    #[must_use]
    pub fn from_manifest(manifest: &PortalManifest, timings: PortalTimings) -> Self {
        Self::new(
            manifest.views().iter().cloned(),
            Arc::new(manifest.catalog().clone()),
            timings,
        )
    }

    /// Start from an existing address, e.g. a deep link carrying a fragment.
    #[must_use]
    pub fn with_address_bar(mut self, address: AddressBar) -> Self {
        self.router = self.router.with_address_bar(address);
        self
    }

    /// Show the view named by the address fragment if it is registered,
    /// otherwise `landing`.
    pub fn open(&mut self, landing: &ViewId) -> SwitchOutcome {
        let linked = self
            .router
            .address_bar()
            .fragment()
            .and_then(|fragment| ViewId::new(fragment).ok())
            .filter(|id| self.router.registry().contains(id));
        let target = linked.unwrap_or_else(|| landing.clone());
        self.switch_view(&target)
    }

    pub fn switch_view(&mut self, target: &ViewId) -> SwitchOutcome {
        self.router.switch_view(target, &mut self.lessons)
    }

    /// Whether the next tick would re-route.
    #[must_use]
    pub fn needs_reconcile(&self) -> bool {
        HashReconciler::drift(&self.router).is_ok()
    }

    /// One reconciliation tick.
    pub fn reconcile(&mut self) -> ReconcileOutcome {
        self.reconciler.tick(&mut self.router, &mut self.lessons)
    }

    /// Step back in the address history. The view follows on the next tick.
    pub fn history_back(&mut self) -> bool {
        self.router.address_bar_mut().back()
    }

    pub fn history_forward(&mut self) -> bool {
        self.router.address_bar_mut().forward()
    }

    /// Rewrite the fragment without routing, as an embedding framework would.
    pub fn set_fragment_externally(&mut self, fragment: impl Into<String>) {
        self.router.address_bar_mut().set_external(fragment);
    }

    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    #[must_use]
    pub fn reconciler(&self) -> &HashReconciler {
        &self.reconciler
    }

    #[must_use]
    pub fn lessons(&self) -> &LessonWorkspace {
        &self.lessons
    }

    pub fn lessons_mut(&mut self) -> &mut LessonWorkspace {
        &mut self.lessons
    }

    #[must_use]
    pub fn active_view(&self) -> Option<&ViewId> {
        self.router.active_view()
    }

    #[must_use]
    pub fn affordance(&self) -> NavigationAffordance {
        self.router.affordance()
    }

    #[must_use]
    pub fn page_href(&self, base: &Url) -> Url {
        self.router.address_bar().href(base)
    }

    pub fn start_quiz(&mut self) -> bool {
        self.lessons.start_quiz()
    }

    pub fn answer(&mut self, option: usize) -> AnswerOutcome {
        self.lessons.answer(option)
    }

    pub fn advance(&mut self, token: PendingAdvance) -> AdvanceOutcome {
        self.lessons.advance(token)
    }

    pub fn present_certificate(&mut self, token: PendingCertificate) -> Option<&Certificate> {
        self.lessons.present_certificate(token)
    }

    pub fn close_certificate(&mut self) {
        self.lessons.close_certificate();
    }

    pub fn restart_quiz(&mut self) {
        self.lessons.restart_quiz();
    }
}
