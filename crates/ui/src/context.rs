use std::sync::Arc;

use portal_core::model::ViewId;
use portal_core::{Clock, PortalTimings};
use services::{AddressBar, Portal, SubmissionService};
use storage::PortalManifest;
use url::Url;

pub trait UiApp: Send + Sync {
    fn manifest(&self) -> Arc<PortalManifest>;
    fn submissions(&self) -> Arc<SubmissionService>;
    fn timings(&self) -> PortalTimings;
    fn clock(&self) -> Clock;

    /// Address of the hosting page, without fragment.
    fn page_base(&self) -> Url;
    /// Fragment the page was opened with, if any.
    fn initial_fragment(&self) -> Option<String>;
    fn start_view(&self) -> Option<ViewId>;
}

#[derive(Clone)]
pub struct AppContext {
    manifest: Arc<PortalManifest>,
    submissions: Arc<SubmissionService>,
    timings: PortalTimings,
    clock: Clock,
    page_base: Url,
    initial_fragment: Option<String>,
    start_view: Option<ViewId>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            manifest: app.manifest(),
            submissions: app.submissions(),
            timings: app.timings(),
            clock: app.clock(),
            page_base: app.page_base(),
            initial_fragment: app.initial_fragment(),
            start_view: app.start_view(),
        }
    }

    #[must_use]
    pub fn manifest(&self) -> Arc<PortalManifest> {
        Arc::clone(&self.manifest)
    }

    #[must_use]
    pub fn submissions(&self) -> Arc<SubmissionService> {
        Arc::clone(&self.submissions)
    }

    #[must_use]
    pub fn timings(&self) -> PortalTimings {
        self.timings
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn page_base(&self) -> &Url {
        &self.page_base
    }

    /// The configured start view, else the manifest's landing view.
    #[must_use]
    pub fn landing_view(&self) -> Option<ViewId> {
        self.start_view
            .clone()
            .or_else(|| self.manifest.landing_view().cloned())
    }

    /// Build the portal and show its first view. A registered fragment wins
    /// over the landing view.
    #[must_use]
    pub fn open_portal(&self) -> Portal {
        let address = self
            .initial_fragment
            .as_deref()
            .map_or_else(AddressBar::new, AddressBar::with_fragment);
        let mut portal = Portal::from_manifest(&self.manifest, self.timings).with_address_bar(address);
        match self.landing_view() {
            Some(landing) => {
                portal.open(&landing);
            }
            None => tracing::warn!("manifest declares no listing view; nothing shown"),
        }
        portal
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
