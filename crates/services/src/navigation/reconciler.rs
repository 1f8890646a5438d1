use std::time::Duration;

use portal_core::model::ViewId;

use super::{Router, SwitchOutcome};
use crate::lesson::LessonLoader;

/// Result of one reconciliation tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// No fragment; nothing to reconcile.
    EmptyFragment,
    /// The fragment names no registered view (or is not a valid id).
    UnknownFragment,
    /// The fragment's view is already visible.
    InSync,
    Corrected(SwitchOutcome),
}

/// Polls the address fragment and re-routes when it drifts from the visible view.
///
/// Some navigation sources rewrite the address without going through the
/// router, so this runs on a fixed period rather than on events. Staleness is
/// bounded by one period; the corrective switch is idempotent.
#[derive(Debug, Clone)]
pub struct HashReconciler {
    period: Duration,
    corrections: u64,
}

impl HashReconciler {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            corrections: 0,
        }
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of ticks that called back into the router.
    #[must_use]
    pub fn corrections(&self) -> u64 {
        self.corrections
    }

    /// The view the fragment names when it differs from the visible one.
    /// Read-only; `tick` acts on the same check.
    pub fn drift(router: &Router) -> Result<ViewId, ReconcileOutcome> {
        let Some(fragment) = router.address_bar().fragment() else {
            return Err(ReconcileOutcome::EmptyFragment);
        };
        let Ok(target) = ViewId::new(fragment) else {
            return Err(ReconcileOutcome::UnknownFragment);
        };
        if !router.registry().contains(&target) {
            return Err(ReconcileOutcome::UnknownFragment);
        }
        if router.registry().is_visible(&target) {
            return Err(ReconcileOutcome::InSync);
        }
        Ok(target)
    }

    pub fn tick(&mut self, router: &mut Router, lessons: &mut dyn LessonLoader) -> ReconcileOutcome {
        let target = match Self::drift(router) {
            Ok(target) => target,
            Err(outcome) => return outcome,
        };

        tracing::debug!(fragment = %target, "address fragment drifted from visible view");
        self.corrections += 1;
        ReconcileOutcome::Corrected(router.switch_view(&target, lessons))
    }
}
