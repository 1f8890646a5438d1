use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};

/// Wall-clock source for timestamps attached to outbound submissions and the
/// clock widget. Fixed clocks keep tests deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Self::System => Utc::now(),
            Self::Fixed(at) => *at,
        }
    }

    /// ISO-8601 timestamp with millisecond precision, e.g. `2023-11-14T22:13:20.000Z`.
    #[must_use]
    pub fn iso_timestamp(&self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Delays that pace navigation and the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortalTimings {
    /// Period of the address-fragment reconciliation tick.
    pub reconcile_period: Duration,
    /// Time the per-question feedback stays on screen before advancing.
    pub answer_advance_delay: Duration,
    /// Pause between rendering results and presenting the certificate.
    pub certificate_delay: Duration,
    /// Pause before scrolling to top so layout can settle after a view switch.
    pub scroll_settle_delay: Duration,
}

impl Default for PortalTimings {
    fn default() -> Self {
        Self {
            reconcile_period: Duration::from_millis(500),
            answer_advance_delay: Duration::from_millis(1500),
            certificate_delay: Duration::from_millis(800),
            scroll_settle_delay: Duration::from_millis(10),
        }
    }
}

impl PortalTimings {
    /// All delays zeroed; used by tests that drive transitions directly.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            reconcile_period: Duration::ZERO,
            answer_advance_delay: Duration::ZERO,
            certificate_delay: Duration::ZERO,
            scroll_settle_delay: Duration::ZERO,
        }
    }
}

/// Deterministic timestamp for tests (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_formats_iso_timestamp() {
        let clock = Clock::fixed(fixed_now());
        assert_eq!(clock.iso_timestamp(), "2023-11-14T22:13:20.000Z");
    }

    #[test]
    fn default_timings_match_portal_pacing() {
        let timings = PortalTimings::default();
        assert_eq!(timings.reconcile_period, Duration::from_millis(500));
        assert_eq!(timings.answer_advance_delay, Duration::from_millis(1500));
    }
}
