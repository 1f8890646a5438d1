mod certificate;
mod clock;
mod feedback;
mod lesson;
mod listing;
mod quiz;
mod shell;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;
use portal_core::model::ViewId;
use services::Portal;

pub use certificate::CertificateModal;
pub use clock::ClockWidget;
pub use feedback::{FeedbackForm, InterestPanel};
pub use lesson::LessonPage;
pub use listing::{CourseListing, NewsArchive, NewsDetail};
pub use quiz::QuizSection;
pub use shell::PortalShell;

/// Route to `target` and scroll to top once layout has settled.
pub fn navigate(mut portal: Signal<Portal>, target: &ViewId) {
    let outcome = portal.write().switch_view(target);
    scroll_to_top_after(outcome.scroll_to_top_after);
}

pub fn scroll_to_top_after(delay: Duration) {
    spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = eval("window.scrollTo(0, 0);");
    });
}
