use std::time::Duration;

use dioxus::prelude::*;
use services::{Portal, ReconcileOutcome};

use crate::context::AppContext;
use crate::views::{PortalShell, scroll_to_top_after};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let portal = use_context_provider(|| Signal::new(ctx.open_portal()));
    use_hash_reconciler(portal, ctx.timings().reconcile_period);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Analytics Education Portal" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                PortalShell {}
            }
        }
    }
}

/// Re-route on every period in which the address fragment names a view that
/// is not visible.
fn use_hash_reconciler(mut portal: Signal<Portal>, period: Duration) {
    use_future(move || async move {
        let mut ticker = tokio::time::interval(period.max(Duration::from_millis(1)));
        loop {
            ticker.tick().await;
            if !portal.peek().needs_reconcile() {
                continue;
            }
            let outcome = portal.write().reconcile();
            if let ReconcileOutcome::Corrected(switch) = outcome {
                scroll_to_top_after(switch.scroll_to_top_after);
            }
        }
    });
}
