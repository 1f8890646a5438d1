use std::time::Duration;

use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::clock_face;

#[component]
pub fn ClockWidget() -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();
    let mut face = use_signal(|| clock_face(&clock));

    use_future(move || async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(1));
        loop {
            ticker.tick().await;
            face.set(clock_face(&clock));
        }
    });

    let face = face();
    rsx! {
        div { class: "clock",
            span { id: "clock-date", "{face.date}" }
            span { id: "clock-time", "{face.time}" }
        }
    }
}
