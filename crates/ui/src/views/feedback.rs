use dioxus::prelude::*;
use services::submission::rating_label;
use services::{Portal, SubmissionControl, SubmissionState};

use crate::context::AppContext;

const DEFAULT_RATING: u8 = 5;

/// Content feedback for the loaded lesson. Hidden without an endpoint.
#[component]
pub fn FeedbackForm() -> Element {
    let ctx = use_context::<AppContext>();
    let mut portal = use_context::<Signal<Portal>>();
    let mut rating = use_signal(|| DEFAULT_RATING);
    let mut notes = use_signal(String::new);

    let submissions = ctx.submissions();
    if !submissions.feedback_enabled() {
        return rsx! {};
    }
    let base = ctx.page_base().clone();
    let control = *portal.read().lessons().feedback_form();
    let label = rating_label(rating());

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !portal.write().lessons_mut().feedback_form_mut().begin() {
            return;
        }
        let (page, lesson) = {
            let portal = portal.read();
            (portal.page_href(&base), portal.lessons().current_id().cloned())
        };
        let submissions = submissions.clone();
        let text = notes();
        let value = rating();
        spawn(async move {
            let result = submissions
                .submit_feedback(&page, lesson.as_ref(), Some(value), &text)
                .await;
            portal
                .write()
                .lessons_mut()
                .feedback_form_mut()
                .finish(&result);
        });
    };

    rsx! {
        section { id: "feedback", class: "feedback",
            h3 { "Was this lesson helpful?" }
            if control.form_visible() {
                form { onsubmit: submit,
                    label { r#for: "feedback-rating",
                        "Rating: "
                        span { id: "feedback-rating-label", "{label}" }
                    }
                    input {
                        id: "feedback-rating",
                        r#type: "range",
                        min: "1",
                        max: "5",
                        value: "{rating}",
                        oninput: move |evt| {
                            if let Ok(value) = evt.value().parse::<u8>() {
                                rating.set(value);
                            }
                        },
                    }
                    textarea {
                        id: "feedback-notes",
                        placeholder: "What could be better?",
                        value: "{notes}",
                        oninput: move |evt| notes.set(evt.value()),
                    }
                    button { r#type: "submit", disabled: !control.enabled(),
                        if control.state() == SubmissionState::Sending { "Sending..." } else { "Send feedback" }
                    }
                }
                if control.state() == SubmissionState::Failed {
                    p { class: "notice error", role: "alert",
                        "Sorry, your feedback could not be sent. Please try again."
                    }
                }
            } else {
                p { id: "feedback-thanks", class: "thanks", "Thank you for your feedback!" }
            }
        }
    }
}

/// Request access to a locked deliverable.
#[component]
pub fn InterestPanel(deliverable: String) -> Element {
    let ctx = use_context::<AppContext>();
    let portal = use_context::<Signal<Portal>>();
    let mut control = use_signal(SubmissionControl::default);

    let submissions = ctx.submissions();
    if !submissions.interest_enabled() {
        return rsx! {};
    }
    let base = ctx.page_base().clone();
    let current = control();
    let requested = deliverable.clone();

    rsx! {
        aside { id: "interest", class: "upsell",
            h3 { "🔒 {deliverable}" }
            if current.form_visible() {
                button {
                    id: "interest-request",
                    disabled: !current.enabled(),
                    onclick: move |_| {
                        if !control.write().begin() {
                            return;
                        }
                        let page = portal.read().page_href(&base);
                        let submissions = submissions.clone();
                        let requested = requested.clone();
                        spawn(async move {
                            let result = submissions.capture_interest(&page, &requested).await;
                            control.write().finish(&result);
                        });
                    },
                    "Request access"
                }
                if current.state() == SubmissionState::Failed {
                    p { class: "notice error", role: "alert",
                        "Sorry, your request could not be sent. Please try again."
                    }
                }
            } else {
                p { class: "thanks", "Thanks! We will be in touch." }
            }
        }
    }
}
