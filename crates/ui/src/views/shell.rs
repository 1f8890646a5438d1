use dioxus::prelude::*;
use portal_core::model::{ViewCategory, ViewId, ViewSpec};
use services::Portal;

use super::{ClockWidget, CourseListing, LessonPage, NewsArchive, NewsDetail, navigate};
use crate::context::AppContext;

#[derive(Clone, Debug, PartialEq, Eq)]
struct ViewSlot {
    spec: ViewSpec,
    visible: bool,
}

/// Header, navigation affordances and one section per registered view.
/// Only the visible section renders content.
#[component]
pub fn PortalShell() -> Element {
    let ctx = use_context::<AppContext>();
    let mut portal = use_context::<Signal<Portal>>();
    let landing = ctx.landing_view();

    let (affordance, slots) = {
        let portal = portal.read();
        let registry = portal.router().registry();
        let slots: Vec<ViewSlot> = registry
            .views()
            .iter()
            .map(|spec| ViewSlot {
                spec: spec.clone(),
                visible: registry.is_visible(&spec.id),
            })
            .collect();
        (portal.affordance(), slots)
    };
    let listings: Vec<ViewId> = slots
        .iter()
        .filter(|slot| slot.spec.category.is_listing())
        .map(|slot| slot.spec.id.clone())
        .collect();

    rsx! {
        div { class: "portal",
            header { class: "portal-header",
                h1 { "Analytics Education Portal" }
                div { class: "history-controls",
                    button {
                        id: "history-back",
                        title: "Back",
                        onclick: move |_| {
                            portal.write().history_back();
                        },
                        "‹"
                    }
                    button {
                        id: "history-forward",
                        title: "Forward",
                        onclick: move |_| {
                            portal.write().history_forward();
                        },
                        "›"
                    }
                }
                ClockWidget {}
            }

            nav { id: "listing-nav", class: "listing-nav", hidden: !affordance.listing_nav_visible,
                for id in listings {
                    ListingTab { key: "{id}", is_landing: landing.as_ref() == Some(&id), id: id.clone() }
                }
            }

            nav { id: "detail-nav", class: "detail-nav", hidden: !affordance.detail_nav_visible,
                if let Some(landing) = landing.clone() {
                    button {
                        id: "back-to-overview",
                        onclick: move |_| navigate(portal, &landing),
                        "← Back to overview"
                    }
                }
            }

            main { class: "views",
                for slot in slots {
                    section {
                        key: "{slot.spec.id}",
                        id: "{slot.spec.id}",
                        class: "view",
                        hidden: !slot.visible,
                        if slot.visible {
                            ViewBody { spec: slot.spec.clone(), is_landing: landing.as_ref() == Some(&slot.spec.id) }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ListingTab(id: ViewId, is_landing: bool) -> Element {
    let portal = use_context::<Signal<Portal>>();
    let active = portal.read().router().registry().is_visible(&id);
    let label = if is_landing { "Courses" } else { "Newsletter archive" };
    let class = if active { "tab active" } else { "tab" };

    rsx! {
        button { class, onclick: move |_| navigate(portal, &id), "{label}" }
    }
}

#[component]
fn ViewBody(spec: ViewSpec, is_landing: bool) -> Element {
    let ctx = use_context::<AppContext>();
    let has_lesson = storage::LessonCatalog::contains(ctx.manifest().catalog(), &spec.id);

    match spec.category {
        ViewCategory::Listing if is_landing => rsx! { CourseListing {} },
        ViewCategory::Listing => rsx! { NewsArchive {} },
        ViewCategory::Detail if has_lesson => rsx! { LessonPage {} },
        ViewCategory::Detail => rsx! { NewsDetail { id: spec.id.clone() } },
    }
}
