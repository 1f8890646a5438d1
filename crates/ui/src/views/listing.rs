use dioxus::prelude::*;
use portal_core::model::{Difficulty, ViewId};
use services::listing::news_topics;
use services::{CourseQuery, CourseSort, NewsQuery, NewsSort, Portal};

use super::navigate;
use crate::context::AppContext;
use crate::vm::{CourseCardVm, NewsItemVm, format_news_date, map_course_cards, map_news_items};

const ALL: &str = "All";

#[component]
pub fn CourseListing() -> Element {
    let ctx = use_context::<AppContext>();
    let mut query = use_signal(CourseQuery::default);

    let manifest = ctx.manifest();
    let current = query.read().clone();
    let cards = map_course_cards(&current.apply(manifest.courses()));
    let count = cards.len();
    let difficulty = current.difficulty.map_or(ALL, Difficulty::label);

    rsx! {
        div { class: "listing courses",
            h2 { "Courses" }
            div { class: "filters",
                input {
                    id: "course-search",
                    r#type: "search",
                    placeholder: "Search by title or tag",
                    value: "{current.search}",
                    oninput: move |evt| query.write().search = evt.value(),
                }
                select {
                    id: "course-difficulty",
                    value: difficulty,
                    onchange: move |evt| query.write().difficulty = Difficulty::parse(&evt.value()),
                    option { value: ALL, "All levels" }
                    for tier in Difficulty::ALL {
                        option { key: "{tier}", value: tier.label(), {tier.label()} }
                    }
                }
                select {
                    id: "course-sort",
                    value: current.sort.key(),
                    onchange: move |evt| {
                        if let Ok(sort) = evt.value().parse::<CourseSort>() {
                            query.write().sort = sort;
                        }
                    },
                    for sort in CourseSort::ALL {
                        option { key: "{sort:?}", value: sort.key(), {sort.label()} }
                    }
                }
                button { id: "course-clear", onclick: move |_| query.write().clear_filters(), "Clear filters" }
            }

            if count == 0 {
                p { class: "empty", "No courses match your filters." }
            } else {
                div { class: "course-grid",
                    for card in cards {
                        CourseTile { key: "{card.target}", card: card.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn CourseTile(card: CourseCardVm) -> Element {
    let portal = use_context::<Signal<Portal>>();
    let target = card.target.clone();

    rsx! {
        article {
            class: "course-card",
            tabindex: "0",
            onclick: move |_| navigate(portal, &target),
            h3 { "{card.title}" }
            div { class: "card-meta",
                span { class: "difficulty", "{card.difficulty}" }
                if let Some(duration) = card.duration.clone() {
                    span { class: "duration", "{duration}" }
                }
            }
            div { class: "tags",
                for tag in card.tags.clone() {
                    span { key: "{tag}", class: "tag", "{tag}" }
                }
            }
        }
    }
}

#[component]
pub fn NewsArchive() -> Element {
    let ctx = use_context::<AppContext>();
    let mut query = use_signal(NewsQuery::default);

    let manifest = ctx.manifest();
    let topics = news_topics(manifest.news());
    let current = query.read().clone();
    let items = map_news_items(&current.apply(manifest.news()));
    let topic = current.topic.clone().unwrap_or_else(|| ALL.to_string());
    let sort = match current.sort {
        NewsSort::Newest => "newest",
        NewsSort::Oldest => "oldest",
    };

    rsx! {
        div { class: "listing news",
            h2 { "Newsletter archive" }
            div { class: "filters",
                input {
                    id: "news-search",
                    r#type: "search",
                    placeholder: "Search the archive",
                    value: "{current.search}",
                    oninput: move |evt| query.write().search = evt.value(),
                }
                select {
                    id: "news-topic",
                    value: "{topic}",
                    onchange: move |evt| {
                        let value = evt.value();
                        query.write().topic = (value != ALL).then_some(value);
                    },
                    option { value: ALL, "All topics" }
                    for topic in topics {
                        option { key: "{topic}", value: "{topic}", "{topic}" }
                    }
                }
                select {
                    id: "news-sort",
                    value: sort,
                    onchange: move |evt| {
                        if let Ok(sort) = evt.value().parse::<NewsSort>() {
                            query.write().sort = sort;
                        }
                    },
                    option { value: "newest", "Newest first" }
                    option { value: "oldest", "Oldest first" }
                }
            }

            if items.is_empty() {
                p { class: "empty", "No issues match your filters." }
            } else {
                ul { class: "news-list",
                    for item in items {
                        NewsRow { key: "{item.target}", item: item.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn NewsRow(item: NewsItemVm) -> Element {
    let portal = use_context::<Signal<Portal>>();
    let target = item.target.clone();

    rsx! {
        li { class: "news-item", onclick: move |_| navigate(portal, &target),
            time { "{item.date}" }
            h3 { "{item.title}" }
            p { "{item.summary}" }
        }
    }
}

/// Detail page for a newsletter issue.
#[component]
pub fn NewsDetail(id: ViewId) -> Element {
    let ctx = use_context::<AppContext>();
    let manifest = ctx.manifest();
    let Some(item) = manifest.news().iter().find(|item| item.target == id) else {
        return rsx! {
            p { class: "empty", "This page has no content yet." }
        };
    };
    let date = format_news_date(item.date);

    rsx! {
        article { class: "news-detail",
            h2 { "{item.title}" }
            time { "{date}" }
            p { "{item.summary}" }
            div { class: "tags",
                for tag in item.tags.clone() {
                    span { key: "{tag}", class: "tag", "{tag}" }
                }
            }
        }
    }
}
