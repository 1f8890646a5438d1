use dioxus::prelude::*;
use services::Portal;

use super::{CertificateModal, FeedbackForm, InterestPanel, QuizSection, navigate};
use crate::vm::map_lesson;

/// The loaded lesson with its quiz, feedback form and certificate modal.
#[component]
pub fn LessonPage() -> Element {
    let portal = use_context::<Signal<Portal>>();
    let lesson = portal.read().lessons().lesson().cloned();
    let Some(lesson) = lesson else {
        return rsx! {
            p { class: "empty", "Lesson not available." }
        };
    };
    let vm = map_lesson(&lesson);
    let deliverable = format!("{} workbook", vm.title);

    rsx! {
        article { class: "lesson",
            header { class: "lesson-header",
                h2 { "{vm.title}" }
                div { class: "lesson-meta",
                    span { class: "difficulty", "{vm.difficulty}" }
                    span { class: "duration", "{vm.duration}" }
                    span { class: "updated", "{vm.updated}" }
                }
                div { class: "tags",
                    for tag in vm.tags.clone() {
                        span { key: "{tag}", class: "tag", "{tag}" }
                    }
                }
            }

            if let Some(media) = vm.media.clone() {
                div { class: "lesson-media",
                    iframe { src: "{media}", title: "{vm.title}", allowfullscreen: true }
                }
            }

            if !vm.objectives.is_empty() {
                section { class: "objectives",
                    h3 { "What you will learn" }
                    ul {
                        for objective in vm.objectives.clone() {
                            li { key: "{objective}", "{objective}" }
                        }
                    }
                }
            }

            for note in vm.notes.clone() {
                section { key: "{note.title}", class: "note",
                    h3 { "{note.title}" }
                    div { class: "note-body", dangerous_inner_html: "{note.html}" }
                }
            }

            if vm.show_warnings() {
                section { id: "warning-panel", class: "warnings",
                    h3 { "Common pitfalls" }
                    table {
                        thead {
                            tr {
                                th { "Type" }
                                th { "Cause" }
                                th { "Solution" }
                            }
                        }
                        tbody {
                            for row in vm.warnings.clone() {
                                tr { key: "{row.kind}-{row.cause}",
                                    td { "{row.kind}" }
                                    td { "{row.cause}" }
                                    td { "{row.solution}" }
                                }
                            }
                        }
                    }
                }
            }

            QuizSection {}

            if vm.show_related() {
                section { id: "related", class: "related",
                    h3 { "Related lessons" }
                    ul {
                        for (target, link) in vm.related.clone() {
                            li { key: "{target}",
                                a {
                                    href: "{link.href}",
                                    onclick: move |evt: MouseEvent| {
                                        evt.prevent_default();
                                        navigate(portal, &target);
                                    },
                                    i { class: "{link.icon}" }
                                    " {link.title}"
                                }
                            }
                        }
                    }
                }
            }

            if vm.show_resources() {
                section { id: "resources", class: "resources",
                    h3 { "Resources" }
                    ul {
                        for link in vm.resources.clone() {
                            li { key: "{link.href}",
                                a { href: "{link.href}", target: "_blank", rel: "noopener noreferrer",
                                    i { class: "{link.icon}" }
                                    " {link.title}"
                                }
                            }
                        }
                    }
                }
            }

            InterestPanel { deliverable }
            FeedbackForm {}
            CertificateModal {}
        }
    }
}
