use dioxus::prelude::*;
use services::{AdvanceOutcome, AnswerOutcome, Portal};

use crate::vm::{QuizPhaseVm, map_quiz};

#[component]
pub fn QuizSection() -> Element {
    let mut portal = use_context::<Signal<Portal>>();
    let phase = portal.read().lessons().quiz().map(map_quiz);
    // No quiz, or an empty one: the section stays hidden.
    let Some(phase) = phase else {
        return rsx! {};
    };

    let body = match phase {
        QuizPhaseVm::Intro { total } => rsx! {
            p { "Test what you learned with {total} quick questions." }
            button {
                id: "quiz-start",
                class: "primary",
                onclick: move |_| {
                    portal.write().start_quiz();
                },
                "Start Quiz"
            }
        },
        QuizPhaseVm::Question {
            progress_label,
            percent,
            prompt,
            options,
            feedback,
        } => {
            let width = format!("width: {percent:.0}%");
            rsx! {
                div { class: "quiz-progress",
                    span { id: "quiz-progress-label", "{progress_label}" }
                    div { class: "quiz-progress-bar",
                        div { class: "fill", style: "{width}" }
                    }
                }
                p { class: "quiz-prompt", "{prompt}" }
                div { class: "quiz-options",
                    for option in options {
                        button {
                            key: "{option.index}",
                            class: option.class,
                            disabled: option.disabled,
                            onclick: move |_| answer(portal, option.index),
                            "{option.text}"
                        }
                    }
                }
                if let Some((message, correct)) = feedback {
                    p {
                        id: "quiz-feedback",
                        class: if correct { "quiz-feedback correct" } else { "quiz-feedback incorrect" },
                        "{message}"
                    }
                }
            }
        }
        QuizPhaseVm::Results {
            score_line,
            certified,
            review,
        } => rsx! {
            p { id: "quiz-score", class: "quiz-score", "{score_line}" }
            if certified {
                p { class: "quiz-certified", "Perfect score! Your certificate is on its way." }
            } else {
                p { class: "quiz-retry-hint", "Review your answers below and try again for a certificate." }
            }
            ol { class: "quiz-review",
                for item in review {
                    li {
                        key: "{item.number}",
                        class: if item.correct { "review-item correct" } else { "review-item incorrect" },
                        p { class: "review-prompt", "{item.number}. {item.prompt}" }
                        p { "Your answer: {item.chosen}" }
                        if let Some(correct_answer) = item.correct_answer.clone() {
                            p { class: "review-correct", "Correct answer: {correct_answer}" }
                        }
                    }
                }
            }
            button {
                id: "quiz-restart",
                onclick: move |_| portal.write().restart_quiz(),
                "Retake quiz"
            }
        },
    };

    rsx! {
        section { id: "quiz", class: "quiz",
            h3 { "Knowledge check" }
            {body}
        }
    }
}

/// Record the answer, then advance (and present the certificate) after the
/// configured delays. Tokens from a replaced session are ignored.
fn answer(mut portal: Signal<Portal>, option: usize) {
    let outcome = portal.write().answer(option);
    let AnswerOutcome::Accepted { pending, .. } = outcome else {
        return;
    };

    spawn(async move {
        tokio::time::sleep(pending.delay).await;
        let advanced = portal.write().advance(pending);
        let AdvanceOutcome::Completed(results) = advanced else {
            return;
        };
        let Some(certificate) = results.certificate else {
            return;
        };
        tokio::time::sleep(certificate.delay).await;
        let shown = portal.write().present_certificate(certificate).is_some();
        tracing::debug!(shown, "certificate delay elapsed");
    });
}
