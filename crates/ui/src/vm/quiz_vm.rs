use services::{OptionMark, QuizEngine, QuizState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub text: String,
    pub class: &'static str,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewVm {
    pub number: usize,
    pub prompt: String,
    pub chosen: String,
    pub correct: bool,
    pub correct_answer: Option<String>,
}

/// What the quiz section shows.
#[derive(Clone, Debug, PartialEq)]
pub enum QuizPhaseVm {
    Intro {
        total: usize,
    },
    Question {
        progress_label: String,
        percent: f32,
        prompt: String,
        options: Vec<OptionVm>,
        feedback: Option<(&'static str, bool)>,
    },
    Results {
        score_line: String,
        certified: bool,
        review: Vec<ReviewVm>,
    },
}

fn option_class(mark: Option<OptionMark>) -> &'static str {
    match mark {
        None => "quiz-option",
        Some(OptionMark::Correct) => "quiz-option correct",
        Some(OptionMark::Incorrect) => "quiz-option incorrect",
        Some(OptionMark::Dimmed) => "quiz-option dimmed",
    }
}

#[must_use]
pub fn map_quiz(engine: &QuizEngine) -> QuizPhaseVm {
    match engine.state() {
        QuizState::Intro => QuizPhaseVm::Intro {
            total: engine.total(),
        },
        QuizState::InProgress { locked, .. } => {
            let feedback = engine.feedback();
            let (progress_label, percent) = engine
                .progress()
                .map_or_else(|| (String::new(), 0.0), |p| (p.label(), p.percent));
            let (prompt, options) = engine.current_question().map_or_else(
                || (String::new(), Vec::new()),
                |question| {
                    let options = question
                        .options()
                        .iter()
                        .enumerate()
                        .map(|(index, text)| OptionVm {
                            index,
                            text: text.clone(),
                            class: option_class(
                                feedback.and_then(|f| f.marks.get(index).copied()),
                            ),
                            disabled: locked,
                        })
                        .collect();
                    (question.prompt().to_string(), options)
                },
            );
            QuizPhaseVm::Question {
                progress_label,
                percent,
                prompt,
                options,
                feedback: feedback.map(|f| (f.message(), f.correct)),
            }
        }
        QuizState::Completed => {
            let Some(results) = engine.results() else {
                return QuizPhaseVm::Intro {
                    total: engine.total(),
                };
            };
            QuizPhaseVm::Results {
                score_line: format!("You scored {} out of {}", results.score, results.total),
                certified: results.certified,
                review: results
                    .review
                    .iter()
                    .map(|item| ReviewVm {
                        number: item.number,
                        prompt: item.prompt.clone(),
                        chosen: item.chosen.clone(),
                        correct: item.correct,
                        correct_answer: item.correct_answer.clone(),
                    })
                    .collect(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use portal_core::PortalTimings;
    use portal_core::model::{LessonDraft, QuestionDraft};
    use services::AnswerOutcome;

    use super::*;

    fn engine() -> QuizEngine {
        let lesson = LessonDraft {
            title: "GA4".into(),
            difficulty: "Beginner".into(),
            duration: 5,
            updated: "2025".into(),
            video: String::new(),
            objectives: Vec::new(),
            notes: Vec::new(),
            warning_panel: None,
            tags: Vec::new(),
            related: None,
            resources: None,
            quiz: Some(vec![
                QuestionDraft::new("One?", ["a", "b", "c"], 2),
                QuestionDraft::new("Two?", ["x", "y"], 0),
            ]),
        }
        .validate()
        .unwrap();
        QuizEngine::new(Arc::new(lesson), 1, &PortalTimings::immediate()).unwrap()
    }

    #[test]
    fn answered_question_marks_choice_and_dims_the_rest() {
        let mut engine = engine();
        engine.start();
        engine.answer(0);

        let QuizPhaseVm::Question {
            progress_label,
            options,
            feedback,
            ..
        } = map_quiz(&engine)
        else {
            panic!("expected question phase");
        };
        assert_eq!(progress_label, "Question 1 of 2");
        assert_eq!(feedback, Some(("Incorrect.", false)));
        let classes: Vec<_> = options.iter().map(|o| o.class).collect();
        assert_eq!(
            classes,
            ["quiz-option incorrect", "quiz-option dimmed", "quiz-option dimmed"]
        );
        assert!(options.iter().all(|o| o.disabled));
    }

    #[test]
    fn results_phase_lists_review() {
        let mut engine = engine();
        engine.start();
        for option in [2, 1] {
            let AnswerOutcome::Accepted { pending, .. } = engine.answer(option) else {
                panic!("answer rejected");
            };
            engine.advance(pending);
        }
        assert!(matches!(engine.results(), Some(results) if !results.certified));
        let QuizPhaseVm::Results {
            score_line, review, ..
        } = map_quiz(&engine)
        else {
            panic!("expected results phase");
        };
        assert_eq!(score_line, "You scored 1 out of 2");
        assert_eq!(review[1].correct_answer.as_deref(), Some("x"));
    }
}
