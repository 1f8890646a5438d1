use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use portal_core::PortalTimings;
use portal_core::model::{LessonData, Question, QuizDefinition};

use super::{AnsweredQuestion, QuizProgress, QuizSession, ReviewItem, review_items};

//
// ─── STATES AND OUTCOMES ───────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizState {
    Intro,
    /// `locked` once the question has been answered; it stays on screen until
    /// the pending advance fires.
    InProgress { index: usize, locked: bool },
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Correct,
    Incorrect,
    Dimmed,
}

/// Immediate feedback for an answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub question: usize,
    pub chosen: usize,
    pub correct: bool,
    /// One mark per option: the chosen option is marked, the rest are dimmed.
    pub marks: Vec<OptionMark>,
}

impl AnswerFeedback {
    #[must_use]
    pub fn message(&self) -> &'static str {
        if self.correct { "Correct!" } else { "Incorrect." }
    }
}

/// Delayed transition to the next question. Only applies to the session it
/// was issued for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingAdvance {
    pub generation: u64,
    pub question: usize,
    pub delay: Duration,
}

/// Delayed presentation of the certificate after results render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingCertificate {
    pub generation: u64,
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Accepted {
        feedback: AnswerFeedback,
        pending: PendingAdvance,
    },
    /// The question is locked; the call changed nothing.
    AlreadyAnswered,
    NotInProgress,
    InvalidOption,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResults {
    pub score: usize,
    pub total: usize,
    pub certified: bool,
    pub review: Vec<ReviewItem>,
    pub certificate: Option<PendingCertificate>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceOutcome {
    Next { index: usize, progress: QuizProgress },
    Completed(QuizResults),
    /// The token belongs to a discarded session or an already applied step.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub lesson_title: String,
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Drives one lesson's quiz from intro to results.
///
/// Only built for lessons with at least one question.
pub struct QuizEngine {
    lesson: Arc<LessonData>,
    quiz: QuizDefinition,
    generation: u64,
    state: QuizState,
    session: Option<QuizSession>,
    feedback: Option<AnswerFeedback>,
    results: Option<QuizResults>,
    certificate: Option<Certificate>,
    advance_delay: Duration,
    certificate_delay: Duration,
}

impl QuizEngine {
    /// Build an engine in `Intro`. Returns `None` when the lesson has no quiz
    /// or an empty one.
    #[must_use]
    pub fn new(lesson: Arc<LessonData>, generation: u64, timings: &PortalTimings) -> Option<Self> {
        let quiz = lesson.playable_quiz()?.clone();
        Some(Self {
            lesson,
            quiz,
            generation,
            state: QuizState::Intro,
            session: None,
            feedback: None,
            results: None,
            certificate: None,
            advance_delay: timings.answer_advance_delay,
            certificate_delay: timings.certificate_delay,
        })
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.state
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.quiz.len()
    }

    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    /// The question on screen while in progress.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            QuizState::InProgress { index, .. } => self.quiz.question(index),
            _ => None,
        }
    }

    /// Feedback for the current question once it has been answered.
    #[must_use]
    pub fn feedback(&self) -> Option<&AnswerFeedback> {
        match self.state {
            QuizState::InProgress { locked: true, .. } => self.feedback.as_ref(),
            _ => None,
        }
    }

    /// Hidden outside of `InProgress`.
    #[must_use]
    pub fn progress(&self) -> Option<QuizProgress> {
        match self.state {
            QuizState::InProgress { index, .. } => QuizProgress::new(index, self.total()),
            _ => None,
        }
    }

    #[must_use]
    pub fn results(&self) -> Option<&QuizResults> {
        self.results.as_ref()
    }

    /// The certificate, once presented and until closed.
    #[must_use]
    pub fn certificate(&self) -> Option<&Certificate> {
        self.certificate.as_ref()
    }

    /// Begin the attempt. Only valid from `Intro`; returns whether it started.
    pub fn start(&mut self) -> bool {
        if self.state != QuizState::Intro {
            return false;
        }
        self.session = Some(QuizSession::new());
        self.state = QuizState::InProgress {
            index: 0,
            locked: false,
        };
        tracing::debug!(generation = self.generation, "quiz started");
        true
    }

    /// Answer the current question. The first answer locks the question;
    /// later calls for the same question are no-ops.
    pub fn answer(&mut self, option: usize) -> AnswerOutcome {
        let index = match self.state {
            QuizState::InProgress { locked: true, .. } => return AnswerOutcome::AlreadyAnswered,
            QuizState::InProgress { index, locked: false } => index,
            QuizState::Intro | QuizState::Completed => return AnswerOutcome::NotInProgress,
        };

        let Some(question) = self.quiz.question(index) else {
            return AnswerOutcome::NotInProgress;
        };
        let Some(chosen) = question.option(option) else {
            return AnswerOutcome::InvalidOption;
        };

        let correct = question.is_correct(option);
        let record = AnsweredQuestion {
            prompt: question.prompt().to_owned(),
            chosen: chosen.to_owned(),
            correct,
            correct_answer: question.correct_text().to_owned(),
        };
        let marks = (0..question.options().len())
            .map(|idx| match (idx == option, correct) {
                (true, true) => OptionMark::Correct,
                (true, false) => OptionMark::Incorrect,
                (false, _) => OptionMark::Dimmed,
            })
            .collect();

        let Some(session) = self.session.as_mut() else {
            return AnswerOutcome::NotInProgress;
        };
        session.record(record);
        self.state = QuizState::InProgress {
            index,
            locked: true,
        };

        let feedback = AnswerFeedback {
            question: index,
            chosen: option,
            correct,
            marks,
        };
        self.feedback = Some(feedback.clone());

        AnswerOutcome::Accepted {
            feedback,
            pending: PendingAdvance {
                generation: self.generation,
                question: index,
                delay: self.advance_delay,
            },
        }
    }

    /// Apply a delayed advance issued by [`QuizEngine::answer`].
    pub fn advance(&mut self, token: PendingAdvance) -> AdvanceOutcome {
        if token.generation != self.generation {
            return AdvanceOutcome::Stale;
        }
        let QuizState::InProgress {
            index,
            locked: true,
        } = self.state
        else {
            return AdvanceOutcome::Stale;
        };
        if index != token.question {
            return AdvanceOutcome::Stale;
        }
        let total = self.total();
        let Some(session) = self.session.as_mut() else {
            return AdvanceOutcome::Stale;
        };

        session.step();
        self.feedback = None;
        let next = index + 1;
        if next < total {
            self.state = QuizState::InProgress {
                index: next,
                locked: false,
            };
            return match QuizProgress::new(next, total) {
                Some(progress) => AdvanceOutcome::Next {
                    index: next,
                    progress,
                },
                None => AdvanceOutcome::Stale,
            };
        }

        self.state = QuizState::Completed;
        let score = session.score();
        let certified = score == total;
        let results = QuizResults {
            score,
            total,
            certified,
            review: review_items(session.history()),
            certificate: certified.then_some(PendingCertificate {
                generation: self.generation,
                delay: self.certificate_delay,
            }),
        };
        tracing::info!(
            lesson = %self.lesson.title,
            score,
            total,
            certified,
            "quiz completed"
        );
        self.results = Some(results.clone());
        AdvanceOutcome::Completed(results)
    }

    /// Present the certificate once its delay has passed. Ignored for a
    /// discarded session or an uncertified result.
    pub fn present_certificate(&mut self, token: PendingCertificate) -> Option<&Certificate> {
        if token.generation != self.generation {
            return None;
        }
        let certified = self.results.as_ref().is_some_and(|results| results.certified);
        if self.state != QuizState::Completed || !certified {
            return None;
        }
        self.certificate = Some(Certificate {
            lesson_title: self.lesson.title.clone(),
        });
        self.certificate.as_ref()
    }

    pub fn close_certificate(&mut self) {
        self.certificate = None;
    }
}

impl fmt::Debug for QuizEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizEngine")
            .field("lesson", &self.lesson.title)
            .field("generation", &self.generation)
            .field("state", &self.state)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
