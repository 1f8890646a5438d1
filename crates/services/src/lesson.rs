//! The lesson-loading path: which lesson is on screen, its quiz engine and the
//! state of its feedback form.

use std::sync::Arc;

use portal_core::PortalTimings;
use portal_core::model::{LessonData, ViewId};

use crate::quiz::{
    AdvanceOutcome, AnswerOutcome, Certificate, PendingAdvance, PendingCertificate, QuizEngine,
};
use crate::submission::SubmissionControl;

/// Receives lessons as the router enters and leaves them.
pub trait LessonLoader {
    fn load_lesson(&mut self, id: &ViewId, lesson: Arc<LessonData>);

    /// The router switched to a view without a lesson. Any running attempt
    /// must stop accepting delayed transitions.
    fn unload_lesson(&mut self);
}

#[derive(Debug)]
pub struct LessonWorkspace {
    timings: PortalTimings,
    current: Option<(ViewId, Arc<LessonData>)>,
    quiz: Option<QuizEngine>,
    feedback: SubmissionControl,
    next_generation: u64,
}

impl Default for LessonWorkspace {
    fn default() -> Self {
        Self::new(PortalTimings::default())
    }
}

impl LessonWorkspace {
    #[must_use]
    pub fn new(timings: PortalTimings) -> Self {
        Self {
            timings,
            current: None,
            quiz: None,
            feedback: SubmissionControl::default(),
            next_generation: 1,
        }
    }

    #[must_use]
    pub fn current_id(&self) -> Option<&ViewId> {
        self.current.as_ref().map(|(id, _)| id)
    }

    #[must_use]
    pub fn lesson(&self) -> Option<&Arc<LessonData>> {
        self.current.as_ref().map(|(_, lesson)| lesson)
    }

    /// The quiz engine; `None` when no lesson is loaded or its quiz is empty.
    #[must_use]
    pub fn quiz(&self) -> Option<&QuizEngine> {
        self.quiz.as_ref()
    }

    #[must_use]
    pub fn feedback_form(&self) -> &SubmissionControl {
        &self.feedback
    }

    pub fn feedback_form_mut(&mut self) -> &mut SubmissionControl {
        &mut self.feedback
    }

    pub fn start_quiz(&mut self) -> bool {
        self.quiz.as_mut().is_some_and(QuizEngine::start)
    }

    pub fn answer(&mut self, option: usize) -> AnswerOutcome {
        match self.quiz.as_mut() {
            Some(engine) => engine.answer(option),
            None => AnswerOutcome::NotInProgress,
        }
    }

    pub fn advance(&mut self, token: PendingAdvance) -> AdvanceOutcome {
        match self.quiz.as_mut() {
            Some(engine) => engine.advance(token),
            None => AdvanceOutcome::Stale,
        }
    }

    pub fn present_certificate(&mut self, token: PendingCertificate) -> Option<&Certificate> {
        self.quiz
            .as_mut()
            .and_then(|engine| engine.present_certificate(token))
    }

    pub fn close_certificate(&mut self) {
        if let Some(engine) = self.quiz.as_mut() {
            engine.close_certificate();
        }
    }

    /// Discard the current attempt and return the quiz to its intro.
    pub fn restart_quiz(&mut self) {
        if let Some((id, lesson)) = self.current.clone() {
            self.load_lesson(&id, lesson);
        }
    }
}

impl LessonLoader for LessonWorkspace {
    fn load_lesson(&mut self, id: &ViewId, lesson: Arc<LessonData>) {
        let generation = self.next_generation;
        self.next_generation += 1;

        self.quiz = QuizEngine::new(Arc::clone(&lesson), generation, &self.timings);
        self.feedback.reset();
        tracing::info!(
            lesson = %id,
            title = %lesson.title,
            quiz = self.quiz.is_some(),
            generation,
            "lesson loaded"
        );
        self.current = Some((id.clone(), lesson));
    }

    fn unload_lesson(&mut self) {
        let Some((id, _)) = self.current.take() else {
            return;
        };
        let generation = self.quiz.take().map(|engine| engine.generation());
        self.feedback.reset();
        tracing::debug!(lesson = %id, ?generation, "lesson unloaded");
    }
}
