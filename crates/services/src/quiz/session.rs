/// Record of one answered question, kept in answer order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsweredQuestion {
    pub prompt: String,
    pub chosen: String,
    pub correct: bool,
    pub correct_answer: String,
}

/// Ephemeral state of a single quiz attempt.
///
/// Invariants, with `answered == history.len()`:
/// `score <= answered <= total` and `current <= answered <= current + 1`.
/// `score <= current` holds except between an answer and its delayed advance,
/// when the just-answered question is scored but not yet stepped past.
/// A session is discarded, never archived, when its lesson is reloaded or left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    current: usize,
    score: usize,
    history: Vec<AnsweredQuestion>,
}

impl QuizSession {
    pub(crate) fn new() -> Self {
        Self {
            current: 0,
            score: 0,
            history: Vec::new(),
        }
    }

    /// Index of the question being shown (0-based).
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn history(&self) -> &[AnsweredQuestion] {
        &self.history
    }

    pub(crate) fn record(&mut self, answer: AnsweredQuestion) {
        if answer.correct {
            self.score += 1;
        }
        self.history.push(answer);
    }

    pub(crate) fn step(&mut self) {
        self.current += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(correct: bool) -> AnsweredQuestion {
        AnsweredQuestion {
            prompt: "Q".into(),
            chosen: "A".into(),
            correct,
            correct_answer: "A".into(),
        }
    }

    #[test]
    fn score_counts_only_correct_answers() {
        let mut session = QuizSession::new();
        session.record(answer(true));
        session.step();
        session.record(answer(false));
        session.step();

        assert_eq!(session.score(), 1);
        assert_eq!(session.current_index(), 2);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn score_leads_the_index_only_until_the_step() {
        let mut session = QuizSession::new();
        session.record(answer(true));
        assert_eq!(session.score(), 1);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.history().len(), session.current_index() + 1);

        session.step();
        assert!(session.score() <= session.current_index());
        assert_eq!(session.history().len(), session.current_index());
    }
}
