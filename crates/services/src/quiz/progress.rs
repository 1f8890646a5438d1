/// Progress indicator shown while a question is on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizProgress {
    /// 1-based position of the current question.
    pub position: usize,
    pub total: usize,
    /// Share of the quiz reached, `0.0..=100.0`.
    pub percent: f32,
}

impl QuizProgress {
    /// Progress for question `index` of `total`; `None` for an empty quiz.
    #[must_use]
    pub fn new(index: usize, total: usize) -> Option<Self> {
        if total == 0 {
            return None;
        }
        let position = (index + 1).min(total);
        #[allow(clippy::cast_precision_loss)]
        let percent = position as f32 / total as f32 * 100.0;
        Some(Self {
            position,
            total,
            percent,
        })
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("Question {} of {}", self.position, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_question_quiz_has_no_progress() {
        assert_eq!(QuizProgress::new(0, 0), None);
    }

    #[test]
    fn progress_counts_the_current_question() {
        let progress = QuizProgress::new(0, 4).unwrap();
        assert_eq!(progress.label(), "Question 1 of 4");
        assert!((progress.percent - 25.0).abs() < f32::EPSILON);

        let last = QuizProgress::new(3, 4).unwrap();
        assert!((last.percent - 100.0).abs() < f32::EPSILON);
    }
}
