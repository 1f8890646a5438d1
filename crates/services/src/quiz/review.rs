use super::AnsweredQuestion;

/// One line of the results review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    /// 1-based.
    pub number: usize,
    pub prompt: String,
    pub chosen: String,
    pub correct: bool,
    /// Only present for wrong answers.
    pub correct_answer: Option<String>,
}

#[must_use]
pub fn review_items(history: &[AnsweredQuestion]) -> Vec<ReviewItem> {
    history
        .iter()
        .enumerate()
        .map(|(idx, answer)| ReviewItem {
            number: idx + 1,
            prompt: answer.prompt.clone(),
            chosen: answer.chosen.clone(),
            correct: answer.correct,
            correct_answer: (!answer.correct).then(|| answer.correct_answer.clone()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_answer_text_only_for_mistakes() {
        let history = vec![
            AnsweredQuestion {
                prompt: "One".into(),
                chosen: "a".into(),
                correct: true,
                correct_answer: "a".into(),
            },
            AnsweredQuestion {
                prompt: "Two".into(),
                chosen: "b".into(),
                correct: false,
                correct_answer: "c".into(),
            },
        ];
        let items = review_items(&history);
        assert_eq!(items[0].number, 1);
        assert_eq!(items[0].correct_answer, None);
        assert_eq!(items[1].correct_answer.as_deref(), Some("c"));
    }
}
