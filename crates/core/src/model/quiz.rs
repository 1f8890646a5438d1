use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── DRAFTS ────────────────────────────────────────────────────────────────────
//

/// Unvalidated question as authored in the content provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    #[serde(rename = "q")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(rename = "correct")]
    pub correct_option: usize,
}

impl QuestionDraft {
    pub fn new(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct_option: usize,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_option,
        }
    }

    /// Validate the draft into a `Question`.
    ///
    /// `position` is only used to report which question failed.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyOptions` if there are no options, or
    /// `QuizError::CorrectIndexOutOfRange` if the correct index does not
    /// address an option.
    pub fn validate(self, position: usize) -> Result<Question, QuizError> {
        if self.options.is_empty() {
            return Err(QuizError::EmptyOptions { question: position });
        }
        if self.correct_option >= self.options.len() {
            return Err(QuizError::CorrectIndexOutOfRange {
                question: position,
                index: self.correct_option,
                len: self.options.len(),
            });
        }
        Ok(Question {
            prompt: self.prompt,
            options: self.options,
            correct_option: self.correct_option,
        })
    }
}

//
// ─── VALIDATED TYPES ───────────────────────────────────────────────────────────
//

/// A multiple-choice question whose correct index is known to be in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_option: usize,
}

impl Question {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    #[must_use]
    pub fn correct_text(&self) -> &str {
        &self.options[self.correct_option]
    }

    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }
}

/// Ordered quiz. May be empty, in which case the quiz is never started.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizDefinition {
    questions: Vec<Question>,
}

impl QuizDefinition {
    /// Validate every draft, failing on the first malformed question.
    ///
    /// # Errors
    ///
    /// Returns the `QuizError` of the first invalid question.
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Result<Self, QuizError> {
        let questions = drafts
            .into_iter()
            .enumerate()
            .map(|(idx, draft)| draft.validate(idx))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { questions })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("question {question} has no options")]
    EmptyOptions { question: usize },
    #[error("question {question} marks option {index} correct but has only {len} options")]
    CorrectIndexOutOfRange {
        question: usize,
        index: usize,
        len: usize,
    },
}
