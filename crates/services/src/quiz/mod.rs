mod engine;
mod progress;
mod review;
mod session;

// Public API of the quiz subsystem.
pub use engine::{
    AdvanceOutcome, AnswerFeedback, AnswerOutcome, Certificate, OptionMark, PendingAdvance,
    PendingCertificate, QuizEngine, QuizResults, QuizState,
};
pub use progress::QuizProgress;
pub use review::{ReviewItem, review_items};
pub use session::{AnsweredQuestion, QuizSession};
