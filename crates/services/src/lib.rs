#![forbid(unsafe_code)]

pub mod error;
pub mod lesson;
pub mod listing;
pub mod navigation;
pub mod portal;
pub mod quiz;
pub mod submission;

pub use portal_core::{Clock, PortalTimings};

pub use error::SubmissionError;
pub use lesson::{LessonLoader, LessonWorkspace};
pub use listing::{CourseQuery, CourseSort, NewsQuery, NewsSort};
pub use navigation::{AddressBar, HashReconciler, ReconcileOutcome, Router, SwitchOutcome, ViewRegistry};
pub use portal::Portal;
pub use quiz::{
    AdvanceOutcome, AnswerFeedback, AnswerOutcome, Certificate, OptionMark, PendingAdvance,
    PendingCertificate, QuizEngine, QuizProgress, QuizResults, QuizState, ReviewItem,
};
pub use submission::{
    SubmissionConfig, SubmissionControl, SubmissionService, SubmissionState, SubmissionTransport,
};
