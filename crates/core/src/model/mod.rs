mod ids;
mod lesson;
mod listing;
mod quiz;
mod view;

pub use ids::{ViewId, ViewIdError};
pub use lesson::{
    Difficulty, LessonData, LessonDraft, LessonError, NoteSection, RelatedLink, ResourceLink,
    ResourceLinkDraft, WarningRow,
};
pub use listing::{CourseCard, NewsItem};
pub use quiz::{Question, QuestionDraft, QuizDefinition, QuizError};
pub use view::{NavigationAffordance, ViewCategory, ViewSpec};
