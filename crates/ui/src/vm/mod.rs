mod lesson_vm;
mod listing_vm;
mod markdown_vm;
mod quiz_vm;
mod time_fmt;

pub use lesson_vm::{LessonVm, LinkVm, NoteVm, map_lesson};
pub use listing_vm::{CourseCardVm, NewsItemVm, map_course_cards, map_news_items};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use quiz_vm::{OptionVm, QuizPhaseVm, ReviewVm, map_quiz};
pub use time_fmt::{ClockFaceVm, clock_face, format_clock_time, format_long_date, format_news_date};
