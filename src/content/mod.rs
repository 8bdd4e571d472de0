pub mod resolve;
pub mod schema;
pub mod store;

pub use resolve::{MAX_QUIZ_SETS, resolve_quiz_sets};
pub use schema::{LessonContent, QuizSet};
