mod lesson;
pub use lesson::{Lesson, LessonCreate, LessonUpdate};
