pub mod content;
mod course;
mod page;
mod question;

pub use content::{
    Accent, Block, Cell, DialogueLine, Document, DocumentError, Highlight, Label, ListItem, Table,
    Tone,
};
pub use course::{Course, CourseDraft, CourseError, CourseShape};
pub use page::{Lesson, LessonStep, Page, PageDraft, PageError, Story, StorySlide};
pub use question::{QuizQuestion, QuizQuestionDraft, QuizQuestionError};
