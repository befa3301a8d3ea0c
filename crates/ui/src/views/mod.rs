mod document;
mod journey;
mod lesson;
mod quiz;
mod story;

#[cfg(test)]
mod intent_smoke;
#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use document::DocumentView;
pub use journey::JourneyView;
pub use lesson::LessonView;
pub use quiz::QuizPanel;
pub use story::StoryView;
