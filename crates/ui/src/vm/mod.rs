mod lesson_vm;
mod quiz_vm;
mod story_vm;

pub use lesson_vm::{LessonVm, map_lesson};
pub use quiz_vm::{
    ChoiceVm, QuizQuestionVm, QuizResultsVm, QuizVm, ResultRowVm, feedback_message, map_quiz,
};
pub use story_vm::{StoryVm, map_story};
