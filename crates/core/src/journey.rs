//! Root view state: which viewer is shown, where each pager is, and the quiz.

use crate::model::CourseShape;
use crate::navigation::{LessonCursor, SlideCursor};
use crate::quiz::{Advance, QuizSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JourneyMode {
    Lessons,
    Story,
}

/// User input the root view reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JourneyEvent {
    NextLesson,
    PreviousLesson,
    StartStory,
    ReturnToLessons,
    NextSlide,
    PreviousSlide,
    StartQuiz,
    SelectAnswer(String),
    NextQuestion,
    PreviousQuestion,
    RetryQuiz,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Changed,
    Unchanged,
    /// Quiz advance requested before the current question was answered.
    Blocked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyState {
    shape: CourseShape,
    lesson: LessonCursor,
    slide: SlideCursor,
    show_story: bool,
    quiz: Option<QuizSession>,
}

impl JourneyState {
    #[must_use]
    pub fn new(shape: CourseShape) -> Self {
        Self {
            shape,
            lesson: LessonCursor::default(),
            slide: SlideCursor::default(),
            show_story: false,
            quiz: None,
        }
    }

    /// Start on lesson `step` (clamped into range).
    #[must_use]
    pub fn starting_at(mut self, step: usize) -> Self {
        self.lesson = LessonCursor::at(step, self.shape.lessons);
        self
    }

    #[must_use]
    pub fn with_story_open(mut self, open: bool) -> Self {
        self.show_story = open;
        self
    }

    #[must_use]
    pub fn shape(&self) -> CourseShape {
        self.shape
    }

    #[must_use]
    pub fn mode(&self) -> JourneyMode {
        if self.show_story {
            JourneyMode::Story
        } else {
            JourneyMode::Lessons
        }
    }

    #[must_use]
    pub fn lesson(&self) -> LessonCursor {
        self.lesson
    }

    #[must_use]
    pub fn slide(&self) -> SlideCursor {
        self.slide
    }

    #[must_use]
    pub fn quiz(&self) -> Option<&QuizSession> {
        self.quiz.as_ref()
    }

    #[must_use]
    pub fn is_quiz_open(&self) -> bool {
        self.quiz.is_some()
    }

    /// The quiz can only be opened from the final lesson step.
    #[must_use]
    pub fn can_start_quiz(&self) -> bool {
        !self.show_story && self.lesson.is_last(self.shape.lessons)
    }

    /// Apply one event. Events that do not belong to the visible controls are ignored.
    pub fn apply(&mut self, event: JourneyEvent) -> Transition {
        let before = self.clone();
        let story = self.show_story;

        match event {
            JourneyEvent::NextLesson if !story => {
                self.lesson = self.lesson.next(self.shape.lessons);
            }
            JourneyEvent::PreviousLesson if !story => {
                self.lesson = self.lesson.previous();
            }
            JourneyEvent::StartStory => self.show_story = true,
            JourneyEvent::ReturnToLessons => self.show_story = false,
            JourneyEvent::NextSlide if story => {
                self.slide = self.slide.next(self.shape.slides);
            }
            JourneyEvent::PreviousSlide if story => {
                self.slide = self.slide.previous(self.shape.slides);
            }
            JourneyEvent::StartQuiz if self.can_start_quiz() => {
                if self.quiz.is_none() {
                    self.quiz = Some(QuizSession::new(self.shape.questions));
                }
            }
            JourneyEvent::SelectAnswer(answer) => {
                if let Some(quiz) = self.quiz.as_mut() {
                    quiz.select_answer(answer);
                }
            }
            JourneyEvent::NextQuestion => {
                if let Some(quiz) = self.quiz.as_mut() {
                    if quiz.advance() == Advance::Blocked && !quiz.is_completed() {
                        return Transition::Blocked;
                    }
                }
            }
            JourneyEvent::PreviousQuestion => {
                if let Some(quiz) = self.quiz.as_mut() {
                    quiz.retreat();
                }
            }
            JourneyEvent::RetryQuiz => {
                if let Some(quiz) = self.quiz.as_mut() {
                    if quiz.is_completed() {
                        quiz.retry();
                    }
                }
            }
            _ => {}
        }

        if *self == before {
            Transition::Unchanged
        } else {
            Transition::Changed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::QuizPhase;

    const SHAPE: CourseShape = CourseShape {
        lessons: 5,
        slides: 8,
        questions: 5,
    };

    fn at_last_lesson() -> JourneyState {
        JourneyState::new(SHAPE).starting_at(4)
    }

    #[test]
    fn lessons_clamp_through_events() {
        let mut state = JourneyState::new(SHAPE);
        assert_eq!(state.apply(JourneyEvent::PreviousLesson), Transition::Unchanged);
        for _ in 0..10 {
            state.apply(JourneyEvent::NextLesson);
        }
        assert_eq!(state.lesson().index(), 4);
        assert_eq!(state.apply(JourneyEvent::NextLesson), Transition::Unchanged);
    }

    #[test]
    fn story_wraps_and_keeps_position() {
        let mut state = JourneyState::new(SHAPE);
        state.apply(JourneyEvent::StartStory);
        assert_eq!(state.mode(), JourneyMode::Story);
        state.apply(JourneyEvent::PreviousSlide);
        assert_eq!(state.slide().index(), 7);
        state.apply(JourneyEvent::NextSlide);
        state.apply(JourneyEvent::NextSlide);
        assert_eq!(state.slide().index(), 1);

        state.apply(JourneyEvent::ReturnToLessons);
        state.apply(JourneyEvent::StartStory);
        assert_eq!(state.slide().index(), 1);
    }

    #[test]
    fn lesson_controls_are_ignored_in_story_mode() {
        let mut state = JourneyState::new(SHAPE).with_story_open(true);
        assert_eq!(state.apply(JourneyEvent::NextLesson), Transition::Unchanged);
        assert_eq!(state.lesson().index(), 0);
    }

    #[test]
    fn slide_controls_are_ignored_in_lesson_mode() {
        let mut state = JourneyState::new(SHAPE);
        assert_eq!(state.apply(JourneyEvent::NextSlide), Transition::Unchanged);
    }

    #[test]
    fn quiz_only_opens_from_last_lesson() {
        let mut state = JourneyState::new(SHAPE);
        assert_eq!(state.apply(JourneyEvent::StartQuiz), Transition::Unchanged);
        assert!(!state.is_quiz_open());

        let mut state = at_last_lesson();
        assert_eq!(state.apply(JourneyEvent::StartQuiz), Transition::Changed);
        assert_eq!(state.quiz().map(QuizSession::phase), Some(QuizPhase::Answering(0)));
    }

    #[test]
    fn reopening_quiz_keeps_the_session() {
        let mut state = at_last_lesson();
        state.apply(JourneyEvent::StartQuiz);
        state.apply(JourneyEvent::SelectAnswer("a".to_string()));
        state.apply(JourneyEvent::NextQuestion);
        assert_eq!(state.apply(JourneyEvent::StartQuiz), Transition::Unchanged);
        assert_eq!(state.quiz().map(QuizSession::current_index), Some(1));
    }

    #[test]
    fn unanswered_advance_is_blocked() {
        let mut state = at_last_lesson();
        state.apply(JourneyEvent::StartQuiz);
        assert_eq!(state.apply(JourneyEvent::NextQuestion), Transition::Blocked);
        state.apply(JourneyEvent::SelectAnswer("a".to_string()));
        assert_eq!(state.apply(JourneyEvent::NextQuestion), Transition::Changed);
    }

    #[test]
    fn quiz_survives_story_toggle() {
        let mut state = at_last_lesson();
        state.apply(JourneyEvent::StartQuiz);
        state.apply(JourneyEvent::SelectAnswer("a".to_string()));
        state.apply(JourneyEvent::StartStory);
        state.apply(JourneyEvent::ReturnToLessons);
        assert_eq!(state.quiz().and_then(QuizSession::current_selection), Some("a"));
    }

    #[test]
    fn retry_only_applies_to_results() {
        let mut state = at_last_lesson();
        state.apply(JourneyEvent::StartQuiz);
        state.apply(JourneyEvent::SelectAnswer("a".to_string()));
        assert_eq!(state.apply(JourneyEvent::RetryQuiz), Transition::Unchanged);

        for _ in 0..5 {
            state.apply(JourneyEvent::SelectAnswer("a".to_string()));
            state.apply(JourneyEvent::NextQuestion);
        }
        assert_eq!(state.quiz().map(QuizSession::phase), Some(QuizPhase::Results));
        assert_eq!(state.apply(JourneyEvent::RetryQuiz), Transition::Changed);
        assert_eq!(state.quiz(), Some(&QuizSession::new(5)));
    }

    #[test]
    fn quiz_events_without_quiz_are_ignored() {
        let mut state = JourneyState::new(SHAPE);
        assert_eq!(
            state.apply(JourneyEvent::SelectAnswer("a".to_string())),
            Transition::Unchanged
        );
        assert_eq!(state.apply(JourneyEvent::NextQuestion), Transition::Unchanged);
    }
}
