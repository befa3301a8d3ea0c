use std::sync::Arc;

use journey_core::model::{Course, LessonStep, QuizQuestion, StorySlide};
use journey_core::{
    JourneyEvent, JourneyMode, JourneyState, QuizPhase, QuizReport, QuizSession, Transition,
};

use super::service::StartOptions;

/// One learner's pass through the course: the static content plus the view state
/// that user events move around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneySession {
    course: Arc<Course>,
    state: JourneyState,
}

impl JourneySession {
    #[must_use]
    pub fn new(course: Arc<Course>, options: StartOptions) -> Self {
        let state = JourneyState::new(course.shape())
            .starting_at(options.lesson_step)
            .with_story_open(options.open_story);
        Self { course, state }
    }

    #[must_use]
    pub fn course(&self) -> &Course {
        &self.course
    }

    #[must_use]
    pub fn state(&self) -> &JourneyState {
        &self.state
    }

    #[must_use]
    pub fn mode(&self) -> JourneyMode {
        self.state.mode()
    }

    #[must_use]
    pub fn current_lesson(&self) -> &LessonStep {
        &self.course.lessons()[self.state.lesson().index()]
    }

    #[must_use]
    pub fn current_slide(&self) -> &StorySlide {
        &self.course.slides()[self.state.slide().index()]
    }

    #[must_use]
    pub fn quiz(&self) -> Option<&QuizSession> {
        self.state.quiz()
    }

    /// The question being answered, if the quiz is open and not finished.
    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.state.quiz()?.phase() {
            QuizPhase::Answering(index) => self.course.questions().get(index),
            QuizPhase::Results => None,
        }
    }

    #[must_use]
    pub fn report(&self) -> Option<QuizReport> {
        self.state.quiz()?.report(self.course.questions())
    }

    /// Apply a user event and report what happened to the view state.
    pub fn dispatch(&mut self, event: JourneyEvent) -> Transition {
        let was_completed = self.quiz().is_some_and(QuizSession::is_completed);
        let transition = self.state.apply(event.clone());

        tracing::debug!(
            ?event,
            ?transition,
            lesson = self.state.lesson().index(),
            slide = self.state.slide().index(),
            mode = ?self.state.mode(),
            "journey event"
        );

        if !was_completed {
            if let Some(report) = self.report() {
                tracing::info!(
                    correct = report.score.correct,
                    total = report.score.total,
                    band = ?report.band,
                    "quiz completed"
                );
            }
        }

        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journey::JourneyService;

    fn session() -> JourneySession {
        JourneyService::from_catalog()
            .unwrap()
            .start(StartOptions::default())
    }

    #[test]
    fn current_pages_follow_cursors() {
        let mut session = session();
        assert_eq!(session.current_lesson().title(), "データの正規化とは？");
        session.dispatch(JourneyEvent::NextLesson);
        assert_eq!(session.current_lesson().title(), "第1正規形");

        session.dispatch(JourneyEvent::StartStory);
        session.dispatch(JourneyEvent::PreviousSlide);
        assert_eq!(session.current_slide().title(), "ふりかえり: 「三つの試練と正規化」");
    }

    #[test]
    fn question_is_exposed_only_while_answering() {
        let mut session = session();
        assert!(session.current_question().is_none());
        for _ in 0..4 {
            session.dispatch(JourneyEvent::NextLesson);
        }
        session.dispatch(JourneyEvent::StartQuiz);
        let first = session.current_question().map(QuizQuestion::question);
        assert_eq!(first, Some("データの正規化の主な目的は何ですか？"));
        assert!(session.report().is_none());
    }
}
