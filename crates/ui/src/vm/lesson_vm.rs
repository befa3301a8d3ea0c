use journey_core::model::Document;
use services::JourneySession;

/// Render data for the lesson viewer.
#[derive(Clone, Debug, PartialEq)]
pub struct LessonVm {
    pub index: usize,
    pub title: String,
    pub content: Document,
    pub position_label: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub show_quiz_cta: bool,
}

#[must_use]
pub fn map_lesson(session: &JourneySession) -> LessonVm {
    let state = session.state();
    let cursor = state.lesson();
    let len = session.course().lessons().len();
    let step = session.current_lesson();

    LessonVm {
        index: cursor.index(),
        title: step.title().to_string(),
        content: step.content().clone(),
        position_label: format!("{} / {len}", cursor.index() + 1),
        can_go_back: !cursor.is_first(),
        can_go_forward: !cursor.is_last(len),
        show_quiz_cta: state.can_start_quiz(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use journey_core::JourneyEvent;
    use services::{JourneyService, StartOptions};

    fn session_at(step: usize) -> JourneySession {
        JourneyService::from_catalog()
            .unwrap()
            .start(StartOptions {
                open_story: false,
                lesson_step: step,
            })
    }

    #[test]
    fn first_step_disables_back() {
        let vm = map_lesson(&session_at(0));
        assert_eq!(vm.position_label, "1 / 5");
        assert!(!vm.can_go_back);
        assert!(vm.can_go_forward);
        assert!(!vm.show_quiz_cta);
    }

    #[test]
    fn last_step_keeps_quiz_control_while_open() {
        let mut session = session_at(4);
        let vm = map_lesson(&session);
        assert!(!vm.can_go_forward);
        assert!(vm.show_quiz_cta);

        session.dispatch(JourneyEvent::StartQuiz);
        assert!(map_lesson(&session).show_quiz_cta);
        assert_eq!(
            session.dispatch(JourneyEvent::StartQuiz),
            journey_core::Transition::Unchanged
        );
    }
}
