use dioxus::prelude::*;

use journey_core::{JourneyEvent, JourneyMode, Transition};

use crate::context::AppContext;
use crate::vm::{map_lesson, map_quiz, map_story};

use super::lesson::LessonView;
use super::quiz::QuizPanel;
use super::story::StoryView;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[cfg(test)]
use services::JourneySession;

/// Root of the app: owns the journey state and routes every control to it.
#[component]
pub fn JourneyView() -> Element {
    let ctx = use_context::<AppContext>();
    let journey = ctx.journey();
    let start_options = ctx.start_options();
    let mut session = use_signal(move || journey.start(start_options));

    let dispatch = use_callback(move |event: JourneyEvent| {
        if session.write().dispatch(event) == Transition::Blocked {
            tracing::debug!("quiz advance ignored until an answer is selected");
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<JourneyTestHandles>() {
                handles.register(dispatch, session);
            }
        }
    }

    let current = session.read();
    let title = current.course().title();
    let description = current.course().description();
    let quiz = map_quiz(&current);

    rsx! {
        div { class: "page journey",
            header { class: "journey__header",
                h1 { class: "journey__title", "{title}" }
                p { class: "journey__description", "{description}" }
            }
            div { class: "journey__body",
                match current.mode() {
                    JourneyMode::Story => rsx! {
                        StoryView { vm: map_story(&current), on_intent: dispatch }
                    },
                    JourneyMode::Lessons => rsx! {
                        LessonView { vm: map_lesson(&current), on_intent: dispatch }
                    },
                }
                if let Some(quiz) = quiz {
                    QuizPanel { vm: quiz, on_intent: dispatch }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct JourneyTestHandles {
    dispatch: Rc<RefCell<Option<Callback<JourneyEvent>>>>,
    session: Rc<RefCell<Option<Signal<JourneySession>>>>,
}

#[cfg(test)]
impl JourneyTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<JourneyEvent>,
        session: Signal<JourneySession>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<JourneyEvent> {
        (*self.dispatch.borrow()).expect("journey dispatch registered")
    }

    pub(crate) fn session(&self) -> JourneySession {
        let signal = (*self.session.borrow()).expect("journey session registered");
        signal.peek().clone()
    }
}
