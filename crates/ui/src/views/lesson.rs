use dioxus::prelude::*;

use journey_core::JourneyEvent;

use crate::vm::LessonVm;

use super::document::DocumentView;

#[component]
pub fn LessonView(vm: LessonVm, on_intent: EventHandler<JourneyEvent>) -> Element {
    rsx! {
        section { class: "lesson", id: "lesson-root",
            h2 { class: "lesson__title", "{vm.title}" }
            DocumentView { page: vm.index, document: vm.content.clone() }

            if vm.show_quiz_cta {
                div { class: "lesson__quiz-cta",
                    button {
                        id: "lesson-start-quiz",
                        class: "btn btn-primary",
                        onclick: move |_| on_intent.call(JourneyEvent::StartQuiz),
                        "理解度チェック"
                    }
                }
            }

            nav { class: "pager",
                button {
                    id: "lesson-prev",
                    class: "btn btn-outline",
                    disabled: !vm.can_go_back,
                    onclick: move |_| on_intent.call(JourneyEvent::PreviousLesson),
                    "前へ"
                }
                span { class: "pager__position", "{vm.position_label}" }
                button {
                    id: "lesson-next",
                    class: "btn btn-outline",
                    disabled: !vm.can_go_forward,
                    onclick: move |_| on_intent.call(JourneyEvent::NextLesson),
                    "次へ"
                }
            }

            div { class: "lesson__story-cta",
                button {
                    id: "lesson-start-story",
                    class: "btn btn-wide",
                    onclick: move |_| on_intent.call(JourneyEvent::StartStory),
                    "データ整理の旅を始める"
                }
            }
        }
    }
}
