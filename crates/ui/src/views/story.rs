use dioxus::prelude::*;

use journey_core::JourneyEvent;

use crate::vm::StoryVm;

use super::document::DocumentView;

#[component]
pub fn StoryView(vm: StoryVm, on_intent: EventHandler<JourneyEvent>) -> Element {
    rsx! {
        section { class: "story", id: "story-root",
            h2 { class: "story__title", "{vm.title}" }
            DocumentView { page: vm.index, document: vm.content.clone() }

            nav { class: "pager",
                button {
                    id: "story-prev",
                    class: "btn btn-outline",
                    onclick: move |_| on_intent.call(JourneyEvent::PreviousSlide),
                    "前へ"
                }
                span { class: "pager__position", "{vm.position_label}" }
                button {
                    id: "story-next",
                    class: "btn btn-outline",
                    onclick: move |_| on_intent.call(JourneyEvent::NextSlide),
                    "次へ"
                }
            }

            button {
                id: "story-return",
                class: "btn btn-wide",
                onclick: move |_| on_intent.call(JourneyEvent::ReturnToLessons),
                "学習コンテンツに戻る"
            }
        }
    }
}
