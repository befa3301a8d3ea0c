use dioxus::prelude::*;

use journey_core::JourneyEvent;

use crate::vm::{ChoiceVm, QuizQuestionVm, QuizResultsVm, QuizVm, ResultRowVm};

#[component]
pub fn QuizPanel(vm: QuizVm, on_intent: EventHandler<JourneyEvent>) -> Element {
    rsx! {
        section { class: "quiz", id: "quiz-root",
            h2 { class: "quiz__title", "理解度チェック" }
            match vm {
                QuizVm::Question(question) => rsx! {
                    QuestionCard { vm: question, on_intent }
                },
                QuizVm::Results(results) => rsx! {
                    ResultsCard { vm: results, on_intent }
                },
            }
        }
    }
}

#[component]
fn QuestionCard(vm: QuizQuestionVm, on_intent: EventHandler<JourneyEvent>) -> Element {
    rsx! {
        div { class: "quiz__question",
            h3 { "{vm.header}" }
            div { class: "quiz__choices",
                for choice in vm.choices.iter() {
                    ChoiceButton { choice: choice.clone(), on_intent }
                }
            }
            nav { class: "pager",
                button {
                    id: "quiz-prev",
                    class: "btn btn-outline",
                    disabled: !vm.can_retreat,
                    onclick: move |_| on_intent.call(JourneyEvent::PreviousQuestion),
                    "前の問題"
                }
                button {
                    id: "quiz-next",
                    class: "btn btn-primary",
                    disabled: !vm.can_advance,
                    onclick: move |_| on_intent.call(JourneyEvent::NextQuestion),
                    "{vm.next_label}"
                }
            }
        }
    }
}

#[component]
fn ChoiceButton(choice: ChoiceVm, on_intent: EventHandler<JourneyEvent>) -> Element {
    let class = if choice.selected {
        "quiz__choice quiz__choice--selected"
    } else {
        "quiz__choice"
    };
    let answer = choice.text.clone();

    rsx! {
        button {
            class,
            onclick: move |_| on_intent.call(JourneyEvent::SelectAnswer(answer.clone())),
            "{choice.text}"
        }
    }
}

#[component]
fn ResultsCard(vm: QuizResultsVm, on_intent: EventHandler<JourneyEvent>) -> Element {
    rsx! {
        div { class: "quiz__results",
            h3 { "クイズ結果" }
            p { class: "quiz__summary", "{vm.summary}" }
            p { class: "quiz__feedback", "{vm.feedback}" }
            for row in vm.rows.iter() {
                ResultRow { row: row.clone() }
            }
            button {
                id: "quiz-retry",
                class: "btn btn-primary",
                onclick: move |_| on_intent.call(JourneyEvent::RetryQuiz),
                "もう一度挑戦する"
            }
        }
    }
}

#[component]
fn ResultRow(row: ResultRowVm) -> Element {
    let verdict = if row.is_correct {
        "quiz__verdict quiz__verdict--correct"
    } else {
        "quiz__verdict quiz__verdict--wrong"
    };

    rsx! {
        div { class: "quiz__result",
            p { class: "quiz__result-heading", "{row.heading}" }
            p { "{row.answer_line}" }
            p { class: verdict, "{row.correct_line}" }
            p { class: "quiz__explanation", "{row.explanation}" }
        }
    }
}
