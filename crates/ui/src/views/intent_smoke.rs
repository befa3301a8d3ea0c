use journey_core::{JourneyEvent, JourneyMode, QuizPhase};
use services::StartOptions;

use super::test_harness::setup_view_harness;

const CORRECT_ANSWERS: [&str; 5] = [
    "データの重複を減らし、一貫性を保つ",
    "1つのセルには1つの情報だけを入れる",
    "社員情報と勤怠情報を別々のテーブルに分ける",
    "非キー列同士の依存関係がなくなり、データの一貫性が向上する",
    "基本給と手当を別々のテーブルに分け、社員IDで関連付ける",
];

#[test]
fn lesson_intents_page_and_clamp() {
    let mut harness = setup_view_harness(StartOptions::default());

    harness.dispatch(JourneyEvent::PreviousLesson);
    assert!(harness.render().contains("1 / 5"));

    for _ in 0..6 {
        harness.dispatch(JourneyEvent::NextLesson);
    }
    let html = harness.render();
    assert!(html.contains("5 / 5"), "not clamped in {html}");
    assert!(html.contains("まとめ"), "missing last step in {html}");
}

#[test]
fn story_intents_wrap_and_return() {
    let mut harness = setup_view_harness(StartOptions::default());

    harness.dispatch(JourneyEvent::StartStory);
    harness.dispatch(JourneyEvent::PreviousSlide);
    let html = harness.render();
    assert!(html.contains("8 / 8"), "no wrap in {html}");

    harness.dispatch(JourneyEvent::ReturnToLessons);
    let html = harness.render();
    assert!(html.contains("lesson-root"), "not back on lessons in {html}");
    assert_eq!(harness.session().mode(), JourneyMode::Lessons);
}

#[test]
fn quiz_intents_smoke_answer_score_and_retry() {
    let mut harness = setup_view_harness(StartOptions {
        open_story: false,
        lesson_step: 4,
    });

    harness.dispatch(JourneyEvent::StartQuiz);
    let html = harness.render();
    assert!(
        html.contains("問題 1 / 5: データの正規化の主な目的は何ですか？"),
        "missing first question in {html}"
    );
    assert!(html.contains("前の問題"), "missing previous control in {html}");
    assert!(html.contains("次の問題"), "missing next control in {html}");

    harness.dispatch(JourneyEvent::NextQuestion);
    assert_eq!(
        harness.session().quiz().map(|quiz| quiz.phase()),
        Some(QuizPhase::Answering(0))
    );

    for (index, answer) in CORRECT_ANSWERS.iter().enumerate() {
        harness.dispatch(JourneyEvent::SelectAnswer((*answer).to_string()));
        if index == CORRECT_ANSWERS.len() - 1 {
            let html = harness.render();
            assert!(html.contains("結果を見る"), "missing results control in {html}");
            assert!(html.contains("quiz__choice--selected"), "selection not marked in {html}");
        }
        harness.dispatch(JourneyEvent::NextQuestion);
    }

    let html = harness.render();
    for expected in [
        "クイズ結果",
        "5問中5問正解です。",
        "素晴らしい！完璧です！",
        "問題 1: データの正規化の主な目的は何ですか？",
        "あなたの回答: データの重複を減らし、一貫性を保つ",
        "正解: データの重複を減らし、一貫性を保つ",
        "quiz__verdict--correct",
        "もう一度挑戦する",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("quiz__verdict--wrong"), "unexpected wrong row in {html}");

    harness.dispatch(JourneyEvent::RetryQuiz);
    let html = harness.render();
    assert!(html.contains("問題 1 / 5"), "retry did not restart in {html}");
    assert!(!html.contains("クイズ結果"), "results still shown in {html}");
}

#[test]
fn quiz_stays_open_across_story_toggle() {
    let mut harness = setup_view_harness(StartOptions {
        open_story: false,
        lesson_step: 4,
    });
    harness.dispatch(JourneyEvent::StartQuiz);
    harness.dispatch(JourneyEvent::SelectAnswer(CORRECT_ANSWERS[0].to_string()));
    harness.dispatch(JourneyEvent::NextQuestion);

    harness.dispatch(JourneyEvent::StartStory);
    let html = harness.render();
    assert!(html.contains("story-root"), "missing story in {html}");
    assert!(html.contains("問題 2 / 5"), "quiz lost in {html}");
}

#[test]
fn quiz_control_stays_while_quiz_is_open() {
    let mut harness = setup_view_harness(StartOptions {
        open_story: false,
        lesson_step: 4,
    });
    harness.dispatch(JourneyEvent::StartQuiz);
    harness.dispatch(JourneyEvent::SelectAnswer(CORRECT_ANSWERS[0].to_string()));
    harness.dispatch(JourneyEvent::NextQuestion);

    let html = harness.render();
    assert!(html.contains("lesson-start-quiz"), "quiz control hidden in {html}");

    harness.dispatch(JourneyEvent::StartQuiz);
    let html = harness.render();
    assert!(html.contains("問題 2 / 5"), "quiz restarted in {html}");
}
