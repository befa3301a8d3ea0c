use journey_core::JourneyEvent;
use services::StartOptions;

use super::test_harness::setup_view_harness;

fn lessons_at(step: usize) -> StartOptions {
    StartOptions {
        open_story: false,
        lesson_step: step,
    }
}

#[test]
fn lesson_view_smoke_renders_first_step() {
    let harness = setup_view_harness(StartOptions::default());
    let html = harness.render();

    for expected in [
        "データ整理の旅 〜旅費精算のエクセル王国を救え！〜",
        "カイとリクと共に、データ正規化の冒険に出かけよう",
        "データの正規化とは？",
        "1 / 5",
        "前へ",
        "次へ",
        "データ整理の旅を始める",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("理解度チェック"), "quiz offered too early in {html}");
    assert!(!html.contains("story-root"), "story rendered in {html}");
}

#[test]
fn lesson_view_smoke_shows_before_tab_by_default() {
    let harness = setup_view_harness(lessons_at(1));
    let html = harness.render();

    assert!(html.contains("第1正規形"), "missing title in {html}");
    assert!(html.contains("正規化前"), "missing tab in {html}");
    assert!(html.contains("正規化後"), "missing tab in {html}");
    assert!(html.contains("<th>出発と到着地</th>"), "missing before table in {html}");
    assert!(!html.contains("<th>出発地</th>"), "after table shown in {html}");
    assert!(html.contains("doc-cell--problem"), "missing highlight in {html}");
}

#[test]
fn lesson_view_smoke_offers_quiz_on_last_step() {
    let harness = setup_view_harness(lessons_at(4));
    let html = harness.render();

    assert!(html.contains("まとめ"), "missing title in {html}");
    assert!(html.contains("5 / 5"), "missing position in {html}");
    assert!(html.contains("理解度チェック"), "missing quiz control in {html}");
}

#[test]
fn story_view_smoke_renders_first_slide() {
    let harness = setup_view_harness(StartOptions {
        open_story: true,
        lesson_step: 0,
    });
    let html = harness.render();

    assert!(html.contains("story-root"), "missing story in {html}");
    assert!(html.contains("1 / 8"), "missing position in {html}");
    assert!(html.contains("学習コンテンツに戻る"), "missing return control in {html}");
    assert!(!html.contains("lesson-root"), "lesson rendered in {html}");
}

#[test]
fn lesson_view_smoke_renders_labels_without_extra_separator() {
    let harness = setup_view_harness(StartOptions::default());
    let html = harness.render();

    assert!(html.contains("冗長性の削減："), "missing label in {html}");
    assert!(!html.contains("：:"), "doubled separator in {html}");
}

#[test]
fn story_view_smoke_renders_slide_title() {
    let mut harness = setup_view_harness(StartOptions {
        open_story: true,
        lesson_step: 0,
    });
    assert!(!harness.render().contains("チャプター1"));

    for _ in 0..3 {
        harness.dispatch(JourneyEvent::NextSlide);
    }
    let html = harness.render();
    assert!(html.contains("4 / 8"), "missing position in {html}");
    assert!(
        html.contains("チャプター1: 「第一の試練 〜繰り返しの迷宮〜」"),
        "missing slide title in {html}"
    );
    assert!(html.contains("story__title"), "missing title heading in {html}");
}
