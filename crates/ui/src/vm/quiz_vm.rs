use journey_core::{QuizPhase, QuizReport, ScoreBand};
use services::JourneySession;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub text: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestionVm {
    pub header: String,
    pub choices: Vec<ChoiceVm>,
    pub can_retreat: bool,
    pub can_advance: bool,
    pub next_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRowVm {
    pub heading: String,
    pub answer_line: String,
    pub correct_line: String,
    pub is_correct: bool,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultsVm {
    pub summary: String,
    pub feedback: &'static str,
    pub rows: Vec<ResultRowVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizVm {
    Question(QuizQuestionVm),
    Results(QuizResultsVm),
}

#[must_use]
pub fn feedback_message(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Perfect => "素晴らしい！完璧です！",
        ScoreBand::Great => "よくできました！もう少しで完璧です。",
        ScoreBand::Good => "良い成績です。復習してさらに理解を深めましょう。",
        ScoreBand::NeedsReview => "基本的な概念をもう一度復習しましょう。",
    }
}

/// `None` while the quiz panel is closed.
#[must_use]
pub fn map_quiz(session: &JourneySession) -> Option<QuizVm> {
    let quiz = session.quiz()?;
    match quiz.phase() {
        QuizPhase::Answering(index) => {
            let question = session.current_question()?;
            let selection = quiz.current_selection();
            let choices = question
                .answers()
                .iter()
                .map(|answer| ChoiceVm {
                    text: answer.clone(),
                    selected: selection == Some(answer.as_str()),
                })
                .collect();
            Some(QuizVm::Question(QuizQuestionVm {
                header: format!(
                    "問題 {} / {}: {}",
                    index + 1,
                    quiz.question_count(),
                    question.question()
                ),
                choices,
                can_retreat: quiz.can_retreat(),
                can_advance: quiz.can_advance(),
                next_label: if quiz.is_last_question() {
                    "結果を見る"
                } else {
                    "次の問題"
                },
            }))
        }
        QuizPhase::Results => session.report().map(|report| QuizVm::Results(map_report(&report))),
    }
}

fn map_report(report: &QuizReport) -> QuizResultsVm {
    let rows = report
        .rows
        .iter()
        .map(|row| ResultRowVm {
            heading: format!("問題 {}: {}", row.index + 1, row.question),
            answer_line: format!("あなたの回答: {}", row.selected.as_deref().unwrap_or_default()),
            correct_line: format!("正解: {}", row.correct_answer),
            is_correct: row.is_correct,
            explanation: row.explanation.clone(),
        })
        .collect();

    QuizResultsVm {
        summary: format!("{}問中{}問正解です。", report.score.total, report.score.correct),
        feedback: feedback_message(report.band),
        rows,
    }
}
