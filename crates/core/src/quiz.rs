use serde::Serialize;

use crate::model::QuizQuestion;

//
// ─── PHASES ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizPhase {
    /// Waiting for an answer to the question at this index.
    Answering(usize),
    Results,
}

/// Outcome of asking the quiz to move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Next(usize),
    Finished,
    /// The current question has no answer yet, or the quiz is already finished.
    Blocked,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One attempt at the quiz: which question is shown and what was picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    current: usize,
    selected: Vec<Option<String>>,
    completed: bool,
}

impl QuizSession {
    #[must_use]
    pub fn new(question_count: usize) -> Self {
        Self {
            current: 0,
            selected: vec![None; question_count],
            completed: question_count == 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        if self.completed {
            QuizPhase::Results
        } else {
            QuizPhase::Answering(self.current)
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn selected(&self, index: usize) -> Option<&str> {
        self.selected.get(index).and_then(Option::as_deref)
    }

    #[must_use]
    pub fn current_selection(&self) -> Option<&str> {
        self.selected(self.current)
    }

    #[must_use]
    pub fn selections(&self) -> &[Option<String>] {
        &self.selected
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.selected.len()
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        !self.completed && self.current_selection().is_some()
    }

    #[must_use]
    pub fn can_retreat(&self) -> bool {
        !self.completed && self.current > 0
    }

    /// Record `answer` for the current question, replacing any earlier pick.
    ///
    /// Returns `false` when the quiz is already showing results.
    pub fn select_answer(&mut self, answer: impl Into<String>) -> bool {
        if self.completed {
            return false;
        }
        match self.selected.get_mut(self.current) {
            Some(slot) => {
                *slot = Some(answer.into());
                true
            }
            None => false,
        }
    }

    pub fn advance(&mut self) -> Advance {
        if !self.can_advance() {
            return Advance::Blocked;
        }
        if self.is_last_question() {
            self.completed = true;
            Advance::Finished
        } else {
            self.current += 1;
            Advance::Next(self.current)
        }
    }

    /// Step back one question; stays on the first question. Returns the new index.
    pub fn retreat(&mut self) -> usize {
        if !self.completed {
            self.current = self.current.saturating_sub(1);
        }
        self.current
    }

    /// Start over with every answer cleared.
    pub fn retry(&mut self) {
        *self = Self::new(self.selected.len());
    }

    /// Count of answers equal to the stored correct answer of the same question.
    #[must_use]
    pub fn score(&self, questions: &[QuizQuestion]) -> QuizScore {
        let correct = self
            .selected
            .iter()
            .zip(questions)
            .filter(|(answer, question)| {
                answer
                    .as_deref()
                    .is_some_and(|answer| question.is_correct(answer))
            })
            .count();
        QuizScore {
            correct,
            total: self.selected.len(),
        }
    }

    /// Results summary; `None` until the last question has been answered.
    #[must_use]
    pub fn report(&self, questions: &[QuizQuestion]) -> Option<QuizReport> {
        if !self.completed {
            return None;
        }
        let rows = questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let selected = self.selected(index).map(ToString::to_string);
                let is_correct = selected
                    .as_deref()
                    .is_some_and(|answer| question.is_correct(answer));
                QuizReportRow {
                    index,
                    question: question.question().to_string(),
                    selected,
                    correct_answer: question.correct_answer().to_string(),
                    is_correct,
                    explanation: question.explanation().to_string(),
                }
            })
            .collect();
        let score = self.score(questions);
        Some(QuizReport {
            score,
            band: score.band(),
            rows,
        })
    }
}

//
// ─── SCORE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
}

impl QuizScore {
    #[must_use]
    pub fn band(self) -> ScoreBand {
        ScoreBand::for_score(self.correct, self.total)
    }
}

/// Feedback tier for a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Perfect,
    Great,
    Good,
    NeedsReview,
}

impl ScoreBand {
    /// Thresholds are real numbers (`0.8 * total`, `0.6 * total`), not rounded counts.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn for_score(correct: usize, total: usize) -> Self {
        let score = correct as f64;
        let total_f = total as f64;
        if correct == total {
            Self::Perfect
        } else if score >= total_f * 0.8 {
            Self::Great
        } else if score >= total_f * 0.6 {
            Self::Good
        } else {
            Self::NeedsReview
        }
    }
}

//
// ─── REPORT ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizReport {
    pub score: QuizScore,
    pub band: ScoreBand,
    pub rows: Vec<QuizReportRow>,
}

/// Per-question result line. The correct answer is always revealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizReportRow {
    pub index: usize,
    pub question: String,
    pub selected: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
    pub explanation: String,
}
