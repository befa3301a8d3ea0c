use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizQuestionError {
    #[error("question text cannot be empty")]
    EmptyQuestion,

    #[error("a question needs at least two answers, got {count}")]
    TooFewAnswers { count: usize },

    #[error("answer choices cannot be empty")]
    EmptyAnswer,

    #[error("duplicate answer choice: {answer}")]
    DuplicateAnswer { answer: String },

    #[error("correct answer is not one of the choices: {answer}")]
    CorrectAnswerMissing { answer: String },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// One multiple-choice assessment item.
///
/// The answer order is fixed and shown as authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuizQuestionDraft")]
pub struct QuizQuestion {
    question: String,
    answers: Vec<String>,
    correct_answer: String,
    explanation: String,
}

impl QuizQuestion {
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Exact string comparison against the stored correct answer.
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizQuestionDraft {
    pub question: String,
    pub answers: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

impl QuizQuestionDraft {
    pub fn new<I, S>(
        question: impl Into<String>,
        answers: I,
        correct_answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            question: question.into(),
            answers: answers.into_iter().map(Into::into).collect(),
            correct_answer: correct_answer.into(),
            explanation: explanation.into(),
        }
    }

    /// # Errors
    ///
    /// Returns `QuizQuestionError` if the question is blank, has fewer than two
    /// distinct non-empty choices, or the correct answer is not among them.
    pub fn validate(self) -> Result<QuizQuestion, QuizQuestionError> {
        if self.question.trim().is_empty() {
            return Err(QuizQuestionError::EmptyQuestion);
        }
        if self.answers.len() < 2 {
            return Err(QuizQuestionError::TooFewAnswers {
                count: self.answers.len(),
            });
        }
        for (index, answer) in self.answers.iter().enumerate() {
            if answer.trim().is_empty() {
                return Err(QuizQuestionError::EmptyAnswer);
            }
            if self.answers[..index].contains(answer) {
                return Err(QuizQuestionError::DuplicateAnswer {
                    answer: answer.clone(),
                });
            }
        }
        if !self.answers.contains(&self.correct_answer) {
            return Err(QuizQuestionError::CorrectAnswerMissing {
                answer: self.correct_answer,
            });
        }

        Ok(QuizQuestion {
            question: self.question,
            answers: self.answers,
            correct_answer: self.correct_answer,
            explanation: self.explanation,
        })
    }
}

impl TryFrom<QuizQuestionDraft> for QuizQuestion {
    type Error = QuizQuestionError;

    fn try_from(draft: QuizQuestionDraft) -> Result<Self, Self::Error> {
        draft.validate()
    }
}
