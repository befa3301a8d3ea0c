#![forbid(unsafe_code)]

pub mod journey;
pub mod model;
pub mod navigation;
pub mod quiz;

pub use journey::{JourneyEvent, JourneyMode, JourneyState, Transition};
pub use navigation::{LessonCursor, SlideCursor};
pub use quiz::{Advance, QuizPhase, QuizReport, QuizReportRow, QuizScore, QuizSession, ScoreBand};
