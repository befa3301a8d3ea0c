use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::page::{LessonStep, PageDraft, PageError, StorySlide};
use crate::model::question::{QuizQuestion, QuizQuestionDraft, QuizQuestionError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course title cannot be empty")]
    EmptyTitle,

    #[error("course needs at least one lesson step")]
    NoLessons,

    #[error("course needs at least one story slide")]
    NoSlides,

    #[error("course needs at least one quiz question")]
    NoQuestions,

    #[error("lesson step {index}: {source}")]
    Lesson {
        index: usize,
        #[source]
        source: PageError,
    },

    #[error("story slide {index}: {source}")]
    Slide {
        index: usize,
        #[source]
        source: PageError,
    },

    #[error("quiz question {index}: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuizQuestionError,
    },
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// All static content of the application: lesson steps, story slides and quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CourseDraft")]
pub struct Course {
    title: String,
    description: String,
    lessons: Vec<LessonStep>,
    slides: Vec<StorySlide>,
    questions: Vec<QuizQuestion>,
}

impl Course {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn lessons(&self) -> &[LessonStep] {
        &self.lessons
    }

    #[must_use]
    pub fn slides(&self) -> &[StorySlide] {
        &self.slides
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn shape(&self) -> CourseShape {
        CourseShape {
            lessons: self.lessons.len(),
            slides: self.slides.len(),
            questions: self.questions.len(),
        }
    }
}

/// Sequence lengths the navigation state machines are bounded by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseShape {
    pub lessons: usize,
    pub slides: usize,
    pub questions: usize,
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub lessons: Vec<PageDraft>,
    pub slides: Vec<PageDraft>,
    pub questions: Vec<QuizQuestionDraft>,
}

impl CourseDraft {
    /// Validate every page and question once and freeze the course.
    ///
    /// # Errors
    ///
    /// Returns the first `CourseError` found, tagged with the offending index.
    pub fn validate(self) -> Result<Course, CourseError> {
        if self.title.trim().is_empty() {
            return Err(CourseError::EmptyTitle);
        }
        if self.lessons.is_empty() {
            return Err(CourseError::NoLessons);
        }
        if self.slides.is_empty() {
            return Err(CourseError::NoSlides);
        }
        if self.questions.is_empty() {
            return Err(CourseError::NoQuestions);
        }

        let lessons = self
            .lessons
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                draft
                    .validate()
                    .map_err(|source| CourseError::Lesson { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let slides = self
            .slides
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                draft
                    .validate()
                    .map_err(|source| CourseError::Slide { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let questions = self
            .questions
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                draft
                    .validate()
                    .map_err(|source| CourseError::Question { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Course {
            title: self.title,
            description: self.description,
            lessons,
            slides,
            questions,
        })
    }
}

impl TryFrom<CourseDraft> for Course {
    type Error = CourseError;

    fn try_from(draft: CourseDraft) -> Result<Self, Self::Error> {
        draft.validate()
    }
}
