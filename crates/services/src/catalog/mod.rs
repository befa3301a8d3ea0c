//! The built-in course: every lesson step, story slide and quiz question.

mod lessons;
mod quiz;
mod story;

use journey_core::model::{Course, CourseDraft};

use crate::error::CatalogError;

pub const COURSE_TITLE: &str = "データ整理の旅 〜旅費精算のエクセル王国を救え！〜";
pub const COURSE_DESCRIPTION: &str = "カイとリクと共に、データ正規化の冒険に出かけよう";

/// Unvalidated course content as authored.
#[must_use]
pub fn course_draft() -> CourseDraft {
    CourseDraft {
        title: COURSE_TITLE.to_string(),
        description: COURSE_DESCRIPTION.to_string(),
        lessons: lessons::lesson_drafts(),
        slides: story::slide_drafts(),
        questions: quiz::question_drafts(),
    }
}

/// Build and validate the built-in course.
///
/// # Errors
///
/// Returns `CatalogError::Invalid` if any authored page or question is malformed.
pub fn load_course() -> Result<Course, CatalogError> {
    let course = course_draft().validate()?;
    tracing::debug!(
        lessons = course.lessons().len(),
        slides = course.slides().len(),
        questions = course.questions().len(),
        "course catalog validated"
    );
    Ok(course)
}

#[cfg(test)]
mod tests {
    use super::*;
    use journey_core::model::{Block, CourseShape};

    #[test]
    fn catalog_validates_with_expected_shape() {
        let course = load_course().unwrap();
        assert_eq!(
            course.shape(),
            CourseShape {
                lessons: 5,
                slides: 8,
                questions: 5,
            }
        );
        assert_eq!(course.title(), COURSE_TITLE);
    }

    #[test]
    fn normal_form_lessons_have_before_after_tables() {
        let course = load_course().unwrap();
        for step in &course.lessons()[1..4] {
            let has_comparison = step
                .content()
                .blocks()
                .iter()
                .any(|block| matches!(block, Block::Comparison { .. }));
            assert!(has_comparison, "{} has no comparison", step.title());
        }
    }

    #[test]
    fn story_images_match_assets() {
        let course = load_course().unwrap();
        let images: Vec<_> = course
            .slides()
            .iter()
            .flat_map(|slide| slide.content().images())
            .map(|src| src.split('?').next().unwrap_or(src).to_string())
            .collect();
        assert_eq!(
            images,
            vec![
                "/images/Prologue.png",
                "/images/Chapter1.png",
                "/images/Chapter2.png",
                "/images/Chapter3.png",
                "/images/Epilogue.png",
            ]
        );
    }

    #[test]
    fn every_question_has_four_choices() {
        let course = load_course().unwrap();
        assert!(course.questions().iter().all(|q| q.answers().len() == 4));
    }
}
