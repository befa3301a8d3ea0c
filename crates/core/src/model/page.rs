use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::content::{Block, Document, DocumentError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PageError {
    #[error("page title cannot be empty")]
    EmptyTitle,

    #[error(transparent)]
    Document(#[from] DocumentError),
}

//
// ─── PAGE KINDS ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lesson;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Story;

/// A titled page of static content. The marker keeps lesson steps and story
/// slides from being mixed up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PageDraft", bound = "")]
pub struct Page<K> {
    title: String,
    content: Document,
    #[serde(skip)]
    kind: PhantomData<K>,
}

pub type LessonStep = Page<Lesson>;
pub type StorySlide = Page<Story>;

impl<K> Page<K> {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &Document {
        &self.content
    }
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageDraft {
    pub title: String,
    #[serde(rename = "content")]
    pub blocks: Vec<Block>,
}

impl PageDraft {
    pub fn new(title: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            title: title.into(),
            blocks,
        }
    }

    /// # Errors
    ///
    /// Returns `PageError::EmptyTitle` for a blank title and
    /// `PageError::Document` when the blocks do not form a valid document.
    pub fn validate<K>(self) -> Result<Page<K>, PageError> {
        if self.title.trim().is_empty() {
            return Err(PageError::EmptyTitle);
        }
        let content = Document::new(self.blocks)?;
        Ok(Page {
            title: self.title,
            content,
            kind: PhantomData,
        })
    }
}

impl<K> TryFrom<PageDraft> for Page<K> {
    type Error = PageError;

    fn try_from(draft: PageDraft) -> Result<Self, Self::Error> {
        draft.validate()
    }
}
