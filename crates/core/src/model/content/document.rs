use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::block::Block;
use super::table::Table;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DocumentError {
    #[error("document must contain at least one block")]
    Empty,

    #[error("block {block}: table has no header row")]
    MissingHeaders { block: usize },

    #[error("block {block}: row {row} has {cells} cells, expected {expected}")]
    RaggedRow {
        block: usize,
        row: usize,
        cells: usize,
        expected: usize,
    },

    #[error("block {block}: comparison needs tables on both sides")]
    EmptyComparison { block: usize },

    #[error("block {block}: dialogue has no lines")]
    EmptyDialogue { block: usize },

    #[error("block {block}: image source cannot be empty")]
    EmptyImageSource { block: usize },
}

//
// ─── DOCUMENT ──────────────────────────────────────────────────────────────────
//

/// Static rich content of a lesson step or story slide.
///
/// Construction validates the blocks once; a `Document` is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Block>", into = "Vec<Block>")]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    /// # Errors
    ///
    /// Returns `DocumentError` when the block list is empty or a block is malformed.
    pub fn new(blocks: Vec<Block>) -> Result<Self, DocumentError> {
        if blocks.is_empty() {
            return Err(DocumentError::Empty);
        }
        for (index, block) in blocks.iter().enumerate() {
            validate_block(index, block)?;
        }
        Ok(Self { blocks })
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Image sources referenced by this document, in order.
    pub fn images(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Image { src, .. } => Some(src.as_str()),
            _ => None,
        })
    }
}

impl TryFrom<Vec<Block>> for Document {
    type Error = DocumentError;

    fn try_from(blocks: Vec<Block>) -> Result<Self, Self::Error> {
        Self::new(blocks)
    }
}

impl From<Document> for Vec<Block> {
    fn from(document: Document) -> Self {
        document.blocks
    }
}

fn validate_block(index: usize, block: &Block) -> Result<(), DocumentError> {
    match block {
        Block::Comparison { before, after } => {
            if before.is_empty() || after.is_empty() {
                return Err(DocumentError::EmptyComparison { block: index });
            }
            before
                .iter()
                .chain(after)
                .try_for_each(|table| validate_table(index, table))
        }
        Block::Dialogue { lines, .. } if lines.is_empty() => {
            Err(DocumentError::EmptyDialogue { block: index })
        }
        Block::Image { src, .. } if src.trim().is_empty() => {
            Err(DocumentError::EmptyImageSource { block: index })
        }
        _ => Ok(()),
    }
}

fn validate_table(block: usize, table: &Table) -> Result<(), DocumentError> {
    if table.headers.is_empty() {
        return Err(DocumentError::MissingHeaders { block });
    }
    match table.first_ragged_row() {
        Some((row, cells)) => Err(DocumentError::RaggedRow {
            block,
            row,
            cells,
            expected: table.column_count(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::content::{DialogueLine, Tone};

    fn sample_table() -> Table {
        Table::new(["ID", "名前"]).row(["101", "田中太郎"])
    }

    #[test]
    fn empty_document_fails() {
        assert_eq!(Document::new(Vec::new()), Err(DocumentError::Empty));
    }

    #[test]
    fn ragged_comparison_table_fails() {
        let broken = Table::new(["ID", "名前"]).row(["101"]);
        let err = Document::new(vec![
            Block::paragraph("intro"),
            Block::comparison([sample_table()], [broken]),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            DocumentError::RaggedRow {
                block: 1,
                row: 0,
                cells: 1,
                expected: 2,
            }
        );
    }

    #[test]
    fn one_sided_comparison_fails() {
        let err = Document::new(vec![Block::comparison([sample_table()], [])]).unwrap_err();
        assert_eq!(err, DocumentError::EmptyComparison { block: 0 });
    }

    #[test]
    fn empty_dialogue_fails() {
        let err = Document::new(vec![Block::dialogue(Tone::Blue, [])]).unwrap_err();
        assert_eq!(err, DocumentError::EmptyDialogue { block: 0 });
    }

    #[test]
    fn images_are_listed_in_order() {
        let document = Document::new(vec![
            Block::image("/images/a.png", "a"),
            Block::paragraph("text"),
            Block::dialogue(Tone::Green, [DialogueLine::new("カイ", "すごい")]),
            Block::image("/images/b.png", "b"),
        ])
        .unwrap();

        let images: Vec<_> = document.images().collect();
        assert_eq!(images, vec!["/images/a.png", "/images/b.png"]);
    }

    #[test]
    fn blank_image_source_fails() {
        let err = Document::new(vec![Block::image("  ", "alt")]).unwrap_err();
        assert_eq!(err, DocumentError::EmptyImageSource { block: 0 });
    }
}
