use serde::{Deserialize, Serialize};

use super::table::Table;

//
// ─── STYLE TOKENS ──────────────────────────────────────────────────────────────
//

/// Color of an emphasized list label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    Blue,
    Green,
    Purple,
}

/// Background tone of a dialogue block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Blue,
    Green,
    Yellow,
    Purple,
    Pink,
}

//
// ─── INLINE PIECES ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub label: Option<Label>,
    pub text: String,
}

impl ListItem {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            label: None,
            text: text.into(),
        }
    }

    pub fn labeled(label: impl Into<String>, accent: Accent, text: impl Into<String>) -> Self {
        Self {
            label: Some(Label {
                text: label.into(),
                accent,
            }),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueLine {
    pub speaker: String,
    pub text: String,
}

impl DialogueLine {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
        }
    }
}

//
// ─── BLOCKS ────────────────────────────────────────────────────────────────────
//

/// One element of a lesson or story document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Title { text: String },
    Lead { text: String },
    Paragraph { text: String },
    Heading { text: String },
    BulletList { items: Vec<ListItem> },
    NumberedList { items: Vec<ListItem> },
    /// Before/after tabs; the "before" side is shown first.
    Comparison { before: Vec<Table>, after: Vec<Table> },
    Image { src: String, alt: String },
    Character { name: String, description: String },
    Dialogue { tone: Tone, lines: Vec<DialogueLine> },
}

impl Block {
    pub fn title(text: impl Into<String>) -> Self {
        Self::Title { text: text.into() }
    }

    pub fn lead(text: impl Into<String>) -> Self {
        Self::Lead { text: text.into() }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading { text: text.into() }
    }

    pub fn bullets(items: impl IntoIterator<Item = ListItem>) -> Self {
        Self::BulletList {
            items: items.into_iter().collect(),
        }
    }

    pub fn numbered(items: impl IntoIterator<Item = ListItem>) -> Self {
        Self::NumberedList {
            items: items.into_iter().collect(),
        }
    }

    pub fn comparison(
        before: impl IntoIterator<Item = Table>,
        after: impl IntoIterator<Item = Table>,
    ) -> Self {
        Self::Comparison {
            before: before.into_iter().collect(),
            after: after.into_iter().collect(),
        }
    }

    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::Image {
            src: src.into(),
            alt: alt.into(),
        }
    }

    pub fn character(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Character {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn dialogue(tone: Tone, lines: impl IntoIterator<Item = DialogueLine>) -> Self {
        Self::Dialogue {
            tone,
            lines: lines.into_iter().collect(),
        }
    }
}
