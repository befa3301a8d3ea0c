pub mod block;
pub mod document;
pub mod table;

pub use block::{Accent, Block, DialogueLine, Label, ListItem, Tone};
pub use document::{Document, DocumentError};
pub use table::{Cell, Highlight, Table};
