//! Pagination over the fixed lesson and story sequences.

/// Position in the lesson sequence. Moves are clamped at both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LessonCursor {
    index: usize,
}

impl LessonCursor {
    /// Cursor at `index`, clamped into `[0, len)`.
    #[must_use]
    pub fn at(index: usize, len: usize) -> Self {
        Self {
            index: index.min(len.saturating_sub(1)),
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn next(self, len: usize) -> Self {
        Self::at(self.index.saturating_add(1), len)
    }

    #[must_use]
    pub fn previous(self) -> Self {
        Self {
            index: self.index.saturating_sub(1),
        }
    }

    #[must_use]
    pub fn is_first(self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn is_last(self, len: usize) -> bool {
        self.index + 1 >= len
    }
}

/// Position in the story sequence. Moves wrap around in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SlideCursor {
    index: usize,
}

impl SlideCursor {
    /// Cursor at `index` taken modulo `len`.
    #[must_use]
    pub fn at(index: usize, len: usize) -> Self {
        if len == 0 {
            return Self::default();
        }
        Self { index: index % len }
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn next(self, len: usize) -> Self {
        Self::at(self.index + 1, len)
    }

    #[must_use]
    pub fn previous(self, len: usize) -> Self {
        if len == 0 {
            return Self::default();
        }
        Self::at(self.index % len + len - 1, len)
    }
}
