// src/patch.rs
//! In-place text substitution over a working copy of the listing.
//!
//! Edits must arrive right to left: each one has to end at or before the
//! start of the previous one. Text left of an edit never moves, so offsets
//! computed against the original document stay valid for everything that
//! has not been patched yet.

use std::ops::Range;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    #[error("span {start}..{end} is outside the document (len {len}) or splits a character")]
    OutOfBounds { start: usize, end: usize, len: usize },
    #[error("span {start}..{end} is not left of the previous edit at {floor}")]
    OutOfOrder { start: usize, end: usize, floor: usize },
}

/// A pending substitution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edit {
    pub span: Range<usize>,
    pub text: String,
}

impl Edit {
    pub fn new(span: Range<usize>, text: impl Into<String>) -> Self {
        Self { span, text: text.into() }
    }
}

#[derive(Debug)]
pub struct Patcher {
    text: String,
    /// Start of the leftmost edit so far; nothing may be written past it.
    floor: usize,
    edits: usize,
}

impl Patcher {
    pub fn new(text: String) -> Self {
        let floor = text.len();
        Self { text, floor, edits: 0 }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of substitutions applied.
    pub fn edits(&self) -> usize {
        self.edits
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Replace exactly `span` with `with`. Returns the signed length change.
    pub fn replace(&mut self, span: Range<usize>, with: &str) -> Result<isize, PatchError> {
        self.check(&span, self.floor)?;
        let removed = span.len();
        self.floor = span.start;
        self.text.replace_range(span, with);
        self.edits += 1;
        Ok(with.len() as isize - removed as isize)
    }

    /// Apply several edits, rightmost first, all or nothing. The whole batch
    /// is validated before the first byte changes.
    pub fn replace_all(&mut self, edits: &[Edit]) -> Result<isize, PatchError> {
        let mut floor = self.floor;
        for edit in edits {
            self.check(&edit.span, floor)?;
            floor = edit.span.start;
        }
        let mut delta = 0;
        for edit in edits {
            delta += self.replace(edit.span.clone(), &edit.text)?;
        }
        Ok(delta)
    }

    fn check(&self, span: &Range<usize>, floor: usize) -> Result<(), PatchError> {
        let (start, end) = (span.start, span.end);
        let len = self.text.len();
        if start > end
            || end > len
            || !self.text.is_char_boundary(start)
            || !self.text.is_char_boundary(end)
        {
            return Err(PatchError::OutOfBounds { start, end, len });
        }
        if end > floor {
            return Err(PatchError::OutOfOrder { start, end, floor });
        }
        Ok(())
    }
}
