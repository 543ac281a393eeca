//! Headless plain-text surface
//!
//! A `RichTextSurface` without a GUI toolkit behind it: a rope buffer, a
//! byte-range selection, and a change flag. Formatting calls are accepted
//! and counted as edits but have no visual effect, which is enough for the
//! session state machine and for embedders that only need plain text.

use std::ops::Range;

use ropey::Rope;

use crate::capability::RichTextSurface;
use crate::format::{Alignment, CharacterFormat, ContentFormat, ListStyle};

/// Plain-text implementation of [`RichTextSurface`] backed by a rope
#[derive(Debug, Clone, Default)]
pub struct PlainTextSurface {
    buffer: Rope,
    selection: Option<Range<usize>>,
    changed: bool,
}

impl PlainTextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            buffer: Rope::from_str(text),
            selection: None,
            changed: false,
        }
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    /// Insert text at a char index, clamped to the buffer length
    pub fn insert(&mut self, char_idx: usize, text: &str) {
        let idx = char_idx.min(self.buffer.len_chars());
        self.buffer.insert(idx, text);
        self.changed = true;
    }

    /// Remove a char range, clamped to the buffer length
    pub fn remove(&mut self, range: Range<usize>) {
        let end = range.end.min(self.buffer.len_chars());
        let start = range.start.min(end);
        if start < end {
            self.buffer.remove(start..end);
            self.changed = true;
        }
    }

    pub fn select(&mut self, range: Range<usize>) {
        self.selection = if range.is_empty() { None } else { Some(range) };
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn selected_text(&self) -> Option<String> {
        let range = self.selection.clone()?;
        let end = range.end.min(self.buffer.len_chars());
        let start = range.start.min(end);
        Some(self.buffer.slice(start..end).to_string())
    }
}

impl RichTextSurface for PlainTextSurface {
    fn set_content(&mut self, bytes: &[u8], _format: ContentFormat) {
        // Markup is kept as-is: without a rich-text model there is
        // nothing to render it into.
        self.buffer = Rope::from_str(&String::from_utf8_lossy(bytes));
        self.selection = None;
        self.changed = false;
    }

    fn content_bytes(&self) -> Vec<u8> {
        self.buffer.to_string().into_bytes()
    }

    fn has_selection(&self) -> bool {
        self.selection.is_some()
    }

    fn take_content_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    fn apply_character_format(&mut self, _fmt: &CharacterFormat) {
        self.changed = true;
    }

    fn set_alignment(&mut self, _alignment: Alignment) {
        self.changed = true;
    }

    fn set_list_style(&mut self, _style: Option<ListStyle>) {
        self.changed = true;
    }
}
