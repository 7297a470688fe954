// src/handlers/editor.rs
// =============================================================================
// The document the handlers write into.
//
// Editors address text by (line, column) rather than by flat offset, so the
// `Editor` trait takes `Position`s and the helpers here translate between
// the two. All offsets and columns count characters, not bytes.
//
// `TextBuffer` is a plain in-memory editor: the CLI pastes into it and the
// tests inspect it.
// =============================================================================

use std::ops::Range;
use std::sync::{Arc, Mutex};

/// A (line, column) location, both zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub ch: usize,
}

impl Position {
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

// What the handlers need from a host editor
pub trait Editor {
    /// Full document text
    fn value(&self) -> String;

    /// Currently selected text (empty when nothing is selected)
    fn selection(&self) -> String;

    /// Replaces the selection (or inserts at the cursor)
    fn replace_selection(&mut self, replacement: &str);

    /// Replaces the text between two positions
    fn replace_range(&mut self, replacement: &str, from: Position, to: Position);
}

// Shared editors: lets something else (a UI, or a test) keep editing the
// document while a conversion is in flight
impl<E: Editor> Editor for Arc<Mutex<E>> {
    fn value(&self) -> String {
        self.lock().unwrap_or_else(|e| e.into_inner()).value()
    }

    fn selection(&self) -> String {
        self.lock().unwrap_or_else(|e| e.into_inner()).selection()
    }

    fn replace_selection(&mut self, replacement: &str) {
        self.lock()
            .unwrap_or_else(|e| e.into_inner())
            .replace_selection(replacement)
    }

    fn replace_range(&mut self, replacement: &str, from: Position, to: Position) {
        self.lock()
            .unwrap_or_else(|e| e.into_inner())
            .replace_range(replacement, from, to)
    }
}

// Converts a character offset into a (line, column) position
//
// Example:
//   text = "Hello\nWorld", index = 6 (the 'W') -> { line: 1, ch: 0 }
//
// Offsets past the end land on the end of the text.
pub fn position_from_index(text: &str, index: usize) -> Position {
    let mut position = Position::new(0, 0);

    for c in text.chars().take(index) {
        if c == '\n' {
            position.line += 1;
            position.ch = 0;
        } else {
            position.ch += 1;
        }
    }

    position
}

// The inverse of position_from_index
//
// A column past the end of its line is clamped to the line end; a line past
// the end of the text gives the text length.
pub fn index_from_position(text: &str, position: Position) -> usize {
    let mut index = 0;

    for (line_number, line) in text.split('\n').enumerate() {
        let line_len = line.chars().count();
        if line_number == position.line {
            return index + position.ch.min(line_len);
        }
        // +1 for the newline
        index += line_len + 1;
    }

    text.chars().count()
}

/// Replaces the char range `range` of `text` with `replacement`
pub fn splice(text: &str, range: Range<usize>, replacement: &str) -> String {
    let start = byte_offset(text, range.start);
    let end = byte_offset(text, range.end.max(range.start));

    let mut result = String::with_capacity(text.len() + replacement.len());
    result.push_str(&text[..start]);
    result.push_str(replacement);
    result.push_str(&text[end..]);
    result
}

// Finds `placeholder` in the editor by plain text search and swaps in
// `replacement`
//
// Returns false when the placeholder is gone (the user edited it away).
pub fn replace_placeholder<E: Editor + ?Sized>(
    editor: &mut E,
    placeholder: &str,
    replacement: &str,
) -> bool {
    let text = editor.value();
    let Some(start_byte) = text.find(placeholder) else {
        return false;
    };

    let start = text[..start_byte].chars().count();
    let end = start + placeholder.chars().count();

    let from = position_from_index(&text, start);
    let to = position_from_index(&text, end);
    editor.replace_range(replacement, from, to);
    true
}

fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

/// In-memory editor with a single selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    // Char range; empty means a plain cursor
    selection: Range<usize>,
}

impl TextBuffer {
    /// A buffer with the cursor at the end
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.chars().count();
        Self {
            text,
            selection: end..end,
        }
    }

    /// A buffer with every character selected
    pub fn select_all(text: impl Into<String>) -> Self {
        let mut buffer = Self::new(text);
        buffer.selection = 0..buffer.char_len();
        buffer
    }

    /// A buffer with the cursor at char offset `index` (clamped)
    pub fn with_cursor(text: impl Into<String>, index: usize) -> Self {
        let mut buffer = Self::new(text);
        let index = index.min(buffer.char_len());
        buffer.selection = index..index;
        buffer
    }

    /// Selects the char range `range` (clamped to the text)
    pub fn select(&mut self, range: Range<usize>) {
        let len = self.char_len();
        let end = range.end.min(len);
        let start = range.start.min(end);
        self.selection = start..end;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection_range(&self) -> Range<usize> {
        self.selection.clone()
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl Editor for TextBuffer {
    fn value(&self) -> String {
        self.text.clone()
    }

    fn selection(&self) -> String {
        self.text
            .chars()
            .skip(self.selection.start)
            .take(self.selection.len())
            .collect()
    }

    fn replace_selection(&mut self, replacement: &str) {
        self.text = splice(&self.text, self.selection.clone(), replacement);
        let cursor = self.selection.start + replacement.chars().count();
        self.selection = cursor..cursor;
    }

    fn replace_range(&mut self, replacement: &str, from: Position, to: Position) {
        let start = index_from_position(&self.text, from);
        let end = index_from_position(&self.text, to).max(start);
        self.text = splice(&self.text, start..end, replacement);

        // Keep the selection pointing at the same text when the edit was
        // before it; otherwise collapse it onto the end of the edit
        let removed = end - start;
        let inserted = replacement.chars().count();
        if self.selection.start >= end {
            let shift = |i: usize| i + inserted - removed;
            self.selection = shift(self.selection.start)..shift(self.selection.end);
        } else if self.selection.end > start {
            let cursor = start + inserted;
            self.selection = cursor..cursor;
        }
    }
}
