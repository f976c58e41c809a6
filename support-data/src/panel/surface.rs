//! The text widget showing the rendered snapshot.

use std::ops::Range;

/// Editor commands the panel issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorCommand {
    SelectAll,
}

/// A text-editing widget.
pub trait DisplaySurface {
    /// Replaces the whole content.
    fn set_value(&mut self, text: &str);

    fn value(&self) -> &str;

    /// Forgets undo history, so the fresh content cannot be undone away.
    fn clear_history(&mut self);

    fn focus(&mut self);

    fn execute(&mut self, command: EditorCommand);
}

/// In-memory [`DisplaySurface`] with an undo stack and a byte-range selection.
#[derive(Clone, Debug, Default)]
pub struct BufferSurface {
    text: String,
    history: Vec<String>,
    selection: Range<usize>,
    focused: bool,
}

impl BufferSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Previous contents, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// The selected text.
    pub fn selected_text(&self) -> &str {
        self.text.get(self.selection.clone()).unwrap_or_default()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Restores the previous content. Returns `false` when there is none.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.text = previous;
                self.selection = 0..0;
                true
            }
            None => false,
        }
    }
}

impl DisplaySurface for BufferSurface {
    fn set_value(&mut self, text: &str) {
        let previous = std::mem::replace(&mut self.text, text.to_owned());
        self.history.push(previous);
        self.selection = 0..0;
    }

    fn value(&self) -> &str {
        &self.text
    }

    fn clear_history(&mut self) {
        self.history.clear();
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn execute(&mut self, command: EditorCommand) {
        match command {
            EditorCommand::SelectAll => self.selection = 0..self.text.len(),
        }
    }
}
