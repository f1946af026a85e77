use super::Command;

/// Committed commands plus the redo buffer.
///
/// Pure state: it never renders, and callers decide whether a mutation
/// needs a redraw from the `bool` each operation returns.
#[derive(Debug, Default, Clone)]
pub struct CommandHistory {
    /// Finished commands, oldest first
    undo_stack: Vec<Command>,
    /// Undone commands; the last one is the next to be redone
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished command. A new command invalidates whatever was
    /// undone before it, so the redo buffer is dropped.
    pub fn commit(&mut self, command: impl Into<Command>) {
        let command = command.into();
        log::info!("Committing {} ({} discarded from redo)", command.name(), self.redo_stack.len());
        self.undo_stack.push(command);
        self.redo_stack.clear();
    }

    /// Move the newest command into the redo buffer. Returns false if there
    /// was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(command) => {
                self.redo_stack.push(command);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone command back onto the history. Returns
    /// false if the redo buffer is empty.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(command) => {
                self.undo_stack.push(command);
                true
            }
            None => false,
        }
    }

    /// Clear the command history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Committed commands in drawing order
    pub fn committed(&self) -> &[Command] {
        &self.undo_stack
    }

    /// Undone commands; the last element is restored first by `redo`
    pub fn redo_stack(&self) -> &[Command] {
        &self.redo_stack
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sticker::StickerPlacement;
    use egui::pos2;

    fn sticker(glyph: &str) -> Command {
        StickerPlacement::new(glyph, pos2(1.0, 2.0), 30.0).into()
    }

    #[test]
    fn test_undo_moves_newest_to_redo() {
        let mut history = CommandHistory::new();
        history.commit(sticker("a"));
        history.commit(sticker("b"));

        assert!(history.undo());
        assert_eq!(history.committed(), &[sticker("a")]);
        assert_eq!(history.redo_stack(), &[sticker("b")]);
    }

    #[test]
    fn test_redo_restores_in_lifo_order() {
        let mut history = CommandHistory::new();
        history.commit(sticker("a"));
        history.commit(sticker("b"));
        history.undo();
        history.undo();

        assert!(history.redo());
        assert_eq!(history.committed(), &[sticker("a")]);
        assert!(history.redo());
        assert_eq!(history.committed(), &[sticker("a"), sticker("b")]);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_commit_drops_redo_buffer() {
        let mut history = CommandHistory::new();
        history.commit(sticker("a"));
        history.undo();
        history.commit(sticker("b"));

        assert_eq!(history.committed(), &[sticker("b")]);
        assert!(history.redo_stack().is_empty());
        assert!(!history.redo());
    }

    #[test]
    fn test_empty_history_is_noop() {
        let mut history = CommandHistory::new();
        assert!(!history.undo());
        assert!(!history.redo());
        assert!(history.is_empty());
        assert!(history.redo_stack().is_empty());
    }
}
