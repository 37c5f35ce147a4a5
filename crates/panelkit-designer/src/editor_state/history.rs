//! Undo/redo functionality for EditorState.

use tracing::debug;

use panelkit_core::Result;

use super::EditorState;
use crate::commands::EditorCommand;

impl EditorState {
    pub(crate) fn push_command(&mut self, command: EditorCommand) {
        debug!("Recorded edit: {}", command.name());
        self.undo_stack.push(command);
        if self.undo_stack.len() > self.settings.max_undo_depth {
            let excess = self.undo_stack.len() - self.settings.max_undo_depth;
            self.undo_stack.drain(..excess);
        }
        self.redo_stack.clear();
        self.is_modified = true;
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Name of the edit the next undo would revert.
    pub fn undo_name(&self) -> Option<&'static str> {
        self.undo_stack.last().map(EditorCommand::name)
    }

    pub fn redo_name(&self) -> Option<&'static str> {
        self.redo_stack.last().map(EditorCommand::name)
    }

    /// Reverts the latest edit. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> Result<bool> {
        let Some(command) = self.undo_stack.pop() else {
            return Ok(false);
        };
        if let Err(e) = command.revert(&mut self.book) {
            self.undo_stack.push(command);
            return Err(e);
        }
        debug!("Undo: {}", command.name());
        self.redo_stack.push(command);
        self.is_modified = true;
        Ok(true)
    }

    /// Re-applies the latest undone edit. Returns false when there is nothing
    /// to redo.
    pub fn redo(&mut self) -> Result<bool> {
        let Some(command) = self.redo_stack.pop() else {
            return Ok(false);
        };
        if let Err(e) = command.apply(&mut self.book) {
            self.redo_stack.push(command);
            return Err(e);
        }
        debug!("Redo: {}", command.name());
        self.undo_stack.push(command);
        self.is_modified = true;
        Ok(true)
    }

    pub fn clear_history(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
