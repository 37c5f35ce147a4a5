use panelkit_core::Result;

use crate::book::Book;
use crate::model::Panel;

/// A reversible edit recorded on the editor's undo stack.
///
/// Edits are stored as before/after snapshots: page-level edits keep the
/// panel lists of one page, structural edits keep the whole book.
#[derive(Debug, Clone)]
pub enum EditorCommand {
    ReplacePanels(ReplacePanels),
    ReplaceBook(ReplaceBook),
}

#[derive(Debug, Clone)]
pub struct ReplacePanels {
    pub name: &'static str,
    pub page_id: String,
    pub before: Vec<Panel>,
    pub after: Vec<Panel>,
}

#[derive(Debug, Clone)]
pub struct ReplaceBook {
    pub name: &'static str,
    pub before: Book,
    pub after: Book,
}

impl EditorCommand {
    /// Returns the name of the command for display.
    pub fn name(&self) -> &'static str {
        match self {
            EditorCommand::ReplacePanels(cmd) => cmd.name,
            EditorCommand::ReplaceBook(cmd) => cmd.name,
        }
    }

    /// Re-applies the edit.
    pub fn apply(&self, book: &mut Book) -> Result<()> {
        match self {
            EditorCommand::ReplacePanels(cmd) => {
                book.page_mut(&cmd.page_id)?.panels = cmd.after.clone();
            }
            EditorCommand::ReplaceBook(cmd) => *book = cmd.after.clone(),
        }
        Ok(())
    }

    /// Reverts the edit.
    pub fn revert(&self, book: &mut Book) -> Result<()> {
        match self {
            EditorCommand::ReplacePanels(cmd) => {
                book.page_mut(&cmd.page_id)?.panels = cmd.before.clone();
            }
            EditorCommand::ReplaceBook(cmd) => *book = cmd.before.clone(),
        }
        Ok(())
    }
}
