use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::NoteStore;

/// Deletes a note by id. A missing id is reported, not treated as a failure.
pub fn run(store: &mut NoteStore, id: NoteId) -> Result<CmdResult> {
    let removed = store.get(id).cloned();
    if !store.delete_by_id(id) {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::warning(format!("Note with ID {} not found.", id))));
    }

    let title = removed.as_ref().map(|n| n.title.as_str()).unwrap_or_default();
    let message = CmdMessage::success(format!("Note deleted ({}): {}", id, title));
    Ok(CmdResult::default()
        .with_notes(removed.into_iter().collect())
        .with_message(message)
        .changed())
}
