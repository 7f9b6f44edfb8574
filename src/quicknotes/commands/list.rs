use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::NoteStore;

pub fn run(store: &NoteStore) -> Result<CmdResult> {
    let notes = store.list().to_vec();
    let mut result = CmdResult::default();
    if notes.is_empty() {
        result.add_message(CmdMessage::info("No notes found."));
    }
    Ok(result.with_notes(notes))
}
