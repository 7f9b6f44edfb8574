use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::NoteStore;

pub fn run(store: &mut NoteStore, title: &str, content: &str) -> Result<CmdResult> {
    let note = store.create(title, content)?;
    let message = CmdMessage::success(format!("Note added (ID: {})", note.id));
    Ok(CmdResult::default()
        .with_notes(vec![note])
        .with_message(message)
        .changed())
}
