use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::NoteStore;

pub fn run(store: &NoteStore, term: &str) -> Result<CmdResult> {
    let matches = store.search(term)?;
    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No notes found matching '{}'",
            term.trim()
        )));
    }
    Ok(result.with_notes(matches))
}
