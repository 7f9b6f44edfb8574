use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::fs::FileStore;
use crate::store::NoteStore;

/// Reads the notes file and, only if that succeeds, replaces the store.
pub fn run(file: &FileStore, store: &mut NoteStore) -> Result<CmdResult> {
    let report = file.load()?;
    let count = report.notes.len();
    store.replace_all(report.notes);

    let mut result = CmdResult::default();
    for skipped in &report.skipped {
        result.add_message(CmdMessage::warning(format!(
            "Skipped line {}: {}",
            skipped.line, skipped.error
        )));
    }
    if report.existed {
        result.add_message(CmdMessage::info(format!(
            "Loaded {} note(s) from {}",
            count,
            file.path().display()
        )));
    }
    result.skipped = report.skipped;
    Ok(result)
}
