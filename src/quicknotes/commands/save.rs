use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::fs::FileStore;
use crate::store::NoteStore;

pub fn run(file: &FileStore, store: &NoteStore) -> Result<CmdResult> {
    file.save(store.list())?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Saved {} note(s) to {}",
        store.len(),
        file.path().display()
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn writes_one_line_per_note() {
        let dir = tempdir().unwrap();
        let file = FileStore::new(dir.path().join("notes.txt"));
        let mut store = NoteStore::new();
        create::run(&mut store, "A", "a").unwrap();
        create::run(&mut store, "B", "b").unwrap();

        let result = run(&file, &store).unwrap();
        assert!(result.messages[0].content.starts_with("Saved 2 note(s)"));

        let on_disk = fs::read_to_string(file.path()).unwrap();
        let lines: Vec<_> = on_disk.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1|A|a|"));
        assert!(lines[1].starts_with("2|B|b|"));
    }

    #[test]
    fn empty_store_truncates_file() {
        let dir = tempdir().unwrap();
        let file = FileStore::new(dir.path().join("notes.txt"));
        fs::write(file.path(), "1|A|a|2024-03-01T09:30:00Z\n").unwrap();

        run(&file, &NoteStore::new()).unwrap();
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "");
    }
}
