//! # Storage Layer
//!
//! Two halves:
//!
//! - [`NoteStore`]: the in-memory, authoritative collection for the running
//!   session. Pure data structure, no I/O.
//! - [`fs::FileStore`] (with [`codec`]): the flat text file the store is
//!   saved to and loaded from.
//!
//! The two meet only in the load/save commands. Loads read into a temporary
//! `Vec<Note>` and hand it to [`NoteStore::replace_all`] once the whole file
//! has been read, so a failed load never leaves the store half-replaced.
//!
//! ## Storage Format
//!
//! ```text
//! notes.txt
//! 1|Groceries|Milk, eggs, bread|2024-03-01T09:30:00Z
//! 2|Reminder|Call the dentist|2024-03-01T09:31:12Z
//! ```
//!
//! See [`codec`] for escaping rules.

use crate::error::{NotesError, Result};
use crate::model::{Note, NoteId};

pub mod codec;
pub mod fs;

/// Ordered, in-memory collection of notes.
///
/// Lookups are linear scans. Note counts for a personal notes file are small
/// enough that this is not worth indexing.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
    // Highest id handed out this session; keeps deleted ids from coming back.
    high_water: NoteId,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a note from user input and appends it.
    pub fn create(&mut self, title: &str, content: &str) -> Result<Note> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() {
            return Err(NotesError::validation("Title cannot be empty"));
        }
        if content.is_empty() {
            return Err(NotesError::validation("Content cannot be empty"));
        }

        let id = self.next_id()?;
        let note = Note::new(id, title.to_string(), content.to_string());
        self.high_water = id;
        self.notes.push(note.clone());
        Ok(note)
    }

    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn search(&self, term: &str) -> Result<Vec<Note>> {
        let term = term.trim();
        if term.is_empty() {
            return Err(NotesError::validation("Search term cannot be empty"));
        }
        let term_lower = term.to_lowercase();
        Ok(self
            .notes
            .iter()
            .filter(|note| note.matches(&term_lower))
            .cloned()
            .collect())
    }

    /// Removes the note with `id`. Returns `false` when there was none.
    pub fn delete_by_id(&mut self, id: NoteId) -> bool {
        match self.notes.iter().position(|n| n.id == id) {
            Some(pos) => {
                self.notes.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Swaps in a complete collection, typically one just read from disk.
    pub fn replace_all(&mut self, notes: Vec<Note>) {
        self.high_water = max_id(&notes);
        self.notes = notes;
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn next_id(&self) -> Result<NoteId> {
        max_id(&self.notes)
            .max(self.high_water)
            .checked_add(1)
            .ok_or_else(|| NotesError::validation("Note id space exhausted"))
    }
}

fn max_id(notes: &[Note]) -> NoteId {
    notes.iter().map(|n| n.id).max().unwrap_or(0)
}
