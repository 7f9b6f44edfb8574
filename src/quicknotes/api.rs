//! # API Facade
//!
//! [`NotesApi`] is the single entry point the shell talks to. It owns the
//! session's [`NoteStore`] and the [`FileStore`] it persists to, and
//! dispatches each call to a command in `commands/`.
//!
//! The facade adds only session bookkeeping:
//! - whether a load has happened yet (`is_loaded`), so an empty store can be
//!   told apart from "nothing loaded"
//! - whether there are unsaved changes (`is_dirty`)
//!
//! Nothing here prints. Saving at exit is the caller's job; dropping a
//! `NotesApi` never writes to disk.

use crate::commands;
use crate::error::Result;
use crate::model::{Note, NoteId};
use crate::store::fs::FileStore;
use crate::store::NoteStore;
use std::path::Path;

pub struct NotesApi {
    store: NoteStore,
    file: FileStore,
    loaded: bool,
    dirty: bool,
}

impl NotesApi {
    pub fn new(file: FileStore) -> Self {
        Self {
            store: NoteStore::new(),
            file,
            loaded: false,
            dirty: false,
        }
    }

    /// Builds the API and loads the notes file in one step.
    pub fn open(file: FileStore) -> Result<(Self, commands::CmdResult)> {
        let mut api = Self::new(file);
        let result = api.load()?;
        Ok((api, result))
    }

    pub fn create_note(&mut self, title: &str, content: &str) -> Result<commands::CmdResult> {
        let result = commands::create::run(&mut self.store, title, content)?;
        self.dirty |= result.changed;
        Ok(result)
    }

    pub fn list_notes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search_notes(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn delete_note(&mut self, id: NoteId) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.store, id)?;
        self.dirty |= result.changed;
        Ok(result)
    }

    pub fn save(&mut self) -> Result<commands::CmdResult> {
        let result = commands::save::run(&self.file, &self.store)?;
        self.dirty = false;
        Ok(result)
    }

    /// Replaces the session's notes with the file's. On error nothing changes.
    pub fn load(&mut self) -> Result<commands::CmdResult> {
        let result = commands::load::run(&self.file, &mut self.store)?;
        self.loaded = true;
        self.dirty = false;
        Ok(result)
    }

    pub fn notes(&self) -> &[Note] {
        self.store.list()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn notes_path(&self) -> &Path {
        self.file.path()
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
