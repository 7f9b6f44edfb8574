use super::codec;
use crate::error::{NotesError, Result};
use crate::model::{Note, NoteId};
use std::collections::HashSet;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_NOTES_FILE: &str = "notes.txt";

/// A record that could not be loaded.
#[derive(Debug)]
pub struct SkippedRecord {
    /// 1-based line number in the file.
    pub line: usize,
    pub error: NotesError,
}

/// Outcome of reading the notes file.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub notes: Vec<Note>,
    pub skipped: Vec<SkippedRecord>,
    /// False when the file did not exist yet.
    pub existed: bool,
}

/// The notes file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record. A missing file is an empty, successful load.
    pub fn load(&self) -> Result<LoadReport> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "notes file not found, starting empty");
                return Ok(LoadReport::default());
            }
            Err(e) => return Err(NotesError::Io(e)),
        };

        let mut report = LoadReport {
            existed: true,
            ..LoadReport::default()
        };
        let mut seen: HashSet<NoteId> = HashSet::new();

        // Lines are read as bytes so one bad encoding only costs that record.
        for (idx, raw) in BufReader::new(file).split(b'\n').enumerate() {
            let raw = raw.map_err(NotesError::Io)?;
            let line_no = idx + 1;

            let decoded = std::str::from_utf8(&raw)
                .map_err(|e| NotesError::decode(format!("invalid UTF-8: {}", e)))
                .and_then(|line| {
                    if line.trim().is_empty() {
                        Ok(None)
                    } else {
                        codec::decode(line).map(Some)
                    }
                })
                .and_then(|note| match note {
                    Some(note) if !seen.insert(note.id) => {
                        Err(NotesError::decode(format!("duplicate id {}", note.id)))
                    }
                    other => Ok(other),
                });

            match decoded {
                Ok(Some(note)) => report.notes.push(note),
                Ok(None) => {}
                Err(error) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        line = line_no,
                        %error,
                        "skipping malformed record"
                    );
                    report.skipped.push(SkippedRecord {
                        line: line_no,
                        error,
                    });
                }
            }
        }

        tracing::debug!(
            path = %self.path.display(),
            loaded = report.notes.len(),
            skipped = report.skipped.len(),
            "loaded notes file"
        );
        Ok(report)
    }

    /// Rewrites the whole file with `notes`, in order.
    ///
    /// The records go to a temp file next to the destination which is then
    /// renamed over it, so the previous file stays intact if anything fails.
    pub fn save(&self, notes: &[Note]) -> Result<()> {
        let dir = self.parent_dir();
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(&dir).map_err(NotesError::Io)?;
            tracing::info!(dir = %dir.display(), "created notes directory");
        }

        let mut body = String::new();
        for note in notes {
            body.push_str(&codec::encode(note));
            body.push('\n');
        }

        let tmp_path = dir.join(format!(".notes-{}.tmp", Uuid::new_v4()));
        if let Err(e) = write_synced(&tmp_path, body.as_bytes())
            .and_then(|_| fs::rename(&tmp_path, &self.path))
        {
            let _ = fs::remove_file(&tmp_path);
            return Err(NotesError::Io(e));
        }

        tracing::debug!(path = %self.path.display(), count = notes.len(), "saved notes file");
        Ok(())
    }

    fn parent_dir(&self) -> PathBuf {
        self.path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}
