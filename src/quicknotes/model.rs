use chrono::{DateTime, SubsecRound, Utc};

pub type NoteId = u32;

/// A single note. Notes are never edited once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Builds a note stamped with the current time.
    ///
    /// The timestamp is truncated to whole seconds, which is the precision the
    /// notes file keeps.
    pub fn new(id: NoteId, title: String, content: String) -> Self {
        Self::with_timestamp(id, title, content, Utc::now())
    }

    pub fn with_timestamp(
        id: NoteId,
        title: String,
        content: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            created_at: created_at.trunc_subsecs(0),
        }
    }

    /// Case-insensitive substring match against title or content.
    /// `term_lower` must already be lowercased.
    pub fn matches(&self, term_lower: &str) -> bool {
        self.title.to_lowercase().contains(term_lower)
            || self.content.to_lowercase().contains(term_lower)
    }
}
