use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotesError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Malformed record: {reason}")]
    Decode { reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl NotesError {
    pub fn validation(msg: impl Into<String>) -> Self {
        NotesError::Validation(msg.into())
    }

    pub fn decode(reason: impl Into<String>) -> Self {
        NotesError::Decode {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NotesError>;
