use crate::error::{NotesError, Result};
use crate::store::fs::DEFAULT_NOTES_FILE;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration, stored as `config.json` in the user's config directory.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NotesConfig {
    /// Path of the notes file. Relative paths resolve against the working directory.
    #[serde(default = "default_notes_file")]
    pub notes_file: PathBuf,

    /// Whether the interactive shell saves before exiting.
    #[serde(default = "default_save_on_exit")]
    pub save_on_exit: bool,
}

fn default_notes_file() -> PathBuf {
    PathBuf::from(DEFAULT_NOTES_FILE)
}

fn default_save_on_exit() -> bool {
    true
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            notes_file: default_notes_file(),
            save_on_exit: default_save_on_exit(),
        }
    }
}

impl NotesConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NotesError::Io)?;
        serde_json::from_str(&content).map_err(|e| {
            NotesError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    /// Picks the notes file: explicit flag, then environment, then config.
    pub fn resolve_notes_file(&self, flag: Option<PathBuf>, env: Option<PathBuf>) -> PathBuf {
        flag.or(env).unwrap_or_else(|| self.notes_file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = NotesConfig::default();
        assert_eq!(config.notes_file, PathBuf::from("notes.txt"));
        assert!(config.save_on_exit);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = NotesConfig::load(dir.path()).unwrap();
        assert_eq!(config, NotesConfig::default());
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"notes_file": "/tmp/elsewhere.txt", "save_on_exit": false}"#,
        )
        .unwrap();

        let loaded = NotesConfig::load(dir.path()).unwrap();
        assert_eq!(
            loaded,
            NotesConfig {
                notes_file: PathBuf::from("/tmp/elsewhere.txt"),
                save_on_exit: false,
            }
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"save_on_exit": false}"#).unwrap();

        let loaded = NotesConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.notes_file, PathBuf::from("notes.txt"));
        assert!(!loaded.save_on_exit);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();
        assert!(matches!(
            NotesConfig::load(dir.path()),
            Err(NotesError::Config(_))
        ));
    }

    #[test]
    fn test_resolve_precedence() {
        let config = NotesConfig::default();
        let flag = Some(PathBuf::from("flag.txt"));
        let env = Some(PathBuf::from("env.txt"));

        assert_eq!(
            config.resolve_notes_file(flag.clone(), env.clone()),
            PathBuf::from("flag.txt")
        );
        assert_eq!(
            config.resolve_notes_file(None, env),
            PathBuf::from("env.txt")
        );
        assert_eq!(
            config.resolve_notes_file(None, None),
            PathBuf::from("notes.txt")
        );
    }
}
