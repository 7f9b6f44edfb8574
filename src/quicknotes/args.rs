use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quicknotes", version)]
#[command(about = "Keep short notes in a plain text file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Notes file to use (overrides QUICKNOTES_FILE and the config file)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a note and save
    #[command(alias = "n")]
    Add { title: String, content: String },

    /// List all notes
    #[command(alias = "ls")]
    List,

    /// Search titles and contents (case-insensitive)
    Search { term: String },

    /// Delete a note by ID and save
    #[command(alias = "rm")]
    Delete { id: u32 },

    /// Start the interactive menu (the default)
    Shell,
}
