use clap::Parser;
use directories::ProjectDirs;
use quicknotes::api::{MessageLevel, NotesApi};
use quicknotes::config::NotesConfig;
use quicknotes::error::Result;
use quicknotes::store::fs::FileStore;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod cli;
use args::{Cli, Commands};
use cli::print::{print_messages, print_notes};
use cli::shell::Shell;

const CONFIG_DIR_ENV: &str = "QUICKNOTES_CONFIG_DIR";
const NOTES_FILE_ENV: &str = "QUICKNOTES_FILE";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "quicknotes=debug"
    } else {
        "quicknotes=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config()?;
    let notes_file = config.resolve_notes_file(
        cli.file,
        std::env::var_os(NOTES_FILE_ENV).map(PathBuf::from),
    );
    tracing::debug!(path = %notes_file.display(), "using notes file");

    let (mut api, loaded) = NotesApi::open(FileStore::new(notes_file))?;

    match cli.command {
        Some(Commands::Add { title, content }) => {
            print_warnings(&loaded.messages);
            let result = api.create_note(&title, &content)?;
            api.save()?;
            print_messages(&result.messages);
        }
        Some(Commands::List) => {
            print_warnings(&loaded.messages);
            let result = api.list_notes()?;
            print_notes(&result.notes);
            print_messages(&result.messages);
        }
        Some(Commands::Search { term }) => {
            print_warnings(&loaded.messages);
            let result = api.search_notes(&term)?;
            print_notes(&result.notes);
            print_messages(&result.messages);
        }
        Some(Commands::Delete { id }) => {
            print_warnings(&loaded.messages);
            let result = api.delete_note(id)?;
            if result.changed {
                api.save()?;
            }
            print_messages(&result.messages);
        }
        Some(Commands::Shell) | None => {
            print_messages(&loaded.messages);
            let stdin = std::io::stdin();
            Shell::new(api, stdin.lock(), config.save_on_exit).run()?;
        }
    }
    Ok(())
}

fn load_config() -> Result<NotesConfig> {
    let config_dir = match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) => Some(PathBuf::from(dir)),
        None => ProjectDirs::from("com", "quicknotes", "quicknotes")
            .map(|dirs| dirs.config_dir().to_path_buf()),
    };

    match config_dir {
        Some(dir) => NotesConfig::load(dir),
        None => Ok(NotesConfig::default()),
    }
}

fn print_warnings(messages: &[quicknotes::api::CmdMessage]) {
    let warnings: Vec<_> = messages
        .iter()
        .filter(|m| m.level == MessageLevel::Warning)
        .cloned()
        .collect();
    print_messages(&warnings);
}
