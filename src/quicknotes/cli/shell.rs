//! Interactive menu loop.
//!
//! Reads one line per prompt from any `BufRead`. End of input acts like
//! choosing Exit, so piping a script into the binary still saves.

use super::print::{print_error, print_messages, print_notes};
use colored::Colorize;
use quicknotes::api::{CmdMessage, NotesApi};
use quicknotes::error::Result;
use quicknotes::model::NoteId;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    ViewAll,
    Search,
    Delete,
    Save,
    Load,
    Exit,
}

impl MenuChoice {
    const ALL: [(MenuChoice, &'static str); 7] = [
        (MenuChoice::Add, "Add Note"),
        (MenuChoice::ViewAll, "View All Notes"),
        (MenuChoice::Search, "Search Notes"),
        (MenuChoice::Delete, "Delete Note"),
        (MenuChoice::Save, "Save Notes"),
        (MenuChoice::Load, "Load Notes"),
        (MenuChoice::Exit, "Exit"),
    ];

    pub fn parse(input: &str) -> Option<Self> {
        let n: usize = input.trim().parse().ok()?;
        Self::ALL.get(n.checked_sub(1)?).map(|(choice, _)| *choice)
    }
}

pub fn parse_id(input: &str) -> Option<NoteId> {
    input.trim().parse().ok()
}

pub struct Shell<R> {
    api: NotesApi,
    input: R,
    save_on_exit: bool,
}

impl<R: BufRead> Shell<R> {
    pub fn new(api: NotesApi, input: R, save_on_exit: bool) -> Self {
        Self {
            api,
            input,
            save_on_exit,
        }
    }

    /// Runs until Exit or end of input. Saving happens here as the last
    /// action, never on drop. If reading input fails, the save still runs
    /// before the error is returned.
    pub fn run(mut self) -> Result<()> {
        print_messages(&[CmdMessage::info(format!(
            "Notes file: {}",
            self.api.notes_path().display()
        ))]);

        match self.session() {
            Ok(()) => self.exit(),
            Err(e) => {
                if self.save_on_exit {
                    match self.api.save() {
                        Ok(result) => print_messages(&result.messages),
                        Err(save_err) => print_error(&save_err),
                    }
                }
                Err(e)
            }
        }
    }

    fn session(&mut self) -> Result<()> {
        loop {
            print_menu();
            let Some(line) = self.prompt("Enter your choice: ")? else {
                println!();
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Add) => self.add()?,
                Some(MenuChoice::ViewAll) => self.view_all(),
                Some(MenuChoice::Search) => self.search()?,
                Some(MenuChoice::Delete) => self.delete()?,
                Some(MenuChoice::Save) => self.save(),
                Some(MenuChoice::Load) => self.load(),
                Some(MenuChoice::Exit) => return Ok(()),
                None => print_messages(&[CmdMessage::error(
                    "Invalid choice. Please enter a number from 1 to 7.",
                )]),
            }
        }
    }

    fn add(&mut self) -> Result<()> {
        let Some(title) = self.prompt("Enter note title: ")? else {
            return Ok(());
        };
        if title.trim().is_empty() {
            print_messages(&[CmdMessage::error("Title cannot be empty")]);
            return Ok(());
        }
        let Some(content) = self.prompt("Enter note content: ")? else {
            return Ok(());
        };

        match self.api.create_note(&title, &content) {
            Ok(result) => print_messages(&result.messages),
            Err(e) => print_error(&e),
        }
        Ok(())
    }

    fn view_all(&self) {
        match self.api.list_notes() {
            Ok(result) => {
                if !result.notes.is_empty() {
                    println!("\n{}", "=== All Notes ===".bold());
                    print_notes(&result.notes);
                }
                print_messages(&result.messages);
            }
            Err(e) => print_error(&e),
        }
    }

    fn search(&mut self) -> Result<()> {
        if self.api.notes().is_empty() {
            print_messages(&[CmdMessage::info("No notes to search.")]);
            return Ok(());
        }
        let Some(term) = self.prompt("Enter search term: ")? else {
            return Ok(());
        };

        match self.api.search_notes(&term) {
            Ok(result) => {
                if !result.notes.is_empty() {
                    println!("\n{}", "=== Search Results ===".bold());
                    print_notes(&result.notes);
                }
                print_messages(&result.messages);
            }
            Err(e) => print_error(&e),
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        if self.api.notes().is_empty() {
            print_messages(&[CmdMessage::info("No notes to delete.")]);
            return Ok(());
        }
        self.view_all();
        let Some(raw) = self.prompt("Enter the ID of the note to delete: ")? else {
            return Ok(());
        };
        let Some(id) = parse_id(&raw) else {
            print_messages(&[CmdMessage::error("Please enter a valid number.")]);
            return Ok(());
        };

        match self.api.delete_note(id) {
            Ok(result) => print_messages(&result.messages),
            Err(e) => print_error(&e),
        }
        Ok(())
    }

    fn save(&mut self) {
        match self.api.save() {
            Ok(result) => print_messages(&result.messages),
            Err(e) => print_error(&e),
        }
    }

    fn load(&mut self) {
        if self.api.is_dirty() {
            print_messages(&[CmdMessage::warning("Discarding unsaved changes.")]);
        }
        match self.api.load() {
            Ok(result) => {
                print_messages(&result.messages);
                if result.messages.is_empty() {
                    print_messages(&[CmdMessage::info("No saved notes yet.")]);
                }
            }
            Err(e) => print_error(&e),
        }
    }

    fn exit(&mut self) -> Result<()> {
        if self.save_on_exit {
            let result = self.api.save()?;
            print_messages(&result.messages);
        } else if self.api.is_dirty() {
            print_messages(&[CmdMessage::warning(
                "Exiting without saving (save_on_exit is off).",
            )]);
        }
        println!("Goodbye!");
        Ok(())
    }

    /// Returns `None` at end of input. Lines that are not UTF-8 are
    /// reported and asked for again.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        loop {
            print!("{}", label);
            io::stdout().flush()?;

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            match decode_line(buf) {
                Some(line) => return Ok(Some(line)),
                None => print_messages(&[CmdMessage::error(
                    "Input is not valid UTF-8. Please try again.",
                )]),
            }
        }
    }
}

fn decode_line(buf: Vec<u8>) -> Option<String> {
    let line = String::from_utf8(buf).ok()?;
    Some(line.trim_end_matches(&['\n', '\r'][..]).to_string())
}

fn print_menu() {
    println!("\n{}", "=== Quicknotes ===".bold());
    for (i, (_, label)) in MenuChoice::ALL.iter().enumerate() {
        println!("{}. {}", i + 1, label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_numbers() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 4 \n"), Some(MenuChoice::Delete));
        assert_eq!(MenuChoice::parse("7"), Some(MenuChoice::Exit));
    }

    #[test]
    fn rejects_out_of_range_and_text() {
        for input in ["0", "8", "-1", "", "add"] {
            assert_eq!(MenuChoice::parse(input), None, "accepted {:?}", input);
        }
    }

    #[test]
    fn decodes_input_lines() {
        assert_eq!(decode_line(b"hello\r\n".to_vec()), Some("hello".to_string()));
        assert_eq!(decode_line("café\n".as_bytes().to_vec()), Some("café".to_string()));
        assert_eq!(decode_line(b"caf\xE9\n".to_vec()), None);
    }

    #[test]
    fn parses_ids() {
        assert_eq!(parse_id(" 12 "), Some(12));
        assert_eq!(parse_id("twelve"), None);
        assert_eq!(parse_id("-3"), None);
    }

    struct BrokenPipe;

    impl io::Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "input closed"))
        }
    }

    #[test]
    fn read_failure_still_saves_before_returning() {
        use quicknotes::store::fs::FileStore;
        use std::io::Read;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        let (api, _) = NotesApi::open(FileStore::new(&path)).unwrap();
        let input = io::BufReader::new(io::Cursor::new(&b"1\nKeep\nme\n"[..]).chain(BrokenPipe));

        let result = Shell::new(api, input, true).run();

        assert!(result.is_err());
        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(saved.starts_with("1|Keep|me|"));
    }
}
