use chrono::{DateTime, Utc};
use colored::Colorize;
use quicknotes::api::{CmdMessage, MessageLevel};
use quicknotes::error::NotesError;
use quicknotes::model::Note;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 16;
const SEPARATOR_WIDTH: usize = 50;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_error(err: &NotesError) {
    let text = match err {
        NotesError::Validation(msg) => msg.clone(),
        other => other.to_string(),
    };
    print_messages(&[CmdMessage::error(text)]);
}

/// Prints each note as a header line followed by its content.
pub fn print_notes(notes: &[Note]) {
    for note in notes {
        let id_str = format!("{}. ", note.id);
        let time_str = format!(
            "{:>width$}",
            format_time_ago(note.created_at),
            width = TIME_WIDTH
        );

        let available = LINE_WIDTH.saturating_sub(id_str.width() + TIME_WIDTH);
        let title = truncate_to_width(&single_line(&note.title), available);
        let padding = available.saturating_sub(title.width());

        println!(
            "{}{}{}{}",
            id_str.yellow(),
            title.bold(),
            " ".repeat(padding),
            time_str.dimmed()
        );
        println!(
            "{}",
            format!("Created: {}", note.created_at.format("%Y-%m-%d %H:%M:%S UTC")).dimmed()
        );
        for line in note.content.lines() {
            println!("    {}", line);
        }
        println!("{}", "-".repeat(SEPARATOR_WIDTH).dimmed());
    }
}

/// Titles may hold line breaks; the header has room for one line.
fn single_line(s: &str) -> String {
    s.replace(&['\r', '\n'][..], " ")
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_titles_are_untouched() {
        assert_eq!(truncate_to_width("Groceries", 20), "Groceries");
    }

    #[test]
    fn long_titles_get_an_ellipsis() {
        let out = truncate_to_width("abcdefghij", 5);
        assert_eq!(out, "abcd…");
        assert_eq!(out.width(), 5);
    }

    #[test]
    fn wide_characters_count_double() {
        let out = truncate_to_width("日本語のノート", 6);
        assert_eq!(out, "日本…");
    }

    #[test]
    fn line_breaks_in_titles_become_spaces() {
        assert_eq!(single_line("Line one\nline two"), "Line one line two");
        assert_eq!(single_line("a\r\nb"), "a  b");
        assert_eq!(truncate_to_width(&single_line("ab\ncdefgh"), 5), "ab c…");
    }

    #[test]
    fn future_timestamps_do_not_panic() {
        let ahead = Utc::now() + chrono::Duration::hours(1);
        assert!(!format_time_ago(ahead).is_empty());
    }
}
