//! Line codec for the notes file.
//!
//! Each note is one line of four `|`-separated fields:
//!
//! ```text
//! id|title|content|created_at
//! ```
//!
//! Inside title and content, `\`, `|`, newline and carriage return are written
//! as `\\`, `\|`, `\n` and `\r`, so any text survives a round trip and a record
//! never spans more than one line. `created_at` is RFC 3339 in UTC with whole
//! seconds.

use crate::error::{NotesError, Result};
use crate::model::{Note, NoteId};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

pub const DELIMITER: char = '|';
const ESCAPE: char = '\\';
const FIELD_COUNT: usize = 4;

pub fn encode(note: &Note) -> String {
    format!(
        "{id}{d}{title}{d}{content}{d}{ts}",
        id = note.id,
        title = escape(&note.title),
        content = escape(&note.content),
        ts = format_timestamp(&note.created_at),
        d = DELIMITER,
    )
}

pub fn decode(line: &str) -> Result<Note> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields = split_fields(line)?;
    if fields.len() != FIELD_COUNT {
        return Err(NotesError::decode(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            fields.len()
        )));
    }

    let id = parse_id(&fields[0])?;
    let title = non_empty(&fields[1], "title")?;
    let content = non_empty(&fields[2], "content")?;
    let created_at = parse_timestamp(&fields[3])?;

    Ok(Note::with_timestamp(id, title, content, created_at))
}

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Accepts RFC 3339, or a zone-less ISO-8601 date-time (read as UTC) as
/// written by older versions of the file.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .map(|naive| naive.and_utc())
        .map_err(|_| NotesError::decode(format!("invalid timestamp '{}'", raw)))
}

fn parse_id(raw: &str) -> Result<NoteId> {
    match raw.trim().parse::<NoteId>() {
        Ok(0) | Err(_) => Err(NotesError::decode(format!("invalid id '{}'", raw))),
        Ok(id) => Ok(id),
    }
}

fn non_empty(field: &str, name: &str) -> Result<String> {
    if field.trim().is_empty() {
        return Err(NotesError::decode(format!("empty {}", name)));
    }
    Ok(field.to_string())
}

fn escape(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    for c in field.chars() {
        match c {
            ESCAPE => out.push_str("\\\\"),
            DELIMITER => out.push_str("\\|"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}

/// Splits on unescaped delimiters and unescapes each field.
fn split_fields(line: &str) -> Result<Vec<String>> {
    let mut fields = Vec::with_capacity(FIELD_COUNT);
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            ESCAPE => {
                let unescaped = match chars.next() {
                    Some(ESCAPE) => ESCAPE,
                    Some(DELIMITER) => DELIMITER,
                    Some('n') => '\n',
                    Some('r') => '\r',
                    Some(other) => {
                        return Err(NotesError::decode(format!(
                            "unknown escape sequence '\\{}'",
                            other
                        )))
                    }
                    None => return Err(NotesError::decode("dangling escape at end of line")),
                };
                current.push(unescaped);
            }
            DELIMITER => fields.push(std::mem::take(&mut current)),
            other => current.push(other),
        }
    }
    fields.push(current);
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn note(id: NoteId, title: &str, content: &str) -> Note {
        Note::with_timestamp(id, title.into(), content.into(), at(1_709_285_400))
    }

    #[test]
    fn encodes_plain_record() {
        let line = encode(&note(1, "Groceries", "Milk, eggs, bread"));
        assert_eq!(line, "1|Groceries|Milk, eggs, bread|2024-03-01T09:30:00Z");
    }

    #[test]
    fn decodes_plain_record() {
        let decoded = decode("2|Reminder|Call the dentist|2024-03-01T09:30:00Z").unwrap();
        assert_eq!(decoded, note(2, "Reminder", "Call the dentist"));
    }

    #[test]
    fn round_trips_notes_with_special_characters() {
        let samples = [
            note(1, "a|b", "pipes | everywhere ||"),
            note(2, r"C:\temp\", r"trailing \"),
            note(3, "multi", "line one\nline two\r\nline three"),
            note(4, "ünïcödé ✓", "emoji 📝 and \\| mixed"),
        ];
        for original in samples {
            let line = encode(&original);
            assert!(!line.contains('\n'), "record spans lines: {:?}", line);
            assert_eq!(decode(&line).unwrap(), original);
        }
    }

    #[test]
    fn escaped_pipe_does_not_split() {
        let line = encode(&note(9, "x|y", "z"));
        assert_eq!(line.matches('|').count(), 4);
        assert_eq!(decode(&line).unwrap().title, "x|y");
    }

    #[test]
    fn accepts_trailing_carriage_return() {
        let decoded = decode("1|T|C|2024-03-01T09:30:00Z\r").unwrap();
        assert_eq!(decoded.id, 1);
    }

    #[test]
    fn accepts_zone_less_legacy_timestamps() {
        let decoded = decode("4|Old|From before|2024-03-01T09:30:00.123456789").unwrap();
        assert_eq!(decoded.created_at, at(1_709_285_400));

        let decoded = decode("5|Old|Minutes only|2024-03-01T09:30").unwrap();
        assert_eq!(decoded.created_at, at(1_709_285_400));
    }

    #[test]
    fn offset_timestamps_are_normalised_to_utc() {
        let decoded = decode("6|T|C|2024-03-01T10:30:00+01:00").unwrap();
        assert_eq!(decoded.created_at, at(1_709_285_400));
    }

    #[test]
    fn rejects_wrong_field_count() {
        for line in [
            "",
            "1|only title",
            "1|T|C",
            "1|T|C|2024-03-01T09:30:00Z|extra",
        ] {
            assert!(
                matches!(decode(line), Err(NotesError::Decode { .. })),
                "accepted {:?}",
                line
            );
        }
    }

    #[test]
    fn rejects_bad_fields() {
        for line in [
            "x|T|C|2024-03-01T09:30:00Z",
            "0|T|C|2024-03-01T09:30:00Z",
            "-3|T|C|2024-03-01T09:30:00Z",
            "1| |C|2024-03-01T09:30:00Z",
            "1|T||2024-03-01T09:30:00Z",
            "1|T|C|yesterday",
            r"1|T\q|C|2024-03-01T09:30:00Z",
            r"1|T|C|2024-03-01T09:30:00Z\",
        ] {
            assert!(
                matches!(decode(line), Err(NotesError::Decode { .. })),
                "accepted {:?}",
                line
            );
        }
    }
}
