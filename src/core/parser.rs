// LogTally - core/parser.rs
//
// Record parser and log source reader.
//
// Line grammar: `<date> <time> <LEVEL> <message...>`, fields separated by
// arbitrary runs of whitespace. The message is everything after the third
// separator and is never split further. Loading is all-or-nothing: the
// first malformed line aborts the whole file.

use crate::core::model::LogRecord;
use crate::util::constants;
use crate::util::error::{LoadError, ParseError};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Parse one non-blank log line into a [`LogRecord`].
///
/// The level token is uppercased. Date and time are taken verbatim.
pub fn parse_line(line: &str) -> Result<LogRecord, ParseError> {
    let trimmed = line.trim();

    // Peel off the three single-token fields; whatever is left is the message.
    let mut tokens: Vec<&str> = Vec::with_capacity(constants::LOG_LINE_FIELDS - 1);
    let mut rest = trimmed;
    while tokens.len() < constants::LOG_LINE_FIELDS - 1 {
        let remaining = rest.trim_start();
        if remaining.is_empty() {
            rest = remaining;
            break;
        }
        match remaining.find(char::is_whitespace) {
            Some(end) => {
                tokens.push(&remaining[..end]);
                rest = &remaining[end..];
            }
            None => {
                tokens.push(remaining);
                rest = "";
            }
        }
    }
    let message = rest.trim_start();

    if tokens.len() < constants::LOG_LINE_FIELDS - 1 || message.is_empty() {
        let found = tokens.len() + usize::from(!message.is_empty());
        return Err(ParseError::TooFewFields {
            line: trimmed.to_string(),
            found,
        });
    }

    Ok(LogRecord {
        date: tokens[0].to_string(),
        time: tokens[1].to_string(),
        level: tokens[2].to_uppercase(),
        message: message.to_string(),
    })
}

/// Read every record from `reader`, skipping blank lines.
///
/// `path` is only used to label errors. Returns the records in line order,
/// or the first I/O or parse failure encountered.
pub fn read_records<R: BufRead>(reader: R, path: &Path) -> Result<Vec<LogRecord>, LoadError> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let line_number = idx as u64 + 1;
        let record = parse_line(&line).map_err(|source| {
            tracing::debug!(
                file = %path.display(),
                line_number,
                error = %source,
                "Malformed log line"
            );
            LoadError::Malformed {
                path: path.to_path_buf(),
                line_number,
                source,
            }
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Open `path` and load all of its records.
///
/// The file handle lives only for the duration of this call and is closed
/// on every exit path.
pub fn load_file(path: &Path) -> Result<Vec<LogRecord>, LoadError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let records = read_records(BufReader::new(file), path)?;

    tracing::debug!(
        file = %path.display(),
        records = records.len(),
        "Loading complete"
    );

    Ok(records)
}
