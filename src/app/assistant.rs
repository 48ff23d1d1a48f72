// LogTally - app/assistant.rs
//
// Interactive contact assistant: an in-memory name -> phone book driven by
// one-line commands (`hello`, `add`, `change`, `phone`, `all`, `exit`,
// `close`). Nothing is persisted between sessions.
//
// Argument problems never end the session. Every handler that takes
// arguments is wrapped by `input_error`, which turns any `CommandError`
// into the same reply regardless of which check failed.

use crate::util::constants;
use crate::util::error::CommandError;
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

/// A stored contact. `name` keeps the spelling first entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

/// Contacts keyed by lowercased name, so lookups ignore case and `all`
/// comes out sorted without a separate sort step.
#[derive(Debug, Default)]
pub struct ContactBook {
    contacts: BTreeMap<String, Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Look up a contact by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(&name.to_lowercase())
    }
}

/// Signature shared by argument-taking command handlers.
pub type Handler = fn(&[String], &mut ContactBook) -> Result<String, CommandError>;

/// Wrap a handler so any `CommandError` becomes the fixed input-error reply.
///
/// The specific cause is only visible at debug log level.
pub fn input_error<F>(handler: F) -> impl Fn(&[String], &mut ContactBook) -> String
where
    F: Fn(&[String], &mut ContactBook) -> Result<String, CommandError>,
{
    move |args: &[String], book: &mut ContactBook| match handler(args, book) {
        Ok(reply) => reply,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected command arguments");
            constants::INPUT_ERROR_MESSAGE.to_string()
        }
    }
}

/// Split a command line into a lowercased verb and its arguments.
///
/// Blank input yields an empty verb.
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some(verb) => (verb.to_lowercase(), parts.map(str::to_string).collect()),
        None => (String::new(), Vec::new()),
    }
}

/// `add <name> <phone>`: insert or overwrite a contact.
pub fn add_contact(args: &[String], book: &mut ContactBook) -> Result<String, CommandError> {
    let [name, phone] = args else {
        return Err(CommandError::WrongArgumentCount {
            command: "add",
            expected: 2,
            found: args.len(),
        });
    };
    book.contacts.insert(
        name.to_lowercase(),
        Contact {
            name: name.clone(),
            phone: phone.clone(),
        },
    );
    Ok("Contact added.".to_string())
}

/// `change <name> <phone>`: replace the phone of an existing contact.
pub fn change_contact(args: &[String], book: &mut ContactBook) -> Result<String, CommandError> {
    let [name, phone] = args else {
        return Err(CommandError::WrongArgumentCount {
            command: "change",
            expected: 2,
            found: args.len(),
        });
    };
    let contact = book
        .contacts
        .get_mut(&name.to_lowercase())
        .ok_or_else(|| CommandError::UnknownContact { name: name.clone() })?;
    contact.phone = phone.clone();
    Ok("Contact updated.".to_string())
}

/// `phone <name>`: show a contact's phone. Extra arguments are ignored.
pub fn show_phone(args: &[String], book: &mut ContactBook) -> Result<String, CommandError> {
    let name = args
        .first()
        .ok_or(CommandError::MissingArgument { command: "phone" })?;
    book.get(name)
        .map(|c| c.phone.clone())
        .ok_or_else(|| CommandError::UnknownContact { name: name.clone() })
}

/// `all`: every contact as `name: phone`, sorted by name ignoring case.
pub fn show_all(book: &ContactBook) -> String {
    if book.is_empty() {
        return "No contacts saved.".to_string();
    }
    book.contacts
        .values()
        .map(|c| format!("{}: {}", c.name, c.phone))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run the prompt loop until `exit`/`close` or end of input.
pub fn run_session<R: BufRead, W: Write>(mut input: R, out: &mut W) -> io::Result<()> {
    let mut book = ContactBook::new();
    let add = input_error(add_contact as Handler);
    let change = input_error(change_contact as Handler);
    let phone = input_error(show_phone as Handler);

    writeln!(out, "{}", constants::ASSISTANT_GREETING)?;

    let mut line = String::new();
    loop {
        write!(out, "{}", constants::ASSISTANT_PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            tracing::debug!("Input closed; ending session");
            writeln!(out)?;
            writeln!(out, "{}", constants::ASSISTANT_FAREWELL)?;
            break;
        }

        let (command, args) = parse_input(&line);
        tracing::debug!(command = %command, args = args.len(), "Assistant command");

        let reply = match command.as_str() {
            "exit" | "close" => {
                writeln!(out, "{}", constants::ASSISTANT_FAREWELL)?;
                break;
            }
            "hello" => "How can I help you?".to_string(),
            "add" => add(&args, &mut book),
            "change" => change(&args, &mut book),
            "phone" => phone(&args, &mut book),
            "all" => show_all(&book),
            _ => "Invalid command. Try again.".to_string(),
        };
        writeln!(out, "{reply}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn session(input: &str) -> String {
        let mut out = Vec::new();
        run_session(io::Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_input_lowercases_verb_only() {
        let (cmd, a) = parse_input("  ADD Alice 555-1234 \n");
        assert_eq!(cmd, "add");
        assert_eq!(a, args(&["Alice", "555-1234"]));
        assert_eq!(parse_input("   "), (String::new(), Vec::new()));
    }

    #[test]
    fn test_add_and_lookup_ignore_case() {
        let mut book = ContactBook::new();
        add_contact(&args(&["Alice", "111"]), &mut book).unwrap();
        assert_eq!(show_phone(&args(&["alice"]), &mut book).unwrap(), "111");
        assert_eq!(show_all(&book), "Alice: 111");
    }

    #[test]
    fn test_change_keeps_original_name() {
        let mut book = ContactBook::new();
        add_contact(&args(&["Alice", "111"]), &mut book).unwrap();
        change_contact(&args(&["ALICE", "222"]), &mut book).unwrap();
        let c = book.get("alice").unwrap();
        assert_eq!(c.name, "Alice");
        assert_eq!(c.phone, "222");
    }

    #[test]
    fn test_handlers_report_distinct_causes() {
        let mut book = ContactBook::new();
        assert_eq!(
            add_contact(&args(&["Alice"]), &mut book),
            Err(CommandError::WrongArgumentCount {
                command: "add",
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            change_contact(&args(&["Bob", "1"]), &mut book),
            Err(CommandError::UnknownContact {
                name: "Bob".to_string()
            })
        );
        assert_eq!(
            show_phone(&args(&[]), &mut book),
            Err(CommandError::MissingArgument { command: "phone" })
        );
    }

    #[test]
    fn test_input_error_collapses_every_cause_to_one_message() {
        let mut book = ContactBook::new();
        let add = input_error(add_contact as Handler);
        let change = input_error(change_contact as Handler);
        let phone = input_error(show_phone as Handler);

        assert_eq!(add(&args(&["a", "b", "c"]), &mut book), constants::INPUT_ERROR_MESSAGE);
        assert_eq!(change(&args(&["ghost", "1"]), &mut book), constants::INPUT_ERROR_MESSAGE);
        assert_eq!(phone(&args(&[]), &mut book), constants::INPUT_ERROR_MESSAGE);
        assert_eq!(phone(&args(&["ghost"]), &mut book), constants::INPUT_ERROR_MESSAGE);
        assert_eq!(add(&args(&["a", "1"]), &mut book), "Contact added.");
    }

    #[test]
    fn test_show_all_sorted_by_name() {
        let mut book = ContactBook::new();
        assert_eq!(show_all(&book), "No contacts saved.");
        add_contact(&args(&["bob", "2"]), &mut book).unwrap();
        add_contact(&args(&["Alice", "1"]), &mut book).unwrap();
        assert_eq!(show_all(&book), "Alice: 1\nbob: 2");
    }

    #[test]
    fn test_session_survives_bad_input_and_exits() {
        let out = session("hello\nadd Alice\nadd Alice 111\nphone alice\nfly\nexit\nall\n");
        let replies: Vec<&str> = out
            .split(constants::ASSISTANT_PROMPT)
            .map(str::trim_end)
            .collect();
        assert_eq!(
            replies,
            vec![
                constants::ASSISTANT_GREETING,
                "How can I help you?",
                constants::INPUT_ERROR_MESSAGE,
                "Contact added.",
                "111",
                "Invalid command. Try again.",
                constants::ASSISTANT_FAREWELL,
            ]
        );
    }

    #[test]
    fn test_session_ends_on_eof() {
        let out = session("close\n");
        assert!(out.ends_with("Good bye!\n"));
        let out = session("");
        assert!(out.ends_with("Good bye!\n"));
    }
}
