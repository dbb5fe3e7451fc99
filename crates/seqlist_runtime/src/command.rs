//! Command lines understood by the shell.

use seqlist_codec::Format;
use seqlist_foundation::{Error, Result};

/// One parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `types`: list the available type names.
    Types,
    /// `new <type>` / `create <type>`: start an empty sequence.
    Create(String),
    /// `add <value>`
    Add(String),
    /// `insert <index> <value>`
    Insert {
        /// Target position.
        index: i64,
        /// Value text.
        value: String,
    },
    /// `remove <index>`
    Remove(i64),
    /// `get <index>`
    Get(i64),
    /// `find <value>`
    Find(String),
    /// `sort`
    Sort,
    /// `show` / `items`
    Show,
    /// `size`
    Size,
    /// `save <path> [format]`
    Save {
        /// File path, relative to the data directory unless absolute.
        path: String,
        /// Explicit format; the configured default otherwise.
        format: Option<Format>,
    },
    /// `load <path> [format]`
    Load {
        /// File path, relative to the data directory unless absolute.
        path: String,
        /// Explicit format; the configured default otherwise.
        format: Option<Format>,
    },
    /// `help`
    Help,
    /// `quit` / `exit`
    Quit,
}

/// Command words, for completion.
pub const COMMAND_WORDS: &[&str] = &[
    "types", "new", "create", "add", "insert", "remove", "get", "find", "sort", "show", "items",
    "size", "save", "load", "help", "quit", "exit",
];

/// Shell usage, printed by `help`.
pub const HELP: &str = "\
Commands:
  types                   List available types
  new <type>              Start an empty sequence (alias: create)
  add <value>             Append a value
  insert <index> <value>  Insert a value at index (0..=size)
  remove <index>          Remove and print the value at index
  get <index>             Print the value at index
  find <value>            Print the index of the first equal value
  sort                    Sort ascending
  show                    Print all values (alias: items)
  size                    Print the number of values
  save <path> [format]    Save to a file (format: text or bin)
  load <path> [format]    Load from a file, replacing the sequence
  help                    Show this help
  quit                    Leave the shell (alias: exit)";

impl Command {
    /// Parses one line. Blank lines and `#` comments yield `None`.
    ///
    /// The command word is case-insensitive. Value text is the rest of the
    /// line after one separating space, so surrounding whitespace inside a
    /// value is kept.
    ///
    /// # Errors
    ///
    /// Returns an invalid command error for an unknown command word, a
    /// missing or malformed argument, or an unknown format name.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.trim().is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = split_word(trimmed);
        let command = match word.to_ascii_lowercase().as_str() {
            "types" => Self::Types,
            "new" | "create" => {
                let name = rest.trim();
                if name.is_empty() {
                    return Err(Error::invalid_command("usage: new <type>"));
                }
                Self::Create(name.to_string())
            }
            "add" => Self::Add(rest.to_string()),
            "insert" => {
                let (index, value) = split_word(rest.trim_start());
                Self::Insert {
                    index: parse_index(index, "insert <index> <value>")?,
                    value: value.to_string(),
                }
            }
            "remove" => Self::Remove(parse_index(rest.trim(), "remove <index>")?),
            "get" => Self::Get(parse_index(rest.trim(), "get <index>")?),
            "find" => Self::Find(rest.to_string()),
            "sort" => Self::Sort,
            "show" | "items" => Self::Show,
            "size" => Self::Size,
            "save" => {
                let (path, format) = parse_file_args(rest, "save <path> [format]")?;
                Self::Save { path, format }
            }
            "load" => {
                let (path, format) = parse_file_args(rest, "load <path> [format]")?;
                Self::Load { path, format }
            }
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => {
                return Err(Error::invalid_command(format!(
                    "unknown command '{other}' (try 'help')"
                )));
            }
        };
        Ok(Some(command))
    }
}

/// Splits off the first word; the remainder loses one separating space.
fn split_word(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(i) => {
            let rest = &s[i..];
            let mut chars = rest.chars();
            chars.next();
            (&s[..i], chars.as_str())
        }
        None => (s, ""),
    }
}

fn parse_index(text: &str, usage: &str) -> Result<i64> {
    if text.is_empty() {
        return Err(Error::invalid_command(format!("usage: {usage}")));
    }
    text.parse()
        .map_err(|_| Error::invalid_command(format!("invalid index '{text}' (usage: {usage})")))
}

/// `<path> [format]`: a trailing word naming a format is taken as the format.
fn parse_file_args(rest: &str, usage: &str) -> Result<(String, Option<Format>)> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Err(Error::invalid_command(format!("usage: {usage}")));
    }

    if let Some((path, last)) = rest.rsplit_once(char::is_whitespace) {
        if let Ok(format) = last.parse::<Format>() {
            return Ok((path.trim_end().to_string(), Some(format)));
        }
    }
    Ok((rest.to_string(), None))
}
