//! The JSON-like text format.
//!
//! Writer output:
//!
//! ```text
//! {
//!   "type": "Integer",
//!   "items": [
//!     "1",
//!     "2"
//!   ]
//! }
//! ```
//!
//! The reader is a permissive scan rather than a JSON parser:
//!
//! 1. the first `"type"` tag (ASCII case-insensitive) followed by
//!    `: "<name>"` gives the type name, resolved through the registry;
//! 2. the first `"items"` tag followed by `: [` opens the item list, which
//!    ends at the first `]` outside a quoted segment;
//! 3. the list is split on commas: quoted items run to the next unescaped
//!    quote, bare tokens are trimmed and kept if non-empty;
//! 4. every item is unescaped and parsed leniently by the resolved type.
//!
//! Anything outside those two fields is ignored.

use std::io::{Read, Write};

use seqlist_foundation::{Error, ErrorContext, Result, TypeRegistry};
use seqlist_storage::Sequence;

use crate::escape::{escape, unescape};

/// Renders a sequence in the text format.
#[must_use]
pub fn to_text(sequence: &Sequence) -> String {
    let prototype = sequence.prototype();
    let mut out = String::new();
    out.push_str("{\n");
    out.push_str(&format!("  \"type\": \"{}\",\n", escape(prototype.name())));
    out.push_str("  \"items\": [\n");

    let last = sequence.len().saturating_sub(1);
    for (i, value) in sequence.iter().enumerate() {
        out.push_str("    \"");
        out.push_str(&escape(&prototype.serialize(value)));
        out.push('"');
        if i < last {
            out.push(',');
        }
        out.push('\n');
    }

    out.push_str("  ]\n}\n");
    out
}

/// Writes a sequence in the text format.
///
/// # Errors
///
/// Returns an I/O failure if the writer fails.
pub fn write_text<W: Write>(sequence: &Sequence, writer: &mut W) -> Result<()> {
    writer
        .write_all(to_text(sequence).as_bytes())
        .map_err(|e| Error::io(format!("failed to write text: {e}")))
}

/// Reads a sequence from text-format content.
///
/// # Errors
///
/// Returns a format error if the type or items field is missing, an
/// unknown type error if the type name is not registered, and a parse
/// failure (with the item position in its context) for a malformed
/// numeral.
pub fn from_text(content: &str, registry: &TypeRegistry) -> Result<Sequence> {
    let name_start = find_field(content, "\"type\"", b'"')
        .ok_or_else(|| Error::format("type field not found"))?;
    let name_len = content[name_start..]
        .find('"')
        .ok_or_else(|| Error::format("type field not found"))?;
    let name = unescape(&content[name_start..name_start + name_len]);
    let prototype = registry.lookup(&name)?;

    let list_start = find_field(content, "\"items\"", b'[')
        .ok_or_else(|| Error::format("items array not found"))?;
    let list_len = list_end(&content[list_start..])
        .ok_or_else(|| Error::format("items array is not closed"))?;

    let mut sequence = Sequence::new(prototype);
    for (i, raw) in split_items(&content[list_start..list_start + list_len])
        .into_iter()
        .enumerate()
    {
        let value = prototype
            .parse(&unescape(&raw))
            .map_err(|e| e.with_context(ErrorContext::new().with_item(i)))?;
        sequence.add(value)?;
    }
    Ok(sequence)
}

/// Reads a sequence in the text format.
///
/// # Errors
///
/// Returns an I/O failure if the reader fails or the content is not UTF-8,
/// otherwise the errors of [`from_text`].
pub fn read_text<R: Read>(reader: &mut R, registry: &TypeRegistry) -> Result<Sequence> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| Error::io(format!("failed to read text: {e}")))?;
    from_text(&content, registry)
}

/// Finds the first `tag` followed by `ws : ws open` and returns the byte
/// offset just past `open`.
fn find_field(content: &str, tag: &str, open: u8) -> Option<usize> {
    let bytes = content.as_bytes();
    let tag = tag.as_bytes();

    (0..bytes.len().saturating_sub(tag.len() - 1))
        .filter(|&i| bytes[i..i + tag.len()].eq_ignore_ascii_case(tag))
        .find_map(|i| {
            let mut pos = skip_whitespace(bytes, i + tag.len());
            if bytes.get(pos) != Some(&b':') {
                return None;
            }
            pos = skip_whitespace(bytes, pos + 1);
            (bytes.get(pos) == Some(&open)).then_some(pos + 1)
        })
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_whitespace) {
        pos += 1;
    }
    pos
}

/// Length of the item list: up to the first `]` outside quotes.
fn list_end(list: &str) -> Option<usize> {
    let mut in_quotes = false;
    let mut escaped = false;

    for (i, b) in list.bytes().enumerate() {
        if escaped {
            escaped = false;
        } else if in_quotes {
            match b {
                b'\\' => escaped = true,
                b'"' => in_quotes = false,
                _ => {}
            }
        } else {
            match b {
                b'"' => in_quotes = true,
                b']' => return Some(i),
                _ => {}
            }
        }
    }
    None
}

/// Splits the item list into raw (still escaped) items.
fn split_items(list: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut chars = list.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() || c == ',' {
            chars.next();
            continue;
        }

        if c == '"' {
            chars.next();
            let mut item = String::new();
            while let Some((_, ch)) = chars.next() {
                match ch {
                    '\\' => match chars.next() {
                        Some((_, escaped)) => {
                            item.push('\\');
                            item.push(escaped);
                        }
                        None => item.push('\\'),
                    },
                    '"' => break,
                    _ => item.push(ch),
                }
            }
            items.push(item);
        } else {
            let mut end = list.len();
            while let Some(&(i, ch)) = chars.peek() {
                if ch == ',' {
                    end = i;
                    break;
                }
                chars.next();
            }
            let token = list[start..end].trim();
            if !token.is_empty() {
                items.push(token.to_string());
            }
        }
    }
    items
}
