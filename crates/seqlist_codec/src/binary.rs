//! The compact binary format.
//!
//! Layout, all integers big-endian:
//!
//! ```text
//! [u16 len][type name]    modified UTF-8
//! [i32 count]
//! count × [u8 flag]       0 = present, anything else = absent
//!         [u16 len][text] present items only, modified UTF-8
//! ```
//!
//! Strings use modified UTF-8: each UTF-16 code unit is encoded on its own,
//! with U+0000 taking two bytes.

use std::io::{self, Read, Write};

use seqlist_foundation::{Error, ErrorContext, Result, TypeRegistry, Value};
use seqlist_storage::Sequence;

const PRESENT: u8 = 0;
const ABSENT: u8 = 1;

/// Encodes a sequence in the binary format.
///
/// # Errors
///
/// Returns a format error if the sequence has more than `i32::MAX` items or
/// a string encodes to more than 65535 bytes.
pub fn to_bytes(sequence: &Sequence) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    write_binary(sequence, &mut bytes)?;
    Ok(bytes)
}

/// Decodes a sequence from the binary format. Trailing bytes are ignored.
///
/// # Errors
///
/// See [`read_binary`].
pub fn from_bytes(mut bytes: &[u8], registry: &TypeRegistry) -> Result<Sequence> {
    read_binary(&mut bytes, registry)
}

/// Writes a sequence in the binary format.
///
/// # Errors
///
/// Returns a format error for an unencodable sequence (see [`to_bytes`]) and
/// an I/O failure if the writer fails.
pub fn write_binary<W: Write>(sequence: &Sequence, writer: &mut W) -> Result<()> {
    let prototype = sequence.prototype();
    let count = i32::try_from(sequence.len()).map_err(|_| {
        Error::format(format!(
            "sequence of {} items exceeds the binary item limit",
            sequence.len()
        ))
    })?;

    write_utf(writer, prototype.name())?;
    write_all(writer, &count.to_be_bytes())?;

    for (i, value) in sequence.iter().enumerate() {
        if value.is_nil() {
            write_all(writer, &[ABSENT])?;
        } else {
            write_all(writer, &[PRESENT])?;
            write_utf(writer, &prototype.serialize(value))
                .map_err(|e| e.with_context(ErrorContext::new().with_item(i)))?;
        }
    }
    Ok(())
}

/// Reads a sequence in the binary format.
///
/// # Errors
///
/// Returns an I/O failure for truncated input, a format error for a negative
/// count or malformed string bytes, an unknown type error for an
/// unregistered type name, and a parse failure for a malformed numeral.
pub fn read_binary<R: Read>(reader: &mut R, registry: &TypeRegistry) -> Result<Sequence> {
    let name = read_utf(reader)?;
    let prototype = registry.lookup(&name)?;

    let count = i32::from_be_bytes(read_array(reader)?);
    let count = usize::try_from(count)
        .map_err(|_| Error::format(format!("negative item count: {count}")))?;

    let mut sequence = Sequence::new(prototype);
    for i in 0..count {
        let item_context = || ErrorContext::new().with_item(i);
        let [flag] = read_array::<_, 1>(reader).map_err(|e| e.with_context(item_context()))?;
        if flag == PRESENT {
            let text = read_utf(reader).map_err(|e| e.with_context(item_context()))?;
            let value = prototype
                .parse(&text)
                .map_err(|e| e.with_context(item_context()))?;
            sequence.add(value)?;
        } else {
            sequence.add(Value::Nil)?;
        }
    }
    Ok(sequence)
}

fn write_all<W: Write>(writer: &mut W, bytes: &[u8]) -> Result<()> {
    writer
        .write_all(bytes)
        .map_err(|e| Error::io(format!("failed to write binary data: {e}")))
}

fn read_array<R: Read, const N: usize>(reader: &mut R) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf).map_err(read_error)?;
    Ok(buf)
}

fn read_error(e: io::Error) -> Error {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        Error::io("unexpected end of binary data")
    } else {
        Error::io(format!("failed to read binary data: {e}"))
    }
}

fn write_utf<W: Write>(writer: &mut W, s: &str) -> Result<()> {
    let encoded = encode_modified_utf8(s);
    let len = u16::try_from(encoded.len()).map_err(|_| {
        Error::format(format!(
            "encoded string of {} bytes exceeds 65535",
            encoded.len()
        ))
    })?;
    write_all(writer, &len.to_be_bytes())?;
    write_all(writer, &encoded)
}

fn read_utf<R: Read>(reader: &mut R) -> Result<String> {
    let len = u16::from_be_bytes(read_array(reader)?);
    let mut bytes = vec![0u8; usize::from(len)];
    reader.read_exact(&mut bytes).map_err(read_error)?;
    decode_modified_utf8(&bytes)
}

/// Encodes `s` as modified UTF-8.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn encode_modified_utf8(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for unit in s.encode_utf16() {
        match unit {
            0x0001..=0x007f => out.push(unit as u8),
            0x0000 | 0x0080..=0x07ff => {
                out.push(0xc0 | (unit >> 6) as u8);
                out.push(0x80 | (unit & 0x3f) as u8);
            }
            _ => {
                out.push(0xe0 | (unit >> 12) as u8);
                out.push(0x80 | ((unit >> 6) & 0x3f) as u8);
                out.push(0x80 | (unit & 0x3f) as u8);
            }
        }
    }
    out
}

/// Decodes modified UTF-8. Unpaired surrogates become U+FFFD.
///
/// # Errors
///
/// Returns a format error for a truncated or invalid byte sequence.
pub fn decode_modified_utf8(bytes: &[u8]) -> Result<String> {
    let mut units = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        let (unit, width) = match b {
            0x00..=0x7f => (u16::from(b), 1),
            0xc0..=0xdf => {
                let b2 = continuation(bytes, i + 1)?;
                ((u16::from(b & 0x1f) << 6) | b2, 2)
            }
            0xe0..=0xef => {
                let b2 = continuation(bytes, i + 1)?;
                let b3 = continuation(bytes, i + 2)?;
                ((u16::from(b & 0x0f) << 12) | (b2 << 6) | b3, 3)
            }
            _ => return Err(malformed(i)),
        };
        units.push(unit);
        i += width;
    }

    Ok(String::from_utf16_lossy(&units))
}

fn continuation(bytes: &[u8], i: usize) -> Result<u16> {
    match bytes.get(i) {
        Some(&b) if b & 0xc0 == 0x80 => Ok(u16::from(b & 0x3f)),
        _ => Err(malformed(i)),
    }
}

fn malformed(offset: usize) -> Error {
    Error::format(format!("malformed modified UTF-8 at byte {offset}"))
}
