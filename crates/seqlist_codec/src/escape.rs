//! Escaping for strings embedded in the text format.
//!
//! The writer escapes `\\ \" \b \f \n \r \t` by name and every other char
//! outside printable ASCII as `\uXXXX`, one escape per UTF-16 code unit.
//! The reader accepts those plus `\/`, passes unknown escapes through as the
//! escaped char, and keeps a `\u` that is not followed by four hex digits.

/// Escapes `s` for embedding between double quotes.
#[must_use]
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ' '..='~' => out.push(c),
            _ => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{unit:04x}"));
                }
            }
        }
    }
    out
}

/// Reverses [`escape`], leniently.
///
/// `\uXXXX` escapes are collected as UTF-16 code units, so escaped
/// surrogate pairs combine into one char. Unpaired surrogates become
/// U+FFFD.
#[must_use]
pub fn unescape(s: &str) -> String {
    let mut units: Vec<u16> = Vec::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            push_char(&mut units, c);
            continue;
        }

        let Some(next) = chars.next() else {
            units.push(u16::from(b'\\'));
            break;
        };

        match next {
            'b' => units.push(0x08),
            'f' => units.push(0x0c),
            'n' => push_char(&mut units, '\n'),
            'r' => push_char(&mut units, '\r'),
            't' => push_char(&mut units, '\t'),
            'u' => {
                let hex: String = chars.clone().take(4).collect();
                match parse_hex4(&hex) {
                    Some(unit) => {
                        units.push(unit);
                        for _ in 0..4 {
                            chars.next();
                        }
                    }
                    None => {
                        units.push(u16::from(b'\\'));
                        units.push(u16::from(b'u'));
                    }
                }
            }
            // Covers `\\`, `\"`, `\/` and unknown escapes alike.
            other => push_char(&mut units, other),
        }
    }

    String::from_utf16_lossy(&units)
}

fn push_char(units: &mut Vec<u16>, c: char) {
    let mut buf = [0u16; 2];
    units.extend_from_slice(c.encode_utf16(&mut buf));
}

fn parse_hex4(hex: &str) -> Option<u16> {
    if hex.len() == 4 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        u16::from_str_radix(hex, 16).ok()
    } else {
        None
    }
}
