//! Lexical rules for the three kinds of JSON lexemes that span more than one character.
//!
//! Every scanner starts right after the lexeme's leading character has been read. The keyword
//! and number scanners additionally expect [`Cursor::mark`] to have been called just before that
//! leading character, because they return the marked text.

use crate::cursor::Cursor;
use crate::error::{JsonParseError, JsonParseResult, ParseErrorKind};

/// One of the three literal names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Null,
    True,
    False,
}

impl<'a> Cursor<'a> {
    /// Reads a string body up to and including the closing quote, and returns the decoded text.
    pub fn scan_string(&mut self) -> JsonParseResult<String> {
        let mut s = String::new();
        loop {
            let c = match self.next_char() {
                Some('"') => break,
                Some('\\') => match self.next_char() {
                    Some(c @ ('\\' | '/' | '"')) => c,
                    Some('b') => '\u{8}',
                    Some('f') => '\u{c}',
                    Some('n') => '\n',
                    Some('r') => '\r',
                    Some('t') => '\t',
                    Some('u') => self.scan_unicode_escape()?,
                    Some(c) => {
                        return self.err(
                            ParseErrorKind::InvalidEscape,
                            format!("'\\{c}' is invalid escaped character"),
                        )
                    }
                    None => return Err(self.eof_err()),
                },
                // Note: c.is_control() is not available here because JSON accepts 0x7f (DEL) in
                // string literals but 0x7f is control character.
                Some(c) if c < '\u{20}' => {
                    return self.err(
                        ParseErrorKind::ControlCharacter,
                        format!("Unexpected control character {:#x} in string", c as u32),
                    );
                }
                Some(c) => c,
                None => return Err(self.eof_err()),
            };
            s.push(c);
        }
        Ok(s)
    }

    /// Reads the four hex digits after `\u`. A first surrogate must be directly followed by a
    /// second `\uXXXX` surrogate; the pair is assembled into one char.
    fn scan_unicode_escape(&mut self) -> JsonParseResult<char> {
        let u = self.scan_hex4()?;
        match u {
            0xD800..=0xDBFF => {
                if self.next_char() != Some('\\') || self.next_char() != Some('u') {
                    return self.err(
                        ParseErrorKind::UnpairedSurrogate,
                        format!("First UTF-16 surrogate {u:#x} must be directly followed by a second \\uXXXX surrogate."),
                    );
                }
                let u2 = self.scan_hex4()?;
                if !matches!(u2, 0xDC00..=0xDFFF) {
                    return self.err(
                        ParseErrorKind::UnpairedSurrogate,
                        format!("First UTF-16 surrogate {u:#x} must be directly followed by a second \\uXXXX surrogate, but found {u2:#x}."),
                    );
                }
                let c = (((u & 0x3ff) as u32) << 10 | (u2 & 0x3ff) as u32) + 0x1_0000;
                char::from_u32(c).ok_or_else(|| {
                    self.error(
                        ParseErrorKind::UnpairedSurrogate,
                        format!("Invalid surrogate pair {u:#x} {u2:#x}"),
                    )
                })
            }
            0xDC00..=0xDFFF => self.err(
                ParseErrorKind::UnpairedSurrogate,
                format!("Unpaired UTF-16 second surrogate: {u:#x}"),
            ),
            _ => char::from_u32(u as u32).ok_or_else(|| {
                self.error(
                    ParseErrorKind::InvalidUnicodeEscape,
                    format!("Invalid code unit {u:#x}"),
                )
            }),
        }
    }

    fn scan_hex4(&mut self) -> JsonParseResult<u16> {
        let mut u = 0u16;
        for _ in 0..4 {
            let c = self.next_char().ok_or_else(|| self.eof_err())?;
            match c.to_digit(16) {
                Some(h) => u = u * 0x10 + h as u16,
                None => {
                    return self.err(
                        ParseErrorKind::InvalidUnicodeEscape,
                        format!("Unicode character must be \\uXXXX (X is hex character) format but found '{c}'"),
                    )
                }
            }
        }
        Ok(u)
    }

    /// Reads the rest of a run of lowercase ASCII letters and matches it against the literal names.
    pub fn scan_keyword(&mut self) -> JsonParseResult<Keyword> {
        while let Some(c) = self.next_char() {
            if !c.is_ascii_lowercase() {
                self.previous();
                break;
            }
        }
        match self.marked() {
            "null" => Ok(Keyword::Null),
            "true" => Ok(Keyword::True),
            "false" => Ok(Keyword::False),
            other => Err(JsonParseError::new(
                ParseErrorKind::InvalidKeyword,
                format!("Unexpected literal '{other}'"),
                self.mark_location(),
            )),
        }
    }

    /// Reads the rest of a run of number characters (digits, `+`, `-`, `.`, `e`, `E`) and
    /// returns the whole lexeme. The lexeme is not checked against the number grammar.
    pub fn scan_number(&mut self) -> &'a str {
        while let Some(c) = self.next_char() {
            if !matches!(c, '0'..='9' | '+' | '-' | '.' | 'e' | 'E') {
                self.previous();
                break;
            }
        }
        self.marked()
    }
}
