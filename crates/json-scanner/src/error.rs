use std::fmt;

/// A byte offset and the corresponding line and column number.
///
/// Lines start at 1. Columns count characters since the last line feed, starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub byte_offset: u64,
    pub line: u64,
    pub col: u64,
}

impl Default for Location {
    fn default() -> Self {
        Location {
            byte_offset: 0,
            line: 1,
            col: 0,
        }
    }
}

impl Location {
    /// Computes the location of `byte_offset` within `text`.
    ///
    /// Offsets past the end of the text, or inside a multi-byte character, are clamped
    /// to the preceding character boundary.
    pub fn of_offset(text: &str, byte_offset: usize) -> Location {
        let mut location = Location::default();
        for (i, c) in text.char_indices() {
            if i >= byte_offset {
                break;
            }
            location.advance_by_char(c);
        }
        location
    }

    fn advance_by_char(&mut self, c: char) {
        if c == '\n' {
            self.col = 0;
            self.line += 1;
        } else {
            self.col += 1;
        }
        self.byte_offset += c.len_utf8() as u64;
    }
}

/// What went wrong while reading JSON text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The text ended in the middle of a value.
    UnexpectedEof,
    /// A character that cannot start any token.
    UnexpectedCharacter,
    /// A well-formed token in a position where the grammar does not allow it.
    UnexpectedToken,
    /// A raw character below U+0020 inside a string.
    ControlCharacter,
    /// A backslash followed by something other than a JSON escape.
    InvalidEscape,
    /// A `\u` escape that is not followed by four hex digits.
    InvalidUnicodeEscape,
    /// A `\u` escape for a lone UTF-16 surrogate.
    UnpairedSurrogate,
    /// A run of letters that is not `null`, `true` or `false`.
    InvalidKeyword,
    /// A number lexeme that does not match the JSON number grammar.
    InvalidNumber,
    /// An object key that is not a string.
    NonStringKey,
    /// The same key appears twice in one object.
    DuplicateKey,
    /// Something other than whitespace follows the root value.
    TrailingContent,
    /// Arrays and objects are nested deeper than the configured limit.
    NestingTooDeep,
}

/// The error type used when parsing. Comes with Location information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonParseError {
    kind: ParseErrorKind,
    msg: String,
    location: Location,
}

impl JsonParseError {
    /// Creates a new [`JsonParseError`].
    pub fn new(kind: ParseErrorKind, msg: String, location: Location) -> JsonParseError {
        JsonParseError {
            kind,
            msg,
            location,
        }
    }

    /// The class of the error, for callers that want to branch on it.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// The error message.
    pub fn msg(&self) -> &str {
        &self.msg
    }

    /// The location in the source document at which the parse error was encountered.
    pub fn location(&self) -> Location {
        self.location
    }
}

impl fmt::Display for JsonParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at line:{}, col:{}: {}",
            self.location.line, self.location.col, &self.msg,
        )
    }
}

impl std::error::Error for JsonParseError {}

/// A type alias for `Result<T, JsonParseError>`.
pub type JsonParseResult<T> = Result<T, JsonParseError>;
