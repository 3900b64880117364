use crate::error::{JsonParseError, JsonParseResult, Location, ParseErrorKind};

// Note: char::is_ascii_whitespace is not available because some characters are not defined as
// whitespace character in JSON spec. For example, U+000C FORM FEED is whitespace in Rust but
// it isn't in JSON.
pub(crate) fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\r' | '\t')
}

/// A forward-only character cursor over a complete JSON text.
///
/// Besides reading characters, the cursor can step back by exactly one character, skip JSON
/// whitespace, and remember a start position with [`Cursor::mark`] so that the text between the
/// mark and the current position can be taken out as one lexeme.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    index: usize,
    previous: Option<usize>,
    start: Option<usize>,
}

impl<'a> Cursor<'a> {
    /// Create a new [`Cursor`] positioned at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Cursor {
            text,
            index: 0,
            previous: None,
            start: None,
        }
    }

    /// Returns the next character and advances past it, or `None` at the end of the text.
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.text[self.index..].chars().next()?;
        self.previous = Some(self.index);
        self.index += c.len_utf8();
        Some(c)
    }

    /// Steps back over the character returned by the last call to [`Cursor::next_char`].
    ///
    /// Only one level of pushback is kept. Calling this twice in a row, or before any character
    /// was read, leaves the cursor where it is.
    pub fn previous(&mut self) {
        if let Some(index) = self.previous.take() {
            self.index = index;
        }
    }

    /// Advances past spaces, tabs, line feeds and carriage returns.
    pub fn skip_whitespace(&mut self) {
        let rest = &self.text[self.index..];
        let trimmed = rest.trim_start_matches(is_whitespace);
        self.index += rest.len() - trimmed.len();
        self.previous = None;
    }

    /// Remembers the current position as the start of a lexeme.
    pub fn mark(&mut self) {
        self.start = Some(self.index);
    }

    /// The text between the last [`Cursor::mark`] and the current position.
    ///
    /// Empty if nothing was marked yet.
    pub fn marked(&self) -> &'a str {
        let start = self.start.unwrap_or(self.index);
        &self.text[start..self.index]
    }

    /// The byte offset of the character that the next call to `next_char()` will return.
    pub fn offset(&self) -> usize {
        self.index
    }

    /// Whether every remaining character has been read.
    pub fn is_at_end(&self) -> bool {
        self.index >= self.text.len()
    }

    /// The location of the current position, with line and column numbers.
    pub fn location(&self) -> Location {
        Location::of_offset(self.text, self.index)
    }

    /// The location of the last marked position, or the current one if nothing was marked.
    pub fn mark_location(&self) -> Location {
        Location::of_offset(self.text, self.start.unwrap_or(self.index))
    }

    /// Builds an error located at the current position.
    pub fn error(&self, kind: ParseErrorKind, msg: String) -> JsonParseError {
        JsonParseError::new(kind, msg, self.location())
    }

    pub fn err<T>(&self, kind: ParseErrorKind, msg: String) -> JsonParseResult<T> {
        Err(self.error(kind, msg))
    }

    pub(crate) fn eof_err(&self) -> JsonParseError {
        self.error(ParseErrorKind::UnexpectedEof, String::from("Unexpected EOF"))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reads_characters_in_order() {
        let mut cursor = Cursor::new("a\u{20AC}b");
        assert_eq!(cursor.next_char(), Some('a'));
        assert_eq!(cursor.next_char(), Some('\u{20AC}'));
        assert_eq!(cursor.offset(), 4);
        assert_eq!(cursor.next_char(), Some('b'));
        assert_eq!(cursor.next_char(), None);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn pushback_is_one_level() {
        let mut cursor = Cursor::new("xyz");
        cursor.next_char();
        cursor.next_char();
        cursor.previous();
        cursor.previous();
        assert_eq!(cursor.next_char(), Some('y'));
    }

    #[test]
    fn pushback_at_start_is_a_no_op() {
        let mut cursor = Cursor::new("q");
        cursor.previous();
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.next_char(), Some('q'));
    }

    #[test]
    fn skips_only_json_whitespace() {
        let mut cursor = Cursor::new(" \t\r\n\u{000C}x");
        cursor.skip_whitespace();
        assert_eq!(cursor.next_char(), Some('\u{000C}'));

        let mut cursor = Cursor::new("\u{00A0}1");
        cursor.skip_whitespace();
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn marked_text_spans_from_mark() {
        let mut cursor = Cursor::new("  true,");
        cursor.skip_whitespace();
        cursor.mark();
        for _ in 0..4 {
            cursor.next_char();
        }
        assert_eq!(cursor.marked(), "true");
        assert_eq!(cursor.mark_location().col, 2);
    }

    #[test]
    fn marked_is_empty_without_mark() {
        let mut cursor = Cursor::new("abc");
        cursor.next_char();
        assert_eq!(cursor.marked(), "");
    }
}
