//! Lexical layer for JSON text: a forward-only [`Cursor`] with one character of pushback and a
//! mark for cutting out lexemes, plus scanners for string bodies, keyword literals and number
//! lexemes.
//!
//! Everything here works on a complete, already decoded `&str`. Errors carry the
//! [`Location`] at which they were detected.
//!
//! ```
//! use json_scanner::{Cursor, Keyword};
//!
//! let mut cursor = Cursor::new("  true ");
//! cursor.skip_whitespace();
//! cursor.mark();
//! assert_eq!(cursor.next_char(), Some('t'));
//! assert_eq!(cursor.scan_keyword().unwrap(), Keyword::True);
//! cursor.skip_whitespace();
//! assert!(cursor.is_at_end());
//! ```

mod cursor;
mod error;
mod scan;

pub use cursor::Cursor;
pub use error::{JsonParseError, JsonParseResult, Location, ParseErrorKind};
pub use scan::Keyword;
