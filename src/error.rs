// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::error;
use std::fmt;
use std::io;

/// Position of the error.
///
/// Position indicates row/line and column. Starting positions is 1:1.
#[derive(Clone,Copy,PartialEq,Debug)]
pub struct ErrorPos {
    #[allow(missing_docs)]
    pub row: usize,
    #[allow(missing_docs)]
    pub col: usize,
}

impl ErrorPos {
    /// Constructs a new error position.
    pub fn new(row: usize, col: usize) -> ErrorPos {
        ErrorPos {
            row: row,
            col: col,
        }
    }
}

impl fmt::Display for ErrorPos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// Recoverable path data errors.
///
/// They are passed to an [`ErrorReporter`] and never abort the parsing.
///
/// [`ErrorReporter`]: trait.ErrorReporter.html
#[derive(Clone,PartialEq,Debug)]
pub enum Error {
    /// A token is not a valid number.
    ///
    /// `text` contains the whole token, which can be empty at the end of the stream.
    InvalidNumber {
        #[allow(missing_docs)]
        text: String,
        #[allow(missing_docs)]
        pos: ErrorPos,
    },

    /// A character that can't start a command or an arc flag.
    ///
    /// `None` indicates the end of the stream.
    UnexpectedChar {
        #[allow(missing_docs)]
        ch: Option<char>,
        #[allow(missing_docs)]
        pos: ErrorPos,
    },

    /// Trailing data after the path.
    EndOfStreamExpected {
        #[allow(missing_docs)]
        ch: char,
        #[allow(missing_docs)]
        pos: ErrorPos,
    },
}

impl Error {
    /// Returns a symbolic key of the error.
    ///
    /// Can be used to look up a localized message.
    pub fn key(&self) -> &'static str {
        match *self {
            Error::InvalidNumber { .. } => "float.format",
            Error::UnexpectedChar { .. } => "character.unexpected",
            Error::EndOfStreamExpected { .. } => "end.of.stream.expected",
        }
    }

    /// Returns the position of the error.
    pub fn pos(&self) -> ErrorPos {
        match *self {
              Error::InvalidNumber { pos, .. }
            | Error::UnexpectedChar { pos, .. }
            | Error::EndOfStreamExpected { pos, .. } => pos,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidNumber { ref text, pos } => {
                write!(f, "invalid number '{}' at {}", text, pos)
            }
            Error::UnexpectedChar { ch: Some(c), pos } => {
                write!(f, "unexpected character '{}' at {}", c, pos)
            }
            Error::UnexpectedChar { ch: None, pos } => {
                write!(f, "unexpected end of stream at {}", pos)
            }
            Error::EndOfStreamExpected { ch, pos } => {
                write!(f, "expected end of stream, found '{}' at {}", ch, pos)
            }
        }
    }
}

impl error::Error for Error {
    fn description(&self) -> &str {
        "a path data error"
    }
}

/// Stops parsing of the current segment.
pub(crate) enum ParseFailure {
    /// The source failed. Aborts the whole parsing.
    Stream(io::Error),
    /// Invalid path data. Starts the subpath recovery.
    Syntax(Error),
}

impl From<io::Error> for ParseFailure {
    fn from(value: io::Error) -> Self {
        ParseFailure::Stream(value)
    }
}

impl From<Error> for ParseFailure {
    fn from(value: Error) -> Self {
        ParseFailure::Syntax(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys() {
        let pos = ErrorPos::new(1, 2);
        assert_eq!(Error::InvalidNumber { text: "1e".to_string(), pos: pos }.key(),
                   "float.format");
        assert_eq!(Error::UnexpectedChar { ch: Some('x'), pos: pos }.key(),
                   "character.unexpected");
        assert_eq!(Error::EndOfStreamExpected { ch: 'x', pos: pos }.key(),
                   "end.of.stream.expected");
    }

    #[test]
    fn display() {
        let pos = ErrorPos::new(1, 9);
        assert_eq!(Error::InvalidNumber { text: "x".to_string(), pos: pos }.to_string(),
                   "invalid number 'x' at 1:9");
        assert_eq!(Error::UnexpectedChar { ch: Some('2'), pos: pos }.to_string(),
                   "unexpected character '2' at 1:9");
        assert_eq!(Error::UnexpectedChar { ch: None, pos: pos }.to_string(),
                   "unexpected end of stream at 1:9");
    }
}
