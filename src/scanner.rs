// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::io;

use error::{
    Error,
    ErrorPos,
    ParseFailure,
};
use source::Source;

/// A character cursor with a number tokenizer on top of it.
///
/// `current` is the lookahead character. `None` means the end of the stream.
pub(crate) struct Scanner<S> {
    source: S,
    current: Option<char>,
    buffer: String,
    /// Whether the last buffered character was an exponent marker.
    e_read: bool,
    row: usize,
    col: usize,
    prev_newline: bool,
}

impl<S: Source> Scanner<S> {
    /// Constructs a new scanner. `read()` must be called to load the first character.
    pub fn new(source: S) -> Scanner<S> {
        Scanner {
            source: source,
            current: None,
            buffer: String::new(),
            e_read: false,
            row: 1,
            col: 0,
            prev_newline: false,
        }
    }

    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Returns the position of the current character.
    #[inline]
    pub fn pos(&self) -> ErrorPos {
        ErrorPos::new(self.row, self.col)
    }

    /// Returns the text of the last token.
    #[cfg(test)]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Advances to the next character.
    pub fn read(&mut self) -> io::Result<()> {
        self.current = self.source.read_char()?;

        if self.prev_newline {
            self.row += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        self.prev_newline = self.current == Some('\n');

        Ok(())
    }

    pub fn skip_spaces(&mut self) -> io::Result<()> {
        while is_space(self.current) {
            self.read()?;
        }

        Ok(())
    }

    /// Skips spaces, a single comma and spaces again.
    pub fn skip_comma_spaces(&mut self) -> io::Result<()> {
        self.skip_spaces()?;

        if self.current == Some(',') {
            self.read()?;
            self.skip_spaces()?;
        }

        Ok(())
    }

    /// Copies the current numeric token into the buffer.
    ///
    /// The current character is always taken, whatever it is.
    /// Stops before a separator, a command letter or a sign that doesn't follow an exponent.
    pub fn read_number(&mut self) -> io::Result<()> {
        self.buffer.clear();
        self.e_read = false;

        match self.current {
            Some(c) => self.buffer.push(c),
            None => return Ok(()),
        }

        loop {
            self.read()?;

            let c = match self.current {
                Some(c) => c,
                None => return Ok(()),
            };

            match c {
                ' ' | '\t' | '\r' | '\n' | ',' => return Ok(()),
                'e' | 'E' => {
                    self.e_read = true;
                    self.buffer.push(c);
                }
                '+' | '-' if !self.e_read => return Ok(()),
                _ if is_command(c) => return Ok(()),
                _ => {
                    self.e_read = false;
                    self.buffer.push(c);
                }
            }
        }
    }

    /// Reads a numeric token and converts it.
    pub fn parse_number(&mut self) -> Result<f64, ParseFailure> {
        let pos = self.pos();
        self.read_number()?;

        match parse_svg_number(&self.buffer) {
            Some(n) => Ok(n),
            None => {
                Err(Error::InvalidNumber {
                    text: self.buffer.clone(),
                    pos: pos,
                }.into())
            }
        }
    }
}

#[inline]
pub(crate) fn is_space(c: Option<char>) -> bool {
    match c {
        Some(' ') | Some('\t') | Some('\r') | Some('\n') => true,
        _ => false,
    }
}

/// Checks that the character can start an argument group.
#[inline]
pub(crate) fn is_number_start(c: Option<char>) -> bool {
    match c {
        Some('+') | Some('-') | Some('0'..='9') => true,
        _ => false,
    }
}

/// Checks that the character is a path command letter, including `z`/`Z`.
#[inline]
pub(crate) fn is_command(c: char) -> bool {
    match c {
          'M' | 'm' | 'Z' | 'z' | 'L' | 'l' | 'H' | 'h' | 'V' | 'v'
        | 'C' | 'c' | 'S' | 's' | 'Q' | 'q' | 'T' | 't' | 'A' | 'a' => true,
        _ => false,
    }
}

/// Converts a text into a number.
///
/// Only the SVG number grammar is accepted:
///
/// ```text
/// sign? (digits ('.' digits?)? | '.' digits) (('e' | 'E') sign? digits)?
/// ```
pub(crate) fn parse_svg_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut i = 0;

    if let Some(&b'+') | Some(&b'-') = bytes.get(i) {
        i += 1;
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        frac_digits = count_digits(&bytes[i..]);
        i += frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if let Some(&b'e') | Some(&b'E') = bytes.get(i) {
        i += 1;

        if let Some(&b'+') | Some(&b'-') = bytes.get(i) {
            i += 1;
        }

        let exp_digits = count_digits(&bytes[i..]);
        if exp_digits == 0 {
            return None;
        }
        i += exp_digits;
    }

    if i != bytes.len() {
        return None;
    }

    text.parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|c| c.is_ascii_digit()).count()
}
