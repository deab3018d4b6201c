// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::io::{
    self,
    Read,
};
use std::str::{
    self,
    Chars,
};

/// A stream of characters.
pub trait Source {
    /// Returns the next character or `None` at the end of the stream.
    fn read_char(&mut self) -> io::Result<Option<char>>;
}

impl<'a, S: Source + ?Sized> Source for &'a mut S {
    #[inline]
    fn read_char(&mut self) -> io::Result<Option<char>> {
        (**self).read_char()
    }
}

/// A source over a string slice. Never fails.
pub struct TextSource<'a> {
    chars: Chars<'a>,
}

impl<'a> TextSource<'a> {
    /// Constructs a new source.
    pub fn new(text: &'a str) -> TextSource<'a> {
        TextSource { chars: text.chars() }
    }
}

impl<'a> From<&'a str> for TextSource<'a> {
    fn from(text: &'a str) -> Self {
        TextSource::new(text)
    }
}

impl<'a> Source for TextSource<'a> {
    #[inline]
    fn read_char(&mut self) -> io::Result<Option<char>> {
        Ok(self.chars.next())
    }
}

/// A source over an UTF-8 encoded byte stream.
///
/// The reader is accessed byte-by-byte, so it should be buffered.
pub struct ReadSource<R> {
    bytes: io::Bytes<R>,
}

impl<R: Read> ReadSource<R> {
    /// Constructs a new source.
    pub fn new(reader: R) -> ReadSource<R> {
        ReadSource { bytes: reader.bytes() }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        match self.bytes.next() {
            Some(Ok(b)) => Ok(Some(b)),
            Some(Err(e)) => Err(e),
            None => Ok(None),
        }
    }
}

impl<R: Read> Source for ReadSource<R> {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        let first = match self.next_byte()? {
            Some(b) => b,
            None => return Ok(None),
        };

        if first < 0x80 {
            return Ok(Some(first as char));
        }

        let len = match first {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => return Err(invalid_utf8()),
        };

        let mut buf = [first, 0, 0, 0];
        for b in buf.iter_mut().take(len).skip(1) {
            *b = match self.next_byte()? {
                Some(b) => b,
                None => return Err(invalid_utf8()),
            };
        }

        match str::from_utf8(&buf[..len]) {
            Ok(s) => Ok(s.chars().next()),
            Err(_) => Err(invalid_utf8()),
        }
    }
}

fn invalid_utf8() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8")
}
