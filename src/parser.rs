// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::io;
use std::mem;

use error::{
    Error,
    ParseFailure,
};
use handler::PathHandler;
use reporter::{
    ErrorReporter,
    LogReporter,
};
use scanner::{
    self,
    Scanner,
};
use source::{
    Source,
    TextSource,
};

/// An event-based path data parser.
///
/// Each parsed segment is passed to the [`PathHandler`] as soon as it was parsed.
///
/// Errors are passed to the [`ErrorReporter`]. After an error, the rest of the
/// current subpath is skipped and parsing continues from the next `m`/`M` command.
///
/// # Examples
///
/// ```
/// use svgpathevents::{Error, PathParser, Builder};
///
/// let mut errors: Vec<Error> = Vec::new();
/// let path = {
///     let mut parser = PathParser::with_reporter(Builder::new(), &mut errors);
///     parser.parse_str("M 10 20 L 1,x M 30 40");
///     parser.into_parts().0.finalize()
/// };
///
/// assert_eq!(path.to_string(), "M 10 20 M 30 40");
/// assert_eq!(errors[0].key(), "float.format");
/// ```
///
/// [`PathHandler`]: trait.PathHandler.html
/// [`ErrorReporter`]: trait.ErrorReporter.html
pub struct PathParser<H, R = LogReporter> {
    handler: H,
    reporter: R,
}

impl<H: PathHandler> PathParser<H> {
    /// Constructs a new parser which logs errors.
    pub fn new(handler: H) -> PathParser<H> {
        PathParser {
            handler: handler,
            reporter: LogReporter,
        }
    }
}

impl<H: PathHandler, R: ErrorReporter> PathParser<H, R> {
    /// Constructs a new parser with a custom error reporter.
    pub fn with_reporter(handler: H, reporter: R) -> PathParser<H, R> {
        PathParser {
            handler: handler,
            reporter: reporter,
        }
    }

    /// Returns the path handler in use.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Returns the mutable path handler in use.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Replaces the path handler. Returns the previous one.
    pub fn set_handler(&mut self, handler: H) -> H {
        mem::replace(&mut self.handler, handler)
    }

    /// Returns the error reporter in use.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Returns the mutable error reporter in use.
    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    /// Destroys the parser and returns the handler and the reporter.
    pub fn into_parts(self) -> (H, R) {
        (self.handler, self.reporter)
    }

    /// Parses a string.
    pub fn parse_str(&mut self, text: &str) {
        // `TextSource` never fails.
        let _ = self.parse(TextSource::new(text));
    }

    /// Parses a stream.
    ///
    /// Path data errors are reported and skipped. An error is returned
    /// only when the source itself fails. In this case `end_path` is not called.
    pub fn parse<S: Source>(&mut self, source: S) -> io::Result<()> {
        let mut s = Scanner::new(source);

        self.handler.start_path();

        s.read()?;
        loop {
            let c = match s.current() {
                Some(c) => c,
                None => break,
            };

            match c {
                ' ' | '\t' | '\r' | '\n' => {
                    s.read()?;
                }
                'z' | 'Z' => {
                    s.read()?;
                    self.handler.close_path();
                }
                'm' | 'M' => {
                    self.parse_move_to(&mut s, c == 'M')?;
                }
                _ => {
                    match command_from_char(c) {
                        Some(cmd) => {
                            self.parse_command(&mut s, cmd, c.is_ascii_uppercase())?;
                        }
                        None => {
                            self.reporter.report(Error::UnexpectedChar {
                                ch: Some(c),
                                pos: s.pos(),
                            });
                            skip_sub_path(&mut s)?;
                        }
                    }
                }
            }
        }

        s.skip_spaces()?;
        if let Some(c) = s.current() {
            self.reporter.report(Error::EndOfStreamExpected {
                ch: c,
                pos: s.pos(),
            });
        }

        self.handler.end_path();

        Ok(())
    }

    /// Parses a mandatory MoveTo pair followed by implicit LineTo pairs.
    fn parse_move_to<S: Source>(&mut self, s: &mut Scanner<S>, absolute: bool) -> io::Result<()> {
        s.read()?;
        s.skip_spaces()?;

        if let Err(e) = self.parse_segment(s, Command::MoveTo, absolute) {
            return self.recover(s, e);
        }

        // Only spaces, like after an explicit `l`/`L`.
        s.skip_spaces()?;
        self.parse_segments(s, Command::LineTo, absolute)
    }

    fn parse_command<S: Source>(&mut self, s: &mut Scanner<S>, cmd: Command, absolute: bool)
        -> io::Result<()>
    {
        s.read()?;
        s.skip_spaces()?;
        self.parse_segments(s, cmd, absolute)
    }

    /// Parses argument groups while the current character can start a number.
    fn parse_segments<S: Source>(&mut self, s: &mut Scanner<S>, cmd: Command, absolute: bool)
        -> io::Result<()>
    {
        while scanner::is_number_start(s.current()) {
            if let Err(e) = self.parse_segment(s, cmd, absolute) {
                return self.recover(s, e);
            }

            s.skip_comma_spaces()?;
        }

        Ok(())
    }

    fn parse_segment<S: Source>(&mut self, s: &mut Scanner<S>, cmd: Command, absolute: bool)
        -> Result<(), ParseFailure>
    {
        let h = &mut self.handler;

        match cmd {
            Command::MoveTo => {
                let (x, y) = parse_pair(s)?;

                if absolute { h.move_to_abs(x, y) } else { h.move_to_rel(x, y) }
            }
            Command::LineTo => {
                let (x, y) = parse_pair(s)?;

                if absolute { h.line_to_abs(x, y) } else { h.line_to_rel(x, y) }
            }
            Command::HorizontalLineTo => {
                let x = s.parse_number()?;

                if absolute { h.line_to_horizontal_abs(x) } else { h.line_to_horizontal_rel(x) }
            }
            Command::VerticalLineTo => {
                let y = s.parse_number()?;

                if absolute { h.line_to_vertical_abs(y) } else { h.line_to_vertical_rel(y) }
            }
            Command::CurveTo => {
                let (x1, y1) = parse_pair(s)?;
                s.skip_comma_spaces()?;
                let (x2, y2) = parse_pair(s)?;
                s.skip_comma_spaces()?;
                let (x, y) = parse_pair(s)?;

                if absolute {
                    h.curve_to_cubic_abs(x1, y1, x2, y2, x, y)
                } else {
                    h.curve_to_cubic_rel(x1, y1, x2, y2, x, y)
                }
            }
            Command::SmoothCurveTo => {
                let (x2, y2) = parse_pair(s)?;
                s.skip_comma_spaces()?;
                let (x, y) = parse_pair(s)?;

                if absolute {
                    h.curve_to_cubic_smooth_abs(x2, y2, x, y)
                } else {
                    h.curve_to_cubic_smooth_rel(x2, y2, x, y)
                }
            }
            Command::Quadratic => {
                let (x1, y1) = parse_pair(s)?;
                s.skip_comma_spaces()?;
                let (x, y) = parse_pair(s)?;

                if absolute {
                    h.curve_to_quadratic_abs(x1, y1, x, y)
                } else {
                    h.curve_to_quadratic_rel(x1, y1, x, y)
                }
            }
            Command::SmoothQuadratic => {
                let (x, y) = parse_pair(s)?;

                if absolute {
                    h.curve_to_quadratic_smooth_abs(x, y)
                } else {
                    h.curve_to_quadratic_smooth_rel(x, y)
                }
            }
            Command::EllipticalArc => {
                let (rx, ry) = parse_pair(s)?;
                s.skip_comma_spaces()?;
                let x_axis_rotation = s.parse_number()?;
                s.skip_comma_spaces()?;
                let large_arc = parse_flag(s)?;
                let sweep = parse_flag(s)?;
                let (x, y) = parse_pair(s)?;

                if absolute {
                    h.arc_abs(rx, ry, x_axis_rotation, large_arc, sweep, x, y)
                } else {
                    h.arc_rel(rx, ry, x_axis_rotation, large_arc, sweep, x, y)
                }
            }
        }

        Ok(())
    }

    fn recover<S: Source>(&mut self, s: &mut Scanner<S>, failure: ParseFailure) -> io::Result<()> {
        match failure {
            ParseFailure::Stream(e) => Err(e),
            ParseFailure::Syntax(e) => {
                self.reporter.report(e);
                skip_sub_path(s)
            }
        }
    }
}

fn parse_pair<S: Source>(s: &mut Scanner<S>) -> Result<(f64, f64), ParseFailure> {
    let x = s.parse_number()?;
    s.skip_comma_spaces()?;
    let y = s.parse_number()?;

    Ok((x, y))
}

/// Parses an arc flag and the separator after it.
///
/// Flags are single characters, not numbers.
fn parse_flag<S: Source>(s: &mut Scanner<S>) -> Result<bool, ParseFailure> {
    let flag = match s.current() {
        Some('0') => false,
        Some('1') => true,
        c => {
            return Err(Error::UnexpectedChar {
                ch: c,
                pos: s.pos(),
            }.into());
        }
    };

    s.read()?;
    s.skip_comma_spaces()?;

    Ok(flag)
}

/// Skips everything till the next `m`/`M` command or the end of the stream.
fn skip_sub_path<S: Source>(s: &mut Scanner<S>) -> io::Result<()> {
    let mut skipped = 0;
    loop {
        match s.current() {
            Some('m') | Some('M') | None => break,
            _ => {
                s.read()?;
                skipped += 1;
            }
        }
    }

    trace!("Skipped {} characters of a malformed subpath.", skipped);

    Ok(())
}

/// Commands with argument groups.
///
/// ClosePath has no arguments and is handled by the dispatch loop.
#[derive(Clone,Copy,Debug,PartialEq)]
enum Command {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CurveTo,
    SmoothCurveTo,
    Quadratic,
    SmoothQuadratic,
    EllipticalArc,
}

/// Maps a command letter to a command with repeatable arguments.
///
/// MoveTo is handled separately.
fn command_from_char(c: char) -> Option<Command> {
    let cmd = match c {
        'L' | 'l' => Command::LineTo,
        'H' | 'h' => Command::HorizontalLineTo,
        'V' | 'v' => Command::VerticalLineTo,
        'C' | 'c' => Command::CurveTo,
        'S' | 's' => Command::SmoothCurveTo,
        'Q' | 'q' => Command::Quadratic,
        'T' | 't' => Command::SmoothQuadratic,
        'A' | 'a' => Command::EllipticalArc,
        _ => return None,
    };

    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        starts: usize,
        ends: usize,
        segments: usize,
    }

    impl PathHandler for Counter {
        fn start_path(&mut self) { self.starts += 1; }
        fn end_path(&mut self) { self.ends += 1; }
        fn move_to_abs(&mut self, _: f64, _: f64) { self.segments += 1; }
        fn line_to_abs(&mut self, _: f64, _: f64) { self.segments += 1; }
        fn close_path(&mut self) { self.segments += 1; }
    }

    #[test]
    fn command_letters() {
        assert_eq!(command_from_char('a'), Some(Command::EllipticalArc));
        assert_eq!(command_from_char('T'), Some(Command::SmoothQuadratic));
        assert_eq!(command_from_char('m'), None);
        assert_eq!(command_from_char('z'), None);
        assert_eq!(command_from_char('x'), None);
    }

    #[test]
    fn swap_handler() {
        let mut parser = PathParser::with_reporter(Counter::default(), Vec::<Error>::new());
        parser.parse_str("M 10 20 L 30 40 Z");

        let first = parser.set_handler(Counter::default());
        assert_eq!((first.starts, first.ends, first.segments), (1, 1, 3));

        parser.parse_str("M 10 20");
        let (second, errors) = parser.into_parts();
        assert_eq!((second.starts, second.ends, second.segments), (1, 1, 1));
        assert!(errors.is_empty());
    }

    #[test]
    fn borrowed_handler() {
        let mut counter = Counter::default();
        PathParser::with_reporter(&mut counter, Vec::<Error>::new()).parse_str("M 1 2 3 4 Z M 5 6");
        assert_eq!(counter.segments, 4);
    }

    #[test]
    fn ignoring_handler() {
        let mut parser = PathParser::with_reporter((), Vec::<Error>::new());
        parser.parse_str("M 1 2 x");
        assert_eq!(parser.reporter().len(), 1);
    }
}
