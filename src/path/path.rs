// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use error::Error;
use number::FuzzyEq;
use parser::PathParser;

use super::{
    Builder,
    Segment,
};

/// Segments collected from one parse.
#[derive(Clone,Debug,Default,PartialEq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Parses a path data, skipping malformed subpaths.
    ///
    /// Errors are logged.
    pub fn from_str_lossy(text: &str) -> Path {
        let mut parser = PathParser::new(Builder::new());
        parser.parse_str(text);
        parser.into_parts().0.finalize()
    }

    /// Returns the number of subpaths, i.e. of MoveTo segments.
    pub fn subpaths_count(&self) -> usize {
        self.segments.iter().filter(|seg| seg.letter().to_ascii_lowercase() == 'm').count()
    }

    /// Returns the segments.
    pub fn into_vec(self) -> Vec<Segment> {
        self.segments
    }
}

/// Parses a path data.
///
/// Unlike `Path::from_str_lossy`, returns the first error, if any.
impl FromStr for Path {
    type Err = Error;

    fn from_str(text: &str) -> Result<Path, Error> {
        let mut errors: Vec<Error> = Vec::new();

        let path = {
            let mut parser = PathParser::with_reporter(Builder::new(), &mut errors);
            parser.parse_str(text);
            parser.into_parts().0.finalize()
        };

        match errors.into_iter().next() {
            Some(e) => Err(e),
            None => Ok(path),
        }
    }
}

impl Deref for Path {
    type Target = [Segment];

    fn deref(&self) -> &[Segment] {
        &self.segments
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Path {
        Path { segments: segments }
    }
}

impl FuzzyEq for Path {
    fn fuzzy_eq(&self, other: &Path) -> bool {
        self.segments[..].fuzzy_eq(&other.segments[..])
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", seg)?;
        }

        Ok(())
    }
}
