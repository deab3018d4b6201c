// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/*!
An event-based parser for the SVG [path data].

The parser reads the path data once, from left to right, and reports every
parsed segment to a [`PathHandler`]. Nothing is stored by the parser itself.

- [`PathParser`] drives the parsing.
- [`PathHandler`] receives the events. All methods are optional.
- [`ErrorReporter`] receives recoverable errors. By default they are logged
  via the `log` crate.
- [`Builder`] is a handler that collects events into a [`Path`].

Malformed path data is not fatal. Following the SVG error handling rules, the parser renders
"as much of the path as possible": an error inside a subpath is reported and
everything up to the next `moveto` command is skipped.

```
use svgpathevents::{Builder, PathParser};

let mut parser = PathParser::new(Builder::new());
parser.parse_str("M 10 20 L 30 40 50 60 Z");
let path = parser.into_parts().0.finalize();
assert_eq!(path.to_string(), "M 10 20 L 30 40 L 50 60 Z");
```

Only I/O errors of the underlying [`Source`] abort the parsing.

[path data]: https://www.w3.org/TR/SVG/paths.html#PathData
[`Builder`]: path/struct.Builder.html
[`ErrorReporter`]: trait.ErrorReporter.html
[`Path`]: path/struct.Path.html
[`PathHandler`]: trait.PathHandler.html
[`PathParser`]: struct.PathParser.html
[`Source`]: trait.Source.html
*/

#![doc(html_root_url = "https://docs.rs/svgpathevents/0.1.0")]

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
extern crate log;
extern crate float_cmp;

pub use error::{
    Error,
    ErrorPos,
};
pub use handler::PathHandler;
pub use parser::PathParser;
pub use number::FuzzyEq;
pub use path::{
    Builder,
    Path,
    Segment,
};
pub use reporter::{
    ErrorReporter,
    LogReporter,
};
pub use source::{
    ReadSource,
    Source,
    TextSource,
};

/// Asserts that two values are equal, printing them with `Display` on failure.
#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => ({
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(*left_val == *right_val) {
                    panic!("assertion failed: `(left == right)` \
                           \nleft:  `{}`\nright: `{}`",
                           left_val, right_val)
                }
            }
        }
    })
}

mod error;
mod handler;
mod number;
mod parser;
mod reporter;
mod scanner;
mod source;

pub mod path;
