// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use error::Error;

/// A receiver of recoverable path data errors.
///
/// Reporting doesn't affect the parsing. The parser recovers by itself.
pub trait ErrorReporter {
    /// Reports an error. Each error is reported exactly once.
    fn report(&mut self, error: Error);
}

/// Writes errors to the `log` as warnings.
///
/// Used by default.
#[derive(Clone,Copy,Debug,Default)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&mut self, error: Error) {
        warn!("{}.", error);
    }
}

/// Collects errors.
impl ErrorReporter for Vec<Error> {
    fn report(&mut self, error: Error) {
        self.push(error);
    }
}

impl<'a, R: ErrorReporter + ?Sized> ErrorReporter for &'a mut R {
    fn report(&mut self, error: Error) {
        (**self).report(error)
    }
}
