// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use number::FuzzyEq;

/// A single parser event stored as a value.
///
/// `abs` keeps the case of the command letter. Implicit LineTo segments after
/// a MoveTo inherit it from the MoveTo.
#[derive(Clone,Copy,Debug,PartialEq)]
#[allow(missing_docs)]
pub enum Segment {
    MoveTo { abs: bool, x: f64, y: f64 },
    LineTo { abs: bool, x: f64, y: f64 },
    HorizontalLineTo { abs: bool, x: f64 },
    VerticalLineTo { abs: bool, y: f64 },
    CurveTo { abs: bool, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64 },
    SmoothCurveTo { abs: bool, x2: f64, y2: f64, x: f64, y: f64 },
    Quadratic { abs: bool, x1: f64, y1: f64, x: f64, y: f64 },
    SmoothQuadratic { abs: bool, x: f64, y: f64 },
    EllipticalArc {
        abs: bool,
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    ClosePath,
}

impl Segment {
    /// Returns the command letter. Uppercase for absolute segments.
    ///
    /// `ClosePath` is always `Z`.
    pub fn letter(&self) -> char {
        let (c, abs) = match *self {
            Segment::MoveTo { abs, .. } => ('m', abs),
            Segment::LineTo { abs, .. } => ('l', abs),
            Segment::HorizontalLineTo { abs, .. } => ('h', abs),
            Segment::VerticalLineTo { abs, .. } => ('v', abs),
            Segment::CurveTo { abs, .. } => ('c', abs),
            Segment::SmoothCurveTo { abs, .. } => ('s', abs),
            Segment::Quadratic { abs, .. } => ('q', abs),
            Segment::SmoothQuadratic { abs, .. } => ('t', abs),
            Segment::EllipticalArc { abs, .. } => ('a', abs),
            Segment::ClosePath => return 'Z',
        };

        if abs { c.to_ascii_uppercase() } else { c }
    }

    /// Returns `true` if the segment is absolute.
    #[inline]
    pub fn is_absolute(&self) -> bool {
        self.letter().is_ascii_uppercase()
    }

    /// Returns the operands in the path data order.
    ///
    /// Arc flags are returned as `0` or `1`.
    pub fn args(&self) -> Vec<f64> {
        match *self {
            Segment::MoveTo { x, y, .. }
            | Segment::LineTo { x, y, .. }
            | Segment::SmoothQuadratic { x, y, .. } => vec![x, y],
            Segment::HorizontalLineTo { x, .. } => vec![x],
            Segment::VerticalLineTo { y, .. } => vec![y],
            Segment::CurveTo { x1, y1, x2, y2, x, y, .. } => vec![x1, y1, x2, y2, x, y],
            Segment::SmoothCurveTo { x2, y2, x, y, .. } => vec![x2, y2, x, y],
            Segment::Quadratic { x1, y1, x, y, .. } => vec![x1, y1, x, y],
            Segment::EllipticalArc { rx, ry, x_axis_rotation, large_arc, sweep, x, y, .. } => {
                vec![rx, ry, x_axis_rotation, flag(large_arc), flag(sweep), x, y]
            }
            Segment::ClosePath => Vec::new(),
        }
    }
}

fn flag(v: bool) -> f64 {
    if v { 1.0 } else { 0.0 }
}

impl FuzzyEq for Segment {
    fn fuzzy_eq(&self, other: &Segment) -> bool {
        self.letter() == other.letter() && self.args()[..].fuzzy_eq(&other.args()[..])
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())?;
        for n in self.args() {
            write!(f, " {}", n)?;
        }

        Ok(())
    }
}
