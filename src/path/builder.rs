// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use handler::PathHandler;

use super::{
    Path,
    Segment,
};

/// A [`PathHandler`] that stores each event as a [`Segment`].
///
/// Events of consecutive parses are appended to the same path.
///
/// [`PathHandler`]: ../trait.PathHandler.html
/// [`Segment`]: enum.Segment.html
#[derive(Default)]
pub struct Builder {
    segments: Vec<Segment>,
}

impl Builder {
    /// Constructs a new builder.
    pub fn new() -> Builder {
        Builder::default()
    }

    /// Returns the collected path.
    pub fn finalize(self) -> Path {
        Path::from(self.segments)
    }
}

impl PathHandler for Builder {
    fn close_path(&mut self) {
        // `z` and `Z` are the same command.
        self.segments.push(Segment::ClosePath);
    }

    fn move_to_rel(&mut self, x: f64, y: f64) {
        self.segments.push(Segment::MoveTo { abs: false, x: x, y: y });
    }

    fn move_to_abs(&mut self, x: f64, y: f64) {
        self.segments.push(Segment::MoveTo { abs: true, x: x, y: y });
    }

    fn line_to_rel(&mut self, x: f64, y: f64) {
        self.segments.push(Segment::LineTo { abs: false, x: x, y: y });
    }

    fn line_to_abs(&mut self, x: f64, y: f64) {
        self.segments.push(Segment::LineTo { abs: true, x: x, y: y });
    }

    fn line_to_horizontal_rel(&mut self, x: f64) {
        self.segments.push(Segment::HorizontalLineTo { abs: false, x: x });
    }

    fn line_to_horizontal_abs(&mut self, x: f64) {
        self.segments.push(Segment::HorizontalLineTo { abs: true, x: x });
    }

    fn line_to_vertical_rel(&mut self, y: f64) {
        self.segments.push(Segment::VerticalLineTo { abs: false, y: y });
    }

    fn line_to_vertical_abs(&mut self, y: f64) {
        self.segments.push(Segment::VerticalLineTo { abs: true, y: y });
    }

    fn curve_to_cubic_rel(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.segments.push(Segment::CurveTo { abs: false, x1: x1, y1: y1, x2: x2, y2: y2, x: x, y: y });
    }

    fn curve_to_cubic_abs(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.segments.push(Segment::CurveTo { abs: true, x1: x1, y1: y1, x2: x2, y2: y2, x: x, y: y });
    }

    fn curve_to_cubic_smooth_rel(&mut self, x2: f64, y2: f64, x: f64, y: f64) {
        self.segments.push(Segment::SmoothCurveTo { abs: false, x2: x2, y2: y2, x: x, y: y });
    }

    fn curve_to_cubic_smooth_abs(&mut self, x2: f64, y2: f64, x: f64, y: f64) {
        self.segments.push(Segment::SmoothCurveTo { abs: true, x2: x2, y2: y2, x: x, y: y });
    }

    fn curve_to_quadratic_rel(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        self.segments.push(Segment::Quadratic { abs: false, x1: x1, y1: y1, x: x, y: y });
    }

    fn curve_to_quadratic_abs(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        self.segments.push(Segment::Quadratic { abs: true, x1: x1, y1: y1, x: x, y: y });
    }

    fn curve_to_quadratic_smooth_rel(&mut self, x: f64, y: f64) {
        self.segments.push(Segment::SmoothQuadratic { abs: false, x: x, y: y });
    }

    fn curve_to_quadratic_smooth_abs(&mut self, x: f64, y: f64) {
        self.segments.push(Segment::SmoothQuadratic { abs: true, x: x, y: y });
    }

    fn arc_rel(&mut self, rx: f64, ry: f64, x_axis_rotation: f64, large_arc: bool, sweep: bool,
               x: f64, y: f64) {
        self.segments.push(Segment::EllipticalArc {
            abs: false, rx: rx, ry: ry, x_axis_rotation: x_axis_rotation,
            large_arc: large_arc, sweep: sweep, x: x, y: y,
        });
    }

    fn arc_abs(&mut self, rx: f64, ry: f64, x_axis_rotation: f64, large_arc: bool, sweep: bool,
               x: f64, y: f64) {
        self.segments.push(Segment::EllipticalArc {
            abs: true, rx: rx, ry: ry, x_axis_rotation: x_axis_rotation,
            large_arc: large_arc, sweep: sweep, x: x, y: y,
        });
    }
}
