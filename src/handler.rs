// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// A receiver of path data events.
///
/// Every method has an empty default implementation,
/// so a handler implements only the events it is interested in.
///
/// Each parsing is wrapped into a single `start_path`/`end_path` pair,
/// even if the path data contains errors.
#[allow(unused_variables)]
pub trait PathHandler {
    /// Called once before any other event.
    fn start_path(&mut self) {}

    /// Called once after all other events.
    fn end_path(&mut self) {}

    /// `m` command.
    fn move_to_rel(&mut self, x: f64, y: f64) {}

    /// `M` command.
    fn move_to_abs(&mut self, x: f64, y: f64) {}

    /// `z` or `Z` command.
    fn close_path(&mut self) {}

    /// `l` command.
    fn line_to_rel(&mut self, x: f64, y: f64) {}

    /// `L` command.
    fn line_to_abs(&mut self, x: f64, y: f64) {}

    /// `h` command.
    fn line_to_horizontal_rel(&mut self, x: f64) {}

    /// `H` command.
    fn line_to_horizontal_abs(&mut self, x: f64) {}

    /// `v` command.
    fn line_to_vertical_rel(&mut self, y: f64) {}

    /// `V` command.
    fn line_to_vertical_abs(&mut self, y: f64) {}

    /// `c` command.
    fn curve_to_cubic_rel(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {}

    /// `C` command.
    fn curve_to_cubic_abs(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {}

    /// `s` command.
    fn curve_to_cubic_smooth_rel(&mut self, x2: f64, y2: f64, x: f64, y: f64) {}

    /// `S` command.
    fn curve_to_cubic_smooth_abs(&mut self, x2: f64, y2: f64, x: f64, y: f64) {}

    /// `q` command.
    fn curve_to_quadratic_rel(&mut self, x1: f64, y1: f64, x: f64, y: f64) {}

    /// `Q` command.
    fn curve_to_quadratic_abs(&mut self, x1: f64, y1: f64, x: f64, y: f64) {}

    /// `t` command.
    fn curve_to_quadratic_smooth_rel(&mut self, x: f64, y: f64) {}

    /// `T` command.
    fn curve_to_quadratic_smooth_abs(&mut self, x: f64, y: f64) {}

    /// `a` command.
    fn arc_rel(&mut self, rx: f64, ry: f64, x_axis_rotation: f64, large_arc: bool, sweep: bool,
               x: f64, y: f64) {}

    /// `A` command.
    fn arc_abs(&mut self, rx: f64, ry: f64, x_axis_rotation: f64, large_arc: bool, sweep: bool,
               x: f64, y: f64) {}
}

/// Ignores all events.
impl PathHandler for () {}

impl<'a, H: PathHandler + ?Sized> PathHandler for &'a mut H {
    fn start_path(&mut self) {
        (**self).start_path()
    }

    fn end_path(&mut self) {
        (**self).end_path()
    }

    fn move_to_rel(&mut self, x: f64, y: f64) {
        (**self).move_to_rel(x, y)
    }

    fn move_to_abs(&mut self, x: f64, y: f64) {
        (**self).move_to_abs(x, y)
    }

    fn close_path(&mut self) {
        (**self).close_path()
    }

    fn line_to_rel(&mut self, x: f64, y: f64) {
        (**self).line_to_rel(x, y)
    }

    fn line_to_abs(&mut self, x: f64, y: f64) {
        (**self).line_to_abs(x, y)
    }

    fn line_to_horizontal_rel(&mut self, x: f64) {
        (**self).line_to_horizontal_rel(x)
    }

    fn line_to_horizontal_abs(&mut self, x: f64) {
        (**self).line_to_horizontal_abs(x)
    }

    fn line_to_vertical_rel(&mut self, y: f64) {
        (**self).line_to_vertical_rel(y)
    }

    fn line_to_vertical_abs(&mut self, y: f64) {
        (**self).line_to_vertical_abs(y)
    }

    fn curve_to_cubic_rel(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        (**self).curve_to_cubic_rel(x1, y1, x2, y2, x, y)
    }

    fn curve_to_cubic_abs(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        (**self).curve_to_cubic_abs(x1, y1, x2, y2, x, y)
    }

    fn curve_to_cubic_smooth_rel(&mut self, x2: f64, y2: f64, x: f64, y: f64) {
        (**self).curve_to_cubic_smooth_rel(x2, y2, x, y)
    }

    fn curve_to_cubic_smooth_abs(&mut self, x2: f64, y2: f64, x: f64, y: f64) {
        (**self).curve_to_cubic_smooth_abs(x2, y2, x, y)
    }

    fn curve_to_quadratic_rel(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        (**self).curve_to_quadratic_rel(x1, y1, x, y)
    }

    fn curve_to_quadratic_abs(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        (**self).curve_to_quadratic_abs(x1, y1, x, y)
    }

    fn curve_to_quadratic_smooth_rel(&mut self, x: f64, y: f64) {
        (**self).curve_to_quadratic_smooth_rel(x, y)
    }

    fn curve_to_quadratic_smooth_abs(&mut self, x: f64, y: f64) {
        (**self).curve_to_quadratic_smooth_abs(x, y)
    }

    fn arc_rel(&mut self, rx: f64, ry: f64, x_axis_rotation: f64, large_arc: bool, sweep: bool,
               x: f64, y: f64) {
        (**self).arc_rel(rx, ry, x_axis_rotation, large_arc, sweep, x, y)
    }

    fn arc_abs(&mut self, rx: f64, ry: f64, x_axis_rotation: f64, large_arc: bool, sweep: bool,
               x: f64, y: f64) {
        (**self).arc_abs(rx, ry, x_axis_rotation, large_arc, sweep, x, y)
    }
}
