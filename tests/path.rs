// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate svgpathevents;

use std::str::FromStr;

use svgpathevents::{
    Builder,
    Error,
    FuzzyEq,
    Path,
    PathParser,
    Segment,
};

// The text is printed as expected and the printed text is parsed back into the same path.
macro_rules! test_resave {
    ($name:ident, $in_text:expr, $out_text:expr) => (
        #[test]
        fn $name() {
            let path = Path::from_str($in_text).unwrap();
            let text = path.to_string();
            assert_eq_text!(text, $out_text);
            assert_eq!(Path::from_str(&text).unwrap(), path);
        }
    )
}

test_resave!(resave_implicit_line_to,
    "M10,20L30,40,50,60",
    "M 10 20 L 30 40 L 50 60");

test_resave!(resave_relative,
    "m10-20 30 40 h1 2 3",
    "m 10 -20 l 30 40 h 1 h 2 h 3");

test_resave!(resave_exponent,
    "M1e1 2E1 C 1 2 3 4 5 6 7 8 9 10 11 12",
    "M 10 20 C 1 2 3 4 5 6 C 7 8 9 10 11 12");

test_resave!(resave_arc,
    "M0 0 A 5 5 0 1 0 10 10 a 5 5 0 0 1 1 1 z",
    "M 0 0 A 5 5 0 1 0 10 10 a 5 5 0 0 1 1 1 Z");

test_resave!(resave_fractions,
    "M 0 0 L 0.5 0.5 0.25 0.25",
    "M 0 0 L 0.5 0.5 L 0.25 0.25");

test_resave!(resave_negative_fractions,
    "M-.5-.5L0.25,.75",
    "M -0.5 -0.5 L 0.25 0.75");

test_resave!(resave_small_and_large,
    "M 1e-7 1e21 T 0.000001 -123456789",
    "M 0.0000001 1000000000000000000000 T 0.000001 -123456789");

test_resave!(resave_every_command,
    "M 1 2 L 3 4 H 5 V 6 C 1 2 3 4 5 6 S 1 2 3 4 Q 1 2 3 4 T 1 2 A 1 2 3 0 1 4 5 Z \
     m 1 2 l 3 4 h 5 v 6 c 1 2 3 4 5 6 s 1 2 3 4 q 1 2 3 4 t 1 2 a 1 2 3 1 0 4 5 z",
    "M 1 2 L 3 4 H 5 V 6 C 1 2 3 4 5 6 S 1 2 3 4 Q 1 2 3 4 T 1 2 A 1 2 3 0 1 4 5 Z \
     m 1 2 l 3 4 h 5 v 6 c 1 2 3 4 5 6 s 1 2 3 4 q 1 2 3 4 t 1 2 a 1 2 3 1 0 4 5 Z");

#[test]
fn lossy_keeps_valid_subpaths() {
    let path = Path::from_str_lossy("M 0 0 L 10 10 L 20 x M 30 30 L 40 40 Z");
    assert_eq_text!(path.to_string(), "M 0 0 L 10 10 M 30 30 L 40 40 Z");
    assert_eq!(path.subpaths_count(), 2);
}

#[test]
fn strict_returns_first_error() {
    let err = Path::from_str("M 0 0 L 10 q M 1 1 A 1 1 0 9 0 1 1").unwrap_err();
    assert_eq!(err.key(), "float.format");
}

#[test]
fn segments_match_events() {
    let path = Path::from_str("M 1 2 3 4 h 5 Z").unwrap();
    let letters: String = path.iter().map(|seg| seg.letter()).collect();
    assert_eq!(letters, "MLhZ");

    assert!(path[1].fuzzy_eq(&Segment::LineTo { abs: true, x: 3.0, y: 4.0 }));
    assert_eq!(path[2].args(), vec![5.0]);
}

#[test]
fn fuzzy_paths() {
    let a = Path::from_str("M 20.3 0 L 1 1").unwrap();
    let b = Path::from(vec![
        Segment::MoveTo { abs: true, x: 10.1 + 10.2, y: 0.0 },
        Segment::LineTo { abs: true, x: 1.0, y: 1.0 },
    ]);
    assert!(a.fuzzy_eq(&b));
    assert!(a.fuzzy_ne(&Path::from_str("M 20.3 0").unwrap()));
}

#[test]
fn reuse_builder_parser() {
    let mut parser = PathParser::with_reporter(Builder::new(), Vec::<Error>::new());
    parser.parse_str("M 1 2");
    parser.parse_str("L 3 4");

    let (builder, errors) = parser.into_parts();
    assert!(errors.is_empty());
    assert_eq_text!(builder.finalize().to_string(), "M 1 2 L 3 4");
}
