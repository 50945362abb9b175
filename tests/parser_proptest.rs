//! Property-based tests for the coordinate parser
//!
//! These check relations between notations rather than fixed vectors: the same angle
//! written with different separators or sign conventions must parse to the same value.

use geostr::geo::testing::{near, TOLERANCE};
use geostr::{parse, ParseError, Parser, Point};
use proptest::prelude::*;

fn single(input: &str) -> f64 {
    match parse(input) {
        Ok(Point::Single(value)) => value.as_f64(),
        other => panic!("Expected a single coordinate for {:?}, got {:?}", input, other),
    }
}

proptest! {
    #[test]
    fn test_parser_never_panics(input in "\\PC{0,24}") {
        let _ = parse(input.as_str());
    }

    #[test]
    fn test_reuse_is_idempotent(input in "[0-9NSEW°'\":,. +-]{0,16}") {
        let parser = Parser::new();
        let first = parser.parse(input.as_str());
        let _ = parser.parse("40° N 79° W");
        let second = parser.parse(input.as_str());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_latitude_cardinal_matches_sign(degrees in 0i64..=90, south in any::<bool>()) {
        let (letter, sign) = if south { ("S", "-") } else { ("N", "") };
        let with_letter = single(&format!("{}° {}", degrees, letter));
        let with_sign = single(&format!("{}{}°", sign, degrees));
        prop_assert_eq!(with_letter, with_sign);
    }

    #[test]
    fn test_longitude_cardinal_matches_sign(degrees in 0i64..=180, west in any::<bool>()) {
        let (letter, sign) = if west { ("W", "-") } else { ("E", "") };
        let with_letter = single(&format!("{} {}", degrees, letter));
        let with_sign = single(&format!("{}{}", sign, degrees));
        prop_assert_eq!(with_letter, with_sign);
    }

    #[test]
    fn test_dms_decomposition(degrees in 0i64..180, minutes in 0i64..60, seconds in 0i64..60) {
        let parsed = single(&format!("{}° {}' {}\"", degrees, minutes, seconds));
        let expected = degrees as f64 + minutes as f64 / 60.0 + seconds as f64 / 3600.0;
        prop_assert!(near(parsed, expected, TOLERANCE));
    }

    #[test]
    fn test_colon_matches_degree_marks(degrees in 0i64..180, minutes in 0i64..=60, seconds in 0i64..=60) {
        let colon = single(&format!("{}:{}:{}", degrees, minutes, seconds));
        let marks = single(&format!("{}°{}'{}\"", degrees, minutes, seconds));
        prop_assert_eq!(colon, marks);
    }

    #[test]
    fn test_latitude_bound(degrees in 0i64..400) {
        let result = parse(format!("{}N", degrees).as_str());
        if degrees <= 90 {
            prop_assert!(result.is_ok());
        } else {
            let out_of_range = result.as_ref().is_err_and(|error| error.is_range());
            prop_assert!(out_of_range, "expected a range error, got {:?}", result);
        }
    }

    #[test]
    fn test_longitude_bound(degrees in 0i64..400) {
        let result = parse(format!("{}° W", degrees).as_str());
        if degrees <= 180 {
            prop_assert!(result.is_ok());
        } else {
            let out_of_range = matches!(result, Err(ParseError::Range { .. }));
            prop_assert!(out_of_range, "expected a range error, got {:?}", result);
        }
    }

    #[test]
    fn test_minutes_bound(minutes in 0i64..200) {
        let result = parse(format!("10:{}", minutes).as_str());
        prop_assert_eq!(result.is_ok(), minutes <= 60);
    }

    #[test]
    fn test_pair_keeps_input_order(lat in 0i64..=90, lon in 0i64..=180) {
        let latitude_first = parse(format!("{}° N {}° W", lat, lon).as_str()).unwrap();
        let longitude_first = parse(format!("{}° W {}° N", lon, lat).as_str()).unwrap();
        prop_assert_eq!(latitude_first.first().as_f64(), lat as f64);
        prop_assert_eq!(latitude_first.second().map(|v| v.as_f64()), Some(-(lon as f64)));
        prop_assert_eq!(longitude_first.first().as_f64(), -(lon as f64));
        prop_assert_eq!(longitude_first.second().map(|v| v.as_f64()), Some(lat as f64));
    }
}
