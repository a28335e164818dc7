//! Year label formatting.

use crate::model::time_point::TimePoint;

/// Default BCE marker, appended after the year.
pub const DEFAULT_BC_MARKER: &str = " BC";
/// A marker starting with this character is placed before the year.
const PREFIX_SENTINEL: char = '-';

/// Formats a point as a year label.
///
/// CE years render as plain numbers. Other years render their magnitude
/// with `marker` appended, or prepended when the marker starts with `-`.
/// An empty marker falls back to [`DEFAULT_BC_MARKER`].
pub fn format_year(point: &TimePoint, marker: &str) -> String {
    let year = point.year();
    if year > 0 {
        return year.to_string();
    }

    let marker = if marker.is_empty() {
        DEFAULT_BC_MARKER
    } else {
        marker
    };
    let magnitude = year.unsigned_abs();
    if marker.starts_with(PREFIX_SENTINEL) {
        format!("{marker}{magnitude}")
    } else {
        format!("{magnitude}{marker}")
    }
}

#[cfg(test)]
mod tests {
    use super::{format_year, DEFAULT_BC_MARKER};
    use crate::date::parse;

    #[test]
    fn ce_years_are_plain_numbers() {
        assert_eq!(
            format_year(&parse("2015").expect("fixture should parse"), DEFAULT_BC_MARKER),
            "2015"
        );
        assert_eq!(format_year(&parse("7").expect("fixture should parse"), DEFAULT_BC_MARKER), "7");
    }

    #[test]
    fn bce_marker_is_appended_by_default() {
        assert_eq!(
            format_year(&parse("-354").expect("fixture should parse"), DEFAULT_BC_MARKER),
            "354 BC"
        );
        assert_eq!(
            format_year(&parse("0").expect("fixture should parse"), DEFAULT_BC_MARKER),
            "1 BC"
        );
    }

    #[test]
    fn dash_marker_is_prepended() {
        assert_eq!(format_year(&parse("354 BC").expect("fixture should parse"), "-"), "-354");
        assert_eq!(format_year(&parse("354 BC").expect("fixture should parse"), "-BC "), "-BC 354");
    }

    #[test]
    fn empty_marker_falls_back_to_default() {
        assert_eq!(format_year(&parse("44 BC").expect("fixture should parse"), ""), "44 BC");
    }

    #[test]
    fn formatted_years_parse_back() {
        for input in ["2015", "99", "1", "0", "1 BC", "-354", "3000 BCE"] {
            let point = parse(input).expect("fixture should parse");
            for marker in [DEFAULT_BC_MARKER, "-", " v.Chr."] {
                let label = format_year(&point, marker);
                assert_eq!(
                    parse(&label).expect("formatted label should parse"),
                    point,
                    "label `{label}` for `{input}` did not round-trip"
                );
            }
        }
    }
}
