//! Number formatting for SVG attribute values.
//!
//! Coordinates are written the way JavaScript prints numbers: shortest round-trip decimal and
//! no `.0` suffix on whole numbers, so the first squiggle point reads `3,4` and a strip block is
//! `39.5` wide.

pub(crate) fn fmt_into(out: &mut String, v: f64, buf: &mut ryu_js::Buffer) {
    out.push_str(js_number_to_string(v, buf));
}

pub fn fmt(v: f64) -> String {
    let mut out = String::new();
    let mut buf = ryu_js::Buffer::new();
    fmt_into(&mut out, v, &mut buf);
    out
}

fn js_number_to_string(mut v: f64, buf: &mut ryu_js::Buffer) -> &str {
    if !v.is_finite() {
        return "0";
    }
    if v == -0.0 {
        v = 0.0;
    }
    buf.format_finite(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_have_no_fraction() {
        assert_eq!(fmt(3.0), "3");
        assert_eq!(fmt(0.0), "0");
        assert_eq!(fmt(-0.0), "0");
        assert_eq!(fmt(42.0), "42");
    }

    #[test]
    fn fractions_use_shortest_round_trip() {
        assert_eq!(fmt(39.5), "39.5");
        assert_eq!(fmt(38.12), "38.12");
        assert_eq!(fmt(2.75), "2.75");
        assert_eq!(fmt(79.0 / 3.0), "26.333333333333332");
        assert_eq!(fmt(1.0 * (23.0 / 7.0) + 3.0), "6.285714285714286");
    }

    #[test]
    fn non_finite_values_collapse_to_zero() {
        assert_eq!(fmt(f64::NAN), "0");
        assert_eq!(fmt(f64::INFINITY), "0");
        assert_eq!(fmt(f64::NEG_INFINITY), "0");
    }
}
