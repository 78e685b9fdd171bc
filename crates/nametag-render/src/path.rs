//! The decorative squiggle in the top left corner of a badge.
//!
//! Each character of the name becomes one point: characters are spread evenly along the x axis
//! and the Unicode code point (mod 15) picks the height.

use crate::number;
use crate::{Error, Result};

pub const START_X: f64 = 3.0;
pub const START_Y: u32 = 3;
pub const MAX_LENGTH: f64 = 23.0;
pub const MAX_HEIGHT: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquigglePoint {
    pub x: f64,
    pub y: f64,
}

/// One point per Unicode scalar value of `name`, in order.
pub fn squiggle_points(name: &str) -> Result<Vec<SquigglePoint>> {
    let len = name.chars().count();
    if len == 0 {
        return Err(Error::invalid_input("name must not be empty"));
    }

    let step = MAX_LENGTH / len as f64;
    Ok(name
        .chars()
        .enumerate()
        .map(|(i, ch)| SquigglePoint {
            x: i as f64 * step + START_X,
            y: f64::from(u32::from(ch) % MAX_HEIGHT + START_Y),
        })
        .collect())
}

/// Path data (`d` attribute) for the squiggle of `name`: `M x0,y0 x1,y1 ...`.
pub fn synthesize_squiggle(name: &str) -> Result<String> {
    let points = squiggle_points(name)?;
    Ok(path_command(&points))
}

pub fn path_command(points: &[SquigglePoint]) -> String {
    let mut out = String::with_capacity(2 + points.len() * 12);
    let mut buf = ryu_js::Buffer::new();
    out.push_str("M ");
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        number::fmt_into(&mut out, p.x, &mut buf);
        out.push(',');
        number::fmt_into(&mut out, p.y, &mut buf);
    }
    out
}
