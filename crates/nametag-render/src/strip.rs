//! Fingerprint strip: a row of colored blocks under the name, one per six hex digits.

use crate::number;
use crate::{Error, Result};
use nametag_core::Fingerprint;

pub const CHUNK_WIDTH: usize = 6;
/// Right-padding for a short final chunk.
pub const PAD_DIGIT: char = '8';
pub const STRIP_WIDTH: f64 = 79.0;
pub const BLOCK_HEIGHT: f64 = 2.5;
pub const ORIGIN_X: f64 = 2.75;
pub const ORIGIN_Y: f64 = 38.12;

#[derive(Debug, Clone, PartialEq)]
pub struct ColorBlock {
    pub index: usize,
    /// `#` followed by the (padded) chunk.
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Splits the hex rendering of `fingerprint` into `chunk_width`-digit colors, most significant
/// chunk first, and lays them out across the strip.
pub fn encode_fingerprint(fingerprint: &Fingerprint, chunk_width: usize) -> Result<Vec<ColorBlock>> {
    if chunk_width == 0 {
        return Err(Error::invalid_input("fingerprint chunk width must be positive"));
    }

    let digits = fingerprint.as_hex();
    // Hex digits are ASCII, so every offset is a char boundary.
    let chunks: Vec<&str> = (0..digits.len())
        .step_by(chunk_width)
        .map(|start| &digits[start..digits.len().min(start + chunk_width)])
        .collect();

    let count = chunks.len();
    let width = STRIP_WIDTH / count as f64;

    Ok(chunks
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| {
            let mut color = String::with_capacity(chunk_width + 1);
            color.push('#');
            color.push_str(chunk);
            for _ in chunk.len()..chunk_width {
                color.push(PAD_DIGIT);
            }
            ColorBlock {
                index,
                color,
                x: index as f64 * width + ORIGIN_X,
                y: ORIGIN_Y,
                width,
                height: BLOCK_HEIGHT,
            }
        })
        .collect())
}

/// `<rect>` elements for `blocks`, in order, ready to be spliced into a document.
pub fn blocks_svg(blocks: &[ColorBlock]) -> String {
    let mut out = String::with_capacity(blocks.len() * 110);
    let mut buf = ryu_js::Buffer::new();
    for block in blocks {
        out.push_str(r#"<rect id="hash-"#);
        out.push_str(&block.index.to_string());
        out.push_str(r#"" height=""#);
        number::fmt_into(&mut out, block.height, &mut buf);
        out.push_str(r#"" width=""#);
        number::fmt_into(&mut out, block.width, &mut buf);
        out.push_str(r#"" x=""#);
        number::fmt_into(&mut out, block.x, &mut buf);
        out.push_str(r#"" y=""#);
        number::fmt_into(&mut out, block.y, &mut buf);
        out.push_str(r#"" style="fill:"#);
        out.push_str(&block.color);
        out.push_str(r#";stroke:none;"/>"#);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(blocks: &[ColorBlock]) -> Vec<&str> {
        blocks.iter().map(|b| b.color.as_str()).collect()
    }

    #[test]
    fn short_final_chunk_is_padded_with_eights() {
        let blocks = encode_fingerprint(&Fingerprint::from(0xABCDEF1234u64), CHUNK_WIDTH).unwrap();
        assert_eq!(colors(&blocks), ["#abcdef", "#123488"]);
        assert_eq!(blocks[0].width, 39.5);
        assert_eq!(blocks[1].width, 39.5);
        assert_eq!(blocks[0].x, 2.75);
        assert_eq!(blocks[1].x, 42.25);
        assert!(blocks.iter().all(|b| b.y == ORIGIN_Y && b.height == BLOCK_HEIGHT));
    }

    #[test]
    fn exact_multiples_keep_chunks_unpadded() {
        let fp = Fingerprint::from_hex("a1b2c3d4e5f6").unwrap();
        let blocks = encode_fingerprint(&fp, CHUNK_WIDTH).unwrap();
        assert_eq!(colors(&blocks), ["#a1b2c3", "#d4e5f6"]);
    }

    #[test]
    fn block_count_is_ceil_of_hex_length() {
        for (hex, expected) in [("f", 1), ("123456", 1), ("1234567", 2), ("1234567890abcdef12", 3)] {
            let fp = Fingerprint::from_hex(hex).unwrap();
            let blocks = encode_fingerprint(&fp, CHUNK_WIDTH).unwrap();
            assert_eq!(blocks.len(), expected, "{hex}");
            assert_eq!(blocks.last().unwrap().color.len(), CHUNK_WIDTH + 1);
            for (i, b) in blocks.iter().enumerate() {
                assert_eq!(b.index, i);
            }
        }
    }

    #[test]
    fn chunks_cover_every_digit_once() {
        let hex = "7a1f3c9e0b2d4f6a8c0e1f3a5b7c9d0e2f4a6b8c0d1e3f5a7b9c";
        let blocks = encode_fingerprint(&Fingerprint::from_hex(hex).unwrap(), CHUNK_WIDTH).unwrap();
        assert_eq!(blocks.len(), 9);
        let joined: String = blocks.iter().map(|b| &b.color[1..]).collect();
        // 52 digits plus two padding digits in the final chunk.
        assert_eq!(joined, format!("{hex}88"));
        assert!(blocks.iter().all(|b| b.color.len() == CHUNK_WIDTH + 1));
    }

    #[test]
    fn single_digit_is_padded_to_full_width() {
        let blocks = encode_fingerprint(&Fingerprint::from(0xfu64), CHUNK_WIDTH).unwrap();
        assert_eq!(colors(&blocks), ["#f88888"]);
        assert_eq!(blocks[0].width, STRIP_WIDTH);
    }

    #[test]
    fn other_chunk_widths_follow_the_same_rule() {
        let fp = Fingerprint::from_hex("abcde").unwrap();
        let blocks = encode_fingerprint(&fp, 3).unwrap();
        assert_eq!(colors(&blocks), ["#abc", "#de8"]);
        assert!(matches!(
            encode_fingerprint(&fp, 0),
            Err(Error::InvalidInput { .. })
        ));
    }

    #[test]
    fn rect_markup_uses_js_numbers() {
        let blocks = encode_fingerprint(&Fingerprint::from(0xABCDEF1234u64), CHUNK_WIDTH).unwrap();
        assert_eq!(
            blocks_svg(&blocks),
            concat!(
                r#"<rect id="hash-0" height="2.5" width="39.5" x="2.75" y="38.12" style="fill:#abcdef;stroke:none;"/>"#,
                r#"<rect id="hash-1" height="2.5" width="39.5" x="42.25" y="38.12" style="fill:#123488;stroke:none;"/>"#,
            )
        );
    }
}
