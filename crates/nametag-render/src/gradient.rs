//! Background gradient stops derived from the name.

use sha1::{Digest as _, Sha1};

/// Three gradient stop colors, without `#`.
///
/// `one` is the badge's base color. `two` and `three` are `c` followed by five hex digits of
/// the name's SHA-1 digest: six characters that read as a color, but whose shape comes from
/// construction rather than validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientStops {
    pub one: String,
    pub two: String,
    pub three: String,
}

pub fn derive_gradient(name: &str, base_color: &str) -> GradientStops {
    let digest = sha1_hex(name);
    GradientStops {
        one: base_color.to_string(),
        two: format!("c{}", &digest[0..5]),
        three: format!("c{}", &digest[5..10]),
    }
}

fn sha1_hex(input: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
