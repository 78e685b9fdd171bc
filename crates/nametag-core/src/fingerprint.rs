use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// An arbitrary-precision non-negative integer, typically derived from a public key.
///
/// The value is stored as its canonical lowercase hexadecimal rendering: no prefix and no
/// leading zeros beyond what the magnitude requires (zero is `"0"`). That rendering is all the
/// badge strip ever needs, so no big-integer arithmetic is involved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fingerprint {
    digits: String,
}

impl Fingerprint {
    pub fn zero() -> Self {
        Self {
            digits: "0".to_string(),
        }
    }

    /// Parses a hexadecimal string. Surrounding whitespace and a `0x`/`0X` prefix are accepted.
    pub fn from_hex(text: &str) -> Result<Self> {
        let raw = text.trim();
        let hex = raw
            .strip_prefix("0x")
            .or_else(|| raw.strip_prefix("0X"))
            .unwrap_or(raw);
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::MalformedFingerprint {
                value: text.to_string(),
            });
        }
        Ok(Self::from_digits(hex))
    }

    /// Interprets `bytes` as a big-endian unsigned integer (e.g. a raw key fingerprint).
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        Self::from_digits(&hex::encode(bytes))
    }

    fn from_digits(hex: &str) -> Self {
        let trimmed = hex.trim_start_matches('0');
        if trimmed.is_empty() {
            return Self::zero();
        }
        Self {
            digits: trimmed.to_ascii_lowercase(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }

    /// Lowercase hex digits without prefix.
    pub fn as_hex(&self) -> &str {
        &self.digits
    }
}

impl From<u64> for Fingerprint {
    fn from(value: u64) -> Self {
        Self::from_digits(&format!("{value:x}"))
    }
}

impl From<u128> for Fingerprint {
    fn from(value: u128) -> Self {
        Self::from_digits(&format!("{value:x}"))
    }
}

impl FromStr for Fingerprint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Fingerprint {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Fingerprint> for String {
    fn from(value: Fingerprint) -> Self {
        value.digits
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}
