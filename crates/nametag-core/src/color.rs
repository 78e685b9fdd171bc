use crate::Result;
use indexmap::IndexMap;

/// Fallback background color used when a pronoun string has no mapping.
pub const DEFAULT_COLOR: &str = "009e73";

const BUILTIN_COLOR_MAPPING: &str = include_str!("../assets/color_mapping.json");

/// Pronoun string to 6-hex-digit color, plus one fallback color.
///
/// Lookups are exact: no case folding, no whitespace trimming. Pronoun strings are used as
/// literal keys. The table is read-only once built and can be shared between any number of
/// concurrent generations.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ColorTable {
    mappings: IndexMap<String, String>,
    default_color: String,
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ColorTable {
    /// An empty table that maps everything to `default_color`.
    pub fn new(default_color: impl Into<String>) -> Self {
        Self {
            mappings: IndexMap::new(),
            default_color: default_color.into(),
        }
    }

    /// The bundled mapping with [`DEFAULT_COLOR`] as fallback.
    pub fn builtin() -> Self {
        Self::from_json_str(BUILTIN_COLOR_MAPPING, DEFAULT_COLOR)
            .expect("bundled color mapping is a JSON object of strings")
    }

    /// Parses a JSON object of `"pronouns": "rrggbb"` pairs. Key order is preserved.
    pub fn from_json_str(json: &str, default_color: impl Into<String>) -> Result<Self> {
        let mappings: IndexMap<String, String> = serde_json::from_str(json)?;
        Ok(Self {
            mappings,
            default_color: default_color.into(),
        })
    }

    pub fn with_mapping(mut self, pronouns: impl Into<String>, color: impl Into<String>) -> Self {
        self.insert(pronouns, color);
        self
    }

    pub fn with_default_color(mut self, default_color: impl Into<String>) -> Self {
        self.default_color = default_color.into();
        self
    }

    pub fn insert(&mut self, pronouns: impl Into<String>, color: impl Into<String>) {
        self.mappings.insert(pronouns.into(), color.into());
    }

    pub fn get(&self, pronouns: &str) -> Option<&str> {
        self.mappings.get(pronouns).map(String::as_str)
    }

    /// Mapped color for an exact match on `pronouns`, else the table default.
    pub fn lookup(&self, pronouns: &str) -> &str {
        match self.get(pronouns) {
            Some(color) => color,
            None => {
                tracing::trace!(pronouns, "no color mapping; using default color");
                &self.default_color
            }
        }
    }

    pub fn default_color(&self) -> &str {
        &self.default_color
    }

    pub fn mappings(&self) -> &IndexMap<String, String> {
        &self.mappings
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

/// `true` for exactly six ASCII hex digits, without `#`.
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 6 && value.bytes().all(|b| b.is_ascii_hexdigit())
}
