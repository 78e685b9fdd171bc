use crate::color::{DEFAULT_COLOR, is_hex_color};
use crate::{Error, Result};
use std::path::PathBuf;

/// Settings for a name tag generator.
///
/// Paths are resolved by the caller; the engine itself only ever sees parsed templates and
/// color tables.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Fallback color of the color table (no `#`).
    pub default_color: String,
    /// JSON object of pronouns to colors, replacing the bundled mapping.
    pub color_map: Option<PathBuf>,
    /// Plain template, replacing the bundled one.
    pub template: Option<PathBuf>,
    /// Gradient-capable template, replacing the bundled one.
    pub gradient_template: Option<PathBuf>,
    /// Where batch output lands.
    pub out_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_color: DEFAULT_COLOR.to_string(),
            color_map: None,
            template: None,
            gradient_template: None,
            out_dir: PathBuf::from("rendered"),
        }
    }
}

impl GeneratorConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| Error::Config {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !is_hex_color(&self.default_color) {
            return Err(Error::Config {
                message: format!(
                    "default_color has to be a 6-digit hexadecimal value (got `{}`)",
                    self.default_color
                ),
            });
        }
        Ok(())
    }
}
