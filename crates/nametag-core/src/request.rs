use crate::color::is_hex_color;
use crate::{Error, Fingerprint, Result};

/// Typed input for one badge generation.
///
/// Immutable once built. The engine trusts these values: shape checks belong to whoever builds
/// the request (see [`RequestDraft::validate`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    name: String,
    pronouns: String,
    default_color: Option<String>,
    fingerprint: Option<Fingerprint>,
    gradient: bool,
}

impl GenerationRequest {
    pub fn new(name: impl Into<String>, pronouns: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pronouns: pronouns.into(),
            default_color: None,
            fingerprint: None,
            gradient: false,
        }
    }

    /// Request-level background color. When present it replaces the color table result
    /// entirely (it is not a fallback).
    pub fn with_default_color(mut self, color: impl Into<String>) -> Self {
        self.default_color = Some(color.into());
        self
    }

    pub fn with_fingerprint(mut self, fingerprint: impl Into<Fingerprint>) -> Self {
        self.fingerprint = Some(fingerprint.into());
        self
    }

    pub fn with_gradient(mut self, enabled: bool) -> Self {
        self.gradient = enabled;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pronouns(&self) -> &str {
        &self.pronouns
    }

    pub fn default_color(&self) -> Option<&str> {
        self.default_color.as_deref()
    }

    pub fn fingerprint(&self) -> Option<&Fingerprint> {
        self.fingerprint.as_ref()
    }

    pub fn gradient_enabled(&self) -> bool {
        self.gradient
    }
}

/// A request as it arrives from a client: every field optional and stringly typed.
///
/// This mirrors the public name tag API body:
///
/// ```json
/// { "name": "jackie*", "pronouns": "per, pers, pers", "gradient": "true", "fingerprint": "abcdef1234" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RequestDraft {
    pub name: Option<String>,
    pub pronouns: Option<String>,
    pub default_color: Option<String>,
    pub fingerprint: Option<String>,
    pub gradient: Option<String>,
}

impl RequestDraft {
    pub fn new(name: impl Into<String>, pronouns: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            pronouns: Some(pronouns.into()),
            ..Default::default()
        }
    }

    /// Checks the draft and turns it into a [`GenerationRequest`].
    ///
    /// A fingerprint of zero passes validation and is kept; the engine decides what a zero
    /// fingerprint means.
    pub fn validate(&self) -> Result<GenerationRequest> {
        let name = non_empty(self.name.as_deref()).ok_or(Error::MissingField { field: "name" })?;
        let pronouns = non_empty(self.pronouns.as_deref()).ok_or(Error::MissingField {
            field: "pronouns",
        })?;

        let mut request = GenerationRequest::new(name, pronouns);

        if let Some(color) = non_empty(self.default_color.as_deref()) {
            if !is_hex_color(color) {
                return Err(Error::MalformedColor {
                    value: color.to_string(),
                });
            }
            request = request.with_default_color(color);
        }

        if let Some(raw) = non_empty(self.fingerprint.as_deref()) {
            request = request.with_fingerprint(Fingerprint::from_hex(raw)?);
        }

        let gradient = match self.gradient.as_deref() {
            None | Some("false") => false,
            Some("true") => true,
            Some(other) => {
                return Err(Error::InvalidGradientFlag {
                    value: other.to_string(),
                });
            }
        };

        Ok(request.with_gradient(gradient))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
