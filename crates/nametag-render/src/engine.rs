use crate::mutator;
use crate::template::TemplateDocument;
use crate::{Error, Result};
use nametag_core::{ColorTable, GenerationRequest};
use std::fmt;

/// A finished badge: the serialized SVG text.
///
/// It has no identity beyond its bytes; storing it and naming it is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    svg: String,
}

impl GeneratedArtifact {
    pub fn as_str(&self) -> &str {
        &self.svg
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.svg.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.svg
    }

    pub fn len(&self) -> usize {
        self.svg.len()
    }

    pub fn is_empty(&self) -> bool {
        self.svg.is_empty()
    }
}

impl fmt::Display for GeneratedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.svg)
    }
}

impl AsRef<str> for GeneratedArtifact {
    fn as_ref(&self) -> &str {
        &self.svg
    }
}

/// Generates one badge.
///
/// The request is trusted as-is apart from its text: an empty name, or a name or pronouns
/// carrying a character XML 1.0 cannot hold, is rejected with [`Error::InvalidInput`] before
/// the template is touched. Which template variant fits the request (plain or gradient) is the
/// caller's choice.
pub fn generate(
    request: &GenerationRequest,
    template: &TemplateDocument,
    colors: &ColorTable,
) -> Result<GeneratedArtifact> {
    if request.name().is_empty() {
        return Err(Error::invalid_input("name must not be empty"));
    }
    for (field, value) in [("name", request.name()), ("pronouns", request.pronouns())] {
        if let Some(ch) = value.chars().find(|&c| !is_xml_char(c)) {
            return Err(Error::invalid_input(format!(
                "{field} contains a character not allowed in XML ({ch:?})"
            )));
        }
    }

    let svg = mutator::apply(template, request, colors)?;
    tracing::debug!(
        name = request.name(),
        pronouns = request.pronouns(),
        gradient = request.gradient_enabled(),
        bytes = svg.len(),
        "generated badge"
    );
    Ok(GeneratedArtifact { svg })
}

/// `Char` production of XML 1.0. Surrogates cannot occur in a Rust `char`.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}
