//! Writes computed values into a rendered template.
//!
//! Steps run in a fixed order: text placeholders, background fill, squiggle path, fingerprint
//! strip, gradient stops. Only the empty name is an error; every other gap (a slot the template
//! does not support, a zero fingerprint, gradients disabled) skips its step.

use crate::Result;
use crate::document::SvgDocument;
use crate::gradient::derive_gradient;
use crate::path::synthesize_squiggle;
use crate::strip::{CHUNK_WIDTH, blocks_svg, encode_fingerprint};
use crate::template::{SQUIGGLE_NODE, Slot, TemplateDocument};
use nametag_core::{ColorTable, Fingerprint, GenerationRequest};

/// Background color for `request`: the request-level color when given, otherwise the color
/// table entry for the pronouns (or the table default).
pub fn background_color<'a>(request: &'a GenerationRequest, colors: &'a ColorTable) -> &'a str {
    match request.default_color() {
        Some(color) => color,
        None => colors.lookup(request.pronouns()),
    }
}

/// The fingerprint to render, if any. Zero counts as "no fingerprint".
pub fn effective_fingerprint(request: &GenerationRequest) -> Option<&Fingerprint> {
    let fingerprint = request.fingerprint()?;
    if fingerprint.is_zero() {
        tracing::debug!("fingerprint is zero; treating it as absent");
        return None;
    }
    Some(fingerprint)
}

/// Applies `request` to `template` and returns the serialized document.
///
/// Pure: identical inputs always produce identical bytes.
pub fn apply(
    template: &TemplateDocument,
    request: &GenerationRequest,
    colors: &ColorTable,
) -> Result<String> {
    // Computed first so an empty name fails before any document work.
    let squiggle = synthesize_squiggle(request.name())?;

    let rendered = template.render_text(request.name(), request.pronouns())?;
    let mut doc = SvgDocument::parse(&rendered)?;

    let base_color = background_color(request, colors);
    write_style_slot(&mut doc, template, Slot::BackgroundFill, base_color);

    if template.supports(Slot::SquigglePath) {
        doc.set_attribute(SQUIGGLE_NODE, "d", &squiggle);
    }

    if let Some(fingerprint) = effective_fingerprint(request) {
        write_fingerprint_strip(&mut doc, template, fingerprint)?;
    }

    if request.gradient_enabled() {
        if template.has_gradient() {
            let stops = derive_gradient(request.name(), base_color);
            write_style_slot(&mut doc, template, Slot::GradientStopOne, &stops.one);
            write_style_slot(&mut doc, template, Slot::GradientStopTwo, &stops.two);
            write_style_slot(&mut doc, template, Slot::GradientStopThree, &stops.three);
        } else {
            tracing::debug!("gradient requested but template has no gradient anchor; skipping");
        }
    }

    Ok(doc.serialize())
}

fn write_fingerprint_strip(
    doc: &mut SvgDocument<'_>,
    template: &TemplateDocument,
    fingerprint: &Fingerprint,
) -> Result<()> {
    if !template.supports(Slot::FingerprintStrip) {
        tracing::debug!("template has no fingerprint strip anchor; skipping");
        return Ok(());
    }
    let blocks = encode_fingerprint(fingerprint, CHUNK_WIDTH)?;
    tracing::trace!(blocks = blocks.len(), "encoded fingerprint strip");
    doc.insert_after(SQUIGGLE_NODE, blocks_svg(&blocks));
    Ok(())
}

fn write_style_slot(doc: &mut SvgDocument<'_>, template: &TemplateDocument, slot: Slot, color: &str) {
    let Some(target) = slot.style_target() else {
        return;
    };
    if !template.supports(slot) {
        tracing::debug!(slot = slot.as_str(), "slot not supported by template; skipping");
        return;
    }
    let value = format!("{}:#{}", target.property, color);
    if !doc.replace_in_attribute(target.node, "style", target.placeholder, &value) {
        tracing::debug!(slot = slot.as_str(), "placeholder not found after text rendering");
    }
}
