//! Bundled badge templates.

use crate::template::TemplateDocument;
use std::sync::OnceLock;

pub const PLAIN_TEMPLATE: &str = include_str!("../assets/plain.svg");
pub const GRADIENT_TEMPLATE: &str = include_str!("../assets/gradient.svg");

/// The default template: solid background colored by pronouns.
pub fn plain_template() -> &'static TemplateDocument {
    static TEMPLATE: OnceLock<TemplateDocument> = OnceLock::new();
    TEMPLATE.get_or_init(|| {
        TemplateDocument::parse(PLAIN_TEMPLATE).expect("bundled plain template is valid")
    })
}

/// The gradient-capable template, for requests with gradients enabled.
pub fn gradient_template() -> &'static TemplateDocument {
    static TEMPLATE: OnceLock<TemplateDocument> = OnceLock::new();
    TEMPLATE.get_or_init(|| {
        TemplateDocument::parse(GRADIENT_TEMPLATE).expect("bundled gradient template is valid")
    })
}
