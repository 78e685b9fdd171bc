//! Badge templates and the named slots they support.
//!
//! A template is an SVG skeleton with `{{ name }}` / `{{ pronouns }}` text placeholders and a
//! few nodes addressed by id. Instead of letting every write silently search for placeholder
//! text, a template is inspected once at load time and records which [`Slot`]s it can take.
//! The mutator only writes to slots the template declares.

use crate::document::SvgDocument;
use crate::{Error, Result};
use minijinja::{AutoEscape, Environment, context};
use std::fmt;

pub const BACKGROUND_NODE: &str = "background-rectangle";
pub const SQUIGGLE_NODE: &str = "squiggly";
pub const GRADIENT_ANCHOR_NODE: &str = "prettyGradient";

const REQUIRED_NODES: [&str; 2] = [BACKGROUND_NODE, SQUIGGLE_NODE];

const TEXT_TEMPLATE: &str = "badge.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    NameText,
    PronounsText,
    BackgroundFill,
    SquigglePath,
    FingerprintStrip,
    GradientStopOne,
    GradientStopTwo,
    GradientStopThree,
}

/// A style property written by replacing a template-authored placeholder value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTarget {
    pub node: &'static str,
    pub property: &'static str,
    pub placeholder: &'static str,
}

impl Slot {
    pub const ALL: [Slot; 8] = [
        Slot::NameText,
        Slot::PronounsText,
        Slot::BackgroundFill,
        Slot::SquigglePath,
        Slot::FingerprintStrip,
        Slot::GradientStopOne,
        Slot::GradientStopTwo,
        Slot::GradientStopThree,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Slot::NameText => "name-text",
            Slot::PronounsText => "pronouns-text",
            Slot::BackgroundFill => "background-fill",
            Slot::SquigglePath => "squiggle-path",
            Slot::FingerprintStrip => "fingerprint-strip",
            Slot::GradientStopOne => "gradient-stop-1",
            Slot::GradientStopTwo => "gradient-stop-2",
            Slot::GradientStopThree => "gradient-stop-3",
        }
    }

    pub fn style_target(self) -> Option<StyleTarget> {
        let (node, property, placeholder) = match self {
            Slot::BackgroundFill => (BACKGROUND_NODE, "fill", "fill:#ffdd55"),
            Slot::GradientStopOne => ("topLeft", "stop-color", "stop-color:#ff0000"),
            Slot::GradientStopTwo => ("middle", "stop-color", "stop-color:#00cc99"),
            Slot::GradientStopThree => ("bottomRight", "stop-color", "stop-color:#ff99ff"),
            _ => return None,
        };
        Some(StyleTarget {
            node,
            property,
            placeholder,
        })
    }

    fn is_gradient_stop(self) -> bool {
        matches!(
            self,
            Slot::GradientStopOne | Slot::GradientStopTwo | Slot::GradientStopThree
        )
    }

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotSet {
    bits: u16,
}

impl SlotSet {
    pub fn insert(&mut self, slot: Slot) {
        self.bits |= slot.bit();
    }

    pub fn contains(&self, slot: Slot) -> bool {
        self.bits & slot.bit() != 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Slot> + '_ {
        Slot::ALL.into_iter().filter(move |s| self.contains(*s))
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

impl FromIterator<Slot> for SlotSet {
    fn from_iter<T: IntoIterator<Item = Slot>>(iter: T) -> Self {
        let mut set = Self::default();
        for slot in iter {
            set.insert(slot);
        }
        set
    }
}

/// A validated, immutable badge template.
///
/// Cheap to share between threads: every generation renders into its own buffer.
#[derive(Debug, Clone)]
pub struct TemplateDocument {
    source: String,
    /// Holds the text template, compiled once, under `TEXT_TEMPLATE`.
    env: Environment<'static>,
    slots: SlotSet,
}

impl TemplateDocument {
    /// Validates `source` and records the slots it supports.
    ///
    /// Fails when the placeholder syntax is broken, when the rendered text is not well-formed
    /// XML, or when `background-rectangle` or `squiggly` is missing.
    pub fn parse(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let mut env = text_environment();
        env.add_template_owned(TEXT_TEMPLATE, source.clone())?;
        let (variables, blank_render) = {
            let template = env.get_template(TEXT_TEMPLATE)?;
            let blank_render = template.render(context! { name => "", pronouns => "" })?;
            (template.undeclared_variables(false), blank_render)
        };
        let doc = SvgDocument::parse(&blank_render)?;
        for id in REQUIRED_NODES {
            if !doc.contains_id(id) {
                return Err(Error::MissingNode { id });
            }
        }

        let mut slots = SlotSet::default();
        if variables.contains("name") {
            slots.insert(Slot::NameText);
        }
        if variables.contains("pronouns") {
            slots.insert(Slot::PronounsText);
        }
        slots.insert(Slot::SquigglePath);
        slots.insert(Slot::FingerprintStrip);

        let has_gradient_anchor = doc.contains_id(GRADIENT_ANCHOR_NODE);
        for slot in Slot::ALL {
            let Some(target) = slot.style_target() else {
                continue;
            };
            if slot.is_gradient_stop() && !has_gradient_anchor {
                continue;
            }
            let carries_placeholder = doc
                .raw_attribute(target.node, "style")
                .is_some_and(|style| style.contains(target.placeholder));
            if carries_placeholder {
                slots.insert(slot);
            }
        }

        tracing::debug!(
            slots = ?slots.iter().map(Slot::as_str).collect::<Vec<_>>(),
            "parsed badge template"
        );
        Ok(Self { source, env, slots })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn slots(&self) -> SlotSet {
        self.slots
    }

    pub fn supports(&self, slot: Slot) -> bool {
        self.slots.contains(slot)
    }

    /// `true` when the template can carry a background gradient at all.
    pub fn has_gradient(&self) -> bool {
        self.slots.iter().any(Slot::is_gradient_stop)
    }

    /// Fills the text placeholders. Values are XML-escaped.
    pub(crate) fn render_text(&self, name: &str, pronouns: &str) -> Result<String> {
        let template = self.env.get_template(TEXT_TEMPLATE)?;
        Ok(template.render(context! { name => name, pronouns => pronouns })?)
    }
}

fn text_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.set_keep_trailing_newline(true);
    env
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets;

    fn svg(body: &str) -> String {
        format!(r#"<svg xmlns="http://www.w3.org/2000/svg">{body}</svg>"#)
    }

    const REQUIRED: &str = r#"<rect id="background-rectangle" style="fill:#ffdd55"/><path id="squiggly" d=""/>"#;

    #[test]
    fn plain_template_slots() {
        let slots: Vec<Slot> = assets::plain_template().slots().iter().collect();
        assert_eq!(
            slots,
            [
                Slot::NameText,
                Slot::PronounsText,
                Slot::BackgroundFill,
                Slot::SquigglePath,
                Slot::FingerprintStrip,
            ]
        );
        assert!(!assets::plain_template().has_gradient());
    }

    #[test]
    fn gradient_template_slots() {
        let template = assets::gradient_template();
        assert!(template.has_gradient());
        assert!(template.supports(Slot::GradientStopOne));
        assert!(template.supports(Slot::GradientStopTwo));
        assert!(template.supports(Slot::GradientStopThree));
        // The gradient template paints its background with the gradient itself.
        assert!(!template.supports(Slot::BackgroundFill));
    }

    #[test]
    fn stops_need_the_gradient_anchor() {
        let stops = r#"<stop id="topLeft" style="stop-color:#ff0000"/><stop id="middle" style="stop-color:#00cc99"/>"#;
        let without = TemplateDocument::parse(svg(&format!("{REQUIRED}{stops}"))).unwrap();
        assert!(!without.has_gradient());

        let with = TemplateDocument::parse(svg(&format!(
            r#"{REQUIRED}<linearGradient id="prettyGradient">{stops}</linearGradient>"#
        )))
        .unwrap();
        assert!(with.supports(Slot::GradientStopOne));
        assert!(with.supports(Slot::GradientStopTwo));
        assert!(!with.supports(Slot::GradientStopThree));
    }

    #[test]
    fn background_fill_needs_its_placeholder() {
        let template = TemplateDocument::parse(svg(
            r#"<rect id="background-rectangle" style="fill:#123456"/><path id="squiggly"/>"#,
        ))
        .unwrap();
        assert!(!template.supports(Slot::BackgroundFill));
        assert!(template.supports(Slot::SquigglePath));
        assert!(!template.supports(Slot::NameText));
    }

    #[test]
    fn required_nodes_are_enforced() {
        let err = TemplateDocument::parse(svg(r#"<path id="squiggly"/>"#)).unwrap_err();
        assert!(matches!(err, Error::MissingNode { id: BACKGROUND_NODE }));

        let err =
            TemplateDocument::parse(svg(r#"<rect id="background-rectangle"/>"#)).unwrap_err();
        assert!(matches!(err, Error::MissingNode { id: SQUIGGLE_NODE }));
    }

    #[test]
    fn malformed_sources_are_rejected() {
        let err = TemplateDocument::parse("<svg><rect></svg>").unwrap_err();
        assert!(matches!(err, Error::MalformedTemplate { .. }));

        let err = TemplateDocument::parse(svg(&format!("{REQUIRED}<text>{{{{ name </text>"))).unwrap_err();
        assert!(matches!(err, Error::TemplateSyntax { .. }));
    }

    #[test]
    fn text_is_escaped_and_trailing_newline_kept() {
        let template = TemplateDocument::parse(format!(
            "{}\n",
            svg(&format!("{REQUIRED}<text>{{{{ name }}}}</text>"))
        ))
        .unwrap();
        let out = template.render_text("<Ada & Co>", "she/her").unwrap();
        assert!(out.contains("<text>&lt;Ada &amp; Co&gt;</text>"));
        assert!(out.ends_with("</svg>\n"));
    }

    #[test]
    fn compiled_text_template_is_reused_across_renders() {
        let template = TemplateDocument::parse(svg(&format!(
            "{REQUIRED}<text>{{{{ name }}}}</text><text>{{{{ pronouns }}}}</text>"
        )))
        .unwrap();
        let shared = template.clone();
        for name in ["Ada", "Grace", "Ada"] {
            let out = template.render_text(name, "she/her").unwrap();
            assert!(out.contains(&format!("<text>{name}</text>")));
            assert_eq!(out, shared.render_text(name, "she/her").unwrap());
        }
        assert!(template.source().contains("{{ name }}"));
    }

    #[test]
    fn slot_set_basics() {
        let set: SlotSet = [Slot::SquigglePath, Slot::NameText].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(Slot::NameText));
        assert!(!set.contains(Slot::BackgroundFill));
        assert_eq!(set.iter().collect::<Vec<_>>(), [Slot::NameText, Slot::SquigglePath]);
        assert!(SlotSet::default().is_empty());
        assert_eq!(Slot::GradientStopTwo.to_string(), "gradient-stop-2");
    }
}
