//! Annotation node construction and recognition

use super::config::AnnotatorConfig;
use super::index::MatchRule;
use crate::glossary::TermId;
use crate::tree::{Element, Node, TagKind};

/// Class marking an annotation node
pub const MARKER_CLASS: &str = "glossary-tooltip";
/// Attribute carrying the annotated term id
pub const TERM_ATTRIBUTE: &str = "data-glossary";

const CONTENT_CLASS: &str = "glossary-tooltip-content";
const TITLE_CLASS: &str = "glossary-tooltip-title";
const DEFINITION_CLASS: &str = "glossary-tooltip-def";

/// Wrap matched text in a link to the term page with an embedded tooltip
///
/// The matched text is kept verbatim, original casing included.
pub fn annotation_node(matched: &str, rule: &MatchRule, config: &AnnotatorConfig) -> Node {
    let payload = Element::new(TagKind::Span)
        .with_attribute("class", CONTENT_CLASS)
        .with_attribute("role", "tooltip")
        .with_attribute("aria-hidden", "true")
        .with_child(
            Element::new(TagKind::Strong)
                .with_attribute("class", TITLE_CLASS)
                .with_child(rule.title.as_str()),
        )
        .with_child(
            Element::new(TagKind::Span)
                .with_attribute("class", DEFINITION_CLASS)
                .with_child(rule.short_definition.as_str()),
        );

    Element::new(TagKind::Anchor)
        .with_attribute("href", config.term_href(rule.term.as_str()))
        .with_attribute("class", MARKER_CLASS)
        .with_attribute(TERM_ATTRIBUTE, rule.term.as_str())
        .with_child(matched)
        .with_child(payload)
        .into()
}

pub fn is_annotation(el: &Element) -> bool {
    el.attributes.has_class(MARKER_CLASS)
}

/// Term carried by an annotation node
pub fn annotated_term(el: &Element) -> Option<TermId> {
    if !is_annotation(el) {
        return None;
    }
    el.attributes.get(TERM_ATTRIBUTE).map(TermId::from)
}
