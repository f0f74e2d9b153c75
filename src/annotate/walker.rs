//! Tree walker: pre-order, left-to-right traversal driving the splitter

use super::config::AnnotatorConfig;
use super::index::MatchIndex;
use super::splitter::split;
use super::state::AnnotationState;
use super::tooltip::{annotated_term, is_annotation};
use crate::tree::{Element, Node};

/// How the walker treats a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Text: candidate for matching
    Split,
    /// Container: recurse into its children
    Descend,
    /// Opaque element, existing annotation or raw markup: copied through
    Skip,
}

pub fn classify(node: &Node) -> Visit {
    match node {
        Node::Text(_) => Visit::Split,
        Node::Raw(_) => Visit::Skip,
        Node::Element(el) => classify_element(el),
    }
}

/// Annotate the tree under `root` in place
///
/// Annotation nodes already in the tree are accounted for first (their
/// terms are taken and they count toward the cap), so a second pass over
/// annotated output never repeats a term or exceeds the cap. Once the cap is
/// reached the rest of the tree is left untouched.
pub fn annotate(
    root: &mut Element,
    index: &MatchIndex,
    state: &mut AnnotationState,
    config: &AnnotatorConfig,
) {
    if classify_element(root) == Visit::Skip {
        return;
    }
    adopt_existing(&root.children, state);
    walk(root, index, state, config);
}

fn classify_element(el: &Element) -> Visit {
    if el.tag.is_opaque() || is_annotation(el) {
        Visit::Skip
    } else {
        Visit::Descend
    }
}

fn adopt_existing(nodes: &[Node], state: &mut AnnotationState) {
    for node in nodes {
        if let Node::Element(el) = node {
            if is_annotation(el) {
                if let Some(term) = annotated_term(el) {
                    state.adopt(term);
                }
            } else {
                adopt_existing(&el.children, state);
            }
        }
    }
}

fn walk(
    el: &mut Element,
    index: &MatchIndex,
    state: &mut AnnotationState,
    config: &AnnotatorConfig,
) {
    if state.is_exhausted() {
        return;
    }

    let children = std::mem::take(&mut el.children);
    let mut rewritten = Vec::with_capacity(children.len());

    for child in children {
        if state.is_exhausted() {
            rewritten.push(child);
            continue;
        }
        match (classify(&child), child) {
            (Visit::Split, Node::Text(text)) => {
                rewritten.extend(split(text, index, state, config));
            }
            (Visit::Descend, Node::Element(mut inner)) => {
                walk(&mut inner, index, state, config);
                rewritten.push(Node::Element(inner));
            }
            (_, other) => rewritten.push(other),
        }
    }

    el.children = rewritten;
}
