//! Span splitter: rewrites one text node into text and annotation nodes

use super::config::AnnotatorConfig;
use super::index::MatchIndex;
use super::state::AnnotationState;
use super::tooltip::annotation_node;
use crate::tree::Node;
use tracing::debug;

/// Split `text` around the matches the current state allows
///
/// Rules are tried once each, in index order (longest variant first). A rule
/// whose term is still eligible claims its leftmost occurrence in the text
/// not yet consumed; scanning then continues after the match only, so text
/// before a match is never searched again. Each term is annotated at most
/// once and the state's cap is never exceeded.
///
/// Returns the pieces in reading order; a node with no match comes back as
/// the single original text node.
pub fn split(
    text: String,
    index: &MatchIndex,
    state: &mut AnnotationState,
    config: &AnnotatorConfig,
) -> Vec<Node> {
    let mut pieces = Vec::new();
    let mut rest = text;

    for rule in index.rules() {
        if state.is_exhausted() {
            break;
        }
        if !state.is_eligible(&rule.term) {
            continue;
        }
        let Some(range) = rule.find(&rest) else {
            continue;
        };

        if range.start > 0 {
            pieces.push(Node::text(&rest[..range.start]));
        }
        pieces.push(annotation_node(&rest[range.clone()], rule, config));
        rest = rest[range.end..].to_string();

        debug!(term = %rule.term, variant = %rule.variant, "annotated term");
        state.record(rule.term.clone());
    }

    if !rest.is_empty() || pieces.is_empty() {
        pieces.push(Node::Text(rest));
    }
    pieces
}
