//! Glossary annotation pass
//!
//! Rewrites the first occurrence of each glossary term in a document into a
//! link carrying a tooltip with the term's definition.
//!
//! # Rules
//!
//! - First occurrence only, per term and per document
//! - At most `max_annotations` tooltips per document (default 8)
//! - Headings, links, code, raw markup and graphics are never rewritten
//! - A term's own glossary page never annotates that term
//! - Longer variants are tried before shorter ones
//!
//! # Example
//!
//! ```
//! use glossa::{Annotator, AnnotatorConfig, Dictionary, Term};
//!
//! let dictionary = Dictionary::new(vec![
//!     Term::new("seo", "SEO", "Search Engine Optimization"),
//! ])
//! .unwrap();
//! let annotator = Annotator::new(dictionary, AnnotatorConfig::default()).unwrap();
//!
//! let (html, outcome) = annotator.render_markdown("Le SEO compte.", None);
//! assert_eq!(outcome.count(), 1);
//! assert!(html.contains("data-glossary=\"seo\""));
//! ```

mod config;
mod index;
mod splitter;
mod state;
mod tooltip;
mod walker;

pub use config::{AnnotatorConfig, DEFAULT_MAX_ANNOTATIONS};
pub use index::{MatchIndex, MatchRule};
pub use splitter::split;
pub use state::{AnnotationState, Phase};
pub use tooltip::{annotated_term, annotation_node, is_annotation, MARKER_CLASS, TERM_ATTRIBUTE};
pub use walker::{annotate, classify, Visit};

use crate::glossary::{Dictionary, GlossaryResult, TermId};
use crate::tree::{parse_markdown, render_html, Element};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Summary of one document pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationOutcome {
    /// Terms annotated by this pass, in reading order
    pub terms: Vec<TermId>,
    /// The term the document itself describes, if any
    pub self_term: Option<TermId>,
}

impl AnnotationOutcome {
    pub fn count(&self) -> usize {
        self.terms.len()
    }
}

/// Dictionary, match index and configuration, ready to annotate documents
///
/// Cheap to clone and safe to share across threads: the index is built once
/// and only read afterwards. Every document gets its own fresh state.
#[derive(Debug, Clone)]
pub struct Annotator {
    dictionary: Arc<Dictionary>,
    index: Arc<MatchIndex>,
    config: AnnotatorConfig,
}

impl Annotator {
    pub fn new(dictionary: Dictionary, config: AnnotatorConfig) -> GlossaryResult<Self> {
        let index = MatchIndex::build(&dictionary)?;
        debug!(
            terms = dictionary.len(),
            rules = index.len(),
            "built match index"
        );
        Ok(Self {
            dictionary: Arc::new(dictionary),
            index: Arc::new(index),
            config,
        })
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn index(&self) -> &MatchIndex {
        &self.index
    }

    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    /// Fresh state for a document read from `source`
    pub fn new_state(&self, source: Option<&Path>) -> AnnotationState {
        let self_term = source.and_then(|path| {
            self.dictionary
                .self_term_for_path(path, &self.config.glossary_dir)
        });
        AnnotationState::new(self.config.max_annotations, self_term)
    }

    /// Annotate a document tree in place
    pub fn annotate(&self, root: &mut Element, source: Option<&Path>) -> AnnotationOutcome {
        let mut state = self.new_state(source);
        annotate(root, &self.index, &mut state, &self.config);

        let self_term = state.self_term().cloned();
        let terms = state.into_annotated();
        debug!(
            source = ?source,
            annotations = terms.len(),
            self_term = ?self_term,
            "annotated document"
        );
        AnnotationOutcome { terms, self_term }
    }

    /// Parse markdown, annotate it and serialize the result
    pub fn render_markdown(
        &self,
        markdown: &str,
        source: Option<&Path>,
    ) -> (String, AnnotationOutcome) {
        let mut root = parse_markdown(markdown);
        let outcome = self.annotate(&mut root, source);
        (render_html(&root), outcome)
    }
}
