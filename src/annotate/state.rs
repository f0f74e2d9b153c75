//! Per-document annotation state

use crate::glossary::TermId;
use std::collections::HashSet;

/// Where a document pass stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing annotated yet
    Fresh,
    /// At least one annotation, cap not reached
    Accumulating,
    /// Cap reached; every further text node passes through unchanged
    Exhausted,
}

/// Transient state of one document pass
///
/// Created fresh per document and consumed at the end of the pass. The
/// matched set never holds the self term and the count never exceeds the cap.
#[derive(Debug, Clone)]
pub struct AnnotationState {
    matched: HashSet<TermId>,
    annotated: Vec<TermId>,
    count: usize,
    cap: usize,
    self_term: Option<TermId>,
}

impl AnnotationState {
    pub fn new(cap: usize, self_term: Option<TermId>) -> Self {
        Self {
            matched: HashSet::new(),
            annotated: Vec::new(),
            count: 0,
            cap,
            self_term,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.is_exhausted() {
            Phase::Exhausted
        } else if self.count == 0 {
            Phase::Fresh
        } else {
            Phase::Accumulating
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.count >= self.cap
    }

    /// Whether a new annotation for `term` is allowed right now
    pub fn is_eligible(&self, term: &TermId) -> bool {
        !self.is_exhausted()
            && !self.matched.contains(term)
            && self.self_term.as_ref() != Some(term)
    }

    /// Record a new annotation made by this pass
    pub fn record(&mut self, term: TermId) {
        debug_assert!(self.is_eligible(&term));
        self.matched.insert(term.clone());
        self.annotated.push(term);
        self.count += 1;
    }

    /// Account for an annotation already present in the tree
    ///
    /// It blocks its term and counts toward the cap like one made by this pass.
    pub fn adopt(&mut self, term: TermId) {
        if self.self_term.as_ref() == Some(&term) || self.is_exhausted() {
            return;
        }
        if self.matched.insert(term) {
            self.count += 1;
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn self_term(&self) -> Option<&TermId> {
        self.self_term.as_ref()
    }

    pub fn is_matched(&self, term: &TermId) -> bool {
        self.matched.contains(term)
    }

    /// Terms annotated by this pass, in document order
    pub fn annotated(&self) -> &[TermId] {
        &self.annotated
    }

    pub(crate) fn into_annotated(self) -> Vec<TermId> {
        self.annotated
    }
}
