//! Term dictionary: the ordered, immutable registry of glossary terms

use super::error::{GlossaryError, GlossaryResult};
use super::term::{Term, TermId};
use std::collections::HashMap;
use std::path::Path;

/// Ordered set of terms, validated on construction
///
/// Authoring order is kept: it breaks ties between equally long variants
/// when the match index is built.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    terms: Vec<Term>,
    by_id: HashMap<TermId, usize>,
}

impl Dictionary {
    /// Build a dictionary, rejecting duplicate ids and blank variants
    ///
    /// A term without variants gets its title as the single variant.
    pub fn new(terms: Vec<Term>) -> GlossaryResult<Self> {
        let mut by_id = HashMap::with_capacity(terms.len());
        let mut validated = Vec::with_capacity(terms.len());

        for mut term in terms {
            if term.variants.is_empty() {
                term.variants.push(term.title.clone());
            }
            if term.variants.iter().any(|v| v.trim().is_empty()) {
                return Err(GlossaryError::EmptyVariant { term: term.id });
            }
            if by_id.insert(term.id.clone(), validated.len()).is_some() {
                return Err(GlossaryError::DuplicateTerm(term.id));
            }
            validated.push(term);
        }

        Ok(Self {
            terms: validated,
            by_id,
        })
    }

    /// All terms in authoring order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn get(&self, id: &TermId) -> Option<&Term> {
        self.by_id.get(id).map(|&i| &self.terms[i])
    }

    pub fn contains(&self, id: &TermId) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Id of the term a source document describes, if any
    ///
    /// A document describes term `x` when its path is `<glossary_dir>/x.md`
    /// (compared component-wise, so `glossary_dir` may be relative to any
    /// content root) and `x` is in the dictionary.
    pub fn self_term_for_path(&self, path: &Path, glossary_dir: &Path) -> Option<TermId> {
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            return None;
        }
        let parent = path.parent()?;
        if glossary_dir.as_os_str().is_empty() || !parent.ends_with(glossary_dir) {
            return None;
        }
        let id = TermId::new(path.file_stem()?.to_str()?);
        self.contains(&id).then_some(id)
    }

    /// Flat `(variant, id)` list, longest variant first
    ///
    /// Equal lengths keep authoring order.
    pub fn match_entries(&self) -> Vec<(&str, &TermId)> {
        let mut entries: Vec<(&str, &TermId)> = self
            .terms
            .iter()
            .flat_map(|t| t.variants.iter().map(move |v| (v.as_str(), &t.id)))
            .collect();
        entries.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
        entries
    }
}
