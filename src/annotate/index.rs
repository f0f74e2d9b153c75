//! Match index: one compiled matcher per term variant
//!
//! Built once from the dictionary and read-only afterwards, so a single
//! index can be shared by any number of concurrent document passes.

use crate::glossary::{Dictionary, GlossaryResult, TermId};
use regex::{Regex, RegexBuilder};

/// Matcher for one variant of one term
#[derive(Debug, Clone)]
pub struct MatchRule {
    pub term: TermId,
    pub title: String,
    pub short_definition: String,
    /// The literal variant this rule matches
    pub variant: String,
    pattern: Regex,
}

impl MatchRule {
    /// Compile a case-insensitive, word-bounded literal matcher
    ///
    /// The variant is escaped, so regex metacharacters in authored terms
    /// match literally.
    pub fn new(
        term: TermId,
        title: impl Into<String>,
        short_definition: impl Into<String>,
        variant: impl Into<String>,
    ) -> GlossaryResult<Self> {
        let variant = variant.into();
        let pattern = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(&variant)))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            term,
            title: title.into(),
            short_definition: short_definition.into(),
            variant,
            pattern,
        })
    }

    /// Leftmost match in `text` as a byte range
    pub fn find(&self, text: &str) -> Option<std::ops::Range<usize>> {
        self.pattern.find(text).map(|m| m.range())
    }

    fn variant_len(&self) -> usize {
        self.variant.chars().count()
    }
}

/// All match rules, longest variant first
///
/// Equal lengths keep dictionary order (terms in authoring order, then
/// each term's variants in order), so resolution is reproducible.
#[derive(Debug, Clone, Default)]
pub struct MatchIndex {
    rules: Vec<MatchRule>,
}

impl MatchIndex {
    pub fn build(dictionary: &Dictionary) -> GlossaryResult<Self> {
        let mut rules = Vec::new();
        for term in dictionary.terms() {
            for variant in &term.variants {
                rules.push(MatchRule::new(
                    term.id.clone(),
                    &term.title,
                    &term.short_definition,
                    variant,
                )?);
            }
        }
        // Stable: ties stay in dictionary order
        rules.sort_by(|a, b| b.variant_len().cmp(&a.variant_len()));
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[MatchRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
