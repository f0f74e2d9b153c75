//! Glossary term records

use serde::{Deserialize, Serialize};

/// Canonical identifier of a term (its slug)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermId(String);

impl TermId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TermId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TermId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for TermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

/// Editorial category of a term
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    General,
    Technique,
    Finance,
    Legal,
}

/// Reader level a term page is written for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Debutant,
    Intermediaire,
    Avance,
}

/// A glossary entry: one concept with its literal surface forms
///
/// Field names follow the content schema of the glossary pages
/// (`slug`, `shortDefinition`, `matches`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    /// Canonical identifier, also the last segment of the term's page URL
    #[serde(rename = "slug")]
    pub id: TermId,
    /// Display title shown in the tooltip
    pub title: String,
    /// One or two sentence definition shown in the tooltip
    pub short_definition: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub related_terms: Vec<TermId>,
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Literal text forms matched case-insensitively on word boundaries.
    /// Empty means "match the title".
    #[serde(rename = "matches", default)]
    pub variants: Vec<String>,
}

impl Term {
    /// Create a term whose only variant is its title
    pub fn new(
        id: impl Into<TermId>,
        title: impl Into<String>,
        short_definition: impl Into<String>,
    ) -> Self {
        let title = title.into();
        Self {
            id: id.into(),
            variants: vec![title.clone()],
            title,
            short_definition: short_definition.into(),
            category: Category::default(),
            related_terms: Vec::new(),
            difficulty: Difficulty::default(),
        }
    }

    /// Replace the variant list
    pub fn with_variants<I, S>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants = variants.into_iter().map(Into::into).collect();
        self
    }
}
