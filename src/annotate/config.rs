//! Annotator configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default cap on tooltips per document
pub const DEFAULT_MAX_ANNOTATIONS: usize = 8;

/// Configuration shared by every document pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorConfig {
    /// Maximum number of annotation nodes per document
    pub max_annotations: usize,
    /// Prefix of a term's canonical page; the slug is appended
    pub href_prefix: String,
    /// Directory whose `<slug>.md` documents each describe one term
    pub glossary_dir: PathBuf,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotatorConfig {
    pub fn new() -> Self {
        Self {
            max_annotations: DEFAULT_MAX_ANNOTATIONS,
            href_prefix: "/glossaire/".to_string(),
            glossary_dir: PathBuf::from("content/glossaire"),
        }
    }

    pub fn with_max_annotations(mut self, max: usize) -> Self {
        self.max_annotations = max;
        self
    }

    pub fn with_href_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.href_prefix = prefix.into();
        self
    }

    pub fn with_glossary_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.glossary_dir = dir.into();
        self
    }

    /// Canonical page of a term
    pub fn term_href(&self, slug: &str) -> String {
        format!("{}{}", self.href_prefix, slug)
    }
}
