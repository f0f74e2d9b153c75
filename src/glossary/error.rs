//! Glossary error types

use super::term::TermId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a glossary or building its match index
#[derive(Debug, Error)]
pub enum GlossaryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported glossary format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Glossary page has no frontmatter: {}", .0.display())]
    MissingFrontmatter(PathBuf),

    #[error("Duplicate term: {0}")]
    DuplicateTerm(TermId),

    #[error("Term {term} has an empty match variant")]
    EmptyVariant { term: TermId },

    #[error("Invalid match pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for glossary operations
pub type GlossaryResult<T> = Result<T, GlossaryError>;
