//! Content source: loading term records from disk
//!
//! A glossary is either a single YAML/JSON file (a bare list of terms or a
//! `terms:` mapping) or a directory of glossary pages whose YAML frontmatter
//! holds one term record each.

use super::dictionary::Dictionary;
use super::error::{GlossaryError, GlossaryResult};
use super::term::Term;
use crate::tree::split_frontmatter;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

#[derive(Deserialize)]
#[serde(untagged)]
enum GlossaryDocument {
    Listed { terms: Vec<Term> },
    Bare(Vec<Term>),
}

impl GlossaryDocument {
    fn into_terms(self) -> Vec<Term> {
        match self {
            Self::Listed { terms } | Self::Bare(terms) => terms,
        }
    }
}

/// Parse a YAML glossary document
pub fn terms_from_yaml(yaml: &str) -> GlossaryResult<Vec<Term>> {
    let doc: GlossaryDocument = serde_yaml::from_str(yaml)?;
    Ok(doc.into_terms())
}

/// Parse a JSON glossary document
pub fn terms_from_json(json: &str) -> GlossaryResult<Vec<Term>> {
    let doc: GlossaryDocument = serde_json::from_str(json)?;
    Ok(doc.into_terms())
}

/// Parse the frontmatter of one glossary page into a term record
pub fn term_from_page(path: &Path, content: &str) -> GlossaryResult<Term> {
    let (frontmatter, _body) = split_frontmatter(content);
    let frontmatter =
        frontmatter.ok_or_else(|| GlossaryError::MissingFrontmatter(path.to_path_buf()))?;
    Ok(serde_yaml::from_str(frontmatter)?)
}

/// Load and validate a dictionary from a file or a directory of pages
pub fn load_dictionary(path: &Path) -> GlossaryResult<Dictionary> {
    let terms = if path.is_dir() {
        load_pages(path)?
    } else {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => terms_from_yaml(&content)?,
            Some("json") => terms_from_json(&content)?,
            _ => return Err(GlossaryError::UnsupportedFormat(path.to_path_buf())),
        }
    };

    debug!(path = %path.display(), terms = terms.len(), "loaded glossary");
    Dictionary::new(terms)
}

fn load_pages(dir: &Path) -> GlossaryResult<Vec<Term>> {
    let mut pages = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().and_then(|e| e.to_str()) == Some("md")
        {
            let content = std::fs::read_to_string(path)?;
            pages.push(term_from_page(path, &content)?);
        }
    }
    Ok(pages)
}
