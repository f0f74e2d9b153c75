//! Site build: annotate every markdown document of a content tree
//!
//! Documents are independent, so each one is rendered on its own blocking
//! task with a clone of the shared annotator and a fresh per-document state.

use crate::annotate::{AnnotationOutcome, Annotator};
use crate::glossary::{GlossaryError, TermId};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Errors that can occur during a site build
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Render task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("Glossary error: {0}")]
    Glossary(#[from] GlossaryError),
}

/// Result type for build operations
pub type BuildResult<T> = Result<T, BuildError>;

/// One rendered document
#[derive(Debug, Clone)]
pub struct DocumentReport {
    pub source: PathBuf,
    pub output: PathBuf,
    pub outcome: AnnotationOutcome,
}

/// What a build produced
#[derive(Debug, Clone, Default)]
pub struct BuildSummary {
    /// Rendered documents, sorted by source path
    pub documents: Vec<DocumentReport>,
    /// Number of documents each term was annotated in
    pub per_term: BTreeMap<TermId, usize>,
}

impl BuildSummary {
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn annotation_count(&self) -> usize {
        self.documents.iter().map(|d| d.outcome.count()).sum()
    }

    fn record(&mut self, report: DocumentReport) {
        for term in &report.outcome.terms {
            *self.per_term.entry(term.clone()).or_insert(0) += 1;
        }
        self.documents.push(report);
    }
}

/// Markdown documents under `root`, sorted by path
pub fn discover_documents(root: &Path) -> BuildResult<Vec<PathBuf>> {
    let mut documents = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry.path().extension().and_then(|e| e.to_str()) == Some("md")
        {
            documents.push(entry.into_path());
        }
    }
    Ok(documents)
}

/// Annotate one document and write it as `<output>/<relative>.html`
pub fn render_document(
    annotator: &Annotator,
    input_root: &Path,
    output_root: &Path,
    source: &Path,
) -> BuildResult<DocumentReport> {
    let markdown = std::fs::read_to_string(source)?;
    let (html, outcome) = annotator.render_markdown(&markdown, Some(source));

    let relative = source.strip_prefix(input_root).unwrap_or(source);
    let output = output_root.join(relative).with_extension("html");
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&output, html)?;

    debug!(
        source = %source.display(),
        annotations = outcome.count(),
        "rendered document"
    );
    Ok(DocumentReport {
        source: source.to_path_buf(),
        output,
        outcome,
    })
}

/// Render every markdown document under `input` into `output`
pub async fn build_site(
    input: &Path,
    output: &Path,
    annotator: &Annotator,
) -> BuildResult<BuildSummary> {
    let sources = discover_documents(input)?;
    if sources.is_empty() {
        warn!(input = %input.display(), "no markdown documents found");
    }

    let mut tasks = JoinSet::new();
    for source in sources {
        let annotator = annotator.clone();
        let input = input.to_path_buf();
        let output = output.to_path_buf();
        tasks.spawn_blocking(move || render_document(&annotator, &input, &output, &source));
    }

    let mut summary = BuildSummary::default();
    while let Some(joined) = tasks.join_next().await {
        summary.record(joined??);
    }
    summary.documents.sort_by(|a, b| a.source.cmp(&b.source));

    info!(
        documents = summary.document_count(),
        annotations = summary.annotation_count(),
        "build complete"
    );
    Ok(summary)
}
