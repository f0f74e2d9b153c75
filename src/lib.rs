//! Glossa: build-time glossary tooltips for markdown content
//!
//! Given a parsed document and a dictionary of terms, rewrites the first
//! occurrence of each term into a link to its glossary page with an embedded
//! CSS tooltip holding the term's short definition.
//!
//! # Core Concepts
//!
//! - **Dictionary**: ordered, hand-authored glossary terms and their variants
//! - **Match index**: one case-insensitive, word-bounded matcher per variant,
//!   longest first, built once and shared read-only
//! - **Annotation pass**: a pre-order walk of one document with its own
//!   fresh state (matched terms, tooltip count, the document's own term)
//!
//! # Example
//!
//! ```
//! use glossa::{parse_markdown, render_html, Annotator, AnnotatorConfig, Dictionary, Term};
//!
//! let dictionary = Dictionary::new(vec![
//!     Term::new("cms", "CMS", "Content Management System"),
//! ])
//! .unwrap();
//! let annotator = Annotator::new(dictionary, AnnotatorConfig::default()).unwrap();
//!
//! let mut root = parse_markdown("Choisir un CMS.");
//! let outcome = annotator.annotate(&mut root, None);
//! assert_eq!(outcome.count(), 1);
//! assert!(render_html(&root).contains("class=\"glossary-tooltip\""));
//! ```

pub mod annotate;
pub mod build;
pub mod glossary;
pub mod tree;

pub use annotate::{
    AnnotationOutcome, AnnotationState, Annotator, AnnotatorConfig, MatchIndex, MatchRule, Phase,
};
pub use build::{build_site, BuildError, BuildResult, BuildSummary, DocumentReport};
pub use glossary::{
    load_dictionary, Category, Dictionary, Difficulty, GlossaryError, GlossaryResult, Term,
    TermId,
};
pub use tree::{parse_markdown, render_html, Attributes, Element, Node, TagKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
