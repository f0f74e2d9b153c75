//! Common test utilities for annotator integration tests
//!
//! Shared dictionaries, tree inspection helpers and on-disk site fixtures.

#![allow(dead_code)]

pub mod site;

pub use site::{write_file, TestSite};

use glossa::annotate::{annotated_term, is_annotation};
use glossa::{Annotator, AnnotatorConfig, Dictionary, Element, Node, Term, TermId};

/// The editorial glossary used across scenarios
pub fn sample_terms() -> Vec<Term> {
    vec![
        Term::new("seo", "SEO", "Search Engine Optimization")
            .with_variants(["SEO", "referencement naturel"]),
        Term::new("cms", "CMS", "Content Management System"),
        Term::new("referencement", "Referencement", "Positionnement dans les moteurs")
            .with_variants(["referencement"]),
        Term::new("api", "API", "Application Programming Interface").with_variants(["API", "APIs"]),
        Term::new("hebergement", "Hébergement", "Mise à disposition d'un serveur")
            .with_variants(["hébergement", "hébergeur"]),
    ]
}

pub fn sample_annotator() -> Annotator {
    annotator_for(sample_terms(), AnnotatorConfig::default())
}

pub fn annotator_for(terms: Vec<Term>, config: AnnotatorConfig) -> Annotator {
    let dictionary = Dictionary::new(terms).expect("valid dictionary");
    Annotator::new(dictionary, config).expect("valid match index")
}

/// Ten single-variant terms: `alpha` .. `kappa`
pub fn greek_terms() -> Vec<Term> {
    GREEK
        .iter()
        .map(|word| Term::new(*word, *word, format!("Definition of {}", word)))
        .collect()
}

pub const GREEK: [&str; 10] = [
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
];

/// Terms carried by annotation nodes, in tree order
pub fn annotations(root: &Element) -> Vec<TermId> {
    let mut found = Vec::new();
    collect_annotations(&root.children, &mut found);
    found
}

fn collect_annotations(nodes: &[Node], found: &mut Vec<TermId>) {
    for node in nodes {
        if let Node::Element(el) = node {
            match annotated_term(el) {
                Some(term) => found.push(term),
                None => collect_annotations(&el.children, found),
            }
        }
    }
}

/// True when an opaque element (other than an annotation) holds an annotation
pub fn annotation_inside_opaque(nodes: &[Node]) -> bool {
    nodes.iter().any(|node| match node {
        Node::Element(el) if is_annotation(el) => false,
        Node::Element(el) if el.tag.is_opaque() => !annotations(el).is_empty(),
        Node::Element(el) => annotation_inside_opaque(&el.children),
        _ => false,
    })
}
