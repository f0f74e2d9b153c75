//! Annotation pass properties over parsed markdown
//!
//! Scenario checks for the documented behaviors, then seeded randomized
//! documents checking the cap, first-occurrence, self-exclusion and
//! structural-exclusion properties together, plus what a second pass over
//! annotated output may and may not change.

mod common;

use common::{
    annotation_inside_opaque, annotations, annotator_for, greek_terms, sample_annotator, GREEK,
};
use glossa::{parse_markdown, render_html, AnnotatorConfig, Term, TermId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

fn ids(terms: &[&str]) -> Vec<TermId> {
    terms.iter().map(|t| TermId::new(*t)).collect()
}

#[test]
fn test_first_occurrence_scenario() {
    let annotator = annotator_for(
        vec![
            Term::new("seo", "SEO", "Search Engine Optimization"),
            Term::new("cms", "CMS", "Content Management System"),
        ],
        AnnotatorConfig::default(),
    );
    let (html, outcome) =
        annotator.render_markdown("Le SEO et le CMS sont liés. Le SEO reste clé.", None);

    let seo = "<a href=\"/glossaire/seo\" class=\"glossary-tooltip\" data-glossary=\"seo\">SEO\
               <span class=\"glossary-tooltip-content\" role=\"tooltip\" aria-hidden=\"true\">\
               <strong class=\"glossary-tooltip-title\">SEO</strong>\
               <span class=\"glossary-tooltip-def\">Search Engine Optimization</span></span></a>";
    let cms = "<a href=\"/glossaire/cms\" class=\"glossary-tooltip\" data-glossary=\"cms\">CMS\
               <span class=\"glossary-tooltip-content\" role=\"tooltip\" aria-hidden=\"true\">\
               <strong class=\"glossary-tooltip-title\">CMS</strong>\
               <span class=\"glossary-tooltip-def\">Content Management System</span></span></a>";
    assert_eq!(
        html,
        format!(
            "<p>Le {} et le {} sont liés. Le SEO reste clé.</p>",
            seo, cms
        )
    );
    assert_eq!(outcome.terms, ids(&["seo", "cms"]));
}

#[test]
fn test_cap_with_ten_terms_in_one_paragraph() {
    let annotator = annotator_for(greek_terms(), AnnotatorConfig::default());
    // Written in match order (longest first, then dictionary order)
    let mut root = parse_markdown("epsilon alpha gamma delta theta kappa beta zeta iota eta");
    let outcome = annotator.annotate(&mut root, None);

    assert_eq!(
        outcome.terms,
        ids(&["epsilon", "alpha", "gamma", "delta", "theta", "kappa", "beta", "zeta"])
    );
    assert_eq!(annotations(&root), outcome.terms);
    assert!(render_html(&root).ends_with("</a> iota eta</p>"));
}

#[test]
fn test_longer_term_consumes_text_before_it() {
    let annotator = annotator_for(greek_terms(), AnnotatorConfig::default());
    let (_, outcome) = annotator.render_markdown(&GREEK.join(" "), None);
    // epsilon is tried first; only what follows it stays searchable
    assert_eq!(outcome.terms, ids(&["epsilon", "theta", "kappa"]));
}

#[test]
fn test_cap_follows_reading_order_across_paragraphs() {
    let annotator = annotator_for(greek_terms(), AnnotatorConfig::default());
    let markdown: String = GREEK.iter().map(|w| format!("Un {}.\n\n", w)).collect();
    let mut root = parse_markdown(&markdown);
    annotator.annotate(&mut root, None);

    assert_eq!(annotations(&root), ids(&GREEK[..8]));
    let html = render_html(&root);
    assert!(html.ends_with("<p>Un iota.</p><p>Un kappa.</p>"));
}

#[test]
fn test_custom_cap() {
    let annotator = annotator_for(
        greek_terms(),
        AnnotatorConfig::default().with_max_annotations(3),
    );
    let (_, outcome) = annotator.render_markdown(&GREEK.join(", "), None);
    assert_eq!(outcome.count(), 3);

    let markdown: String = GREEK.iter().map(|w| format!("- {}\n", w)).collect();
    let (_, outcome) = annotator.render_markdown(&markdown, None);
    assert_eq!(outcome.terms, ids(&GREEK[..3]));
}

#[test]
fn test_longest_match_precedence() {
    let annotator = sample_annotator();
    let (html, outcome) =
        annotator.render_markdown("Le referencement naturel est utile.", None);
    assert_eq!(outcome.terms, ids(&["seo"]));
    assert!(html.contains("data-glossary=\"seo\">referencement naturel<span"));
    assert!(!html.contains("data-glossary=\"referencement\""));
}

#[test]
fn test_self_exclusion() {
    let annotator = sample_annotator();
    let source = Path::new("site/content/glossaire/cms.md");
    let markdown = "---\nslug: cms\ntitle: CMS\n---\n\nUn CMS sert le SEO.\n";
    let (html, outcome) = annotator.render_markdown(markdown, Some(source));

    assert_eq!(outcome.self_term, Some(TermId::new("cms")));
    assert_eq!(outcome.terms, ids(&["seo"]));
    assert!(!html.contains("data-glossary=\"cms\""));
    assert!(!html.contains("slug:"));
}

#[test]
fn test_page_outside_glossary_dir_is_not_self() {
    let annotator = sample_annotator();
    let (_, outcome) =
        annotator.render_markdown("Un CMS.", Some(Path::new("content/blog/cms.md")));
    assert_eq!(outcome.self_term, None);
    assert_eq!(outcome.terms, ids(&["cms"]));
}

#[test]
fn test_structural_exclusion() {
    let annotator = sample_annotator();
    let markdown = r#"# Le SEO

[Un CMS](/outils) et `API` dans le texte.

```
referencement
```

<div>Notre hébergeur</div>

Voir <a href="/x">le SEO</a> et <code>CMS</code> ou <svg><text>APIs</text></svg>.
"#;
    let mut root = parse_markdown(markdown);
    let before = root.clone();
    let outcome = annotator.annotate(&mut root, None);

    assert_eq!(outcome.count(), 0);
    assert_eq!(root, before);
}

#[test]
fn test_inline_html_containers_are_descended() {
    let annotator = sample_annotator();
    let (html, outcome) = annotator.render_markdown(
        "Voir <a href=\"/x\">le SEO</a> puis <span class=\"note\">un CMS</span>.",
        None,
    );
    assert_eq!(outcome.terms, ids(&["cms"]));
    assert!(html.starts_with("<p>Voir <a href=\"/x\">le SEO</a> puis <span class=\"note\">un <a "));
    assert!(!html.contains("<a href=\"/x\">le <a"));
}

#[test]
fn test_variants_with_accents_and_plural() {
    let annotator = sample_annotator();
    let (html, outcome) =
        annotator.render_markdown("L'hébergement et les APIs du site.", None);
    assert_eq!(outcome.terms, ids(&["hebergement", "api"]));
    assert!(html.contains("data-glossary=\"api\">APIs<span"));
    assert!(html.contains("data-glossary=\"hebergement\">hébergement<span"));
}

#[test]
fn test_idempotent_second_pass() {
    let annotator = sample_annotator();
    let markdown = "\
Le SEO et le CMS. Une API.

## Hébergement

Un hébergeur, encore du SEO.
";
    let mut root = parse_markdown(markdown);
    annotator.annotate(&mut root, None);
    let once = render_html(&root);

    let outcome = annotator.annotate(&mut root, None);
    assert!(outcome.terms.is_empty());
    assert_eq!(render_html(&root), once);
}

#[test]
fn test_second_pass_only_claims_terms_left_unmatched() {
    // "hébergeur" sits before the longer "referencement" in one text node,
    // so the first pass never reaches it; a later pass sees it on its own
    let annotator = sample_annotator();
    let mut root = parse_markdown("Un hébergeur aide le referencement.");
    let first = annotator.annotate(&mut root, None);
    assert_eq!(first.terms, ids(&["referencement"]));

    let second = annotator.annotate(&mut root, None);
    assert_eq!(second.terms, ids(&["hebergement"]));
    assert_eq!(annotations(&root), ids(&["hebergement", "referencement"]));

    let settled = render_html(&root);
    assert!(annotator.annotate(&mut root, None).terms.is_empty());
    assert_eq!(render_html(&root), settled);
}

const FILLER: [&str; 8] = ["le", "texte", "avec", "pour", "un", "site", "et", "nous"];

fn random_word(rng: &mut StdRng) -> String {
    let word = if rng.gen_bool(0.4) {
        *GREEK.choose(rng).unwrap()
    } else {
        *FILLER.choose(rng).unwrap()
    };
    match rng.gen_range(0..3) {
        0 => word.to_uppercase(),
        1 => {
            let mut chars = word.chars();
            let first = chars.next().unwrap().to_uppercase().to_string();
            first + chars.as_str()
        }
        _ => word.to_string(),
    }
}

fn random_words(rng: &mut StdRng, max: usize) -> String {
    let len = rng.gen_range(1..=max);
    (0..len)
        .map(|_| random_word(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

fn random_document(rng: &mut StdRng) -> String {
    let mut blocks = Vec::new();
    for _ in 0..rng.gen_range(1..8) {
        let block = match rng.gen_range(0..6) {
            0 => format!("## {}", random_words(rng, 4)),
            1 => format!("```\n{}\n```", random_words(rng, 6)),
            2 => format!(
                "{} [{}](/lien) {}",
                random_words(rng, 5),
                random_words(rng, 3),
                random_words(rng, 5)
            ),
            3 => format!(
                "{} `{}` *{}*",
                random_words(rng, 5),
                random_words(rng, 2),
                random_words(rng, 4)
            ),
            4 => format!(
                "{} <a href=\"/x\">{}</a> <code>{}</code> <span>{}</span>",
                random_words(rng, 4),
                random_words(rng, 3),
                random_words(rng, 2),
                random_words(rng, 3)
            ),
            _ => random_words(rng, 15),
        };
        blocks.push(block);
    }
    blocks.join("\n\n")
}

#[test]
fn test_randomized_invariants() {
    let mut rng = StdRng::seed_from_u64(0x6c05_5a);

    for _ in 0..200 {
        let cap = rng.gen_range(1..=10);
        let annotator = annotator_for(
            greek_terms(),
            AnnotatorConfig::default().with_max_annotations(cap),
        );
        let source: Option<PathBuf> = if rng.gen_bool(0.5) {
            let slug = GREEK.choose(&mut rng).unwrap();
            Some(PathBuf::from(format!("content/glossaire/{}.md", slug)))
        } else {
            None
        };

        let markdown = random_document(&mut rng);
        let mut root = parse_markdown(&markdown);
        let outcome = annotator.annotate(&mut root, source.as_deref());
        let found = annotations(&root);

        assert!(found.len() <= cap, "cap exceeded for {:?}", markdown);
        let unique: HashSet<_> = found.iter().collect();
        assert_eq!(unique.len(), found.len(), "term annotated twice");
        assert_eq!(
            unique,
            outcome.terms.iter().collect::<HashSet<_>>(),
            "outcome disagrees with tree"
        );
        if let Some(self_term) = &outcome.self_term {
            assert!(!found.contains(self_term), "self term annotated");
        }
        assert!(!annotation_inside_opaque(&root.children));

        // A second pass keeps every annotation, adds only terms the first
        // pass left unmatched, and stays within the cap
        let once = render_html(&root);
        let again = annotator.annotate(&mut root, source.as_deref());
        let after = annotations(&root);
        assert!(after.len() <= cap);
        assert!(again.terms.iter().all(|t| !unique.contains(t)));
        assert!(found.iter().all(|t| after.contains(t)));
        let distinct: HashSet<_> = after.iter().collect();
        assert_eq!(distinct.len(), after.len(), "term annotated twice");
        if again.terms.is_empty() {
            assert_eq!(render_html(&root), once);
        }
    }
}
