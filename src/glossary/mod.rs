//! Glossary terms and their loading
//!
//! The dictionary is hand-authored content: an ordered list of terms, each
//! with a slug, a title, a short definition and the literal variants under
//! which it appears in prose. It is immutable once loaded.

mod dictionary;
mod error;
mod source;
mod term;

pub use dictionary::Dictionary;
pub use error::{GlossaryError, GlossaryResult};
pub use source::{load_dictionary, term_from_page, terms_from_json, terms_from_yaml};
pub use term::{Category, Difficulty, Term, TermId};
