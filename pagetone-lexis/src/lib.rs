//! Word-class resolvers for pagetone.
//!
//! This crate provides the tagging passes the metric layer reads from:
//!
//! - [`PronounResolver`] - tags personal pronouns with a person/gender class
//! - [`SentenceBoundaryResolver`] - marks end punctuation, filtering
//!   abbreviations ("Dr.", "e.g.")
//! - [`ProperNounResolver`] - marks capitalized words that do not open a
//!   sentence
//! - [`SentimentResolver`] - assigns a signed valence to lexicon words,
//!   flipping under nearby negation
//!
//! ## Usage
//!
//! ```
//! use pagetone::TokenLine;
//! use pagetone_lexis::{Pronoun, PronounResolver, SentenceBoundaryResolver};
//!
//! let line = TokenLine::from_text("You will love it here.")
//!     .run(&SentenceBoundaryResolver::new())
//!     .run(&PronounResolver);
//!
//! assert_eq!(line.attrs_by::<Pronoun>().len(), 2);
//! ```
//!
//! Each resolver is a word-list pass over the token line; none of them hold
//! state between lines. Resolvers that need earlier passes (proper nouns
//! need sentence boundaries) document that requirement.

mod pronoun;
mod proper_noun;
mod sentence_boundary;
mod sentiment;

pub use pronoun::{Pronoun, PronounClass, PronounResolver};
pub use proper_noun::{ProperNoun, ProperNounResolver};
pub use sentence_boundary::{SentenceBoundary, SentenceBoundaryResolver, SentenceConfidence};
pub use sentiment::{SentimentResolver, Valence};
