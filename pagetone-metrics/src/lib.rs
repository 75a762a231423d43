//! Per-document tone and readability metrics.
//!
//! This crate is the metric-computation layer: given one document's text it
//! produces the fixed tuple of scores written to the output CSV.
//!
//! ## Pipeline
//!
//! [`Document::analyze`] tokenizes the text and runs the
//! `pagetone-lexis` resolvers, then segments sentences. The five metrics
//! are pure functions over the resulting [`Document`]:
//!
//! - [`readability_grade`] - consensus grade level from standard
//!   length-based formulas, optionally excluding proper nouns
//! - [`negative_polarity`] - mean polarity over negative sentences only
//! - [`exclamation_ratio`] - of end-punctuated sentences, the fraction
//!   ending in `!`
//! - [`second_person_ratio`] - second-person pronouns over all pronouns
//! - [`gender_balance`] - `1 - |M-F|/(M+F)` over gendered pronouns
//!
//! Every metric has a defined neutral value for degenerate input (empty
//! text, no sentences, no pronouns) and never panics.
//!
//! ## Usage
//!
//! ```
//! use pagetone_metrics::{MetricRow, ProperNounPolicy};
//!
//! let row = MetricRow::compute("page.txt", "You will love it here!", ProperNounPolicy::Keep);
//! assert_eq!(row.exclamation_ratio, 1.0);
//! ```

mod document;
mod polarity;
mod pronouns;
mod punctuation;
mod readability;
mod row;

pub use document::{Document, Sentence};
pub use polarity::negative_polarity;
pub use pronouns::{gender_balance, second_person_ratio};
pub use punctuation::exclamation_ratio;
pub use readability::{readability_grade, ProperNounPolicy};
pub use row::MetricRow;
