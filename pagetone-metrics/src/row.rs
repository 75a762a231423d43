//! The per-file metric row.

use serde::Serialize;

use crate::{
    exclamation_ratio, gender_balance, negative_polarity, readability_grade,
    second_person_ratio, Document, ProperNounPolicy,
};

/// One output row: a filename plus the fixed tuple of scores.
///
/// Field order here is the CSV schema - the serializer derives both the
/// header row and the column order from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub filename: String,
    pub readability: f64,
    pub negative_polarity: f64,
    pub exclamation_ratio: f64,
    pub second_person_ratio: f64,
    pub gender_balance: f64,
}

impl MetricRow {
    /// Compute every metric for one document's text.
    pub fn compute(filename: impl Into<String>, text: &str, policy: ProperNounPolicy) -> Self {
        let doc = Document::analyze(text);
        MetricRow {
            filename: filename.into(),
            readability: readability_grade(&doc, policy),
            negative_polarity: negative_polarity(&doc),
            exclamation_ratio: exclamation_ratio(&doc),
            second_person_ratio: second_person_ratio(&doc),
            gender_balance: gender_balance(&doc),
        }
    }
}
