//! Negative-polarity average.

use crate::Document;

/// Mean polarity over the document's negative sentences only.
///
/// Flags documents containing negative language even when it is diluted by
/// neutral or positive sentences elsewhere. Returns `0.0` when no sentence
/// scores negative.
pub fn negative_polarity(doc: &Document) -> f64 {
    let negatives: Vec<f64> = doc
        .sentences()
        .iter()
        .map(|s| s.polarity)
        .filter(|p| *p < 0.0)
        .collect();
    if negatives.is_empty() {
        return 0.0;
    }
    negatives.iter().sum::<f64>() / negatives.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_without_negative_sentences() {
        let doc = Document::analyze("We love this friendly campus. It is great.");
        assert_eq!(negative_polarity(&doc), 0.0);
    }

    #[test]
    fn zero_for_empty_text() {
        assert_eq!(negative_polarity(&Document::analyze("")), 0.0);
    }

    #[test]
    fn averages_only_the_negative_sentences() {
        // "terrible" scores -0.9; "great" scores 0.8 and is excluded
        let doc = Document::analyze("The food was terrible. The staff was great.");
        assert!((negative_polarity(&doc) - -0.9).abs() < 1e-12);
    }

    #[test]
    fn dilution_does_not_hide_negativity() {
        let doc = Document::analyze(
            "Fine day. Fine day. Fine day. The outcome was awful. Fine day.",
        );
        assert!(negative_polarity(&doc) < 0.0);
    }
}
