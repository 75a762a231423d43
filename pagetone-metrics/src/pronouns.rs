//! Pronoun-based audience metrics.

use pagetone_lexis::{Pronoun, PronounClass};

use crate::Document;

/// Second-person pronoun tokens over all pronoun tokens.
///
/// Every pronoun token carries exactly one class, so a second-person word
/// contributes once to the numerator and once to the denominator. Returns
/// `0.0` when the document has no pronouns.
pub fn second_person_ratio(doc: &Document) -> f64 {
    let pronouns = doc.line().attrs_by::<Pronoun>();
    if pronouns.is_empty() {
        return 0.0;
    }
    let second = pronouns
        .iter()
        .filter(|(_, p)| p.0 == PronounClass::SecondPerson)
        .count();
    second as f64 / pronouns.len() as f64
}

/// Gendered-pronoun balance: `1 - |M-F| / (M+F)`.
///
/// `1.0` means perfectly balanced usage - vacuously so when the document
/// has no gendered pronouns at all.
pub fn gender_balance(doc: &Document) -> f64 {
    let pronouns = doc.line().attrs_by::<Pronoun>();
    let masculine = pronouns
        .iter()
        .filter(|(_, p)| p.0 == PronounClass::Masculine)
        .count() as f64;
    let feminine = pronouns
        .iter()
        .filter(|(_, p)| p.0 == PronounClass::Feminine)
        .count() as f64;
    if masculine + feminine == 0.0 {
        return 1.0;
    }
    1.0 - (masculine - feminine).abs() / (masculine + feminine)
}
