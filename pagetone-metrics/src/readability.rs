//! Consensus readability grade.
//!
//! Computes the standard length-based readability formulas over the
//! document's word, sentence, letter, and syllable counts, then reports
//! the most frequent rounded grade among them. Individual formulas are
//! clamped to grade zero before rounding; ties resolve to the lower grade.

use std::collections::{BTreeMap, HashSet};

use pagetone::TokenKind;
use pagetone_lexis::ProperNoun;

use crate::Document;

/// Whether readability statistics exclude proper nouns.
///
/// Stripping reconstructs each sentence's statistics from its remaining
/// words, so documents full of long personal or place names are not
/// penalized for them. Sentence counts and terminal punctuation are
/// unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProperNounPolicy {
    #[default]
    Keep,
    Strip,
}

/// Consensus grade-level estimate for the document.
///
/// Returns `0.0` for documents with no words.
pub fn readability_grade(doc: &Document, policy: ProperNounPolicy) -> f64 {
    let stats = TextStats::gather(doc, policy);
    if stats.words == 0 || stats.sentences == 0 {
        return 0.0;
    }
    let grades = [
        stats.flesch_kincaid(),
        stats.automated_readability(),
        stats.coleman_liau(),
        stats.smog(),
        stats.gunning_fog(),
    ];
    consensus(&grades)
}

struct TextStats {
    words: usize,
    sentences: usize,
    letters: usize,
    syllables: usize,
    polysyllables: usize,
}

impl TextStats {
    fn gather(doc: &Document, policy: ProperNounPolicy) -> Self {
        let stripped: HashSet<usize> = match policy {
            ProperNounPolicy::Keep => HashSet::new(),
            ProperNounPolicy::Strip => doc
                .line()
                .attrs_by::<ProperNoun>()
                .into_iter()
                .map(|(span, _)| span.start)
                .collect(),
        };

        let mut stats = TextStats {
            words: 0,
            sentences: doc.sentences().len(),
            letters: 0,
            syllables: 0,
            polysyllables: 0,
        };
        for sentence in doc.sentences() {
            for idx in sentence.span.indices() {
                let token = &doc.line().tokens()[idx];
                if !matches!(token.kind(), TokenKind::Word | TokenKind::Number) {
                    continue;
                }
                if stripped.contains(&idx) {
                    continue;
                }
                let syllable_count = syllables(token.text());
                stats.words += 1;
                stats.letters += token.text().chars().filter(|c| c.is_alphanumeric()).count();
                stats.syllables += syllable_count;
                if syllable_count >= 3 {
                    stats.polysyllables += 1;
                }
            }
        }
        stats
    }

    fn words_per_sentence(&self) -> f64 {
        self.words as f64 / self.sentences as f64
    }

    fn flesch_kincaid(&self) -> f64 {
        0.39 * self.words_per_sentence() + 11.8 * (self.syllables as f64 / self.words as f64)
            - 15.59
    }

    fn automated_readability(&self) -> f64 {
        4.71 * (self.letters as f64 / self.words as f64) + 0.5 * self.words_per_sentence()
            - 21.43
    }

    fn coleman_liau(&self) -> f64 {
        let letters_per_100 = 100.0 * self.letters as f64 / self.words as f64;
        let sentences_per_100 = 100.0 * self.sentences as f64 / self.words as f64;
        0.0588 * letters_per_100 - 0.296 * sentences_per_100 - 15.8
    }

    fn smog(&self) -> f64 {
        1.043 * (30.0 * self.polysyllables as f64 / self.sentences as f64).sqrt() + 3.1291
    }

    fn gunning_fog(&self) -> f64 {
        0.4 * (self.words_per_sentence()
            + 100.0 * self.polysyllables as f64 / self.words as f64)
    }
}

/// Most frequent rounded grade; ties go to the lower grade.
fn consensus(grades: &[f64]) -> f64 {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for grade in grades {
        let rounded = grade.max(0.0).round() as i64;
        *counts.entry(rounded).or_default() += 1;
    }
    let mut best_grade = 0i64;
    let mut best_count = 0usize;
    for (&grade, &count) in &counts {
        if count > best_count {
            best_grade = grade;
            best_count = count;
        }
    }
    best_grade as f64
}

/// Heuristic syllable count: vowel groups, with a silent final "e"
/// subtracted, and a floor of one.
fn syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    let mut count = 0usize;
    let mut prev_was_vowel = false;
    for c in lower.chars() {
        let is_vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !prev_was_vowel {
            count += 1;
        }
        prev_was_vowel = is_vowel;
    }
    if lower.ends_with('e') && !lower.ends_with("le") && count > 1 {
        count -= 1;
    }
    count.max(1)
}
