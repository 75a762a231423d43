//! Sentence boundary detection resolver.
//!
//! Marks tokens that end a sentence using punctuation patterns:
//! period, question mark, exclamation point. Tokens that terminate common
//! abbreviations ("Dr.", "Inc.", "e.g.") are filtered out so they do not
//! produce false boundaries.

use std::collections::HashSet;

use pagetone::{Assignment, Resolver, Span, TokenKind, TokenLine};

/// A detected sentence boundary.
#[derive(Clone, PartialEq, Eq)]
pub struct SentenceBoundary {
    pub confidence: SentenceConfidence,
}

impl std::fmt::Debug for SentenceBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SentenceBoundary({:?})", self.confidence)
    }
}

/// Confidence level for a detected sentence boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceConfidence {
    /// Clear boundary (end punctuation + capital letter follows)
    High,
    /// Probable boundary (end punctuation at end of input)
    Medium,
    /// Possible boundary (lowercase continuation follows)
    Low,
}

/// Is `text` one of the recognized sentence-ending marks?
pub fn is_end_punctuation(text: &str) -> bool {
    matches!(text, "." | "?" | "!")
}

/// Resolver for detecting sentence boundaries in text.
pub struct SentenceBoundaryResolver {
    abbreviations: HashSet<String>,
}

impl SentenceBoundaryResolver {
    pub fn new() -> Self {
        let mut abbreviations = HashSet::new();

        // Common abbreviations that should NOT be treated as sentence boundaries
        let common_abbrevs = [
            "dr", "mr", "mrs", "ms", "prof", "sr", "jr",
            "inc", "ltd", "corp", "co", "llc",
            "e.g", "i.e", "vs", "etc", "approx",
            "u.s", "u.k", "p.m", "a.m",
            "st", "ave", "blvd", "dept", "fig",
        ];

        for abbrev in &common_abbrevs {
            abbreviations.insert(abbrev.to_string());
        }

        SentenceBoundaryResolver { abbreviations }
    }

    pub fn with_custom_abbreviations(mut self, abbreviations: &[&str]) -> Self {
        for abbrev in abbreviations {
            self.abbreviations.insert(abbrev.to_lowercase());
        }
        self
    }

    fn is_abbreviation(&self, text: &str) -> bool {
        // Remove trailing period if present and check
        let normalized = text.trim_end_matches('.').to_lowercase();
        self.abbreviations.contains(&normalized)
    }

    fn starts_with_uppercase(text: &str) -> bool {
        text.chars().next().map_or(false, |c| c.is_uppercase())
    }
}

impl Default for SentenceBoundaryResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver for SentenceBoundaryResolver {
    type Attr = SentenceBoundary;

    fn go(&self, line: &TokenLine) -> Vec<Assignment<Self::Attr>> {
        let tokens = line.tokens();
        let mut assignments = Vec::new();

        for (idx, token) in tokens.iter().enumerate() {
            if token.kind() != TokenKind::Punct || !is_end_punctuation(token.text()) {
                continue;
            }

            // Check if this period closes an abbreviation
            let previous_word = tokens[..idx]
                .iter()
                .rev()
                .find(|t| t.kind() != TokenKind::Space);
            if token.text() == "." {
                if let Some(prev) = previous_word {
                    if self.is_abbreviation(prev.text()) {
                        continue;
                    }
                }
            }

            // Confidence comes from the first word after the punctuation
            let next_word = tokens[idx + 1..]
                .iter()
                .find(|t| t.kind() == TokenKind::Word);
            let confidence = match next_word {
                Some(word) => {
                    if Self::starts_with_uppercase(word.text()) {
                        SentenceConfidence::High
                    } else {
                        SentenceConfidence::Low
                    }
                }
                None => SentenceConfidence::Medium,
            };

            assignments.push(Assignment::new(
                Span::single(idx),
                SentenceBoundary { confidence },
            ));
        }

        assignments
    }
}
