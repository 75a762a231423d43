//! Proper noun detection.
//!
//! A word is treated as a proper noun when it is capitalized and does not
//! open a sentence. Readability scoring can exclude these words so long
//! personal or place names do not inflate a document's grade.
//!
//! Requires [`SentenceBoundaryResolver`](crate::SentenceBoundaryResolver)
//! to have run on the line first.

use std::collections::HashSet;

use pagetone::{Assignment, Resolver, Span, TokenKind, TokenLine};
use serde::{Deserialize, Serialize};

use crate::SentenceBoundary;

/// A capitalized word in non-sentence-initial position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProperNoun;

/// Resolver that marks capitalized, non-sentence-initial words.
#[derive(Debug, Clone, Default)]
pub struct ProperNounResolver;

impl Resolver for ProperNounResolver {
    type Attr = ProperNoun;

    fn go(&self, line: &TokenLine) -> Vec<Assignment<Self::Attr>> {
        let boundaries: HashSet<usize> = line
            .attrs_by::<SentenceBoundary>()
            .into_iter()
            .map(|(span, _)| span.start)
            .collect();

        let mut assignments = Vec::new();
        let mut sentence_initial = true;
        for (idx, token) in line.tokens().iter().enumerate() {
            match token.kind() {
                TokenKind::Word => {
                    if !sentence_initial && starts_with_uppercase(token.text()) {
                        assignments.push(Assignment::new(Span::single(idx), ProperNoun));
                    }
                    sentence_initial = false;
                }
                TokenKind::Number => {
                    sentence_initial = false;
                }
                _ => {
                    if boundaries.contains(&idx) {
                        sentence_initial = true;
                    }
                }
            }
        }

        assignments
    }
}

fn starts_with_uppercase(text: &str) -> bool {
    text.chars().next().map_or(false, |c| c.is_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SentenceBoundaryResolver;

    fn proper_nouns(text: &str) -> Vec<String> {
        let line = TokenLine::from_text(text)
            .run(&SentenceBoundaryResolver::new())
            .run(&ProperNounResolver);
        line.attrs_by::<ProperNoun>()
            .into_iter()
            .map(|(span, _)| line.tokens()[span.start].text().to_string())
            .collect()
    }

    #[test]
    fn skips_sentence_initial_capitals() {
        assert_eq!(
            proper_nouns("She visited Lake Wobegon. Nobody noticed."),
            vec!["Lake", "Wobegon"]
        );
    }

    #[test]
    fn lowercase_words_are_never_proper() {
        assert!(proper_nouns("the quick brown fox").is_empty());
    }

    #[test]
    fn capital_after_abbreviation_is_proper() {
        // "Dr." does not end the sentence, so "Smith" is mid-sentence
        assert_eq!(proper_nouns("Dr. Smith teaches here."), vec!["Smith"]);
    }
}
