//! Word valence scoring.
//!
//! A small lexicon assigns each matched word a valence in [-1, 1]; a
//! negator within a short window before the word flips its sign, so
//! "not bad" scores positive. Sentence-level polarity is the consumer's
//! concern - this resolver only scores individual words.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use pagetone::{Assignment, Resolver, Span, TokenKind, TokenLine};

use crate::sentence_boundary::is_end_punctuation;

/// Valence entries, tuned for promotional/informational webpage copy.
const LEXICON: &[(&str, f64)] = &[
    // positive
    ("good", 0.5),
    ("great", 0.8),
    ("excellent", 0.9),
    ("excellence", 0.8),
    ("amazing", 0.9),
    ("wonderful", 0.9),
    ("outstanding", 0.9),
    ("best", 1.0),
    ("love", 0.8),
    ("loved", 0.8),
    ("enjoy", 0.6),
    ("enjoyed", 0.6),
    ("happy", 0.7),
    ("exciting", 0.7),
    ("excited", 0.7),
    ("help", 0.3),
    ("helped", 0.4),
    ("helpful", 0.6),
    ("friendly", 0.6),
    ("welcoming", 0.6),
    ("support", 0.3),
    ("supportive", 0.6),
    ("success", 0.7),
    ("successful", 0.7),
    ("innovative", 0.6),
    ("opportunity", 0.4),
    ("opportunities", 0.4),
    ("proud", 0.6),
    ("award", 0.5),
    ("vibrant", 0.5),
    ("thriving", 0.6),
    ("renowned", 0.5),
    ("easy", 0.4),
    ("clear", 0.3),
    // negative
    ("bad", -0.7),
    ("terrible", -0.9),
    ("awful", -0.8),
    ("horrible", -0.9),
    ("worst", -1.0),
    ("poor", -0.5),
    ("hate", -0.8),
    ("fail", -0.6),
    ("failing", -0.6),
    ("failure", -0.7),
    ("problem", -0.4),
    ("problems", -0.4),
    ("difficult", -0.4),
    ("confusing", -0.5),
    ("boring", -0.5),
    ("sad", -0.6),
    ("angry", -0.7),
    ("fear", -0.6),
    ("afraid", -0.6),
    ("worry", -0.5),
    ("worried", -0.5),
    ("stress", -0.5),
    ("stressful", -0.6),
    ("disappointing", -0.7),
    ("disappointed", -0.7),
    ("wrong", -0.5),
    ("broken", -0.5),
    ("useless", -0.8),
    ("waste", -0.6),
    ("complaint", -0.5),
    ("complaints", -0.5),
    ("crisis", -0.7),
    ("danger", -0.6),
    ("dangerous", -0.6),
    ("harsh", -0.5),
    ("unfair", -0.6),
    ("weak", -0.4),
];

static LEXICON_MAP: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| LEXICON.iter().copied().collect());

/// Words that invert the polarity of what follows.
const NEGATORS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "cannot", "can't", "won't", "don't", "doesn't",
    "didn't", "isn't", "aren't", "wasn't", "weren't", "hardly", "without",
];

/// How many word tokens back a negator can reach.
const NEGATION_WINDOW: usize = 3;

/// Signed valence of one scored word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Valence(pub f64);

/// Resolver that assigns a [`Valence`] to every lexicon word.
#[derive(Debug, Clone, Default)]
pub struct SentimentResolver;

impl Resolver for SentimentResolver {
    type Attr = Valence;

    fn go(&self, line: &TokenLine) -> Vec<Assignment<Self::Attr>> {
        let tokens = line.tokens();
        let words: Vec<(usize, String)> = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.kind() == TokenKind::Word)
            .map(|(idx, t)| (idx, t.text().to_lowercase()))
            .collect();

        let mut assignments = Vec::new();
        for (word_idx, (token_idx, lower)) in words.iter().enumerate() {
            let valence = match LEXICON_MAP.get(lower.as_str()) {
                Some(v) => *v,
                None => continue,
            };

            let window_start = word_idx.saturating_sub(NEGATION_WINDOW);
            let negations = words[window_start..word_idx]
                .iter()
                .filter(|(negator_idx, word)| {
                    NEGATORS.contains(&word.as_str())
                        && !crosses_sentence_end(line, *negator_idx, *token_idx)
                })
                .count();

            let signed = if negations % 2 == 1 { -valence } else { valence };
            assignments.push(Assignment::new(Span::single(*token_idx), Valence(signed)));
        }

        assignments
    }
}

/// A negator must not reach across end punctuation.
fn crosses_sentence_end(line: &TokenLine, from: usize, to: usize) -> bool {
    line.tokens()[from..to]
        .iter()
        .any(|t| t.kind() == TokenKind::Punct && is_end_punctuation(t.text()))
}
