//! Personal pronoun tagging.
//!
//! Every personal pronoun token receives exactly one [`Pronoun`] attribute
//! carrying its person/gender class. Counting one class therefore never
//! double-counts a token that also belongs to the broader pronoun set.

use pagetone::{Assignment, Resolver, Span, TokenKind, TokenLine};
use serde::{Deserialize, Serialize};

/// First person pronouns (singular and plural)
const FIRST_PERSON: &[&str] = &[
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves",
];

/// Second person pronouns (singular and plural forms are identical in English)
const SECOND_PERSON: &[&str] = &["you", "your", "yours", "yourself", "yourselves"];

/// Masculine third person singular pronouns
const MASCULINE: &[&str] = &["he", "him", "his", "himself"];

/// Feminine third person singular pronouns
const FEMININE: &[&str] = &["she", "her", "hers", "herself"];

/// Neuter third person singular pronouns
const NEUTER: &[&str] = &["it", "its", "itself"];

/// Third person plural pronouns
const THIRD_PLURAL: &[&str] = &["they", "them", "their", "theirs", "themselves"];

/// Grammatical class of a tagged pronoun.
///
/// The masculine and feminine sets are symmetric four-form sets (subject,
/// object, possessive, reflexive) so that swapping one gender's forms for
/// the other's maps class counts onto each other exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PronounClass {
    FirstPerson,
    SecondPerson,
    Masculine,
    Feminine,
    Neuter,
    ThirdPlural,
}

impl PronounClass {
    /// Classify a token, returning `None` for non-pronouns.
    pub fn from_text(text: &str) -> Option<Self> {
        let lower = text.to_lowercase();
        let lower = lower.as_str();
        // The second person list wins first so "you"/"your" are never
        // reclassified by a later set.
        if SECOND_PERSON.contains(&lower) {
            Some(Self::SecondPerson)
        } else if MASCULINE.contains(&lower) {
            Some(Self::Masculine)
        } else if FEMININE.contains(&lower) {
            Some(Self::Feminine)
        } else if FIRST_PERSON.contains(&lower) {
            Some(Self::FirstPerson)
        } else if NEUTER.contains(&lower) {
            Some(Self::Neuter)
        } else if THIRD_PLURAL.contains(&lower) {
            Some(Self::ThirdPlural)
        } else {
            None
        }
    }
}

/// A tagged pronoun occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronoun(pub PronounClass);

/// Resolver that tags personal pronouns.
#[derive(Debug, Clone, Default)]
pub struct PronounResolver;

impl Resolver for PronounResolver {
    type Attr = Pronoun;

    fn go(&self, line: &TokenLine) -> Vec<Assignment<Self::Attr>> {
        line.tokens()
            .iter()
            .enumerate()
            .filter(|(_, token)| token.kind() == TokenKind::Word)
            .filter_map(|(idx, token)| {
                PronounClass::from_text(token.text())
                    .map(|class| Assignment::new(Span::single(idx), Pronoun(class)))
            })
            .collect()
    }
}
