//! Document assembly - the tokenized view metrics are computed from.
//!
//! A [`Document`] owns the annotated token line plus the sentence list
//! derived from its boundary attributes. Construction runs the full lexis
//! pipeline once; everything downstream reads attributes.

use std::collections::{HashMap, HashSet};

use pagetone::{Span, TokenKind, TokenLine};
use pagetone_lexis::{
    ProperNounResolver, PronounResolver, SentenceBoundary, SentenceBoundaryResolver,
    SentimentResolver, Valence,
};

/// One segmented sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Inclusive token span, terminal punctuation included when present.
    pub span: Span,
    /// Terminal end punctuation (`.`, `!`, `?`) when the sentence has one.
    pub terminal: Option<char>,
    /// Polarity in [-1, 1]: mean valence of scored words, 0 when none.
    pub polarity: f64,
}

/// A fully annotated document.
pub struct Document {
    line: TokenLine,
    sentences: Vec<Sentence>,
}

impl Document {
    /// Tokenize and annotate `text`, then segment its sentences.
    pub fn analyze(text: &str) -> Self {
        let line = TokenLine::from_text(text)
            .run(&SentenceBoundaryResolver::new())
            .run(&ProperNounResolver)
            .run(&PronounResolver)
            .run(&SentimentResolver);
        let sentences = segment(&line);
        Document { line, sentences }
    }

    pub fn line(&self) -> &TokenLine {
        &self.line
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }
}

/// Split the line into sentences at its boundary attributes.
///
/// A segment only becomes a sentence once it contains a word or number
/// token, so runs of stray punctuation ("!!!") extend nothing. Trailing
/// text without end punctuation still forms a final sentence with
/// `terminal: None`.
fn segment(line: &TokenLine) -> Vec<Sentence> {
    let boundaries: HashSet<usize> = line
        .attrs_by::<SentenceBoundary>()
        .into_iter()
        .map(|(span, _)| span.start)
        .collect();
    let valences: HashMap<usize, f64> = line
        .attrs_by::<Valence>()
        .into_iter()
        .map(|(span, v)| (span.start, v.0))
        .collect();

    let mut sentences = Vec::new();
    let mut start: Option<usize> = None;
    let mut has_words = false;
    let mut last_solid = 0usize;

    for (idx, token) in line.tokens().iter().enumerate() {
        if token.kind() == TokenKind::Space {
            continue;
        }
        if boundaries.contains(&idx) {
            if let (Some(s), true) = (start, has_words) {
                let span = Span::new(s, idx);
                sentences.push(Sentence {
                    span,
                    terminal: token.text().chars().next(),
                    polarity: polarity_of(span, &valences),
                });
            }
            start = None;
            has_words = false;
            continue;
        }
        if start.is_none() {
            start = Some(idx);
        }
        if matches!(token.kind(), TokenKind::Word | TokenKind::Number) {
            has_words = true;
        }
        last_solid = idx;
    }

    if let (Some(s), true) = (start, has_words) {
        let span = Span::new(s, last_solid);
        sentences.push(Sentence {
            span,
            terminal: None,
            polarity: polarity_of(span, &valences),
        });
    }

    sentences
}

fn polarity_of(span: Span, valences: &HashMap<usize, f64>) -> f64 {
    let scored: Vec<f64> = span
        .indices()
        .filter_map(|idx| valences.get(&idx))
        .copied()
        .collect();
    if scored.is_empty() {
        return 0.0;
    }
    let mean = scored.iter().sum::<f64>() / scored.len() as f64;
    mean.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_on_end_punctuation() {
        let doc = Document::analyze("You are great! She helped her.");
        let terminals: Vec<Option<char>> =
            doc.sentences().iter().map(|s| s.terminal).collect();
        assert_eq!(terminals, vec![Some('!'), Some('.')]);
    }

    #[test]
    fn trailing_text_forms_an_open_sentence() {
        let doc = Document::analyze("First one. and then some more");
        assert_eq!(doc.sentences().len(), 2);
        assert_eq!(doc.sentences()[1].terminal, None);
    }

    #[test]
    fn repeated_marks_do_not_create_empty_sentences() {
        let doc = Document::analyze("Wow!!! Amazing.");
        let terminals: Vec<Option<char>> =
            doc.sentences().iter().map(|s| s.terminal).collect();
        assert_eq!(terminals, vec![Some('!'), Some('.')]);
    }

    #[test]
    fn empty_text_has_no_sentences() {
        let doc = Document::analyze("");
        assert!(doc.sentences().is_empty());
        assert!(doc.line().tokens().is_empty());
    }

    #[test]
    fn pipeline_display_snapshot() {
        use pagetone::LineDisplay;
        use pagetone_lexis::{SentenceBoundary, Valence};

        let doc = Document::analyze("Not great. Welcome!");
        let display = LineDisplay::new(doc.line())
            .with::<Valence>()
            .with::<SentenceBoundary>();
        insta::assert_snapshot!(display.to_string(), @r###"
        Not     great  .     Welcome  !
                ╰───╯Valence(-0.8)
                       ╰SentenceBoundary(High)
                                      ╰SentenceBoundary(Medium)
        "###);
    }

    #[test]
    fn sentence_polarity_averages_scored_words() {
        let doc = Document::analyze("A great and friendly place.");
        assert_eq!(doc.sentences().len(), 1);
        // (0.8 + 0.6) / 2
        assert!((doc.sentences()[0].polarity - 0.7).abs() < 1e-12);
    }

    #[test]
    fn unscored_sentence_polarity_is_zero() {
        let doc = Document::analyze("The syllabus covers parsing.");
        assert_eq!(doc.sentences()[0].polarity, 0.0);
    }
}
