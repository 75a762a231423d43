//! The token line: tokenization plus typed span attributes.

mod attrs;
mod display;

pub use attrs::AttrStore;
pub use display::LineDisplay;

use unicode_segmentation::UnicodeSegmentation;

/// Classification of a token's surface text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Contains at least one alphabetic character ("great", "don't", "e.g")
    Word,
    /// Numeric, possibly with grouping/decimal characters ("1000", "3.5")
    Number,
    /// A single sentence-level punctuation character (".", "!", ",")
    Punct,
    /// Anything else ("$", "%", emoji)
    Symbol,
    /// Whitespace, including newlines
    Space,
}

/// One token of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    kind: TokenKind,
}

impl Token {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }
}

/// An inclusive token range within a [`TokenLine`].
///
/// Both indices refer to token positions, not character positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start token index
    pub start: usize,
    /// Inclusive end token index
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not pass its end");
        Span { start, end }
    }

    /// A span covering exactly one token.
    pub fn single(idx: usize) -> Self {
        Span { start: idx, end: idx }
    }

    pub fn contains(&self, idx: usize) -> bool {
        self.start <= idx && idx <= self.end
    }

    /// Iterate the covered token indices.
    pub fn indices(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// An attribute attached to a token span, as produced by a [`Resolver`].
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment<T> {
    pub span: Span,
    pub attr: T,
}

impl<T> Assignment<T> {
    pub fn new(span: Span, attr: T) -> Self {
        Assignment { span, attr }
    }
}

/// An annotation pass over a [`TokenLine`].
///
/// Resolvers read the tokens (and any attributes earlier resolvers left
/// behind) and return the assignments to record. They never mutate the line
/// directly, which keeps passes independently testable.
pub trait Resolver {
    type Attr: std::fmt::Debug + 'static;

    fn go(&self, line: &TokenLine) -> Vec<Assignment<Self::Attr>>;
}

/// A tokenized line of text with typed span attributes.
pub struct TokenLine {
    tokens: Vec<Token>,
    attrs: AttrStore,
}

impl TokenLine {
    /// Tokenize `text` along Unicode word boundaries.
    pub fn from_text(text: &str) -> Self {
        let tokens = text
            .split_word_bounds()
            .map(|piece| Token {
                text: piece.to_string(),
                kind: classify(piece),
            })
            .collect();
        TokenLine {
            tokens,
            attrs: AttrStore::default(),
        }
    }

    /// Run a resolver pass, recording its assignments.
    pub fn run<R: Resolver>(mut self, resolver: &R) -> Self {
        for Assignment { span, attr } in resolver.go(&self) {
            debug_assert!(
                span.end < self.tokens.len(),
                "assignment span must stay within the line"
            );
            self.attrs.insert(span, attr);
        }
        self
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// All attributes of type `T` in span order.
    pub fn attrs_by<T: 'static>(&self) -> Vec<(Span, &T)> {
        self.attrs.get::<T>()
    }
}

fn classify(piece: &str) -> TokenKind {
    if piece.chars().any(|c| c.is_alphabetic()) {
        TokenKind::Word
    } else if piece.chars().any(|c| c.is_numeric()) {
        TokenKind::Number
    } else if piece.chars().all(|c| c.is_whitespace()) {
        TokenKind::Space
    } else if piece.chars().count() == 1 && is_punctuation_char(piece) {
        TokenKind::Punct
    } else {
        TokenKind::Symbol
    }
}

fn is_punctuation_char(piece: &str) -> bool {
    matches!(
        piece,
        "." | "!" | "?" | "," | ";" | ":" | "'" | "\"" | "(" | ")" | "[" | "]" | "{" | "}"
            | "-" | "\u{2013}" | "\u{2014}" | "\u{2018}" | "\u{2019}" | "\u{201C}" | "\u{201D}"
            | "\u{2026}"
    )
}
