//! Data-oriented token annotation framework for webpage tone metrics.
//!
//! Text is tokenized once into a [`TokenLine`]; [`Resolver`] passes then
//! attach typed attributes to token spans, and downstream code reads those
//! attributes back without ever re-tokenizing. Metric code built on top of
//! this crate never inspects raw text directly - swapping the tagging layer
//! means swapping resolvers, not rewriting metrics.
//!
//! ## Usage
//!
//! ```
//! use pagetone::{Assignment, Resolver, Span, TokenKind, TokenLine};
//!
//! #[derive(Debug)]
//! struct Shouty;
//!
//! struct ShoutyResolver;
//!
//! impl Resolver for ShoutyResolver {
//!     type Attr = Shouty;
//!
//!     fn go(&self, line: &TokenLine) -> Vec<Assignment<Shouty>> {
//!         line.tokens()
//!             .iter()
//!             .enumerate()
//!             .filter(|(_, t)| t.kind() == TokenKind::Punct && t.text() == "!")
//!             .map(|(idx, _)| Assignment::new(Span::single(idx), Shouty))
//!             .collect()
//!     }
//! }
//!
//! let line = TokenLine::from_text("Apply now!").run(&ShoutyResolver);
//! assert_eq!(line.attrs_by::<Shouty>().len(), 1);
//! ```

mod token_line;

pub use token_line::{
    Assignment, AttrStore, LineDisplay, Resolver, Span, Token, TokenKind, TokenLine,
};
