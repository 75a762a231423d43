use std::fmt::{self, Write};

use unicode_width::UnicodeWidthStr;

use super::{Span, TokenLine};

struct IncludedAttr {
    span: Span,
    debug_value: String,
}

/// Renders a [`TokenLine`] with selected attributes drawn beneath the tokens.
///
/// Used by snapshot tests:
///
/// ```text
/// You     are     great  !
/// ╰─╯Pronoun(SecondPerson)
///                        ╰SentenceBoundary(Medium)
/// ```
pub struct LineDisplay<'a> {
    line: &'a TokenLine,
    include_attrs: Vec<IncludedAttr>,
}

impl<'a> LineDisplay<'a> {
    pub fn new(line: &'a TokenLine) -> Self {
        LineDisplay {
            line,
            include_attrs: Vec::new(),
        }
    }

    pub fn include<T: 'static + fmt::Debug>(&mut self) {
        for (span, attr) in self.line.attrs_by::<T>() {
            self.include_attrs.push(IncludedAttr {
                span,
                debug_value: format!("{:?}", attr),
            });
        }
    }

    /// Takes self
    pub fn with<T: 'static + fmt::Debug>(mut self) -> Self {
        self.include::<T>();
        self
    }
}

impl fmt::Display for LineDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut token_starts = Vec::new();
        let mut token_ends = Vec::new();
        let mut opening_line = String::new();
        for (idx, token) in self.line.tokens().iter().enumerate() {
            if idx > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            token_starts.push(UnicodeWidthStr::width(opening_line.as_str()));
            opening_line.push_str(token.text());
            token_ends.push(UnicodeWidthStr::width(opening_line.as_str()));
        }

        f.write_str(&opening_line)?;

        for attr in self.include_attrs.iter() {
            f.write_char('\n')?;

            let start_char_idx = token_starts[attr.span.start];
            let end_char_idx = token_ends[attr.span.end];
            for _ in 0..start_char_idx {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;
            for _ in (start_char_idx + 1)..end_char_idx.saturating_sub(1) {
                f.write_char('─')?;
            }
            if end_char_idx - start_char_idx > 1 {
                f.write_char('╯')?;
            }

            f.write_str(&attr.debug_value)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Assignment, Resolver, TokenKind};

    #[derive(Debug)]
    struct Greeting;

    struct GreetingResolver;

    impl Resolver for GreetingResolver {
        type Attr = Greeting;

        fn go(&self, line: &TokenLine) -> Vec<Assignment<Greeting>> {
            line.tokens()
                .iter()
                .enumerate()
                .filter(|(_, t)| {
                    t.kind() == TokenKind::Word && t.text().eq_ignore_ascii_case("hi")
                })
                .map(|(idx, _)| Assignment::new(Span::single(idx), Greeting))
                .collect()
        }
    }

    #[test]
    fn underlines_attribute_spans() {
        let line = TokenLine::from_text("Hi there!").run(&GreetingResolver);
        let display = LineDisplay::new(&line).with::<Greeting>();
        insta::assert_snapshot!(display.to_string(), @r###"
        Hi     there  !
        ╰╯Greeting
        "###);
    }
}
