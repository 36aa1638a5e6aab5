use crate::token::LiteralTokenKind;

/// A token produced by the literal lexer.
///
/// The `lexeme` borrows directly from the source text, so tokens are
/// zero-copy. `offset` is the byte offset of the first character of the
/// lexeme within the source.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiteralToken<'src> {
    pub kind: LiteralTokenKind,
    pub lexeme: &'src str,
    pub offset: usize,
}

impl<'src> LiteralToken<'src> {
    pub fn new(
        kind: LiteralTokenKind,
        lexeme: &'src str,
        offset: usize,
    ) -> Self {
        Self {
            kind,
            lexeme,
            offset,
        }
    }

    /// Byte offset immediately after the last character of this token.
    pub fn end_offset(&self) -> usize {
        self.offset + self.lexeme.len()
    }
}
