/// Error returned when the literal lexer finds a character at which no token
/// rule matches.
///
/// # Example
/// ```text
/// [1, @]
///     ^ unexpected character '@' at offset 4
/// ```
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unexpected character {found:?} at offset {offset}")]
pub struct LiteralLexError {
    offset: usize,
    found: char,
}

impl LiteralLexError {
    pub fn new(offset: usize, found: char) -> Self {
        Self { offset, found }
    }

    /// The unmatched character.
    pub fn found(&self) -> char {
        self.found
    }

    /// Byte offset of the unmatched character within the source.
    pub fn offset(&self) -> usize {
        self.offset
    }
}
