use crate::LiteralLexError;
use crate::token::LiteralTokenKind;
use smallvec::SmallVec;

/// The set of token kinds a parse step would have accepted.
pub type ExpectedTokenKinds = SmallVec<[LiteralTokenKind; 4]>;

/// Error returned when a literal value fails to parse.
///
/// There is no error recovery: the first problem encountered is returned and
/// no partial value is produced.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LiteralParseError {
    /// The lexer found a character that starts no token.
    #[error(transparent)]
    Lex(#[from] LiteralLexError),

    /// Expected specific token kind(s) but found something else.
    ///
    /// This covers unterminated lists and objects (`found` is
    /// [`Eof`](LiteralTokenKind::Eof)) as well as trailing input after a
    /// complete value (`expected` is just `Eof`).
    ///
    /// # Example
    /// ```text
    /// 123 456
    ///     ^^^ expected end of input, found integer
    /// ```
    #[error(
        "expected {}, found {found} at offset {offset}",
        describe_expected(.expected)
    )]
    UnexpectedToken {
        offset: usize,
        expected: ExpectedTokenKinds,
        found: LiteralTokenKind,
    },

    /// Lists and objects are nested more deeply than the parser allows.
    #[error(
        "value nesting exceeds the maximum depth of {max_depth} at offset \
        {offset}"
    )]
    NestingTooDeep {
        offset: usize,
        max_depth: usize,
    },
}

impl LiteralParseError {
    /// Byte offset within the source where the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            Self::Lex(err) => err.offset(),
            Self::UnexpectedToken { offset, .. }
            | Self::NestingTooDeep { offset, .. } => *offset,
        }
    }

    /// Returns `true` if this error came from the lexer rather than from the
    /// grammar.
    pub fn is_lex_error(&self) -> bool {
        matches!(self, Self::Lex(_))
    }
}

/// Renders an expected-set as `` `]` or value ``.
///
/// When every token that can start a value is present they are collapsed into
/// the single word "value".
fn describe_expected(expected: &ExpectedTokenKinds) -> String {
    let value_starts = LiteralTokenKind::value_starts();
    let includes_value =
        value_starts.iter().all(|kind| expected.contains(kind));

    let mut parts: Vec<&str> = expected
        .iter()
        .filter(|kind| !(includes_value && kind.starts_value()))
        .map(|kind| kind.description())
        .collect();
    if includes_value {
        parts.push("value");
    }

    match parts.as_slice() {
        [] => "nothing".to_string(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} or {last}", init.join(", ")),
    }
}
