/// The kind of a [`LiteralToken`](crate::token::LiteralToken).
///
/// Unlike a full GraphQL document lexer, the literal lexer has no trivia:
/// commas are real tokens (the list and object productions decide where they
/// may appear) and whitespace is dropped entirely.
///
/// # Numeric Literals
///
/// Both the `FLOAT` and `FLOAT_EXP` lexer rules produce [`Float`](Self::Float)
/// tokens. Negative numbers like `-123` are lexed as a single token, never as
/// a separate minus sign.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum LiteralTokenKind {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `[`
    SquareBracketOpen,
    /// `]`
    SquareBracketClose,
    /// `{`
    CurlyBraceOpen,
    /// `}`
    CurlyBraceClose,
    /// `:`
    Colon,
    /// `,`
    Comma,

    // =========================================================================
    // Literals (lexeme holds the raw source text)
    // =========================================================================
    /// An integer literal such as `0`, `42` or `-7`.
    Int,
    /// A float literal with a fractional part and/or an exponent such as
    /// `1.0`, `1e50` or `-6.0221413e23`.
    Float,
    /// A single-quoted string literal, including its `"` delimiters.
    String,
    /// A block string literal, including its `"""` delimiters.
    BlockString,

    // =========================================================================
    // Keywords (distinct from Name)
    // =========================================================================
    /// The `true` keyword.
    True,
    /// The `false` keyword.
    False,
    /// The `null` keyword.
    Null,

    /// Any other identifier. In a value position this is an enum value.
    Name,

    /// End of input. Emitted exactly once, after the last real token.
    Eof,
}

impl LiteralTokenKind {
    /// A short human-readable description, used in error messages.
    pub fn description(&self) -> &'static str {
        match self {
            Self::SquareBracketOpen => "`[`",
            Self::SquareBracketClose => "`]`",
            Self::CurlyBraceOpen => "`{`",
            Self::CurlyBraceClose => "`}`",
            Self::Colon => "`:`",
            Self::Comma => "`,`",
            Self::Int => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::BlockString => "block string",
            Self::True => "`true`",
            Self::False => "`false`",
            Self::Null => "`null`",
            Self::Name => "name",
            Self::Eof => "end of input",
        }
    }

    /// Returns `true` if a token of this kind can begin a `Value`.
    pub fn starts_value(&self) -> bool {
        match self {
            Self::SquareBracketOpen
            | Self::CurlyBraceOpen
            | Self::Int
            | Self::Float
            | Self::String
            | Self::BlockString
            | Self::True
            | Self::False
            | Self::Null
            | Self::Name => true,

            Self::SquareBracketClose
            | Self::CurlyBraceClose
            | Self::Colon
            | Self::Comma
            | Self::Eof => false,
        }
    }

    /// The token kinds that may begin a `Value`, in lexer rule order.
    ///
    /// Used as the `expected` set when a value is missing.
    pub fn value_starts() -> [LiteralTokenKind; 10] {
        [
            Self::SquareBracketOpen,
            Self::CurlyBraceOpen,
            Self::Float,
            Self::Int,
            Self::True,
            Self::False,
            Self::Null,
            Self::BlockString,
            Self::String,
            Self::Name,
        ]
    }
}

impl std::fmt::Display for LiteralTokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
