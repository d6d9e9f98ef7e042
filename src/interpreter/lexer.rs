use logos::Logos;

use crate::{
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
    options::UnknownCharacters,
};

/// Represents a lexical token in an arithmetic expression.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(error = LexError)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Ignored => write!(f, " "),
        }
    }
}

/// Failures raised by the generated lexer.
///
/// Unmatched input produces the default variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    #[default]
    UnknownCharacter,
    LiteralTooLarge,
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Ok(i64)`: The parsed value.
/// - `Err(LexError::LiteralTooLarge)`: If the digit run exceeds `i64::MAX`.
fn parse_integer(lex: &mut logos::Lexer<Token>) -> Result<i64, LexError> {
    lex.slice().parse().map_err(|_| LexError::LiteralTooLarge)
}

/// A token together with the byte offset where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spanned {
    /// The scanned token.
    pub token:    Token,
    /// Byte offset of the first character of the token.
    pub position: usize,
}

/// Lazy, left-to-right token stream over an expression.
///
/// Whitespace never shows up in the stream. Unknown characters are either
/// reported or dropped depending on the configured [`UnknownCharacters`]
/// policy; literals that overflow are always reported.
pub struct Tokens<'source> {
    lexer:   logos::Lexer<'source, Token>,
    unknown: UnknownCharacters,
}

/// Creates a token stream for `source`.
///
/// # Example
/// ```
/// use stackeval::{
///     interpreter::lexer::{Token, tokenize},
///     options::UnknownCharacters,
/// };
///
/// let tokens = tokenize("12 * (3)", UnknownCharacters::Reject).map(|t| t.map(|s| s.token))
///                                                             .collect::<Result<Vec<_>, _>>()
///                                                             .unwrap();
/// assert_eq!(tokens,
///            vec![Token::Integer(12), Token::Star, Token::LParen, Token::Integer(3), Token::RParen]);
/// ```
#[must_use]
pub fn tokenize(source: &str, unknown: UnknownCharacters) -> Tokens<'_> {
    Tokens { lexer: Token::lexer(source),
             unknown }
}

impl Iterator for Tokens<'_> {
    type Item = EvalResult<Spanned>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let result = self.lexer.next()?;
            let position = self.lexer.span().start;

            match result {
                Ok(token) => return Some(Ok(Spanned { token, position })),
                Err(LexError::LiteralTooLarge) => {
                    return Some(Err(EvalError::NumericOverflow { position }));
                },
                Err(LexError::UnknownCharacter) => {
                    let character = self.lexer
                                        .slice()
                                        .chars()
                                        .next()
                                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                    match self.unknown {
                        UnknownCharacters::Reject => {
                            return Some(Err(EvalError::InvalidCharacter { character, position }));
                        },
                        UnknownCharacters::Skip => {
                            log::trace!("skipping unknown character {character:?} at offset {position}");
                        },
                    }
                },
            }
        }
    }
}
