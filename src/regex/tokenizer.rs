use crate::iter::{CachedPeekable, CachedPeekableable};
use std::{iter::Enumerate, str::Chars};

/// Regex tokenizer.
///
/// Whitespace is skipped. Positions count characters (not bytes) of the
/// input, so multi-byte epsilon markers still report sensible columns.
pub(crate) struct Tokenizer<'a> {
    /// Iterator over the characters in the input, along with their position
    /// in the input.
    iter: CachedPeekable<Enumerate<Chars<'a>>>,
    /// Reserved character denoting the empty string.
    epsilon: char,
}

/// Regex token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token {
    /// Information about the kind of token along with the value of the token.
    pub(crate) kind: TokenKind,
    /// Start and end position of the token in the input text. The end position
    /// is one further than the end of the current token.
    pub(crate) pos: (usize, usize),
}

impl Token {
    /// Creates a new [`Token`].
    pub(crate) fn new(kind: TokenKind, pos: (usize, usize)) -> Self {
        Self { kind, pos }
    }
}

/// Regex token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// A symbol of the input alphabet (an ASCII letter).
    Symbol(char),
    /// The epsilon marker.
    Epsilon,
    Operator(OperatorKind),
    Invalid(char),
}

/// Regex operator kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OperatorKind {
    LeftParen,
    RightParen,
    /// `+` or `|`.
    Union,
    /// Explicit concatenation, `.`.
    Dot,
    /// Postfix `*`.
    Star,
    /// `$`, only valid before interval expansion.
    Interval,
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let (start_cursor_pos, ch) = loop {
            match self.iter.next()? {
                (_, ch) if ch.is_whitespace() => continue,
                next => break next,
            }
        };

        let token_kind = match ch {
            // The marker wins over every other interpretation of the character.
            ch if ch == self.epsilon => TokenKind::Epsilon,
            ch if OPERATORS.contains(&ch) => TokenKind::Operator(Self::operator(ch)),
            ch if ch.is_ascii_alphabetic() => TokenKind::Symbol(ch),

            ch => TokenKind::Invalid(ch),
        };

        Some(Token::new(token_kind, (start_cursor_pos, start_cursor_pos + 1)))
    }
}

/// Characters the tokenizer always reads as operators, unless they are the
/// epsilon marker.
const OPERATORS: [char; 7] = ['(', ')', '+', '|', '.', '*', '$'];

/// Whether `c` is whitespace or an operator and therefore cannot serve as the
/// epsilon marker.
pub(crate) fn is_reserved(c: char) -> bool {
    c.is_whitespace() || OPERATORS.contains(&c)
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer.
    pub(crate) fn new(input: &'a str, epsilon: char) -> Self {
        Self {
            iter: input.chars().enumerate().cached_peekable(),
            epsilon,
        }
    }

    fn operator(ch: char) -> OperatorKind {
        match ch {
            '(' => OperatorKind::LeftParen,
            ')' => OperatorKind::RightParen,
            '+' | '|' => OperatorKind::Union,
            '.' => OperatorKind::Dot,
            '*' => OperatorKind::Star,
            '$' => OperatorKind::Interval,

            _ => unreachable!("unhandled operator (`{}`)", ch),
        }
    }
}

impl TokenKind {
    /// Whether a token of this kind can end an operand.
    pub(crate) fn ends_operand(&self) -> bool {
        matches!(
            self,
            TokenKind::Symbol(_)
                | TokenKind::Epsilon
                | TokenKind::Operator(OperatorKind::RightParen | OperatorKind::Star)
        )
    }

    /// Whether a token of this kind can start an operand.
    pub(crate) fn starts_operand(&self) -> bool {
        matches!(
            self,
            TokenKind::Symbol(_) | TokenKind::Epsilon | TokenKind::Operator(OperatorKind::LeftParen)
        )
    }
}
