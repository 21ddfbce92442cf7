//! Regex recursive descent parser. See [`ast`](super::ast) for the grammar.

pub use self::error::{ParseError, ParseErrorKind, ParseErrors, ParseResult};

use super::{
    ast::{self, Ast},
    tokenizer::{OperatorKind, Token, TokenKind, Tokenizer},
};
use crate::iter::{CachedPeekable, CachedPeekableable};

pub(crate) mod error;

/// Recursive descent regex parser.
///
/// Every group nests one `expression` call, so very deeply nested input can
/// exhaust the stack. The precedence [`Parser`](super::precedence::Parser)
/// keeps its state on the heap and has no such limit.
pub(crate) struct Parser<'a> {
    /// Stream of tokens being parsed.
    tokens: CachedPeekable<Tokenizer<'a>>,
}

impl<'a> Parser<'a> {
    /// Creates a new regex parser from the `input`. `epsilon` is the reserved
    /// character for the empty string.
    pub(crate) fn new(input: &'a str, epsilon: char) -> Self {
        Self {
            tokens: Tokenizer::new(input, epsilon).cached_peekable(),
        }
    }

    /// Parses the `input` into a regex [`Ast`].
    ///
    /// An input without tokens denotes the empty language.
    pub(crate) fn parse(&mut self) -> ParseResult<Ast> {
        if self.tokens.peek().is_none() {
            return Ok(Ast(ast::ExprKind::Void));
        }

        let expr = self.expression()?;

        // `expression` only stops early at a closing parenthesis.
        if self.tokens.peek().is_some() {
            return Err(self.error(ParseErrorKind::UnbalancedRightParen));
        }

        Ok(Ast(expr))
    }

    /// Rule: `expression ::= sub_expression (UNION expression)?`
    fn expression(&mut self) -> ParseResult<ast::ExprKind> {
        let mut lhs = self.sub_expression()?;
        let lhs = if lhs.len() == 1 {
            lhs.remove(0)
        } else {
            ast::ExprKind::Concat(lhs)
        };

        match self.tokens.peek() {
            Some(Token {
                kind: TokenKind::Operator(OperatorKind::Union),
                ..
            }) => {
                self.tokens.next();
                Ok(ast::ExprKind::Alt(
                    Box::new(lhs),
                    Box::new(self.expression()?),
                ))
            }
            _ => Ok(lhs),
        }
    }

    /// Rule: `sub_expression ::= sub_expression_item (DOT? sub_expression_item)*`
    fn sub_expression(&mut self) -> ParseResult<Vec<ast::ExprKind>> {
        if self.at_sub_expression_end() {
            return Err(self.error(ParseErrorKind::SubExpression));
        }

        let mut items = Vec::from([self.sub_expression_item()?]);
        while !self.at_sub_expression_end() {
            // An explicit `.` must be followed by another item.
            if self.next_is(OperatorKind::Dot).is_some() && self.at_sub_expression_end() {
                return Err(self.error(ParseErrorKind::Operand));
            }

            items.push(self.sub_expression_item()?);
        }

        Ok(items)
    }

    /// Rule: `sub_expression_item ::= (match | group) STAR*`
    fn sub_expression_item(&mut self) -> ParseResult<ast::ExprKind> {
        let Some(Token { kind, pos }) = self.tokens.peek().copied() else {
            return Err(self.error(ParseErrorKind::Operand));
        };

        let mut item = match kind {
            TokenKind::Operator(OperatorKind::LeftParen) => self.group()?,
            TokenKind::Symbol(c) => {
                self.tokens.next();
                ast::ExprKind::Lit(c)
            }
            TokenKind::Epsilon => {
                self.tokens.next();
                ast::ExprKind::Empty
            }
            TokenKind::Invalid(c) => {
                return Err(ParseError {
                    kind: ParseErrorKind::UnrecognizedCharacter(c),
                    pos,
                }
                .into())
            }
            TokenKind::Operator(OperatorKind::Interval) => {
                return Err(ParseError {
                    kind: ParseErrorKind::UnexpandedInterval,
                    pos,
                }
                .into())
            }
            TokenKind::Operator(_) => return Err(self.error(ParseErrorKind::Operand)),
        };

        // STAR*
        while self.next_is(OperatorKind::Star).is_some() {
            item = item.star();
        }

        Ok(item)
    }

    /// Rule: `group ::= LEFT_PAREN expression? RIGHT_PAREN`
    fn group(&mut self) -> ParseResult<ast::ExprKind> {
        // LEFT_PAREN
        self.next_is(OperatorKind::LeftParen)
            .ok_or_else(|| self.error(ParseErrorKind::Operand))?;

        // `()` denotes the empty string
        let expr = if self.peek_is(OperatorKind::RightParen) {
            ast::ExprKind::Empty
        } else {
            self.expression()?
        };

        // RIGHT_PAREN
        self.next_is(OperatorKind::RightParen)
            .ok_or_else(|| self.error(ParseErrorKind::RightParen))?;

        Ok(ast::ExprKind::Group(Box::new(expr)))
    }

    /// Whether the current sub expression cannot be continued.
    fn at_sub_expression_end(&mut self) -> bool {
        matches!(
            self.tokens.peek(),
            Some(Token {
                kind: TokenKind::Operator(OperatorKind::Union | OperatorKind::RightParen),
                ..
            }) | None
        )
    }

    fn peek_is(&mut self, operator: OperatorKind) -> bool {
        matches!(
            self.tokens.peek(),
            Some(Token { kind: TokenKind::Operator(op), .. }) if *op == operator
        )
    }

    /// Consumes the next token only if it is the given operator.
    fn next_is(&mut self, operator: OperatorKind) -> Option<Token> {
        self.tokens
            .next_if(|token| token.kind == TokenKind::Operator(operator))
    }

    fn error(&mut self, kind: ParseErrorKind) -> ParseErrors {
        ParseError {
            kind,
            pos: self.get_current_token_position(),
        }
        .into()
    }

    /// Returns the position of the current token.
    fn get_current_token_position(&mut self) -> (usize, usize) {
        let current = self.tokens.current().copied();
        match (self.tokens.peek(), current) {
            (Some(Token { pos, .. }), _) => *pos,
            (None, Some(Token { pos: (_, end), .. })) => (end, end + 1),
            _ => (0, 1),
        }
    }
}
