//! Operator-precedence (shunting-yard) regex parser.
//!
//! Accepts the same grammar as the recursive descent [`Parser`] and builds the
//! automaton directly: operands live on a stack of [`Nfa`]s and every
//! operator popped from the operator stack is applied immediately through the
//! [`NfaCompiler`].
//!
//! [`Parser`]: super::parser::Parser

use super::{
    parser::{ParseError, ParseErrorKind, ParseResult},
    tokenizer::{OperatorKind, Token, TokenKind, Tokenizer},
};
use crate::fsm::{Nfa, NfaCompiler};

/// Binary operators (and the parenthesis marker) kept on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Union,
    Concat,
    LeftParen,
}

impl Operator {
    /// Binding strength; operators of equal strength fold left.
    fn precedence(self) -> u8 {
        match self {
            Operator::LeftParen => 0,
            Operator::Union => 1,
            Operator::Concat => 2,
        }
    }
}

pub(crate) struct Parser<'a> {
    tokens: Tokenizer<'a>,
    compiler: NfaCompiler,
    operators: Vec<(Operator, (usize, usize))>,
    operands: Vec<Nfa>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str, epsilon: char) -> Self {
        Self {
            tokens: Tokenizer::new(input, epsilon),
            compiler: NfaCompiler::new(),
            operators: Vec::new(),
            operands: Vec::new(),
        }
    }

    pub(crate) fn parse(mut self) -> ParseResult<Nfa> {
        let mut prev: Option<Token> = None;

        while let Some(token) = self.tokens.next() {
            let expecting_operand = !prev.is_some_and(|p| p.kind.ends_operand());

            // Adjacent operands are concatenated.
            if token.kind.starts_operand() && !expecting_operand {
                self.push_operator(Operator::Concat, token.pos)?;
            }

            match token.kind {
                TokenKind::Symbol(c) => {
                    let nfa = self.compiler.symbol(c);
                    self.operands.push(nfa);
                }
                TokenKind::Epsilon => {
                    let nfa = self.compiler.epsilon();
                    self.operands.push(nfa);
                }
                TokenKind::Operator(OperatorKind::LeftParen) => {
                    self.operators.push((Operator::LeftParen, token.pos));
                }
                TokenKind::Operator(OperatorKind::RightParen) => {
                    if prev.is_some_and(|p| p.kind == TokenKind::Operator(OperatorKind::LeftParen)) {
                        // `()` denotes the empty string
                        let nfa = self.compiler.epsilon();
                        self.operands.push(nfa);
                    } else if expecting_operand {
                        return Err(missing_operand(prev, token.pos).into());
                    }

                    self.close_group(token.pos)?;
                }
                TokenKind::Operator(OperatorKind::Union) => {
                    if expecting_operand {
                        return Err(missing_operand(prev, token.pos).into());
                    }
                    self.push_operator(Operator::Union, token.pos)?;
                }
                TokenKind::Operator(OperatorKind::Dot) => {
                    if expecting_operand {
                        return Err(error(ParseErrorKind::Operand, token.pos).into());
                    }
                    self.push_operator(Operator::Concat, token.pos)?;
                }
                TokenKind::Operator(OperatorKind::Star) => {
                    let Some(operand) = self.operands.pop().filter(|_| !expecting_operand) else {
                        return Err(error(ParseErrorKind::Operand, token.pos).into());
                    };
                    let nfa = self.compiler.star(operand);
                    self.operands.push(nfa);
                }
                TokenKind::Operator(OperatorKind::Interval) => {
                    return Err(error(ParseErrorKind::UnexpandedInterval, token.pos).into());
                }
                TokenKind::Invalid(c) => {
                    return Err(error(ParseErrorKind::UnrecognizedCharacter(c), token.pos).into());
                }
            }

            prev = Some(token);
        }

        let Some(last) = prev else {
            return Ok(self.compiler.empty());
        };

        let end = (last.pos.1, last.pos.1 + 1);
        if !last.kind.ends_operand() {
            return Err(missing_operand(prev, end).into());
        }

        while let Some((operator, pos)) = self.operators.pop() {
            if operator == Operator::LeftParen {
                return Err(error(ParseErrorKind::RightParen, end).into());
            }
            self.apply(operator, pos)?;
        }

        match (self.operands.pop(), self.operands.is_empty()) {
            (Some(nfa), true) => Ok(nfa),
            _ => Err(error(ParseErrorKind::SubExpression, end).into()),
        }
    }

    /// Applies every stacked operator binding at least as strongly as
    /// `operator`, then stacks `operator`.
    fn push_operator(&mut self, operator: Operator, pos: (usize, usize)) -> ParseResult<()> {
        while let Some(&(top, top_pos)) = self.operators.last() {
            if top == Operator::LeftParen || top.precedence() < operator.precedence() {
                break;
            }
            self.operators.pop();
            self.apply(top, top_pos)?;
        }

        self.operators.push((operator, pos));
        Ok(())
    }

    /// Applies operators up to and including the innermost open parenthesis.
    fn close_group(&mut self, pos: (usize, usize)) -> ParseResult<()> {
        loop {
            match self.operators.pop() {
                Some((Operator::LeftParen, _)) => return Ok(()),
                Some((operator, operator_pos)) => self.apply(operator, operator_pos)?,
                None => return Err(error(ParseErrorKind::UnbalancedRightParen, pos).into()),
            }
        }
    }

    fn apply(&mut self, operator: Operator, pos: (usize, usize)) -> ParseResult<()> {
        let (Some(rhs), Some(lhs)) = (self.operands.pop(), self.operands.pop()) else {
            return Err(error(ParseErrorKind::SubExpression, pos).into());
        };

        let nfa = match operator {
            Operator::Union => self.compiler.union(lhs, rhs),
            Operator::Concat => self.compiler.concat(lhs, rhs),
            Operator::LeftParen => unreachable!("parentheses are never applied"),
        };
        self.operands.push(nfa);

        Ok(())
    }
}

fn error(kind: ParseErrorKind, pos: (usize, usize)) -> ParseError {
    ParseError { kind, pos }
}

/// Error for an operand missing after `prev`.
fn missing_operand(prev: Option<Token>, pos: (usize, usize)) -> ParseError {
    match prev {
        Some(Token {
            kind: TokenKind::Operator(OperatorKind::Dot),
            ..
        }) => error(ParseErrorKind::Operand, pos),
        _ => error(ParseErrorKind::SubExpression, pos),
    }
}

#[cfg(test)]
mod tests {
    use super::Parser;
    use crate::{
        fsm::{Input, Nfa, Simulatable},
        regex::{ast::Ast, parser, ParseErrorKind},
    };

    fn parse(input: &str) -> Nfa {
        Parser::new(input, 'λ').parse().unwrap()
    }

    fn error_kind(input: &str) -> ParseErrorKind {
        Parser::new(input, 'λ')
            .parse()
            .err()
            .and_then(|errors| errors.kind())
            .expect(input)
    }

    #[test]
    fn single_symbol() {
        let nfa = parse("a");

        assert_eq!(nfa.state_count(), 2);
        assert_eq!(
            nfa.transitions().collect::<Vec<_>>(),
            [(0, &Input::Literal('a'), 1)]
        );
    }

    #[test]
    fn precedence() {
        let nfa = parse("a*b+c");

        for accepted in ["b", "ab", "aab", "c"] {
            assert!(nfa.accepts(accepted), "{}", accepted);
        }
        for rejected in ["", "a", "ac", "bc", "cb"] {
            assert!(!nfa.accepts(rejected), "{}", rejected);
        }
    }

    #[test]
    fn explicit_and_implicit_concatenation_agree() {
        let implicit = parse("a(b+c)*a");
        let explicit = parse("a.(b|c)*.a");

        for input in ["aa", "aba", "acba", "ab", "a", "abca", "abcab"] {
            assert_eq!(implicit.accepts(input), explicit.accepts(input), "{}", input);
        }
    }

    #[test]
    fn special_inputs() {
        let void = parse("");
        assert_eq!(void.final_states().count(), 0);

        let eps = parse("λ");
        assert_eq!(eps.state_count(), 1);
        assert!(eps.accepts(""));

        assert!(parse("()").accepts(""));
        assert!(parse("a()b").accepts("ab"));
    }

    #[test]
    fn deeply_nested_groups() {
        let depth = 20_000;
        let regex = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));
        let nfa = parse(&regex);

        assert_eq!(nfa.state_count(), 2);
        assert!(nfa.accepts("a"));
    }

    #[test]
    fn same_errors_as_recursive_descent() {
        for input in [
            "(a+b", "((a)", "a)b", ")", "a+", "+a", "(a|)", "(+a)", "a.", ".a", "*a", "a..b",
            "a.+b", "(", "ab#", "a$b", "a+*",
        ] {
            let expected = parser::Parser::new(input, 'λ')
                .parse()
                .err()
                .and_then(|errors| errors.kind())
                .expect(input);

            assert_eq!(error_kind(input), expected, "{}", input);
        }
    }

    #[test]
    fn same_language_as_recursive_descent() {
        for regex in ["a*b+c", "(a+b)*abb", "a(b|λ)c*", "(ab)**|ba", "((a))b.c"] {
            let Ok(Ast(expr)) = parser::Parser::new(regex, 'λ').parse() else {
                panic!("{}", regex);
            };
            let expected = Nfa::from(Ast(expr));
            let actual = parse(regex);

            for input in ["", "a", "b", "c", "ab", "ac", "abb", "aabb", "abab", "bab", "abcc", "ba"] {
                assert_eq!(expected.accepts(input), actual.accepts(input), "{} on {}", regex, input);
            }
        }
    }
}
