//! Textual expansion of the interval operator.
//!
//! `L$R` is rewritten to `(LL+LR+RR)` before the expression is parsed. `L` and
//! `R` are the nearest operands adjacent to the `$`: a balanced parenthesized
//! group or a single symbol, each optionally followed by stars. Occurrences are
//! expanded one at a time, always the leftmost first, so `a$b$c` groups as
//! `(a$b)$c`.

/// Result of expanding all interval operators of an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// The rewritten expression, free of `$`.
    pub expression: String,
    /// Occurrences that lacked an operand on one side.
    pub ambiguities: Vec<RewriteAmbiguity>,
}

/// An interval operator without a well-formed operand on one side. The
/// missing operand is replaced by the epsilon marker, so the rewrite still
/// succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("interval operator #{occurrence} has no {side} operand, the empty string is used instead")]
pub struct RewriteAmbiguity {
    /// Zero-based index of the expansion step, in the order the occurrences
    /// were expanded.
    pub occurrence: usize,
    pub side: Side,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Interval operator.
pub(crate) const INTERVAL: char = '$';

/// Expands every interval operator in `input`. `epsilon` is the marker
/// treated as an operand and used in place of a missing operand.
///
/// Whitespace is removed when at least one interval operator is present, so
/// that `a $ b` binds the same way as `a$b`. An input without interval
/// operators is returned unchanged.
pub fn expand(input: &str, epsilon: char) -> Expansion {
    if !input.contains(INTERVAL) {
        return Expansion {
            expression: input.to_string(),
            ambiguities: Vec::new(),
        };
    }

    let mut chars = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<Vec<_>>();
    let mut ambiguities = Vec::new();

    let mut occurrence = 0;
    while let Some(pos) = chars.iter().position(|c| *c == INTERVAL) {
        let (start, lhs) = match left_operand(&chars, pos, epsilon) {
            Some(start) => (start, chars[start..pos].to_vec()),
            None => {
                ambiguities.push(RewriteAmbiguity {
                    occurrence,
                    side: Side::Left,
                });
                (pos, vec![epsilon])
            }
        };

        let (end, rhs) = match right_operand(&chars, pos, epsilon) {
            Some(end) => (end, chars[pos + 1..end].to_vec()),
            None => {
                ambiguities.push(RewriteAmbiguity {
                    occurrence,
                    side: Side::Right,
                });
                (pos + 1, vec![epsilon])
            }
        };

        let mut expansion = Vec::with_capacity(6 * (lhs.len() + rhs.len()));
        expansion.push('(');
        expansion.extend(lhs.iter().chain(&lhs));
        expansion.push('+');
        expansion.extend(lhs.iter().chain(&rhs));
        expansion.push('+');
        expansion.extend(rhs.iter().chain(&rhs));
        expansion.push(')');

        chars.splice(start..end, expansion);
        occurrence += 1;
    }

    Expansion {
        expression: chars.into_iter().collect(),
        ambiguities,
    }
}

fn is_atom(c: char, epsilon: char) -> bool {
    c == epsilon || c.is_ascii_alphabetic()
}

/// Returns the start of the operand ending right before `pos`.
fn left_operand(chars: &[char], pos: usize, epsilon: char) -> Option<usize> {
    let mut end = pos;
    while end > 0 && chars[end - 1] == '*' {
        end -= 1;
    }

    let last = *chars.get(end.checked_sub(1)?)?;
    match last {
        ')' => {
            let mut depth = 0usize;
            for i in (0..end).rev() {
                match chars[i] {
                    ')' => depth += 1,
                    '(' => {
                        depth -= 1;
                        if depth == 0 {
                            return Some(i);
                        }
                    }
                    _ => (),
                }
            }
            None
        }
        c if is_atom(c, epsilon) => Some(end - 1),
        _ => None,
    }
}

/// Returns the end (exclusive) of the operand starting right after `pos`.
fn right_operand(chars: &[char], pos: usize, epsilon: char) -> Option<usize> {
    let start = pos + 1;

    let mut end = match *chars.get(start)? {
        '(' => {
            let mut depth = 0usize;
            let mut close = None;
            for (i, c) in chars.iter().enumerate().skip(start) {
                match c {
                    '(' => depth += 1,
                    ')' => {
                        depth -= 1;
                        if depth == 0 {
                            close = Some(i);
                            break;
                        }
                    }
                    _ => (),
                }
            }
            close? + 1
        }
        c if is_atom(c, epsilon) => start + 1,
        _ => return None,
    };

    while chars.get(end) == Some(&'*') {
        end += 1;
    }

    Some(end)
}

#[cfg(test)]
mod tests {
    use super::{expand, RewriteAmbiguity, Side};

    fn expanded(input: &str) -> String {
        let expansion = expand(input, 'λ');
        assert!(expansion.ambiguities.is_empty(), "{:?}", expansion.ambiguities);
        expansion.expression
    }

    #[test]
    fn parenthesized_operands() {
        assert_eq!(expanded("(a*)$(b*)"), "((a*)(a*)+(a*)(b*)+(b*)(b*))");
    }

    #[test]
    fn symbol_operands() {
        assert_eq!(expanded("a$b"), "(aa+ab+bb)");
        assert_eq!(expanded("xa*$bc"), "x(a*a*+a*b+bb)c");
        assert_eq!(expanded("(ab)*$c*"), "((ab)*(ab)*+(ab)*c*+c*c*)");
        assert_eq!(expanded("λ$a"), "(λλ+λa+aa)");
    }

    #[test]
    fn nested_groups() {
        assert_eq!(
            expanded("((a)b)$(c(d))"),
            "(((a)b)((a)b)+((a)b)(c(d))+(c(d))(c(d)))"
        );
    }

    #[test]
    fn left_to_right() {
        assert_eq!(
            expanded("a$b$c"),
            "((aa+ab+bb)(aa+ab+bb)+(aa+ab+bb)c+cc)"
        );
    }

    #[test]
    fn interval_inside_right_operand() {
        assert_eq!(
            expanded("a$(b$c)"),
            "(aa+a((bb+bc+cc))+((bb+bc+cc))((bb+bc+cc)))"
        );
    }

    #[test]
    fn whitespace() {
        assert_eq!(expanded("a $ b"), "(aa+ab+bb)");
        assert_eq!(expanded(" a b "), " a b ");
    }

    #[test]
    fn missing_operands() {
        let expansion = expand("$a", 'λ');
        assert_eq!(expansion.expression, "(λλ+λa+aa)");
        assert_eq!(
            expansion.ambiguities,
            [RewriteAmbiguity {
                occurrence: 0,
                side: Side::Left
            }]
        );

        let expansion = expand("a+b$", 'ε');
        assert_eq!(expansion.expression, "a+(bb+bε+εε)");
        assert_eq!(expansion.ambiguities[0].side, Side::Right);

        let expansion = expand("a+$)", 'λ');
        assert_eq!(expansion.expression, "a+(λλ+λλ+λλ))");
        assert_eq!(expansion.ambiguities.len(), 2);
        assert_eq!(
            expansion.ambiguities[1].to_string(),
            "interval operator #0 has no right operand, the empty string is used instead"
        );
    }

    #[test]
    fn unbalanced_operands_are_missing() {
        let expansion = expand("a)$(b", 'λ');

        assert_eq!(expansion.expression, "a)(λλ+λλ+λλ)(b");
        assert_eq!(expansion.ambiguities.len(), 2);
    }
}
