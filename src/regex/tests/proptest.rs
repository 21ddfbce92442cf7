use proptest::{collection, prelude::*};
use std::collections::BTreeSet;

use crate::{
    fsm::{Nfa, Simulatable},
    generator::{Generator, Strategy as ParseStrategy},
    regex::ast::{Ast, ExprKind},
};

impl std::fmt::Display for ExprKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ExprKind::*;
        match self {
            Concat(exprs) => {
                for expr in exprs {
                    match expr {
                        Alt(..) => write!(f, "({})", expr)?,
                        _ => write!(f, "{}", expr)?,
                    }
                }
                Ok(())
            }
            Empty => write!(f, "λ"),
            Void => Ok(()),
            Alt(lhs, rhs) => write!(f, "{}+{}", lhs, rhs),
            Lit(c) => write!(f, "{}", c),
            Star(expr) => match **expr {
                Lit(_) | Empty | Group(_) | Star(_) => write!(f, "{}*", expr),
                _ => write!(f, "({})*", expr),
            },
            Group(expr) => write!(f, "({})", expr),
        }
    }
}

/// Positions of `input` at which a match of `expr` starting at `start` can
/// end.
fn ends(expr: &ExprKind, input: &[char], start: usize) -> BTreeSet<usize> {
    use ExprKind::*;
    match expr {
        Concat(exprs) => exprs.iter().fold(BTreeSet::from([start]), |positions, expr| {
            positions
                .into_iter()
                .flat_map(|pos| ends(expr, input, pos))
                .collect()
        }),
        Empty => BTreeSet::from([start]),
        Void => BTreeSet::new(),
        Alt(lhs, rhs) => {
            let mut positions = ends(lhs, input, start);
            positions.extend(ends(rhs, input, start));
            positions
        }
        Lit(c) => match input.get(start) {
            Some(next) if next == c => BTreeSet::from([start + 1]),
            _ => BTreeSet::new(),
        },
        Star(expr) => {
            let mut positions = BTreeSet::from([start]);
            let mut frontier = vec![start];
            while let Some(pos) = frontier.pop() {
                for end in ends(expr, input, pos) {
                    if positions.insert(end) {
                        frontier.push(end);
                    }
                }
            }
            positions
        }
        Group(expr) => ends(expr, input, start),
    }
}

fn matches(expr: &ExprKind, input: &str) -> bool {
    let input = input.chars().collect::<Vec<_>>();
    ends(expr, &input, 0).contains(&input.len())
}

/// Every string over `{a, b}` of length at most 4.
fn words() -> Vec<String> {
    let mut words = vec![String::new()];
    let mut last = vec![String::new()];
    for _ in 0..4 {
        last = last
            .iter()
            .flat_map(|word| ['a', 'b'].map(|c| format!("{}{}", word, c)))
            .collect();
        words.extend(last.iter().cloned());
    }
    words
}

fn assert_language(nfa: &Nfa, expr: &ExprKind, regex: &str) -> Result<(), TestCaseError> {
    for word in words() {
        prop_assert_eq!(
            nfa.accepts(&word),
            matches(expr, &word),
            "`{}` on {:?}",
            regex,
            word
        );
    }
    Ok(())
}

fn arb_expr_kind() -> impl Strategy<Value = ExprKind> {
    let leaf = prop_oneof![
        4 => prop_oneof![Just('a'), Just('b'), Just('c')].prop_map(ExprKind::Lit),
        1 => Just(ExprKind::Empty),
    ];

    leaf.prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            collection::vec(inner.clone(), 2..=3).prop_map(ExprKind::Concat),
            (inner.clone(), inner.clone())
                .prop_map(|(lhs, rhs)| ExprKind::Alt(Box::new(lhs), Box::new(rhs))),
            inner.clone().prop_map(ExprKind::star),
            inner.prop_map(|expr| ExprKind::Group(Box::new(expr))),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn printed_expression_has_the_same_language(
        expr in arb_expr_kind(),
        strategy in any::<ParseStrategy>()
    ) {
        let regex = expr.to_string();
        let nfa = Generator::builder()
            .with_strategy(strategy)
            .build()
            .generate(&regex)
            .unwrap();

        assert_language(&nfa, &expr, &regex)?;
    }

    #[test]
    fn compiled_ast_has_the_same_language(expr in arb_expr_kind()) {
        let regex = expr.to_string();
        let nfa = Nfa::from(Ast(expr.clone()));

        assert_language(&nfa, &expr, &regex)?;
    }

    #[test]
    fn interval_is_the_union_of_pairs(
        lhs in arb_expr_kind(),
        rhs in arb_expr_kind(),
        strategy in any::<ParseStrategy>()
    ) {
        let regex = format!("({})$({})", lhs, rhs);
        let generator = Generator::builder().with_strategy(strategy).build();

        let expansion = generator.expand(&regex);
        prop_assert!(expansion.ambiguities.is_empty());

        let pair = |first: &ExprKind, second: &ExprKind| {
            ExprKind::Concat(vec![first.clone(), second.clone()])
        };
        let expected = ExprKind::Alt(
            Box::new(pair(&lhs, &lhs)),
            Box::new(ExprKind::Alt(
                Box::new(pair(&lhs, &rhs)),
                Box::new(pair(&rhs, &rhs)),
            )),
        );

        assert_language(&generator.generate(&regex).unwrap(), &expected, &regex)?;
    }
}
