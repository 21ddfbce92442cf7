use crate::{
    fsm::{Nfa, DEFAULT_EPSILON},
    regex::{
        is_reserved,
        parser::{self, ParseResult},
        precedence,
        rewriter::{self, Expansion},
    },
};

/// Parsing strategy used to turn an expression into an automaton. Both accept
/// the same grammar and report the same error kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Strategy {
    /// Builds an ast first and compiles it afterwards.
    #[default]
    RecursiveDescent,
    /// Operator-precedence (shunting-yard) parsing that composes automatons
    /// while parsing.
    Precedence,
}

/// A character that cannot denote the empty string because it is whitespace
/// or an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is reserved and cannot be used as the epsilon marker")]
pub struct ReservedEpsilon(pub char);

/// Regular expression to epsilon-NFA generator.
///
/// ```
/// let nfa = kleene::Generator::builder()
///     .with_epsilon('ε')
///     .unwrap()
///     .build()
///     .generate("a*b+ε")
///     .unwrap();
///
/// assert_eq!(nfa.final_states().count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator {
    epsilon: char,
    expand_intervals: bool,
    strategy: Strategy,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            expand_intervals: true,
            strategy: Strategy::default(),
        }
    }
}

impl Generator {
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::default()
    }

    /// Character denoting the empty string.
    pub fn epsilon(&self) -> char {
        self.epsilon
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Rewrites the interval operators of `input`. The input is returned
    /// unchanged when interval expansion is disabled.
    pub fn expand(&self, input: &str) -> Expansion {
        if self.expand_intervals {
            rewriter::expand(input, self.epsilon)
        } else {
            Expansion {
                expression: input.to_string(),
                ambiguities: Vec::new(),
            }
        }
    }

    /// Builds the epsilon-NFA recognizing the language of `input`.
    ///
    /// Every call numbers its states from zero. Error positions refer to the
    /// expanded expression, which is attached to the error as its source.
    ///
    /// Interval operators with a missing operand do not fail the build and
    /// are not reported here. Use [`expand`](Self::expand) to inspect the
    /// [`RewriteAmbiguity`](crate::RewriteAmbiguity)s of an input.
    pub fn generate(&self, input: &str) -> ParseResult<Nfa> {
        let Expansion { expression, .. } = self.expand(input);

        let result = match self.strategy {
            Strategy::RecursiveDescent => parser::Parser::new(&expression, self.epsilon)
                .parse()
                .map(Nfa::from),
            Strategy::Precedence => precedence::Parser::new(&expression, self.epsilon).parse(),
        };

        result.map_err(|errors| errors.set_source(expression.as_str()))
    }
}

/// Builder for a [`Generator`].
#[derive(Debug, Default)]
pub struct GeneratorBuilder {
    generator: Generator,
}

impl GeneratorBuilder {
    /// Sets the character denoting the empty string (`λ` by default).
    ///
    /// Whitespace and the operator characters `( ) + | . * $` are rejected.
    pub fn with_epsilon(mut self, epsilon: char) -> Result<Self, ReservedEpsilon> {
        if is_reserved(epsilon) {
            return Err(ReservedEpsilon(epsilon));
        }

        self.generator.epsilon = epsilon;
        Ok(self)
    }

    /// Enables or disables the rewriting of `$` (enabled by default).
    pub fn with_interval_expansion(mut self, enabled: bool) -> Self {
        self.generator.expand_intervals = enabled;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.generator.strategy = strategy;
        self
    }

    pub fn build(self) -> Generator {
        self.generator
    }
}
