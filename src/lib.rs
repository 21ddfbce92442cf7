//! Regular expressions to epsilon-NFAs.
//!
//! Expressions are built from ASCII letters, the epsilon marker (`λ` unless
//! configured otherwise), union (`+` or `|`), concatenation (adjacency or
//! `.`), the Kleene star and parentheses. The interval operator `L$R` is
//! rewritten to `(LL+LR+RR)` before parsing.
//!
//! ```
//! let nfa = kleene::parse("(a+b)*abb").unwrap();
//!
//! assert_eq!(nfa.final_states().count(), 1);
//! println!("{}", nfa.to_dot());
//! ```

pub use self::{
    fsm::{Input, Nfa, NfaCompiler, StateAllocator, StateId},
    generator::{Generator, GeneratorBuilder, ReservedEpsilon, Strategy},
    regex::{
        Expansion, ParseError, ParseErrorKind, ParseErrors, ParseResult, RewriteAmbiguity, Side,
    },
};

mod fsm;
mod generator;
mod iter;
mod prelude;
mod regex;

/// Builds the epsilon-NFA of `input` with the default [`Generator`].
pub fn parse(input: &str) -> ParseResult<Nfa> {
    Generator::default().generate(input)
}

/// Expands the interval operators of `input` with the default epsilon marker.
pub fn expand(input: &str) -> Expansion {
    Generator::default().expand(input)
}
