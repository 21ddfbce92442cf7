use super::{
    super::StateId,
    model::{Input, Nfa},
};
use crate::prelude::W;
use std::collections::BTreeSet;

/// Marker used for epsilon edges when no other marker is configured.
pub(crate) const DEFAULT_EPSILON: char = 'λ';

impl std::fmt::Display for Nfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_dot())
    }
}

impl std::fmt::Display for W<&BTreeSet<StateId>> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self
            .0
            .iter()
            .map(|id| format!("q{}", id))
            .collect::<Vec<_>>();

        write!(f, "{}", names.join(" "))
    }
}

impl Nfa {
    /// Converts the NFA to dot language using the [graphviz](https://graphviz.org/docs/layouts/dot/)
    /// dot language format. Epsilon edges are labelled `λ`.
    pub fn to_dot(&self) -> String {
        self.to_dot_with_epsilon(DEFAULT_EPSILON)
    }

    /// Same as [`to_dot`](Self::to_dot), labelling epsilon edges with
    /// `epsilon`.
    ///
    /// States are laid out left to right, accepting states are drawn as
    /// double circles and an invisible point node has the single arrow into
    /// the start state.
    pub fn to_dot_with_epsilon(&self, epsilon: char) -> String {
        let other_states = self
            .states
            .difference(&self.final_states)
            .copied()
            .collect::<BTreeSet<_>>();

        let mut lines = vec![
            "rankdir = LR;".to_string(),
            String::new(),
            "node [shape = point]; start;".to_string(),
        ];

        if !self.final_states.is_empty() {
            lines.push(format!(
                "node [shape = doublecircle]; {};",
                W(&self.final_states)
            ));
        }
        if !other_states.is_empty() {
            lines.push(format!("node [shape = circle]; {};", W(&other_states)));
        }

        lines.push(String::new());
        lines.push(format!("start -> q{};", self.start_state));
        lines.extend(self.transition_dot(epsilon));

        format!(
            "digraph nfa {{\n{}\n}}",
            lines
                .iter()
                .map(|l| if l.is_empty() { String::new() } else { format!("\t{}", l) })
                .collect::<Vec<String>>()
                .join("\n")
        )
    }

    /// Converts the transitions to the dot format and returns an iterator over it.
    fn transition_dot(&self, epsilon: char) -> impl Iterator<Item = String> + '_ {
        self.transitions().map(move |(start, input, dest)| {
            let label = match input {
                Input::Literal(c) => *c,
                Input::Eps => epsilon,
            };

            format!("q{} -> q{} [label = \"{}\"];", start, dest, label)
        })
    }
}
