use super::{
    super::{
        traits::{Simulatable, Simulate},
        StateId,
    },
    model::{Input, Nfa},
};
use std::collections::BTreeSet;

/// Subset simulation of an [`Nfa`]: tracks the epsilon-closed set of states
/// the machine can be in.
pub(crate) struct NfaSimulator<'a> {
    /// Nfa we are simulating.
    nfa: &'a Nfa,
    current_states: BTreeSet<StateId>,
}

impl<'a> NfaSimulator<'a> {
    pub(crate) fn new(nfa: &'a Nfa) -> Self {
        Self {
            nfa,
            current_states: nfa.eps_closure_of([nfa.start_state()]),
        }
    }
}

impl Simulatable for Nfa {
    type Simulator<'a> = NfaSimulator<'a>;

    fn to_simulator(&self) -> Self::Simulator<'_> {
        NfaSimulator::new(self)
    }
}

impl Simulate for NfaSimulator<'_> {
    fn is_accepting(&self) -> bool {
        self.current_states
            .iter()
            .any(|state_id| self.nfa.is_final(*state_id))
    }

    fn feed(&mut self, input: char) -> bool {
        let next_states = self
            .current_states
            .iter()
            .flat_map(|state_id| self.nfa.destinations(*state_id, Input::Literal(input)))
            .collect::<Vec<_>>();

        self.current_states = self.nfa.eps_closure_of(next_states);

        self.is_accepting()
    }
}
