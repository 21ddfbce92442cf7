use super::super::StateId;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Epsilon-NFA produced by composing sub-automatons.
///
/// States are plain ids. Whether a state is the start or an accepting state
/// is recorded on the [`Nfa`] and never on the state itself, so the same id
/// can be referenced by an operand and by the automaton it was absorbed
/// into without any flag going stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    pub(super) start_state: StateId,
    pub(super) states: BTreeSet<StateId>,
    pub(super) final_states: BTreeSet<StateId>,
    pub(super) transitions: Transitions,
}

// Ordered maps keep iteration (and therefore dot output) deterministic.
pub(super) type Transitions = BTreeMap<(StateId, Input), BTreeSet<StateId>>;

/// Label of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Input {
    /// A single symbol of the input alphabet.
    Literal(char),
    /// Epsilon input, meaning no input needed (the transition can be made at
    /// any time).
    Eps,
}

impl Nfa {
    /// Creates a builder which is used to construct an NFA.
    pub(super) fn builder() -> NfaBuilder {
        NfaBuilder::new()
    }

    pub fn start_state(&self) -> StateId {
        self.start_state
    }

    /// Returns an iterator over all states in ascending id order.
    pub fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().copied()
    }

    /// Returns an iterator over the accepting states in ascending id order.
    pub fn final_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.final_states.iter().copied()
    }

    pub fn is_final(&self, state_id: StateId) -> bool {
        self.final_states.contains(&state_id)
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Amount of `(origin, input, destination)` triples.
    pub fn transition_count(&self) -> usize {
        self.transitions.values().map(BTreeSet::len).sum()
    }

    /// Returns a flattened iterator over every `(origin, input, destination)`
    /// triple, ordered by origin and then by input.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, &Input, StateId)> + '_ {
        self.transitions
            .iter()
            .flat_map(|((origin, input), destinations)| {
                destinations.iter().map(move |dest| (*origin, input, *dest))
            })
    }

    /// Returns the destinations reachable from `state_id` by taking exactly
    /// one transition labelled `input`.
    pub fn destinations(&self, state_id: StateId, input: Input) -> impl Iterator<Item = StateId> + '_ {
        self.transitions
            .get(&(state_id, input))
            .into_iter()
            .flatten()
            .copied()
    }

    /// Returns all symbols used by the NFA. Epsilon is not part of the
    /// alphabet.
    pub fn alphabet(&self) -> BTreeSet<char> {
        self.transitions
            .keys()
            .filter_map(|(_, input)| match input {
                Input::Literal(c) => Some(*c),
                Input::Eps => None,
            })
            .collect()
    }

    /// Returns an iterator over all states in the epsilon closure of the
    /// given state, including the state itself.
    pub fn eps_closure(&self, state_id: StateId) -> impl Iterator<Item = StateId> {
        self.eps_closure_of([state_id]).into_iter()
    }

    /// Epsilon closure of a set of states.
    pub(crate) fn eps_closure_of(&self, state_ids: impl IntoIterator<Item = StateId>) -> BTreeSet<StateId> {
        let mut result = BTreeSet::new();
        let mut not_visited = VecDeque::new();

        for state_id in state_ids {
            if result.insert(state_id) {
                not_visited.push_back(state_id);
            }
        }

        while let Some(state_id) = not_visited.pop_front() {
            for dest in self.destinations(state_id, Input::Eps) {
                if result.insert(dest) {
                    not_visited.push_back(dest)
                }
            }
        }

        result
    }
}

/// Builder struct for the [`Nfa`].
///
/// Operand automatons are moved into the builder with [`absorb`], which
/// copies their states and transitions and hands back their start and
/// accepting states so the caller can wire them up.
///
/// [`absorb`]: Self::absorb
#[derive(Default)]
pub(super) struct NfaBuilder {
    start_state: Option<StateId>,
    states: BTreeSet<StateId>,
    final_states: BTreeSet<StateId>,
    transitions: Transitions,
}

impl NfaBuilder {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Copies all states and transitions of `nfa` into the builder. Returns
    /// the start state and the accepting states `nfa` had.
    pub(super) fn absorb(&mut self, nfa: Nfa) -> (StateId, BTreeSet<StateId>) {
        let Nfa {
            start_state,
            states,
            final_states,
            transitions,
        } = nfa;

        self.states.extend(states);
        for (key, destinations) in transitions {
            self.transitions.entry(key).or_default().extend(destinations);
        }

        (start_state, final_states)
    }

    /// Registers an (already allocated) state.
    pub(super) fn add_state(&mut self, state_id: StateId) {
        self.states.insert(state_id);
    }

    /// Creates a transition between two states using their [`StateId`]s.
    pub(super) fn add_transition(&mut self, start: StateId, end: StateId, input: Input) {
        self.transitions
            .entry((start, input))
            .or_default()
            .insert(end);
    }

    pub(super) fn with_start_state(mut self, state_id: StateId) -> Self {
        self.start_state = Some(state_id);
        self
    }

    pub(super) fn with_final_states(mut self, state_ids: impl IntoIterator<Item = StateId>) -> Self {
        self.final_states.extend(state_ids);
        self
    }

    /// Builds the [`Nfa`], checks whether all transitions are valid and whether
    /// the start state exists.
    ///
    /// # Panics
    ///
    /// When no start state was set, or when the start state, an accepting
    /// state or a transition refers to a state that was never registered.
    pub(super) fn build(self) -> Nfa {
        let Some(start_state) = self.start_state else {
            panic!("no start state was set");
        };

        if !self.states.contains(&start_state) {
            panic!("start state is not a valid state");
        }

        if !self.final_states.is_subset(&self.states) {
            panic!("one or more final states found that do not exist");
        }

        let dangling = self.transitions.iter().any(|((origin, _), destinations)| {
            !self.states.contains(origin) || !destinations.is_subset(&self.states)
        });
        if dangling {
            panic!("one or more transitions found that refer to states that do not exist");
        }

        Nfa {
            start_state,
            states: self.states,
            final_states: self.final_states,
            transitions: self.transitions,
        }
    }
}
