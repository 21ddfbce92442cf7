use super::{
    super::{StateAllocator, StateId},
    model::{Input, Nfa},
};
use crate::regex::ast::{Ast, ExprKind};

/// Regex AST to NFA compiler.
///
/// Holds the [`StateAllocator`] of one construction session and exposes the
/// composition primitives of Thompson's construction. Every primitive returns
/// a new [`Nfa`] and consumes its operands.
#[derive(Debug, Default)]
pub struct Compiler {
    states: StateAllocator,
}

impl From<Ast> for Nfa {
    fn from(value: Ast) -> Self {
        Compiler::new().compile(&value.0)
    }
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restarts state numbering. Automatons built before the reset must not
    /// be composed with automatons built after it.
    pub fn reset(&mut self) {
        self.states.reset();
    }

    /// Returns the allocator of the current session.
    pub fn allocator(&self) -> &StateAllocator {
        &self.states
    }

    /// Accepts exactly the one-symbol string `c`.
    pub fn symbol(&mut self, c: char) -> Nfa {
        let (start, end) = (self.new_state(), self.new_state());

        let mut nfa = Nfa::builder();
        nfa.add_state(start);
        nfa.add_state(end);
        nfa.add_transition(start, end, Input::Literal(c));

        nfa.with_start_state(start).with_final_states([end]).build()
    }

    /// Accepts only the empty string: a single state that is both start and
    /// accepting.
    pub fn epsilon(&mut self) -> Nfa {
        let state = self.new_state();

        let mut nfa = Nfa::builder();
        nfa.add_state(state);

        nfa.with_start_state(state).with_final_states([state]).build()
    }

    /// Accepts nothing: a single start state and no accepting states.
    pub fn empty(&mut self) -> Nfa {
        let state = self.new_state();

        let mut nfa = Nfa::builder();
        nfa.add_state(state);

        nfa.with_start_state(state).build()
    }

    /// Fresh start state with epsilon edges into both operands and a fresh
    /// final state reached from every accepting state of either operand.
    pub fn union(&mut self, lhs: Nfa, rhs: Nfa) -> Nfa {
        let (start, end) = (self.new_state(), self.new_state());

        let mut nfa = Nfa::builder();
        nfa.add_state(start);
        nfa.add_state(end);

        for operand in [lhs, rhs] {
            let (operand_start, operand_finals) = nfa.absorb(operand);
            nfa.add_transition(start, operand_start, Input::Eps);
            for fin in operand_finals {
                nfa.add_transition(fin, end, Input::Eps);
            }
        }

        nfa.with_start_state(start).with_final_states([end]).build()
    }

    /// Links every accepting state of `lhs` to the start of `rhs`. The result
    /// starts where `lhs` starts and accepts where `rhs` accepts.
    pub fn concat(&mut self, lhs: Nfa, rhs: Nfa) -> Nfa {
        let mut nfa = Nfa::builder();
        let (lhs_start, lhs_finals) = nfa.absorb(lhs);
        let (rhs_start, rhs_finals) = nfa.absorb(rhs);

        for fin in lhs_finals {
            nfa.add_transition(fin, rhs_start, Input::Eps);
        }

        nfa.with_start_state(lhs_start)
            .with_final_states(rhs_finals)
            .build()
    }

    /// Kleene closure: zero repetitions through the fresh start state, more
    /// through the loop back from every accepting state of the operand.
    pub fn star(&mut self, operand: Nfa) -> Nfa {
        let (start, end) = (self.new_state(), self.new_state());

        let mut nfa = Nfa::builder();
        nfa.add_state(start);
        nfa.add_state(end);

        let (operand_start, operand_finals) = nfa.absorb(operand);
        nfa.add_transition(start, operand_start, Input::Eps);
        nfa.add_transition(start, end, Input::Eps);

        for fin in operand_finals {
            nfa.add_transition(fin, operand_start, Input::Eps);
            nfa.add_transition(fin, end, Input::Eps);
        }

        nfa.with_start_state(start).with_final_states([end]).build()
    }

    /// Compiles an expression bottom-up. Operands are always compiled before
    /// the operator that combines them allocates its own states.
    pub(crate) fn compile(&mut self, expr: &ExprKind) -> Nfa {
        match expr {
            ExprKind::Concat(exprs) => {
                let mut exprs = exprs.iter();
                let Some(first) = exprs.next() else {
                    return self.epsilon();
                };

                let first = self.compile(first);
                exprs.fold(first, |lhs, expr| {
                    let rhs = self.compile(expr);
                    self.concat(lhs, rhs)
                })
            }
            ExprKind::Empty => self.epsilon(),
            ExprKind::Void => self.empty(),
            ExprKind::Alt(lhs, rhs) => {
                let lhs = self.compile(lhs);
                let rhs = self.compile(rhs);
                self.union(lhs, rhs)
            }
            ExprKind::Lit(c) => self.symbol(*c),
            ExprKind::Star(expr) => {
                let operand = self.compile(expr);
                self.star(operand)
            }
            ExprKind::Group(expr) => self.compile(expr),
        }
    }

    fn new_state(&mut self) -> StateId {
        self.states.allocate()
    }
}
