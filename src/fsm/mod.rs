pub use self::{
    alloc::StateAllocator,
    nfa::{
        compiler::Compiler as NfaCompiler,
        model::{Input, Nfa},
    },
};

pub(crate) use self::nfa::dot::DEFAULT_EPSILON;
#[cfg(test)]
pub(crate) use self::traits::Simulatable;

/// Opaque identifier of a state, unique within one construction session.
pub type StateId = usize;

mod alloc;
mod nfa;
#[cfg(test)]
mod traits;
