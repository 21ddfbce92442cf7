use super::StateId;

/// Hands out [`StateId`]s for one construction session.
///
/// Every [`Nfa`](super::Nfa) built while composing a single expression draws
/// its states from the same allocator, so ids never collide when operands
/// are merged. A new allocator (or a [`reset`](Self::reset) one) starts
/// counting at zero again.
#[derive(Debug, Default)]
pub struct StateAllocator {
    next: StateId,
}

impl StateAllocator {
    /// Creates an allocator whose first id is `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an id distinct from every id handed out since the last reset.
    pub fn allocate(&mut self) -> StateId {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Restarts the sequence.
    pub fn reset(&mut self) {
        self.next = 0;
    }

    /// Amount of ids handed out since the last reset.
    pub fn allocated(&self) -> usize {
        self.next
    }
}
