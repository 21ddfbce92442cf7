/// Finite-state machines that can be simulated on some input.
pub(crate) trait Simulatable {
    type Simulator<'a>: Simulate
    where
        Self: 'a;

    /// Creates a simulator positioned at the start of the machine.
    fn to_simulator(&self) -> Self::Simulator<'_>;

    /// Whether the machine accepts the entire `input`.
    fn accepts(&self, input: &str) -> bool {
        self.to_simulator().run(input)
    }
}

pub(crate) trait Simulate {
    /// Simulates the finite-state machine from start to finish and returns
    /// whether it accepts the input.
    fn run(mut self, input: &str) -> bool
    where
        Self: Sized,
    {
        let accept = self.is_accepting();
        input.chars().map(|c| self.feed(c)).last().unwrap_or(accept)
    }

    /// Returns whether the finite-state machine accepts the input fed so far.
    fn is_accepting(&self) -> bool;

    /// Feeds a single character to the finite-state machine and returns
    /// whether it has reached an accepting state.
    fn feed(&mut self, input: char) -> bool;
}
