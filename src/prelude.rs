/// Generic wrapper tuple struct for the new-type pattern.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct W<T>(pub T);
