pub(crate) mod compiler;
pub(crate) mod dot;
pub(crate) mod model;
#[cfg(test)]
pub(crate) mod sim;
