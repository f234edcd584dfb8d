mod errors;
mod monetary;
#[cfg(test)]
mod tests;

pub use errors::MonetaryError;
pub use monetary::Monetary;

/// Account identifiers are ordered lexicographically. That ordering is the one
/// every two-lock acquisition in the engine derives its lock order from.
pub type AccountId = String;
