//! Static scope resolution.
//!
//! Walks the program once before evaluation and records, for every local
//! variable reference, how many scopes separate it from its binding. Names
//! not found in any local scope are left to the global environment.
//!
//! The pass also reports misplaced `return`, `break` and `continue`,
//! duplicate local bindings, reads of a variable inside its own
//! initializer, and code that follows a `return`.

pub mod resolver;

#[cfg(test)]
mod tests;
