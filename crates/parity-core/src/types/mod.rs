//! Value types shared across the verifier.

pub mod collections;
pub mod symbol;

pub use symbol::{Identifier, SymbolPath};
