//! Domain layer containing business entities and their invariants.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
