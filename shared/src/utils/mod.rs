//! Utility functions shared between server crates

pub mod digest;
pub mod phone;
pub mod validation;
