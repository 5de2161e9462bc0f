//! Account service module
//!
//! This module implements the account flows end to end:
//! - Registration with SMS code verification
//! - Password login (email or phone identifier, image code)
//! - SMS code login
//! - SMS code issuance with scene-dependent uniqueness rules
//!
//! Validation runs in two phases, mirroring form semantics: a field phase
//! (requiredness, format, length) checked independently per field, then a
//! clean phase in field declaration order whose hooks only run for fields
//! that passed their own field phase. Errors accumulate across fields.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AccountConfig;
pub use service::AccountService;
