//! Tests for the account service

#[cfg(test)]
mod mocks;
