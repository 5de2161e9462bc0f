//! Request payload types for the HTTP surface.

pub mod account;
