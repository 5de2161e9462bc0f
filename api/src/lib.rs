//! # WorkNest API
//!
//! actix-web surface for the account subsystem: route handlers, request
//! DTOs, the session cookie layer and application wiring.

pub mod app;
pub mod dto;
pub mod middleware;
pub mod routes;
