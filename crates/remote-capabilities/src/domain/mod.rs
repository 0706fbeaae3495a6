//! # Domain Layer
//!
//! Pure authentication, aggregation and validation logic with no I/O
//! dependencies. Every function here is stateless and safe to call
//! concurrently.

pub mod aggregation;
pub mod errors;
pub mod identifiers;
pub mod message;
pub mod peer;
pub mod validation;
