//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that the dispatcher and subscribers call
//! - **Outbound (Driven)**: Codec this subsystem needs for typed results

pub mod inbound;
pub mod outbound;
