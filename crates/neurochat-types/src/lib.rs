//! Shared domain types for the neurochat client.
//!
//! This crate contains the types used across the client: conversation
//! messages, the outbound history wire format, and the backend error
//! taxonomy.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod error;
pub mod history;
pub mod message;
