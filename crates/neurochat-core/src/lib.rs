//! Behavioral logic for the neurochat client.
//!
//! This crate defines the session gate, the conversation controller (message
//! sequence, busy flag, submit lifecycle), and the `ChatBackend` port that
//! the transport layer implements. It depends only on `neurochat-types` --
//! never on reqwest or any terminal crate.

pub mod backend;
pub mod conversation;
pub mod gate;
