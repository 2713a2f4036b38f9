//! Session gate: holds the optional display name.
//!
//! The gate decides whether the conversation view is usable yet. It never
//! touches the network and nothing survives the process: the name exists
//! only to label the user's own messages.

use tracing::debug;

/// Gates the conversation behind a committed display name.
#[derive(Debug, Default)]
pub struct SessionGate {
    name: Option<String>,
}

impl SessionGate {
    /// Create an unresolved gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a candidate name.
    ///
    /// A trimmed-empty candidate is rejected silently and the gate stays
    /// unresolved. Otherwise the trimmed name is committed and the gate
    /// resolves. Identity is set once per session: a second `join` on a
    /// resolved gate is a no-op.
    ///
    /// Returns whether the gate is resolved after the call.
    pub fn join(&mut self, candidate: &str) -> bool {
        if self.name.is_some() {
            return true;
        }
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            return false;
        }
        debug!(name = trimmed, "session gate resolved");
        self.name = Some(trimmed.to_string());
        true
    }

    /// The committed display name, if the gate has resolved.
    pub fn user(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether a name has been committed.
    pub fn is_resolved(&self) -> bool {
        self.name.is_some()
    }
}
