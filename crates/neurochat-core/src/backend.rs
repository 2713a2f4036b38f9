//! ChatBackend trait definition.
//!
//! This is the port the conversation controller talks to. The concrete HTTP
//! implementation lives in neurochat-cli; tests substitute their own.

use neurochat_types::error::BackendError;
use neurochat_types::history::HistoryTurn;

/// Port for the remote chat backend.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). One call to
/// [`ChatBackend::send`] corresponds to exactly one outbound request; the
/// trait exposes no retry, timeout, or cancellation surface.
pub trait ChatBackend: Send + Sync {
    /// Human-readable backend name (e.g. "http").
    fn name(&self) -> &str;

    /// Send one user message with its prior-turn history and return the
    /// assistant's reply text.
    fn send(
        &self,
        message: &str,
        history: &[HistoryTurn],
    ) -> impl std::future::Future<Output = Result<String, BackendError>> + Send;
}
