//! Login prompt resolving the session gate.
//!
//! Keeps asking until a non-blank codename is committed. The name never
//! leaves the process; it only labels the user's side of the transcript.

use console::style;
use dialoguer::Input;

use neurochat_core::gate::SessionGate;

/// Prompt until the session gate resolves; returns the committed codename.
pub fn prompt_codename(gate: &mut SessionGate) -> anyhow::Result<String> {
    loop {
        let candidate: String = Input::new()
            .with_prompt(format!("  {}", style("Enter codename").cyan()))
            .allow_empty(true)
            .interact_text()?;

        if gate.join(&candidate) {
            if let Some(name) = gate.user() {
                return Ok(name.to_string());
            }
        }

        println!("  {}", style("A codename is required to link up.").dim());
    }
}
