//! Async readline input for the chat loop.
//!
//! Thin wrapper over `rustyline_async::Readline`, mapping its events to the
//! three things the loop cares about: a submitted line, Ctrl+D, Ctrl+C.

use rustyline_async::{Readline, ReadlineError, SharedWriter};

/// What the user did at the prompt.
#[derive(Debug)]
pub enum InputEvent {
    /// A submitted line, exactly as typed.
    Line(String),
    /// End of file (Ctrl+D).
    Eof,
    /// Interrupt (Ctrl+C).
    Interrupted,
}

/// Chat prompt wrapping `rustyline_async::Readline`.
pub struct ChatPrompt {
    rl: Readline,
}

impl ChatPrompt {
    /// Create the prompt.
    ///
    /// The returned `SharedWriter` can print without clobbering the line
    /// being edited.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, writer) = Readline::new(prompt)?;
        Ok((Self { rl }, writer))
    }

    /// Read one line.
    ///
    /// The text is passed through untrimmed; the conversation controller
    /// decides what counts as empty.
    pub async fn read_line(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(rustyline_async::ReadlineEvent::Line(line)) => InputEvent::Line(line),
            Ok(rustyline_async::ReadlineEvent::Eof) => InputEvent::Eof,
            Ok(rustyline_async::ReadlineEvent::Interrupted) => InputEvent::Interrupted,
            Err(_) => InputEvent::Eof,
        }
    }

    /// Clear the terminal screen.
    pub fn clear(&mut self) {
        let _ = self.rl.clear();
    }
}
