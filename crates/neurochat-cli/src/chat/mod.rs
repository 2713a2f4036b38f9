//! Interactive terminal chat experience.
//!
//! Implements the session flow end to end: the login prompt that resolves
//! the session gate, the welcome banner, the input loop with its thinking
//! spinner, slash commands, and markdown rendering of assistant replies.
//! Entry point: `loop_runner::run_chat`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod login;
pub mod loop_runner;
pub mod renderer;
