//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and are in-chat controls only; they never reach
//! the conversation controller and never produce an outbound request.

use console::style;

/// Available slash commands.
#[derive(Debug, PartialEq, Eq)]
pub enum SlashCommand {
    /// Show available commands.
    Help,
    /// Print the transcript so far.
    History,
    /// Clear the terminal screen.
    Clear,
    /// End the session.
    Exit,
    /// Anything else starting with `/`.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input is not a command.
pub fn parse(input: &str) -> Option<SlashCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let name = trimmed
        .split_whitespace()
        .next()
        .unwrap_or(trimmed)
        .to_lowercase();

    match name.as_str() {
        "/help" | "/h" | "/?" => Some(SlashCommand::Help),
        "/history" => Some(SlashCommand::History),
        "/clear" | "/cls" => Some(SlashCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(SlashCommand::Exit),
        other => Some(SlashCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}     {}", style("/help").cyan(), "Show this help message");
    println!(
        "  {}  {}",
        style("/history").cyan(),
        "Print the transcript so far"
    );
    println!("  {}    {}", style("/clear").cyan(), "Clear the screen");
    println!("  {}     {}", style("/exit").cyan(), "End the session");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert_eq!(parse("hello there"), None);
        assert_eq!(parse("  what about /help mid-line"), None);
    }

    #[test]
    fn test_known_commands_and_aliases() {
        assert_eq!(parse("/help"), Some(SlashCommand::Help));
        assert_eq!(parse("/?"), Some(SlashCommand::Help));
        assert_eq!(parse("/history"), Some(SlashCommand::History));
        assert_eq!(parse("  /clear  "), Some(SlashCommand::Clear));
        assert_eq!(parse("/quit"), Some(SlashCommand::Exit));
        assert_eq!(parse("/EXIT"), Some(SlashCommand::Exit));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse("/frobnicate now"),
            Some(SlashCommand::Unknown("/frobnicate".to_string()))
        );
    }
}
