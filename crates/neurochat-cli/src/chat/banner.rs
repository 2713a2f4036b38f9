//! Welcome banner shown once the session gate resolves.

use console::style;

/// Print the banner ahead of the chat loop.
///
/// Shows the product name, the committed codename, and the backend
/// endpoint, with a hint about commands and exit.
pub fn print_welcome_banner(codename: &str, endpoint: &str) {
    println!();
    println!("  {}", style("NEURAL CHAT").cyan().bold());
    println!("  {}", style("Link established to the neural core.").dim());
    println!();
    println!("  {}  {}", style("Codename:").bold(), style(codename).dim());
    println!("  {}  {}", style("Endpoint:").bold(), style(endpoint).dim());
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
