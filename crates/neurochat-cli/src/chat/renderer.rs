//! Terminal markdown rendering for assistant replies.
//!
//! Prose, tables, and lists go through termimad; fenced code blocks are
//! highlighted with syntect. User text never passes through here -- what
//! the user typed is echoed verbatim at the prompt, so their input is never
//! interpreted as markup.

use syntect::easy::HighlightLines;
use syntect::highlighting::{Style, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::as_24_bit_terminal_escaped;
use termimad::MadSkin;
use termimad::crossterm::style::Color;

/// Stateless markdown-to-terminal transform for assistant text.
pub struct ReplyRenderer {
    skin: MadSkin,
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl ReplyRenderer {
    pub fn new() -> Self {
        let mut skin = MadSkin::default_dark();
        skin.bold.set_fg(Color::Cyan);
        skin.headers[0].set_fg(Color::Cyan);
        skin.headers[1].set_fg(Color::Cyan);
        skin.inline_code.set_fg(Color::Yellow);

        Self {
            skin,
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    /// Render one complete assistant reply.
    ///
    /// Prose is accumulated and rendered block-wise so multi-line
    /// constructs (tables, lists) keep their alignment; code fences are
    /// cut out and highlighted separately.
    pub fn render(&self, markdown: &str) -> String {
        let mut out = String::new();
        let mut prose = String::new();
        let mut fence: Option<(String, String)> = None;

        for line in markdown.lines() {
            if line.starts_with("```") {
                match fence.take() {
                    None => {
                        // Opening fence: flush the prose block first.
                        self.flush_prose(&mut out, &mut prose);
                        let lang = line.trim_start_matches('`').trim().to_string();
                        fence = Some((lang, String::new()));
                    }
                    Some((lang, code)) => {
                        out.push_str(&self.highlight(&code, &lang));
                        out.push('\n');
                    }
                }
            } else if let Some((_, code)) = fence.as_mut() {
                code.push_str(line);
                code.push('\n');
            } else {
                prose.push_str(line);
                prose.push('\n');
            }
        }

        self.flush_prose(&mut out, &mut prose);

        // Unterminated fence: render what accumulated.
        if let Some((lang, code)) = fence {
            if !code.is_empty() {
                out.push_str(&self.highlight(&code, &lang));
            }
        }

        out
    }

    fn flush_prose(&self, out: &mut String, prose: &mut String) {
        if !prose.is_empty() {
            let rendered = self.skin.term_text(prose.as_str());
            out.push_str(&format!("{rendered}"));
            prose.clear();
        }
    }

    /// Highlight a code block using syntect.
    fn highlight(&self, code: &str, lang: &str) -> String {
        let syntax = if lang.is_empty() {
            self.syntax_set.find_syntax_plain_text()
        } else {
            self.syntax_set
                .find_syntax_by_token(lang)
                .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
        };

        let theme = &self.theme_set.themes["base16-ocean.dark"];
        let mut highlighter = HighlightLines::new(syntax, theme);

        let mut out = String::new();
        for line in code.lines() {
            let ranges: Vec<(Style, &str)> = highlighter
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_default();
            let escaped = as_24_bit_terminal_escaped(&ranges[..], false);
            out.push_str(&format!("  {escaped}\x1b[0m\n"));
        }

        out
    }
}

impl Default for ReplyRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_prose() {
        let renderer = ReplyRenderer::new();
        let out = renderer.render("Hello **world**");
        assert!(out.contains("world"));
    }

    #[test]
    fn test_renders_table_rows() {
        let renderer = ReplyRenderer::new();
        let out = renderer.render("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(!out.is_empty());
    }

    #[test]
    fn test_code_fence_survives() {
        let renderer = ReplyRenderer::new();
        let out = renderer.render("before\n```rust\nlet x = 1;\n```\nafter");
        assert!(out.contains('x'));
        assert!(out.contains("after"));
    }

    #[test]
    fn test_unterminated_fence_still_renders() {
        let renderer = ReplyRenderer::new();
        let out = renderer.render("```\norphaned code");
        assert!(out.contains("orphaned"));
    }
}
