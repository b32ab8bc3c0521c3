use inksac::prelude::*;

use crate::process::operator_prefix;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn without_color() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    /// Colors a command line token by token. The command word is cyan when
    /// `is_known` accepts it and red otherwise; redirections are yellow and
    /// `$NAME` references green. Whitespace is kept as typed so the cursor
    /// position stays valid.
    pub fn highlight_command(&self, input: &str, is_known: impl Fn(&str) -> bool) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return input.to_string();
        }

        let mut out = String::with_capacity(input.len() * 2);
        let mut first = true;
        let mut rest = input;

        while !rest.is_empty() {
            let word_start = rest.find(|c: char| !c.is_whitespace()).unwrap_or(rest.len());
            out.push_str(&rest[..word_start]);
            rest = &rest[word_start..];
            if rest.is_empty() {
                break;
            }

            let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let word = &rest[..word_end];
            rest = &rest[word_end..];

            let style = if operator_prefix(word).is_some() {
                Style::builder().foreground(Color::Yellow).build()
            } else if word.starts_with('$') && word.len() > 1 {
                Style::builder().foreground(Color::Green).build()
            } else if first && is_known(word) {
                Style::builder().foreground(Color::Cyan).bold().build()
            } else if first {
                Style::builder().foreground(Color::Red).build()
            } else {
                out.push_str(word);
                continue;
            };
            first = false;
            out.push_str(&word.style(style).to_string());
        }

        out
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return hint.to_string();
        }

        let hint_style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();
        hint.style(hint_style).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_is_identity() {
        let highlighter = SyntaxHighlighter::without_color();
        let line = "  echo  $HOME >out.txt";
        assert_eq!(highlighter.highlight_command(line, |_| true), line);
        assert_eq!(highlighter.highlight_hint("hint"), "hint");
    }
}
