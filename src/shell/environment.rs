use crate::core::env::ShellVars;

/// Characters that separate tokens on a command line.
pub const DELIMITERS: &[char] = &[' ', '\t', '\r', '\n', '\x07'];

/// Splits a line on [`DELIMITERS`], dropping empty pieces.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split(DELIMITERS).filter(|token| !token.is_empty())
}

/// Tokenizes `line` and substitutes every `$NAME` token. Unknown names become
/// empty arguments rather than disappearing.
pub fn parse_line(line: &str, vars: &ShellVars) -> Vec<String> {
    tokenize(line)
        .map(|token| vars.expand_value(token).into_owned())
        .collect()
}

/// Rebuilds the canonical single-spaced form of a line, before substitution.
pub fn normalize_line(line: &str) -> String {
    tokenize(line).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    fn test_tokenize_all_delimiters() {
        let tokens: Vec<&str> = tokenize(" echo\thello\r\n world\x07 ").collect();
        assert_eq!(tokens, vec!["echo", "hello", "world"]);
    }

    #[test]
    fn test_tokenize_blank_line() {
        assert_eq!(tokenize("  \t ").count(), 0);
    }

    #[test]
    #[serial]
    fn test_parse_line_substitutes_variables() {
        let mut vars = ShellVars::new();
        vars.set("GREETING", "hi").unwrap();
        env::set_var("WSH_PARSE_ENV", "from-env");

        let args = parse_line("echo $GREETING $WSH_PARSE_ENV plain", &vars);
        assert_eq!(args, vec!["echo", "hi", "from-env", "plain"]);
    }

    #[test]
    fn test_missing_variable_leaves_empty_argument() {
        let vars = ShellVars::new();
        let args = parse_line("echo $WSH_NOT_SET_ANYWHERE end", &vars);
        assert_eq!(args, vec!["echo", "", "end"]);
    }

    #[test]
    fn test_embedded_dollar_is_literal() {
        let vars = ShellVars::new();
        let args = parse_line("echo a$b", &vars);
        assert_eq!(args, vec!["echo", "a$b"]);
    }

    #[test]
    fn test_normalize_line() {
        assert_eq!(normalize_line("  echo   $X\tdone \n"), "echo $X done");
    }
}
