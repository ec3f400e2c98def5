//! Input tokenizer
//!
//! Splits on whitespace; a double-quoted run stays one token and the quotes
//! are dropped from the final value.

use regex_lite::Regex;
use tracing::trace;

lazy_static::lazy_static! {
    static ref TOKEN: Regex = Regex::new(r#"(?:[^\s"]+|"[^"]*")+"#).unwrap();
}

/// Tokenize one input line.
pub fn tokenize(line: &str) -> Vec<String> {
    let tokens: Vec<String> = TOKEN
        .find_iter(line)
        .map(|m| m.as_str().replace('"', ""))
        .collect();
    trace!(?tokens, "tokenized");
    tokens
}

/// Split tokens into a lowercased command name and its arguments.
pub fn split_command(tokens: Vec<String>) -> Option<(String, Vec<String>)> {
    let mut iter = tokens.into_iter();
    let name = iter.next()?.to_lowercase();
    Some((name, iter.collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_split() {
        assert_eq!(tokenize("  ls   -la  /tmp "), vec!["ls", "-la", "/tmp"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_quoted_segments_stay_together() {
        assert_eq!(tokenize(r#"echo "hello world" bye"#), vec!["echo", "hello world", "bye"]);
        assert_eq!(tokenize(r#"cowsay pre"fix suf"fix"#), vec!["cowsay", "prefix suffix"]);
        assert_eq!(tokenize(r#"echo """#), vec!["echo", ""]);
    }

    #[test]
    fn test_unbalanced_quote() {
        assert_eq!(tokenize(r#"echo "open ended"#), vec!["echo", "open", "ended"]);
    }

    #[test]
    fn test_split_command_lowercases_name_only() {
        let (name, args) = split_command(tokenize("CAT README.md")).unwrap();
        assert_eq!(name, "cat");
        assert_eq!(args, vec!["README.md"]);
        assert!(split_command(Vec::new()).is_none());
    }
}
