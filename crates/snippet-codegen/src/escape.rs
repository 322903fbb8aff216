//! Escaping for values spliced into single-quoted literals.
//!
//! Every template quotes caller values with `'...'`. TypeScript and the
//! shell close such a literal differently, so each gets its own escaper.
//! Text without special characters is returned borrowed.
//!
//! # Examples
//!
//! ```
//! use snippet_codegen::escape::{shell_single_quoted, typescript_single_quoted};
//!
//! assert_eq!(typescript_single_quoted("O'Brien"), r"O\'Brien");
//! assert_eq!(shell_single_quoted("O'Brien"), r"O'\''Brien");
//! ```

use std::borrow::Cow;

/// Escapes `text` for the inside of a TypeScript `'...'` string literal.
///
/// Backslashes, single quotes and line breaks are escaped.
#[must_use]
pub fn typescript_single_quoted(text: &str) -> Cow<'_, str> {
    if !text.contains(['\\', '\'', '\n', '\r']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 4);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// Escapes `text` for the inside of a POSIX shell `'...'` word.
///
/// Nothing is special inside single quotes except the quote itself, which
/// becomes `'\''` (close, escaped quote, reopen).
#[must_use]
pub fn shell_single_quoted(text: &str) -> Cow<'_, str> {
    if text.contains('\'') {
        Cow::Owned(text.replace('\'', "'\\''"))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(typescript_single_quoted("conn-1"), Cow::Borrowed("conn-1")));
        assert!(matches!(shell_single_quoted("conn-1"), Cow::Borrowed("conn-1")));
    }

    #[test]
    fn test_typescript_escapes() {
        assert_eq!(typescript_single_quoted("it's"), "it\\'s");
        assert_eq!(typescript_single_quoted(r"C:\tmp"), r"C:\\tmp");
        assert_eq!(typescript_single_quoted("a\nb\r"), "a\\nb\\r");
        // double quotes are fine inside a single-quoted literal
        assert_eq!(typescript_single_quoted("say \"hi\""), "say \"hi\"");
    }

    #[test]
    fn test_shell_escapes_only_quotes() {
        assert_eq!(shell_single_quoted("it's"), "it'\\''s");
        assert_eq!(shell_single_quoted("''"), "'\\'''\\''");
        assert_eq!(shell_single_quoted("$HOME \\ \"x\""), "$HOME \\ \"x\"");
    }
}
