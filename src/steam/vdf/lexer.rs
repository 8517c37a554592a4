use std::{iter::Peekable, str::Chars};

use super::VdfError;

/// Splits VDF text into tokens the way a classic, non-POSIX shell lexer does.
///
/// - Runs of ASCII alphanumerics and `_` form a word. A quote character inside a word is part of
///   the word.
/// - A string opened by `"` or `'` runs to the next matching quote and keeps both quotes. There is
///   no escape processing, so `"C:\\Steam"` stays exactly as written.
/// - `#` starts a comment that runs to the end of the line and ends any word before it.
/// - Any other character that isn't whitespace is a token on its own, which is how `{` and `}`
///   come through.
#[derive(Debug)]
pub struct Lexer<'text> {
    chars: Peekable<Chars<'text>>,
    peeked: Option<Option<String>>,
    line: usize,
}

impl<'text> Lexer<'text> {
    const QUOTES: [char; 2] = ['"', '\''];

    const COMMENT: char = '#';

    #[must_use]
    pub fn new(text: &'text str) -> Self {
        Self {
            chars: text.chars().peekable(),
            peeked: None,
            line: 1,
        }
    }

    /// The line the lexer has reached, starting from 1.
    #[inline]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the next token without consuming it.
    ///
    /// # Errors
    ///
    /// Returns [`VdfError::UnclosedQuote`] if the next token is a string that never closes.
    pub fn peek_token(&mut self) -> Result<Option<&str>, VdfError> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.lex()?,
        };

        Ok(self.peeked.insert(token).as_deref())
    }

    /// Returns the next token, or [`None`] once the text is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`VdfError::UnclosedQuote`] if the next token is a string that never closes.
    pub fn next_token(&mut self) -> Result<Option<String>, VdfError> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.lex(),
        }
    }

    fn is_word_char(char: char) -> bool {
        char.is_ascii_alphanumeric() || char == '_'
    }

    fn bump(&mut self) -> Option<char> {
        let char = self.chars.next()?;
        if char == '\n' {
            self.line += 1;
        }
        Some(char)
    }

    fn skip_comment(&mut self) {
        while self.bump().is_some_and(|char| char != '\n') {}
    }

    fn lex(&mut self) -> Result<Option<String>, VdfError> {
        loop {
            let Some(char) = self.bump() else {
                return Ok(None);
            };

            match char {
                ' ' | '\t' | '\r' | '\n' => {}
                Self::COMMENT => self.skip_comment(),
                char if Self::is_word_char(char) => return Ok(Some(self.lex_word(char))),
                char if Self::QUOTES.contains(&char) => return self.lex_string(char).map(Some),
                char => return Ok(Some(char.to_string())),
            }
        }
    }

    fn lex_word(&mut self, first: char) -> String {
        let mut word = String::from(first);

        while let Some(&char) = self.chars.peek() {
            if Self::is_word_char(char) || Self::QUOTES.contains(&char) {
                word.push(char);
                self.chars.next();
            } else {
                break;
            }
        }

        word
    }

    fn lex_string(&mut self, quote: char) -> Result<String, VdfError> {
        let start_line = self.line;
        let mut string = String::from(quote);

        loop {
            let char = self
                .bump()
                .ok_or(VdfError::UnclosedQuote { line: start_line })?;
            string.push(char);

            if char == quote {
                return Ok(string);
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<String, VdfError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rstest::rstest;

    use super::Lexer;
    use crate::steam::vdf::VdfError;

    fn tokens(text: &str) -> Vec<String> {
        Lexer::new(text).collect::<Result<_, _>>().unwrap()
    }

    #[test]
    fn library_folders() {
        let text = indoc! {r#"
            "libraryfolders"
            {
                "0"
                {
                    "path"		"C:\\Program Files (x86)\\Steam"
                }
            }
        "#};

        assert_eq!(
            tokens(text),
            [
                r#""libraryfolders""#,
                "{",
                r#""0""#,
                "{",
                r#""path""#,
                r#""C:\\Program Files (x86)\\Steam""#,
                "}",
                "}",
            ]
        );
    }

    #[rstest]
    #[case::word("apps", &["apps"])]
    #[case::words_and_punctuation("a_1 b-c", &["a_1", "b", "-", "c"])]
    #[case::single_quotes("'it''s'", &["'it'", "'s'"])]
    #[case::quote_inside_word(r#"ab"cd e"#, &[r#"ab"cd"#, "e"])]
    #[case::comment("key # note\nvalue", &["key", "value"])]
    #[case::comment_ends_word("key#note\nvalue", &["key", "value"])]
    #[case::comment_in_string(r#""a # b""#, &[r#""a # b""#])]
    #[case::non_ascii("é", &["é"])]
    #[case::braces_without_spaces(r#""a"{"b""c"}"#, &[r#""a""#, "{", r#""b""#, r#""c""#, "}"])]
    #[case::empty("", &[])]
    #[case::only_whitespace(" \t\r\n", &[])]
    fn split(#[case] text: &str, #[case] expected: &[&str]) {
        assert_eq!(tokens(text), expected);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut lexer = Lexer::new(r#""a" }"#);

        assert_eq!(lexer.peek_token().unwrap(), Some(r#""a""#));
        assert_eq!(lexer.peek_token().unwrap(), Some(r#""a""#));
        assert_eq!(lexer.next_token().unwrap().as_deref(), Some(r#""a""#));
        assert_eq!(lexer.next_token().unwrap().as_deref(), Some("}"));
        assert_eq!(lexer.peek_token().unwrap(), None);
        assert_eq!(lexer.next_token().unwrap(), None);
    }

    #[test]
    fn unclosed_quote() {
        let mut lexer = Lexer::new("\"a\"\n\"path\" \"C:\\Steam\n}\n");

        assert_eq!(lexer.next_token().unwrap().as_deref(), Some(r#""a""#));
        assert_eq!(lexer.next_token().unwrap().as_deref(), Some(r#""path""#));
        assert!(matches!(
            lexer.next_token(),
            Err(VdfError::UnclosedQuote { line: 2 })
        ));
    }
}
