//! Tokenizer for command argument parsing.
//!
//! Splits an argument string into tokens the way a shell would, with a
//! deliberately small rule set:
//! - Whitespace separates tokens outside of quotes
//! - Single and double quotes group text, including whitespace
//! - A backslash only matters right before the quote character that is
//!   currently open; everywhere else it is kept verbatim

use crate::error::{KeylineError, Result};

/// Quoting mode of the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    Unquoted,
    InSingleQuote,
    InDoubleQuote,
}

impl QuoteState {
    /// Returns the quote state opened by `c`, if `c` is a quote character.
    fn opened_by(c: char) -> Option<Self> {
        match c {
            '\'' => Some(Self::InSingleQuote),
            '"' => Some(Self::InDoubleQuote),
            _ => None,
        }
    }

    /// Returns the character that closes this state.
    fn closing_char(self) -> Option<char> {
        match self {
            Self::Unquoted => None,
            Self::InSingleQuote => Some('\''),
            Self::InDoubleQuote => Some('"'),
        }
    }
}

/// Tokenizes a command argument string.
///
/// - `a 'b c' d` → `["a", "b c", "d"]`
/// - `"say \"hi\""` → `[r#"say "hi""#]`
/// - `a\b` → `[r"a\b"]`
/// - `""` → `[""]` (a closed quote pair always produces a token)
///
/// Text directly adjacent to a quote joins the same token while the quote is
/// open: `ab"c d"` → `["abc d"]`. A closing quote ends the token, so
/// `"ab"cd` → `["ab", "cd"]`.
///
/// Returns [`KeylineError::UnterminatedQuote`] if the input ends while a quote
/// is still open. No tokens are returned in that case.
pub fn tokenize(input: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut state = QuoteState::Unquoted;
    let mut escaped = false;

    for c in input.chars() {
        match state.closing_char() {
            Some(quote) if c == quote => {
                if escaped {
                    // The buffered backslash becomes the literal quote
                    word.pop();
                    word.push(c);
                } else {
                    tokens.push(std::mem::take(&mut word));
                    state = QuoteState::Unquoted;
                }
            }
            Some(_) => word.push(c),
            None => {
                if c.is_whitespace() {
                    if !word.is_empty() {
                        tokens.push(std::mem::take(&mut word));
                    }
                } else if let Some(opened) = QuoteState::opened_by(c) {
                    state = opened;
                } else {
                    word.push(c);
                }
            }
        }

        escaped = c == '\\' && !escaped;
    }

    if !word.is_empty() {
        tokens.push(word);
    }

    if state != QuoteState::Unquoted {
        return Err(KeylineError::UnterminatedQuote);
    }

    Ok(tokens)
}
