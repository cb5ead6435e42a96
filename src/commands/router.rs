//! Command matching and routing for keyline.
//!
//! Splits user input into a known command name and its argument tokens.

use serde::Serialize;
use tracing::{debug, trace};

use super::tokenizer::tokenize;
use crate::error::{KeylineError, Result};
use crate::values::{double_quotes, ensure_str, Decode, DisplayText, Value};

/// A known command name, stored as its upper-cased words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    words: Vec<String>,
}

impl RegistryEntry {
    /// Creates an entry from a possibly multi-word command name.
    ///
    /// Returns `None` if the name contains no words.
    pub fn new(name: &str) -> Option<Self> {
        let words: Vec<String> = name.split_whitespace().map(str::to_uppercase).collect();
        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    /// Number of words in the command name.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Canonical name: upper-cased words joined by single spaces.
    pub fn name(&self) -> String {
        self.words.join(" ")
    }

    /// Returns true if `input_words` begins with this entry's words.
    fn is_prefix_of(&self, input_words: &[String]) -> bool {
        input_words.len() >= self.words.len() && input_words[..self.words.len()] == self.words[..]
    }
}

/// Ordered list of known command names.
///
/// Order matters: [`CommandRegistry::match_command`] picks the first entry
/// that matches, not the longest. Multi-word entries must come before any
/// shorter entry that is a prefix of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandRegistry {
    entries: Vec<RegistryEntry>,
}

impl CommandRegistry {
    /// Builds a registry from command names, keeping their order.
    ///
    /// Fails if any name is empty.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = names
            .into_iter()
            .map(|name| {
                RegistryEntry::new(name.as_ref())
                    .ok_or_else(|| KeylineError::config("Registry entries must not be empty"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    /// Returns the registry entries in match order.
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends the entries of `other` after this registry's entries.
    pub fn extend(&mut self, other: CommandRegistry) {
        self.entries.extend(other.entries);
    }

    /// Returns pairs `(earlier, later)` where `later` can never be matched
    /// because `earlier` is a prefix of it and comes first.
    pub fn shadowed_entries(&self) -> Vec<(&RegistryEntry, &RegistryEntry)> {
        let mut shadowed = Vec::new();
        for (i, later) in self.entries.iter().enumerate() {
            if let Some(earlier) = self.entries[..i]
                .iter()
                .find(|earlier| earlier.is_prefix_of(&later.words))
            {
                shadowed.push((earlier, later));
            }
        }
        shadowed
    }

    /// Finds the command at the start of `line`.
    ///
    /// Returns the command name as typed (whitespace collapsed) and the rest
    /// of the line, whose words are joined by single spaces.
    pub fn match_command(&self, line: &str) -> Result<(String, String)> {
        let line = line.trim();
        let upper_words: Vec<String> = line
            .to_uppercase()
            .split_whitespace()
            .map(String::from)
            .collect();

        let entry = self
            .entries
            .iter()
            .find(|entry| entry.is_prefix_of(&upper_words))
            .ok_or_else(|| KeylineError::unknown_command(line))?;

        trace!(command = %entry.name(), "Matched registry entry");

        let words: Vec<&str> = line.split_whitespace().collect();
        let split = entry.word_count().min(words.len());
        let command = words[..split].join(" ");
        let remainder = words[split..].join(" ");

        Ok((command, remainder))
    }

    /// Splits `line` into the matched command and its argument tokens.
    pub fn split_command_args(&self, line: &str) -> Result<ParsedCommand> {
        let (command, remainder) = self.match_command(line)?;
        let arguments = tokenize(&remainder)?;

        debug!(command = %command, args = arguments.len(), "Parsed command line");

        Ok(ParsedCommand { command, arguments })
    }
}

/// A command line split into its command name and arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCommand {
    /// Command name as typed, words joined by single spaces.
    pub command: String,
    /// Argument tokens in input order.
    pub arguments: Vec<String>,
}

impl ParsedCommand {
    /// Renders the command with each argument double-quoted.
    ///
    /// Arguments are shown as the bytes they would be sent as: without
    /// `decode`, non-ASCII bytes appear as `\xNN` escapes.
    ///
    /// `SET "key" "say \"hi\""`
    pub fn echo(&self, decode: Option<Decode>) -> Result<String> {
        let mut out = self.command.clone();
        for arg in &self.arguments {
            let value = Value::Binary(arg.as_bytes().to_vec());
            if let DisplayText::Text(quoted) = double_quotes(&ensure_str(&value, decode)?) {
                out.push(' ');
                out.push_str(&quoted);
            }
        }
        Ok(out)
    }
}

/// Splits `line` into a command and argument tokens using `registry`.
pub fn split_command_args(line: &str, registry: &CommandRegistry) -> Result<ParsedCommand> {
    registry.split_command_args(line)
}
