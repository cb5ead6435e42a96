//! Line-by-line input handling.
//!
//! Feeds each input line through the command registry and writes the parsed
//! result, or the reason the line was rejected.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::commands::definitions::find_command;
use crate::commands::{CommandRegistry, ParsedCommand};
use crate::error::Result;
use crate::timer::Timer;
use crate::values::Decode;

/// Message printed when the user leaves.
pub const GOODBYE: &str = "Goodbye!";

/// Result of handling one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    /// Nothing to do (blank line).
    None,
    /// The line was split into a command and arguments.
    Parsed(ParsedCommand),
    /// The user asked to leave.
    Exit,
}

/// Summary of a finished input stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines parsed successfully.
    pub parsed: usize,
    /// Lines rejected with a parse error.
    pub rejected: usize,
    /// Whether the stream ended with an exit request.
    pub exited: bool,
}

/// Parses input lines against a registry and renders the results.
pub struct Runner {
    registry: CommandRegistry,
    format: OutputFormat,
    decode: Option<Decode>,
    timer: Timer,
}

impl Runner {
    /// Creates a runner over `registry`.
    pub fn new(registry: CommandRegistry, format: OutputFormat, decode: Option<Decode>) -> Self {
        Self {
            registry,
            format,
            decode,
            timer: Timer::new(),
        }
    }

    /// Handles one line of input.
    pub fn handle_input(&mut self, input: &str) -> Result<InputResult> {
        let input = input.trim();

        if input.is_empty() {
            return Ok(InputResult::None);
        }

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            return Ok(InputResult::Exit);
        }

        let parsed = self.registry.split_command_args(input);
        self.timer.tick("split command args");
        parsed.map(InputResult::Parsed)
    }

    /// Renders a parsed command in the configured output format.
    pub fn render(&self, parsed: &ParsedCommand) -> Result<String> {
        match self.format {
            OutputFormat::Text => parsed.echo(self.decode),
            OutputFormat::Json => {
                let group = find_command(&parsed.command).map(|c| c.group.display_name());
                Ok(serde_json::json!({
                    "command": parsed.command,
                    "group": group,
                    "arguments": parsed.arguments,
                })
                .to_string())
            }
        }
    }

    /// Handles one line and writes its outcome.
    ///
    /// Parse errors are written to `err` and reported as `Ok(None)`; other
    /// errors are returned.
    pub fn process_line<W: Write, E: Write>(
        &mut self,
        line: &str,
        out: &mut W,
        err: &mut E,
    ) -> Result<Option<InputResult>> {
        match self.handle_input(line) {
            Ok(InputResult::Parsed(parsed)) => {
                writeln!(out, "{}", self.render(&parsed)?)?;
                Ok(Some(InputResult::Parsed(parsed)))
            }
            Ok(InputResult::Exit) => {
                writeln!(out, "{GOODBYE}")?;
                Ok(Some(InputResult::Exit))
            }
            Ok(InputResult::None) => Ok(Some(InputResult::None)),
            Err(e) if e.is_parse_error() => {
                debug!("Rejected line: {}", e);
                writeln!(err, "(error) {e}")?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Reads lines from `input` until EOF or an exit request.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        input: R,
        out: &mut W,
        err: &mut E,
    ) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for line in input.lines() {
            match self.process_line(&line?, out, err)? {
                Some(InputResult::Parsed(_)) => summary.parsed += 1,
                Some(InputResult::Exit) => {
                    summary.exited = true;
                    break;
                }
                Some(InputResult::None) => {}
                None => summary.rejected += 1,
            }
        }

        info!(
            parsed = summary.parsed,
            rejected = summary.rejected,
            "Input finished"
        );
        Ok(summary)
    }
}
