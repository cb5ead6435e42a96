//! keyline - quote-aware command-line front-end for a Redis-style client.
//!
//! Turns one line of user input into a known command name and its argument
//! tokens.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod runner;
pub mod timer;
pub mod values;

pub use commands::{split_command_args, tokenize, CommandRegistry, ParsedCommand};
pub use error::{KeylineError, Result};
