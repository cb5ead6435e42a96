//! Command line splitting for keyline.
//!
//! The tokenizer handles quoting; the router finds the command name at the
//! start of a line and hands the rest to the tokenizer.

pub mod definitions;
pub mod router;
pub mod tokenizer;

pub use definitions::{builtin_registry, find_command, CommandDef, CommandGroup, COMMANDS};
pub use router::{split_command_args, CommandRegistry, ParsedCommand, RegistryEntry};
pub use tokenizer::tokenize;
