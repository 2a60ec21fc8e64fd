//! A minimal interactive command interpreter.
//!
//! Each iteration of the loop reads one line, splits it into whitespace-delimited
//! tokens and either runs an in-process builtin or launches an external program,
//! waiting for it to finish before prompting again. There are no pipelines,
//! redirections, quoting rules or variables: a line is a program name followed
//! by its arguments.
//!
//! The main entry point is [`Interpreter`]. The [`reader`] module provides the
//! line sources it reads from, [`lexer`] the tokenizer, [`builtin`] the fixed
//! builtin table and [`external`] the process launcher.

pub mod builtin;
pub mod command;
pub mod error;
pub mod external;
mod interpreter;
pub mod io_adapters;
pub mod lexer;
pub mod reader;
#[cfg(unix)]
pub mod signals;

/// Re-export of the interactive loop.
///
/// See [`Interpreter`] for the high-level API.
pub use interpreter::{Interpreter, DEFAULT_PROMPT};
