use crate::builtin;
use crate::command::{ExitCode, Flow};
use crate::error::ShellError;
use crate::external;
use crate::lexer;
use crate::reader::LineReader;
use std::io::Write;
use tracing::debug;

/// Prompt marker shown before every read.
pub const DEFAULT_PROMPT: &str = ">> ";

/// A minimal shell-like interpreter that can execute built-in and external commands.
///
/// Each iteration reads one line from the [`LineReader`], tokenizes it and
/// dispatches the tokens; the line and its tokens are dropped before the next
/// prompt. The loop ends when `exit` is run or the input is exhausted.
///
/// Example
/// ```
/// use nsh::Interpreter;
/// use nsh::io_adapters::SharedWriter;
/// use nsh::reader::PlainReader;
///
/// let out = SharedWriter::new();
/// let reader = PlainReader::new("help\nexit\n".as_bytes(), out.clone());
/// let stdout = Box::new(out.clone());
/// let mut sh = Interpreter::new(Box::new(reader), stdout, Box::new(std::io::sink()));
/// sh.run().unwrap();
/// assert!(out.contents().contains("Available builtins"));
/// ```
pub struct Interpreter {
    reader: Box<dyn LineReader>,
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
    prompt: String,
    last_status: ExitCode,
}

impl Interpreter {
    pub fn new(
        reader: Box<dyn LineReader>,
        stdout: Box<dyn Write>,
        stderr: Box<dyn Write>,
    ) -> Self {
        Self {
            reader,
            stdout,
            stderr,
            prompt: DEFAULT_PROMPT.to_string(),
            last_status: 0,
        }
    }

    /// Replaces the prompt marker.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Shell-style status of the last external command that ran (0 before any).
    pub fn last_status(&self) -> ExitCode {
        self.last_status
    }

    /// Runs the read-tokenize-dispatch loop until `exit` or end of input.
    ///
    /// End of input prints a farewell and is a graceful stop. Read errors are
    /// fatal and returned to the caller.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let Some(line) = self.reader.read_line(&self.prompt)? else {
                debug!("end of input");
                writeln!(self.stdout, "\nlogout").map_err(ShellError::Write)?;
                self.stdout.flush().map_err(ShellError::Write)?;
                return Ok(());
            };

            let tokens = lexer::split_into_tokens(&line);
            if self.dispatch(&tokens) == Flow::Exit {
                debug!("exit requested");
                return Ok(());
            }
        }
    }

    /// Runs one tokenized command and tells whether the loop should go on.
    ///
    /// An empty token sequence is a no-op. Builtins are matched first, by exact
    /// name; anything else is launched as an external program.
    pub fn dispatch(&mut self, tokens: &[&str]) -> Flow {
        let Some(&name) = tokens.first() else {
            return Flow::Continue;
        };
        debug!(?tokens, "dispatch");

        if let Some(builtin) = builtin::lookup(name) {
            return match builtin.run(tokens, &mut *self.stdout) {
                Ok(flow) => flow,
                Err(err) => {
                    let _ = writeln!(self.stderr, "nsh: {name}: {err}");
                    Flow::Continue
                }
            };
        }

        // Output written so far must not be overtaken by the child's.
        let _ = self.stdout.flush();
        let (flow, status) = external::launch(tokens, &mut *self.stderr);
        if let Some(code) = status {
            self.last_status = code;
        }
        flow
    }
}
