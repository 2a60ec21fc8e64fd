//! Sources of input lines.
//!
//! A [`LineReader`] shows the prompt and blocks until one full line is
//! available or the input is exhausted.

use crate::error::ShellError;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};

pub trait LineReader {
    /// Shows `prompt` and reads the next line without its line terminator.
    ///
    /// Returns `Ok(None)` when the input is exhausted before any byte of a new
    /// line was read. Any other failure is fatal for the session.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError>;
}

/// Reads lines from any buffered stream, writing the prompt to `prompt_out`.
///
/// The line buffer grows as needed; nothing already read is ever truncated.
/// Running out of memory while growing aborts the process.
pub struct PlainReader<R, W> {
    input: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> PlainReader<R, W> {
    pub fn new(input: R, prompt_out: W) -> Self {
        Self { input, prompt_out }
    }
}

impl<R: BufRead, W: Write> LineReader for PlainReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        self.prompt_out
            .write_all(prompt.as_bytes())
            .and_then(|()| self.prompt_out.flush())
            .map_err(ShellError::Write)?;

        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .map_err(ShellError::Read)?;
        if read == 0 {
            return Ok(None);
        }
        strip_line_terminator(&mut buf);
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

fn strip_line_terminator(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
}

/// Interactive line editing on a terminal.
///
/// Nothing is ever added to the editor's history.
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    pub fn new() -> Result<Self, ShellError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        editor_outcome(self.editor.readline(prompt))
    }
}

fn editor_outcome(read: Result<String, ReadlineError>) -> Result<Option<String>, ShellError> {
    match read {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Eof) => Ok(None),
        // Ctrl-C while editing discards the line; the shell itself survives.
        Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
        Err(ReadlineError::Io(err)) => Err(ShellError::Read(err)),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, BufReader, Cursor, Read};

    fn reader(input: &[u8]) -> PlainReader<Cursor<Vec<u8>>, Vec<u8>> {
        PlainReader::new(Cursor::new(input.to_vec()), Vec::new())
    }

    #[test]
    fn test_reads_lines_without_newline() {
        let mut r = reader(b"ls -la\npwd\n");
        assert_eq!(r.read_line(">> ").unwrap().as_deref(), Some("ls -la"));
        assert_eq!(r.read_line(">> ").unwrap().as_deref(), Some("pwd"));
        assert_eq!(r.read_line(">> ").unwrap(), None);
        assert_eq!(r.prompt_out, b">> >> >> ");
    }

    #[test]
    fn test_empty_input_is_end_of_input() {
        let mut r = reader(b"");
        assert_eq!(r.read_line(">> ").unwrap(), None);
    }

    #[test]
    fn test_blank_line_is_not_end_of_input() {
        let mut r = reader(b"\n");
        assert_eq!(r.read_line(">> ").unwrap().as_deref(), Some(""));
        assert_eq!(r.read_line(">> ").unwrap(), None);
    }

    #[test]
    fn test_last_line_without_newline_is_kept_whole() {
        let mut r = reader(b"echo hi");
        assert_eq!(r.read_line("").unwrap().as_deref(), Some("echo hi"));
        assert_eq!(r.read_line("").unwrap(), None);
    }

    #[test]
    fn test_crlf_is_stripped() {
        let mut r = reader(b"help\r\n");
        assert_eq!(r.read_line("").unwrap().as_deref(), Some("help"));
    }

    #[test]
    fn test_long_line_is_not_truncated() {
        let long = "x".repeat(1 << 20);
        let input = format!("{long}\nnext\n");
        // A tiny buffer forces many refills of the underlying reader.
        let mut r = PlainReader::new(BufReader::with_capacity(7, input.as_bytes()), io::sink());
        assert_eq!(r.read_line("").unwrap(), Some(long));
        assert_eq!(r.read_line("").unwrap().as_deref(), Some("next"));
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let mut r = reader(b"echo \xff\n");
        assert_eq!(r.read_line("").unwrap().as_deref(), Some("echo \u{fffd}"));
    }

    #[test]
    fn test_editor_outcomes() {
        assert_eq!(
            editor_outcome(Ok("ls".to_string())).unwrap().as_deref(),
            Some("ls")
        );
        assert_eq!(editor_outcome(Err(ReadlineError::Eof)).unwrap(), None);
        assert_eq!(
            editor_outcome(Err(ReadlineError::Interrupted)).unwrap().as_deref(),
            Some("")
        );
        let err = editor_outcome(Err(ReadlineError::Io(io::Error::other("tty gone"))));
        assert!(matches!(err, Err(ShellError::Read(_))));
    }

    struct FailingInput;

    impl Read for FailingInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device gone"))
        }
    }

    #[test]
    fn test_read_error_is_fatal() {
        let mut r = PlainReader::new(BufReader::new(FailingInput), io::sink());
        let err = r.read_line(">> ").unwrap_err();
        assert!(matches!(err, ShellError::Read(_)));
    }
}
