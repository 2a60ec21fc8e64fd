use anyhow::Context;
use argh::FromArgs;
use nsh::reader::{EditorReader, LineReader, PlainReader};
use nsh::{DEFAULT_PROMPT, Interpreter};
use std::io::{self, IsTerminal};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(FromArgs)]
/// NSH - a minimal interactive shell running builtins and external programs.
struct Options {
    #[argh(switch)]
    /// read plain lines from stdin even when it is a terminal (no line editing).
    plain: bool,

    #[argh(option, default = "DEFAULT_PROMPT.to_string()")]
    /// prompt marker printed before each line.
    prompt: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("NSH_LOG").unwrap_or_else(|_| "off".into()))
        .with_writer(io::stderr)
        .init();

    let options: Options = argh::from_env();

    // The interrupt key must not kill the shell itself; children get it back.
    #[cfg(unix)]
    {
        match nsh::signals::ignore_interrupt() {
            Ok(previous) => debug!(?previous, "ignoring SIGINT"),
            Err(err) => {
                warn!(%err, "could not ignore SIGINT");
                eprintln!("nsh: signal: {err}");
            }
        }
    }

    let interactive = !options.plain && io::stdin().is_terminal();
    let reader: Box<dyn LineReader> = if interactive {
        Box::new(EditorReader::new().context("failed to start the line editor")?)
    } else {
        Box::new(PlainReader::new(io::stdin().lock(), io::stdout()))
    };
    debug!(interactive, "starting loop");

    Interpreter::new(reader, Box::new(io::stdout()), Box::new(io::stderr()))
        .with_prompt(options.prompt)
        .run()
        .context("nsh")?;
    Ok(())
}
