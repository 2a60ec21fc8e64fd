use crate::command::{ExitCode, Flow};
use crate::error::LaunchError;
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use tracing::debug;

/// Directories searched when `PATH` is not set, like `execvp` does.
pub const DEFAULT_SEARCH_PATH: &str = "/bin:/usr/bin";

/// The value of `PATH`, or [`DEFAULT_SEARCH_PATH`] when it is unset.
pub fn search_paths(path_var: Option<OsString>) -> OsString {
    path_var.unwrap_or_else(|| OsString::from(DEFAULT_SEARCH_PATH))
}

/// A program that is not a builtin, resolved to a path on disk.
#[derive(Debug)]
pub struct ExternalCommand {
    program: PathBuf,
    argv: Vec<String>,
}

impl ExternalCommand {
    /// Resolves `argv[0]` through `PATH` the way a typical shell would.
    pub fn resolve(argv: &[&str]) -> Result<Self, LaunchError> {
        Self::resolve_in(&search_paths(std::env::var_os("PATH")), argv)
    }

    /// Same as [`ExternalCommand::resolve`] with an explicit search path list.
    pub fn resolve_in(search_paths: &OsStr, argv: &[&str]) -> Result<Self, LaunchError> {
        let name = argv.first().copied().unwrap_or_default();
        let program = find_command_path(search_paths, Path::new(name))
            .ok_or_else(|| LaunchError::NotFound {
                name: name.to_string(),
            })?
            .into_owned();
        Ok(Self {
            program,
            argv: argv.iter().map(|arg| arg.to_string()).collect(),
        })
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn name(&self) -> &str {
        self.argv.first().map(String::as_str).unwrap_or_default()
    }

    /// Spawns the program with inherited standard streams and waits for it.
    ///
    /// The child gets the default SIGINT disposition back before `exec`, so it
    /// can be interrupted even though the shell itself ignores the signal. The
    /// wait returns only once the child has exited or was killed by a signal.
    pub fn run(self) -> Result<ExitStatus, LaunchError> {
        let mut command = Command::new(&self.program);
        command.args(self.argv.iter().skip(1));
        #[cfg(unix)]
        {
            use crate::signals;
            use std::os::unix::process::CommandExt;
            command.arg0(self.name());
            // SAFETY: the hook only calls `sigaction`, which is async-signal-safe.
            unsafe {
                command.pre_exec(|| {
                    signals::restore_default_interrupt()
                        .map(drop)
                        .map_err(std::io::Error::from)
                });
            }
        }

        let mut child = command.spawn().map_err(|source| LaunchError::Spawn {
            name: self.name().to_string(),
            source,
        })?;
        debug!(pid = child.id(), program = %self.program.display(), "spawned child");

        child.wait().map_err(|source| LaunchError::Wait {
            name: self.name().to_string(),
            source,
        })
    }
}

/// Runs `argv` as an external program and waits for it.
///
/// Any failure is reported on `stderr` as `nsh: <reason>`. The loop always
/// continues, whatever happened to the child. The child's status is returned
/// alongside when it ran.
pub fn launch(argv: &[&str], stderr: &mut dyn Write) -> (Flow, Option<ExitCode>) {
    let outcome = ExternalCommand::resolve(argv).and_then(ExternalCommand::run);
    match outcome {
        Ok(status) => {
            let code = exit_code(status);
            debug!(?argv, code, "child finished");
            (Flow::Continue, Some(code))
        }
        Err(err) => {
            debug!(command = err.name(), error = %err, "launch failed");
            let _ = writeln!(stderr, "nsh: {err}");
            let _ = stderr.flush();
            (Flow::Continue, None)
        }
    }
}

/// Converts a child's status into a shell-style exit code.
pub fn exit_code(status: ExitStatus) -> ExitCode {
    match status.code() {
        Some(code) => code,
        None => terminated_by_signal(status),
    }
}

#[cfg(unix)]
fn terminated_by_signal(exit_status: ExitStatus) -> ExitCode {
    use std::os::unix::process::ExitStatusExt;
    if let Some(signal) = ExitStatusExt::signal(&exit_status) {
        128 + signal
    } else if ExitStatusExt::core_dumped(&exit_status) {
        255
    } else {
        -1
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_exit_status: ExitStatus) -> ExitCode {
    -1
}

/// Resolve a command path the way a typical shell would.
///
/// Behavior:
/// - Absolute path: returns it if it exists.
/// - Relative with multiple components (e.g., `bin/sh`): returns it if it exists.
/// - `./foo` on Unix or any path on other platforms: returns it if it exists.
/// - Single path component: searches each directory in `search_paths` (PATH) in
///   order and returns the first executable file.
/// - Empty path: returns `None`.
pub fn find_command_path<'a>(search_paths: &OsStr, path: &'a Path) -> Option<Cow<'a, Path>> {
    if path.is_absolute() {
        return find_by_path(path).map(Cow::Borrowed);
    }

    let search_in_current_dir = cfg!(not(unix)) || path.starts_with("./");
    if search_in_current_dir && path.exists() {
        return Some(Cow::Borrowed(path));
    }

    let mut components = path.components();
    match (components.next(), components.next()) {
        (None, _) => None,
        (Some(x), None) => find_in_path(search_paths, x.as_os_str()).map(Cow::Owned),
        _ => find_by_path(path).map(Cow::Borrowed),
    }
}

fn find_in_path(search_paths: &OsStr, cmd: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(search_paths)
        .map(|dir| anchored(dir.join(cmd)))
        .find(|candidate| is_executable(candidate))
}

/// Keeps `Command` from searching `PATH` again for a bare file name, which an
/// empty `PATH` entry produces.
fn anchored(path: PathBuf) -> PathBuf {
    if path.is_relative() && path.components().count() == 1 {
        Path::new(".").join(path)
    } else {
        path
    }
}

fn find_by_path(path: &Path) -> Option<&Path> {
    if path.exists() { Some(path) } else { None }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
