use crate::command::Flow;
use std::io::{self, Write};

/// Signature shared by every builtin handler.
///
/// Handlers receive the full token sequence, command name included at index 0,
/// and write only to `stdout`.
pub type Handler = fn(args: &[&str], stdout: &mut dyn Write) -> io::Result<Flow>;

/// One entry of the builtin table.
#[derive(Clone, Copy)]
pub struct Builtin {
    /// Name the first token has to match exactly.
    pub name: &'static str,
    /// One-line description.
    pub summary: &'static str,
    pub handler: Handler,
}

impl Builtin {
    pub fn run(&self, args: &[&str], stdout: &mut dyn Write) -> io::Result<Flow> {
        (self.handler)(args, stdout)
    }
}

impl std::fmt::Debug for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builtin").field("name", &self.name).finish()
    }
}

/// Builtin commands known to the shell, in lookup order.
pub static BUILTINS: &[Builtin] = &[
    Builtin {
        name: "help",
        summary: "print the list of builtins",
        handler: help,
    },
    Builtin {
        name: "exit",
        summary: "leave the shell",
        handler: exit,
    },
];

/// Finds the builtin called `name`; the first match in table order wins.
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|builtin| builtin.name == name)
}

/// Names of all builtins, in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|builtin| builtin.name)
}

fn help(_args: &[&str], stdout: &mut dyn Write) -> io::Result<Flow> {
    writeln!(stdout, "NSH shell - New shell")?;
    writeln!(stdout, "Toy implementation of the Unix shell")?;
    writeln!(stdout)?;
    writeln!(stdout, "Available builtins: ")?;
    for name in names() {
        writeln!(stdout, " {name}")?;
    }
    writeln!(stdout)?;
    writeln!(stdout, "Type a command and press enter to execute it")?;
    stdout.flush()?;
    Ok(Flow::Continue)
}

fn exit(_args: &[&str], _stdout: &mut dyn Write) -> io::Result<Flow> {
    Ok(Flow::Exit)
}
