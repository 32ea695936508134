use std::fmt;

use crate::backend::Backend;

/// A debugger command, expressed with a generic name.
///
/// The command is rendered into the literal line sent to the debugger with
/// [to_line](Self::to_line), which translates its name into the backend's
/// vocabulary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    /// Generic command name (e.g., `breakpoint`).
    pub name: String,

    /// Command arguments.
    pub args: Vec<String>,
}

impl Command {
    /// Constructs a new `Command` with the given generic name and no
    /// arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Adds an argument to the command.
    ///
    /// To pass multiple arguments see [`args`](Self::args).
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Adds multiple arguments to the command.
    ///
    /// To pass a single argument see [`arg`](Self::arg).
    pub fn args<I, S>(self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        args.into_iter().fold(self, |cmd, arg| cmd.arg(arg))
    }

    /// Renders the command line for the given backend.
    pub fn to_line(&self, backend: Backend) -> String {
        Line {
            name: backend.translate_command(&self.name),
            args: &self.args,
        }
        .to_string()
    }
}

struct Line<'a> {
    name: &'a str,
    args: &'a [String],
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)?;

        for arg in self.args {
            write!(f, " {arg}")?;
        }

        Ok(())
    }
}
