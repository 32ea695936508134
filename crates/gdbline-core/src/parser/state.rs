use std::fmt;

/// Run state of the debuggee, as observed from the debugger output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// The debuggee is running (or not started yet).
    #[default]
    Running,

    /// The debuggee is stopped and the debugger accepts commands.
    Paused,
}

impl SessionState {
    /// Returns whether the debuggee is running.
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    /// Returns whether the debuggee is paused.
    pub const fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => f.write_str("running"),
            Self::Paused => f.write_str("paused"),
        }
    }
}

/// Source location the debuggee was stopped at.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// Source file, as reported by the debugger.
    pub file: String,

    /// Line number.
    pub line: u64,

    /// Column, or character offset, reported along with the line.
    pub column: u64,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
