mod gdb;

use std::fmt;
use std::str::FromStr;

use crate::breakpoint::{ListingEntry, SkipReason};
use crate::parser::TransitionTable;

/// Debugger backend.
///
/// Each backend owns its output patterns, its command vocabulary and its
/// breakpoint listing dialect. The backend of a session is selected once,
/// when building its [Parser](crate::parser::Parser) and
/// [BreakpointDirectory](crate::breakpoint::BreakpointDirectory).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Backend {
    /// GNU debugger, driven through its annotated terminal interface.
    #[default]
    Gdb,
}

impl Backend {
    /// All supported backends.
    pub const ALL: &[Self] = &[Self::Gdb];

    /// Returns the name of this backend.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gdb => "gdb",
        }
    }

    /// Compiles the transition rules of this backend's session state machine.
    pub fn transitions(self) -> crate::Result<TransitionTable> {
        match self {
            Self::Gdb => gdb::transitions(),
        }
    }

    /// Translates a generic command name into this backend's vocabulary.
    ///
    /// Unknown names are returned unchanged.
    pub fn translate_command(self, name: &str) -> &str {
        match self {
            Self::Gdb => gdb::translate_command(name),
        }
    }

    /// Extracts the debugger's name of the current source file from the
    /// response to a source introspection command.
    pub fn parse_source_file(self, response: &str) -> Option<&str> {
        match self {
            Self::Gdb => gdb::parse_source_file(response),
        }
    }

    /// Parses a single line of a breakpoint listing.
    pub fn parse_listing_line(self, line: &str) -> Result<ListingEntry<'_>, SkipReason> {
        match self {
            Self::Gdb => gdb::parse_listing_line(line),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|backend| backend.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| crate::Error::UnknownBackend(s.to_owned()))
    }
}
