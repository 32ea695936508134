use std::io::Write;

use gdbline_core::handler::EventHandler;
use gdbline_core::parser::SourceLocation;

/// Session event handler, printing one line per event.
pub struct PrintEventHandler<W> {
    output: W,
}

impl<W> PrintEventHandler<W> {
    /// Initializes the event handler with its output.
    pub const fn new(output: W) -> Self {
        Self { output }
    }

    /// Returns the inner output.
    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> EventHandler for PrintEventHandler<W> {
    type Error = std::io::Error;

    fn execution_resumed(&mut self) -> Result<(), Self::Error> {
        writeln!(self.output, "resumed")
    }

    fn paused_at(&mut self, location: &SourceLocation) -> Result<(), Self::Error> {
        writeln!(self.output, "paused {location}")
    }

    fn ready_for_query(&mut self) -> Result<(), Self::Error> {
        writeln!(self.output, "ready")
    }
}
