use std::convert::Infallible;

use gdbline_core::handler::EventHandler;
use gdbline_core::parser::SourceLocation;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Recorded {
    Resumed,
    PausedAt(SourceLocation),
    Ready,
}

impl Recorded {
    pub fn paused_at(file: &str, line: u64, column: u64) -> Self {
        Self::PausedAt(SourceLocation {
            file: file.to_owned(),
            line,
            column,
        })
    }
}

#[derive(Default)]
pub struct RecordingHandler {
    pub events: Vec<Recorded>,
}

impl EventHandler for RecordingHandler {
    type Error = Infallible;

    fn execution_resumed(&mut self) -> Result<(), Self::Error> {
        self.events.push(Recorded::Resumed);
        Ok(())
    }

    fn paused_at(&mut self, location: &SourceLocation) -> Result<(), Self::Error> {
        self.events.push(Recorded::PausedAt(location.clone()));
        Ok(())
    }

    fn ready_for_query(&mut self) -> Result<(), Self::Error> {
        self.events.push(Recorded::Ready);
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("UI is gone")]
pub struct UiGone;

/// Handler failing on every pause.
pub struct RefusingHandler;

impl EventHandler for RefusingHandler {
    type Error = UiGone;

    fn paused_at(&mut self, _location: &SourceLocation) -> Result<(), Self::Error> {
        Err(UiGone)
    }
}
