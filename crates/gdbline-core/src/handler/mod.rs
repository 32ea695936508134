use crate::parser::SourceLocation;

/// Trait for implementing a session event handler.
///
/// The [Parser](crate::parser::Parser) calls exactly one of these functions
/// per recognized marker, synchronously, from within
/// [feed](crate::parser::Parser::feed). Implementors must not block: they
/// usually forward the event to a UI or controller task.
pub trait EventHandler {
    /// Error returned by this event handler.
    type Error: std::error::Error;

    /// Function called when the debuggee has resumed execution after a pause.
    fn execution_resumed(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Function called when the debugger has stopped the debuggee at a
    /// source location.
    fn paused_at(&mut self, _location: &SourceLocation) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Function called when the debugger is idle and ready for the next
    /// command.
    ///
    /// This is the point where a controller typically refreshes its view of
    /// the breakpoints with a [BreakpointDirectory](crate::breakpoint::BreakpointDirectory)
    /// query.
    fn ready_for_query(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<H: EventHandler + ?Sized> EventHandler for &mut H {
    type Error = H::Error;

    fn execution_resumed(&mut self) -> Result<(), Self::Error> {
        (**self).execution_resumed()
    }

    fn paused_at(&mut self, location: &SourceLocation) -> Result<(), Self::Error> {
        (**self).paused_at(location)
    }

    fn ready_for_query(&mut self) -> Result<(), Self::Error> {
        (**self).ready_for_query()
    }
}
