mod builder;
mod state;
mod table;

pub use self::builder::{Builder, DEFAULT_MAX_BUFFER};
use self::builder::NeedsBackend;
pub use self::state::{SessionState, SourceLocation};
use self::table::Event;
pub use self::table::{Action, Rule, TransitionTable};
use crate::backend::Backend;
use crate::error::HandlerError;
use crate::handler::EventHandler;

/// Session state machine.
///
/// The parser classifies the debugger's terminal output into session events,
/// regardless of how the output is split into chunks. Every chunk is
/// appended to a pending buffer, against which the rules of the current
/// [state](SessionState) are tried:
///
/// - the rule whose match completes first in the output fires (ties go to
///   the rule registered first), reports its event to the
///   [handler](EventHandler), and switches the state;
/// - the output up to the end of the match is consumed;
/// - rules are tried again (for the new state) until none matches.
///
/// Output that matches no rule is left pending, since a marker may still be
/// completed by the next chunk.
pub struct Parser<H> {
    backend: Backend,
    table: TransitionTable,
    handler: H,
    state: SessionState,
    buffer: Vec<u8>,
    max_buffer: usize,
}

impl Parser<()> {
    /// Creates a parser builder.
    pub const fn builder() -> Builder<NeedsBackend> {
        Builder::new()
    }
}

impl<H> Parser<H> {
    pub(super) fn new(
        backend: Backend,
        table: TransitionTable,
        handler: H,
        max_buffer: usize,
    ) -> Self {
        Self {
            backend,
            table,
            handler,
            state: SessionState::Running,
            buffer: Vec::new(),
            max_buffer,
        }
    }

    /// Backend whose output is parsed.
    pub const fn backend(&self) -> Backend {
        self.backend
    }

    /// Current state of the session.
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Output received but not consumed by any rule yet.
    pub fn buffered(&self) -> &[u8] {
        &self.buffer
    }

    /// Returns a reference over the event handler.
    pub const fn handler(&self) -> &H {
        &self.handler
    }

    /// Returns a mutable reference over the event handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Consumes the parser, returning its event handler.
    pub fn into_handler(self) -> H {
        self.handler
    }
}

impl<H: EventHandler> Parser<H> {
    /// Feeds a chunk of debugger output.
    ///
    /// Events are reported to the handler as they are recognized. On success,
    /// the number of fired rules is returned.
    ///
    /// # Note
    ///
    /// If the handler fails, the rule that produced the failing event is
    /// already applied, and the remaining output stays pending until the
    /// next call. The pending output is capped either way.
    ///
    /// A jump marker whose line or column does not fit in a `u64` still
    /// pauses the session, but reports no event to the handler.
    #[tracing::instrument(name = "FeedOutput", level = "trace", skip_all, fields(len = chunk.len()))]
    pub fn feed(&mut self, chunk: &[u8]) -> Result<usize, HandlerError<H::Error>> {
        self.buffer.extend_from_slice(chunk);

        let mut fired = 0;
        let res = self.fire_rules(&mut fired);

        self.discard_stale_output();

        res.map(|()| fired)
    }

    fn fire_rules(&mut self, fired: &mut usize) -> Result<(), HandlerError<H::Error>> {
        loop {
            // earliest completed marker first, as if the output came byte by byte
            let Some((rule, captures)) = self
                .table
                .rules(self.state)
                .iter()
                .filter_map(|rule| rule.pattern().captures(&self.buffer).map(|c| (rule, c)))
                .min_by_key(|(_, captures)| match_end(captures))
            else {
                return Ok(());
            };

            let consumed = match_end(&captures);
            let event = rule.action().event(&captures);
            drop(captures);

            if consumed == 0 {
                // an empty match would never make progress
                tracing::warn!(pattern = rule.pattern().as_str(), "empty match");
                return Ok(());
            }

            self.buffer.drain(..consumed);

            let prev_state = self.state;
            self.state = rule.next_state();
            *fired += 1;

            if prev_state != self.state {
                tracing::info!(from = %prev_state, to = %self.state, "state transition");
            }

            match event {
                Some(Event::Resumed) => {
                    tracing::debug!("execution resumed");
                    self.handler.execution_resumed().map_err(HandlerError)?;
                }
                Some(Event::PausedAt(location)) => {
                    tracing::debug!(%location, "paused");
                    self.handler.paused_at(&location).map_err(HandlerError)?;
                }
                Some(Event::ReadyForQuery) => {
                    tracing::debug!("ready for query");
                    self.handler.ready_for_query().map_err(HandlerError)?;
                }
                None => tracing::warn!(pattern = rule.pattern().as_str(), "undecodable location"),
            }
        }
    }

    fn discard_stale_output(&mut self) {
        if self.buffer.len() > self.max_buffer {
            let excess = self.buffer.len() - self.max_buffer;
            self.buffer.drain(..excess);
            tracing::debug!(excess, "discarded stale output");
        }
    }
}

fn match_end(captures: &regex::bytes::Captures<'_>) -> usize {
    captures.get(0).map_or(0, |m| m.end())
}
