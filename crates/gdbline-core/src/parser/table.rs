use regex::bytes::{Captures, Regex};

use super::{SessionState, SourceLocation};

/// Action performed when a transition rule fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Report that execution has resumed.
    Resume,

    /// Report the source location captured by the pattern.
    ///
    /// The pattern must capture the file, line and column, in this order.
    Jump,

    /// Report that the debugger is ready for the next command.
    Query,
}

/// Transition rule of the session state machine.
#[derive(Debug)]
pub struct Rule {
    pattern: Regex,
    action: Action,
    next: SessionState,
}

impl Rule {
    /// Pattern matched against the pending output.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Action performed when the rule fires.
    pub const fn action(&self) -> Action {
        self.action
    }

    /// State of the session once the rule has fired.
    pub const fn next_state(&self) -> SessionState {
        self.next
    }
}

/// Ordered transition rules, per session state.
#[derive(Debug, Default)]
pub struct TransitionTable {
    running: Vec<Rule>,
    paused: Vec<Rule>,
}

impl TransitionTable {
    /// Creates an empty table.
    pub const fn new() -> Self {
        Self {
            running: Vec::new(),
            paused: Vec::new(),
        }
    }

    /// Registers a rule for the given state.
    ///
    /// Registration order breaks ties between rules of a same state whose
    /// matches end at the same position.
    pub fn add(
        &mut self,
        state: SessionState,
        pattern: &'static str,
        action: Action,
        next: SessionState,
    ) -> crate::Result<&mut Self> {
        let pattern = Regex::new(pattern)
            .map_err(|source| crate::Error::InvalidPattern { pattern, source })?;

        self.rules_mut(state).push(Rule {
            pattern,
            action,
            next,
        });

        Ok(self)
    }

    /// Returns the rules of the given state.
    pub fn rules(&self, state: SessionState) -> &[Rule] {
        match state {
            SessionState::Running => &self.running,
            SessionState::Paused => &self.paused,
        }
    }

    fn rules_mut(&mut self, state: SessionState) -> &mut Vec<Rule> {
        match state {
            SessionState::Running => &mut self.running,
            SessionState::Paused => &mut self.paused,
        }
    }
}

/// Event to report to the handler.
pub(super) enum Event {
    Resumed,
    PausedAt(SourceLocation),
    ReadyForQuery,
}

impl Action {
    /// Builds the event of a fired rule from its captures.
    ///
    /// Returns `None` if the captured location cannot be decoded.
    pub(super) fn event(self, captures: &Captures<'_>) -> Option<Event> {
        match self {
            Self::Resume => Some(Event::Resumed),
            Self::Query => Some(Event::ReadyForQuery),
            Self::Jump => {
                let file = captures.get(1)?.as_bytes();
                let line = parse_number(captures.get(2)?.as_bytes())?;
                let column = parse_number(captures.get(3)?.as_bytes())?;

                Some(Event::PausedAt(SourceLocation {
                    file: String::from_utf8_lossy(file).into_owned(),
                    line,
                    column,
                }))
            }
        }
    }
}

fn parse_number(digits: &[u8]) -> Option<u64> {
    std::str::from_utf8(digits).ok()?.parse().ok()
}
