use super::Parser;
use crate::backend::Backend;
use crate::handler::EventHandler;

/// Default cap of the pending output buffer, in bytes.
pub const DEFAULT_MAX_BUFFER: usize = 64 * 1024;

/// Builder for [Parser].
///
/// It is usually created by calling [Parser::builder], and allows to
/// specify which backend and event handler a session's state machine
/// uses.
pub struct Builder<S> {
    state: S,
}

impl Builder<NeedsBackend> {
    pub(super) const fn new() -> Self {
        Self {
            state: NeedsBackend,
        }
    }

    /// Specifies the backend whose output is parsed.
    pub const fn with_backend(self, backend: Backend) -> Builder<NeedsHandler> {
        Builder {
            state: NeedsHandler { backend },
        }
    }
}

impl Builder<NeedsHandler> {
    /// Specifies the handler of session events.
    pub fn with_event_handler<H: EventHandler>(self, handler: H) -> Builder<Ready<H>> {
        Builder {
            state: Ready {
                backend: self.state.backend,
                handler,
                max_buffer: DEFAULT_MAX_BUFFER,
            },
        }
    }
}

impl<H: EventHandler> Builder<Ready<H>> {
    /// Specifies how many bytes of unmatched output are kept at most.
    ///
    /// Once exceeded, the oldest pending bytes are discarded. Defaults to
    /// [DEFAULT_MAX_BUFFER].
    pub fn max_buffer(mut self, max_buffer: usize) -> Self {
        self.state.max_buffer = max_buffer;
        self
    }

    /// Builds the parser, compiling the backend's transition rules.
    pub fn build(self) -> crate::Result<Parser<H>> {
        let Ready {
            backend,
            handler,
            max_buffer,
        } = self.state;

        Ok(Parser::new(backend, backend.transitions()?, handler, max_buffer))
    }
}

pub struct NeedsBackend;

pub struct NeedsHandler {
    backend: Backend,
}

pub struct Ready<H> {
    backend: Backend,
    handler: H,
    max_buffer: usize,
}
