use std::future::Future;

/// Trait implementing the request/response channel into a debugger session.
///
/// A channel sends one literal command line to the debugger and resolves once
/// the **full** textual response has been collected. Taking `&mut self`
/// guarantees that a single query is in flight at a time, since a response
/// can only be told apart from another one by assuming no command is
/// interleaved.
///
/// # Note
///
/// No timeout nor retry is applied by this crate. A channel that needs
/// cancellation must implement it itself.
pub trait QueryChannel {
    /// Error returned by this channel (e.g., the debugger process died).
    type Error: std::error::Error;

    /// Sends `command` to the debugger and returns its response.
    ///
    /// An empty response is a valid answer.
    fn query(&mut self, command: &str) -> impl Future<Output = Result<String, Self::Error>>;
}

impl<C: QueryChannel + ?Sized> QueryChannel for &mut C {
    type Error = C::Error;

    fn query(&mut self, command: &str) -> impl Future<Output = Result<String, Self::Error>> {
        (**self).query(command)
    }
}
