mod listing;

pub use self::listing::{BreakpointListing, BreakpointMap, ListingEntry, SkipReason, SkippedLine};
use crate::backend::Backend;
use crate::channel::QueryChannel;
use crate::command::Command;
use crate::error::ChannelError;

/// Directory of the breakpoints known by a debugger.
///
/// The directory keeps no state: the debugger is the only source of truth
/// (breakpoints may be added or removed behind this crate's back), so every
/// [query](Self::query) lists them again.
pub struct BreakpointDirectory<C> {
    backend: Backend,
    channel: C,
}

impl<C> BreakpointDirectory<C> {
    /// Creates a directory querying the debugger through `channel`.
    pub const fn new(backend: Backend, channel: C) -> Self {
        Self { backend, channel }
    }

    /// Backend the directory talks to.
    pub const fn backend(&self) -> Backend {
        self.backend
    }

    /// Returns a mutable reference over the query channel.
    pub fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }

    /// Consumes the directory, returning its query channel.
    pub fn into_channel(self) -> C {
        self.channel
    }
}

impl<C: QueryChannel> BreakpointDirectory<C> {
    /// Resolves the debugger's name of the given source file.
    ///
    /// If the debugger gives no usable answer, `file` is returned as-is.
    #[tracing::instrument(name = "ResolveSource", skip(self))]
    pub async fn resolve_canonical_name(
        &mut self,
        file: &str,
    ) -> Result<String, ChannelError<C::Error>> {
        let command = Command::new("info").args(["source", file]);

        let response = self
            .channel
            .query(&command.to_line(self.backend))
            .await
            .map_err(ChannelError)?;

        tracing::debug!(%response);

        let Some(name) = self.backend.parse_source_file(&response) else {
            return Ok(file.to_owned());
        };

        tracing::info!(name, "resolved");

        Ok(name.to_owned())
    }

    /// Lists the enabled breakpoints of the given source file, per line.
    ///
    /// Breakpoints with multiple locations are reported under their parent
    /// ID, since the debugger only enables or disables them as a whole.
    #[tracing::instrument(name = "QueryBreakpoints", skip(self))]
    pub async fn query(&mut self, file: &str) -> Result<BreakpointMap, ChannelError<C::Error>> {
        let canonical_name = self.resolve_canonical_name(file).await?;

        if canonical_name != file {
            tracing::info!(%canonical_name, "mapped source file");
        }

        let command = Command::new("info").arg("breakpoints");

        let response = self
            .channel
            .query(&command.to_line(self.backend))
            .await
            .map_err(ChannelError)?;

        if response.is_empty() {
            return Ok(BreakpointMap::new());
        }

        let listing = BreakpointListing::parse(self.backend, &response, &canonical_name);

        tracing::debug!(
            lines = listing.breakpoints.len(),
            skipped = listing.skipped.len(),
            "listing parsed"
        );

        Ok(listing.breakpoints)
    }
}
