use std::io;
use std::path::PathBuf;

use gdbline_core::channel::QueryChannel;

/// Query channel answering from captured debugger responses.
///
/// Each known command line is answered with the content of its response
/// file. Any other command gets an empty response.
#[derive(Debug, Default)]
pub struct TranscriptChannel {
    responses: Vec<(String, PathBuf)>,
}

impl TranscriptChannel {
    /// Creates a channel without any captured response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `command` with the content of the file at `path`.
    pub fn respond(mut self, command: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.responses.push((command.into(), path.into()));
        self
    }
}

impl QueryChannel for TranscriptChannel {
    type Error = io::Error;

    async fn query(&mut self, command: &str) -> Result<String, Self::Error> {
        let Some((_, path)) = self.responses.iter().find(|(known, _)| known == command) else {
            tracing::debug!(command, "no captured response");
            return Ok(String::new());
        };

        tokio::fs::read_to_string(path).await
    }
}
