use std::collections::HashMap;
use std::convert::Infallible;

use gdbline_core::channel::QueryChannel;

/// Channel answering from canned responses, and recording sent commands.
///
/// Unknown commands get an empty response.
#[derive(Default)]
pub struct ScriptedChannel {
    responses: HashMap<String, String>,
    pub sent: Vec<String>,
}

impl ScriptedChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, command: &str, response: &str) -> Self {
        self.responses
            .insert(command.to_owned(), response.to_owned());
        self
    }
}

impl QueryChannel for ScriptedChannel {
    type Error = Infallible;

    async fn query(&mut self, command: &str) -> Result<String, Self::Error> {
        self.sent.push(command.to_owned());
        Ok(self.responses.get(command).cloned().unwrap_or_default())
    }
}

/// Channel whose debugger has died.
pub struct BrokenChannel;

impl QueryChannel for BrokenChannel {
    type Error = std::io::Error;

    async fn query(&mut self, _command: &str) -> Result<String, Self::Error> {
        Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
    }
}
