mod channel;
mod handler;

pub use self::channel::{BrokenChannel, ScriptedChannel};
pub use self::handler::{Recorded, RecordingHandler, RefusingHandler};
