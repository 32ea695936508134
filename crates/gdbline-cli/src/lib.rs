//! Crate implementing the CLI commands.

mod breakpoints;
mod channel;
mod cli;
mod config;
mod handler;
mod replay;

pub use self::breakpoints::{evaluate_breakpoints, evaluate_translate};
pub use self::channel::TranscriptChannel;
pub use self::cli::{CliAction, CliOpts};
pub use self::config::{SessionConfig, parse_session_config};
pub use self::handler::PrintEventHandler;
pub use self::replay::{evaluate_replay, replay};
