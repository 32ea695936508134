//! This crate drives an interactive debugger (e.g., `gdb`) from its
//! terminal interface, by interpreting its free-text output.
//!
//! Two main components are provided:
//! - A [Parser](self::parser::Parser), the session state machine turning the
//!   raw output stream into events (execution resumed, paused at a source
//!   location, ready for the next command).
//! - A [BreakpointDirectory](self::breakpoint::BreakpointDirectory),
//!   listing the enabled breakpoints of a source file by querying the
//!   debugger.
//!
//! The process spawning and the terminal I/O are left to the caller, which
//! forwards the output chunks to the parser and implements a
//! [QueryChannel](self::channel::QueryChannel) for the directory.
//!
//! # Consuming session events
//!
//! ```no_run
//! use gdbline_core::backend::Backend;
//! use gdbline_core::handler::EventHandler;
//! use gdbline_core::parser::{Parser, SourceLocation};
//!
//! struct CustomHandler;
//!
//! impl EventHandler for CustomHandler {
//!     type Error = std::io::Error;
//!
//!     fn paused_at(&mut self, location: &SourceLocation) -> Result<(), Self::Error> {
//!         //
//!         // jump to the source location
//!         //
//!
//!         Ok(())
//!     }
//! }
//!
//! let mut parser = Parser::builder()
//!     .with_backend(Backend::Gdb)
//!     .with_event_handler(CustomHandler)
//!     .build()
//!     .unwrap();
//!
//! // output chunks, as read from the debugger's terminal
//! parser.feed(b"\r\nBreakpoint 1, main () at src/main.c:4\r\n").unwrap();
//! parser.feed(b"\x1a\x1a/work/src/main.c:4:43:beg:0x401126\r\n").unwrap();
//! ```
//!
//! # Listing breakpoints
//!
//! ```no_run
//! use gdbline_core::backend::Backend;
//! use gdbline_core::breakpoint::BreakpointDirectory;
//! use gdbline_core::channel::QueryChannel;
//!
//! struct Proxy;
//!
//! impl QueryChannel for Proxy {
//!     type Error = std::io::Error;
//!
//!     async fn query(&mut self, command: &str) -> Result<String, Self::Error> {
//!         //
//!         // send `command` to the debugger and collect its response
//!         //
//!
//!         Ok(String::new())
//!     }
//! }
//!
//! # async fn run() {
//! let mut directory = BreakpointDirectory::new(Backend::Gdb, Proxy);
//!
//! // e.g., {"12": ["1", "3"]}
//! let breakpoints = directory.query("src/main.c").await.unwrap();
//! # }
//! ```

/// Module containing the supported debugger backends.
pub mod backend;

/// Module listing the breakpoints of a debugger.
pub mod breakpoint;

/// Module containing the trait for querying a debugger.
pub mod channel;

mod command;
mod error;

/// Module containing the trait for handling session events.
pub mod handler;

/// Module implementing the session state machine.
pub mod parser;

pub use self::command::Command;
pub use self::error::{ChannelError, Error, HandlerError, Result};
