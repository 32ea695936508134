use std::io::Write;
use std::path::PathBuf;

use gdbline_core::Command;
use gdbline_core::breakpoint::BreakpointDirectory;
use miette::IntoDiagnostic;

use crate::{SessionConfig, TranscriptChannel};

/// Runs the subcommand for listing the enabled breakpoints of a source file,
/// from captured debugger responses.
///
/// One line is printed per source line holding breakpoints, in listing
/// order: `<line>: <id> [<id>...]`.
pub fn evaluate_breakpoints(
    config: &SessionConfig,
    listing: PathBuf,
    source_info: Option<PathBuf>,
    file: &str,
    mut output: impl Write,
) -> miette::Result<()> {
    let backend = config.backend()?;

    let channel = TranscriptChannel::new().respond(
        Command::new("info").arg("breakpoints").to_line(backend),
        listing,
    );

    let channel = if let Some(source_info) = source_info {
        channel.respond(
            Command::new("info").args(["source", file]).to_line(backend),
            source_info,
        )
    } else {
        channel
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .into_diagnostic()?;

    let breakpoints = runtime
        .block_on(BreakpointDirectory::new(backend, channel).query(file))
        .into_diagnostic()?;

    for (line, ids) in breakpoints {
        writeln!(output, "{line}: {}", ids.join(" ")).into_diagnostic()?;
    }

    Ok(())
}

/// Runs the subcommand for printing the debugger's spelling of a generic
/// command.
pub fn evaluate_translate(
    config: &SessionConfig,
    name: String,
    args: Vec<String>,
    mut output: impl Write,
) -> miette::Result<()> {
    let line = Command::new(name).args(args).to_line(config.backend()?);

    writeln!(output, "{line}").into_diagnostic()
}
