use std::io::Write;
use std::path::PathBuf;

use gdbline_core::parser::Parser;
use miette::IntoDiagnostic;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::{PrintEventHandler, SessionConfig};

/// Runs the subcommand for replaying a captured terminal transcript.
pub fn evaluate_replay(
    config: &SessionConfig,
    transcript: PathBuf,
    output: impl Write,
) -> miette::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .into_diagnostic()?;

    runtime.block_on(async move {
        let transcript = tokio::fs::File::open(transcript)
            .await
            .into_diagnostic()?;

        replay(config, transcript, output).await
    })
}

/// Feeds the debugger output read from `input` to a session state machine,
/// in reads of at most `chunk-size` bytes.
///
/// Every recognized event is printed to `output`, followed by the final
/// session state.
pub async fn replay<R, W>(config: &SessionConfig, mut input: R, output: W) -> miette::Result<()>
where
    R: AsyncRead + Unpin,
    W: Write,
{
    let mut parser = Parser::builder()
        .with_backend(config.backend()?)
        .with_event_handler(PrintEventHandler::new(output))
        .max_buffer(config.max_buffer)
        .build()
        .into_diagnostic()?;

    let mut chunk = vec![0u8; config.chunk_size.max(1)];
    let mut events = 0;

    loop {
        let len = input.read(&mut chunk).await.into_diagnostic()?;

        if len == 0 {
            break;
        }

        events += parser.feed(&chunk[..len]).into_diagnostic()?;
    }

    tracing::info!(events, state = %parser.state(), "transcript replayed");

    let state = parser.state();
    writeln!(parser.into_handler().into_inner(), "state {state}").into_diagnostic()?;

    Ok(())
}
