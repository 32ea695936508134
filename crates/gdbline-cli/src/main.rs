#![allow(missing_docs)]
#![allow(clippy::print_stderr)]

use std::fs::File;
use std::path::PathBuf;

use miette::IntoDiagnostic;

use gdbline_cli::{CliAction, CliOpts, parse_session_config};

use tracing_subscriber::EnvFilter;

fn main() {
    let cli = CliOpts::parse_from_cmdline();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_env_var("GDBLINE_LOG")
                .from_env_lossy(),
        )
        .init();

    let res = match cli.action {
        CliAction::Replay {
            config,
            output,
            transcript,
        } => evaluate_replay(config, output, transcript),
        CliAction::Breakpoints {
            config,
            listing,
            source_info,
            file,
        } => parse_session_config(config.as_deref()).and_then(|config| {
            gdbline_cli::evaluate_breakpoints(
                &config,
                listing,
                source_info,
                &file,
                std::io::stdout(),
            )
        }),
        CliAction::Translate { config, name, args } => parse_session_config(config.as_deref())
            .and_then(|config| {
                gdbline_cli::evaluate_translate(&config, name, args, std::io::stdout())
            }),
    };

    if let Err(e) = res {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn evaluate_replay(
    config: Option<String>,
    output: Option<PathBuf>,
    transcript: PathBuf,
) -> miette::Result<()> {
    let config = parse_session_config(config.as_deref())?;

    if let Some(output) = output {
        let file = File::create(output).into_diagnostic()?;
        gdbline_cli::evaluate_replay(&config, transcript, file)
    } else {
        gdbline_cli::evaluate_replay(&config, transcript, std::io::stdout())
    }
}
