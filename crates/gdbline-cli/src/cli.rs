use std::path::PathBuf;

/// Offline analysis of captured debugger sessions.
#[derive(clap::Parser)]
pub struct CliOpts {
    /// The command to run.
    #[clap(subcommand)]
    pub action: CliAction,
}

/// The command to run.
#[derive(clap::Subcommand)]
pub enum CliAction {
    /// Command to replay a captured terminal transcript through the session
    /// state machine, printing the recognized events.
    Replay {
        /// Session configuration (KDL format).
        ///
        /// If it ends with `.kdl`, it is treated as a path to a configuration
        /// file. Otherwise it is directly parsed as inline KDL-formatted
        /// configuration.
        #[clap(short, long, value_name = "CONTENT/PATH")]
        config: Option<String>,

        /// Path to the optional destination of the events.
        #[clap(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Path to the raw terminal output of the debugger.
        transcript: PathBuf,
    },

    /// Command to list the enabled breakpoints of a source file, from
    /// captured debugger responses.
    Breakpoints {
        /// Session configuration (KDL format).
        #[clap(short, long, value_name = "CONTENT/PATH")]
        config: Option<String>,

        /// Path to the captured response of the breakpoint listing command.
        #[clap(short, long, value_name = "PATH")]
        listing: PathBuf,

        /// Path to the captured response of the source introspection command.
        #[clap(short, long, value_name = "PATH")]
        source_info: Option<PathBuf>,

        /// Source file to list the breakpoints of.
        file: String,
    },

    /// Command to print the debugger's spelling of a generic command.
    Translate {
        /// Session configuration (KDL format).
        #[clap(short, long, value_name = "CONTENT/PATH")]
        config: Option<String>,

        /// Generic command name (e.g., `delete_breakpoints`).
        name: String,

        /// Command's arguments.
        args: Vec<String>,
    },
}

impl CliOpts {
    /// Parses the CLI from the command-line.
    ///
    /// # Warning
    ///
    /// Exits on error.
    pub fn parse_from_cmdline() -> Self {
        <Self as clap::Parser>::parse()
    }
}
