use std::ffi::OsStr;
use std::path::Path;

use gdbline_core::backend::Backend;
use gdbline_core::parser::DEFAULT_MAX_BUFFER;
use miette::IntoDiagnostic;

/// Configuration of a debugger session.
#[derive(Debug, PartialEq, knus::Decode)]
pub struct SessionConfig {
    /// Name of the debugger backend.
    #[knus(child, default = Backend::default().name().to_owned(), unwrap(argument))]
    pub backend: String,

    /// Size of the reads performed on the debugger output.
    #[knus(child, default = 4096, unwrap(argument))]
    pub chunk_size: usize,

    /// Maximum amount of unmatched output kept by the state machine.
    #[knus(child, default = DEFAULT_MAX_BUFFER, unwrap(argument))]
    pub max_buffer: usize,
}

impl SessionConfig {
    /// Resolves the configured backend.
    pub fn backend(&self) -> miette::Result<Backend> {
        self.backend.parse().into_diagnostic()
    }
}

/// Parses the session configuration, either inline or from a `.kdl` file.
///
/// A missing configuration yields the defaults.
pub fn parse_session_config(config: Option<&str>) -> miette::Result<SessionConfig> {
    let Some(config) = config else {
        return Ok(knus::parse("<default>", "")?);
    };

    let path = Path::new(config);

    let config = if let Some((filename, "kdl")) = path
        .file_name()
        .and_then(OsStr::to_str)
        .zip(path.extension().and_then(OsStr::to_str))
    {
        let content = std::fs::read_to_string(path).into_diagnostic()?;
        knus::parse(filename, &content)?
    } else {
        knus::parse("<content>", config)?
    };

    Ok(config)
}
