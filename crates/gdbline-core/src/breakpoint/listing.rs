use std::path::{Component, Path, PathBuf};

use indexmap::IndexMap;

use crate::backend::Backend;

/// Enabled breakpoint IDs per source line.
///
/// Lines are kept as text, and IDs are ordered as listed by the debugger. A
/// line may hold several IDs (e.g., locations of different breakpoints
/// collapsing to the same line).
pub type BreakpointMap = IndexMap<String, Vec<String>>;

/// Enabled breakpoint location, parsed from a single listing line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListingEntry<'a> {
    /// Parent breakpoint ID.
    pub id: &'a str,

    /// Source file, as reported by the debugger.
    pub path: &'a str,

    /// Line number within the source file.
    pub line: &'a str,
}

/// Reason why a listing line was skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Not an enabled breakpoint with a resolved address (headers, disabled
    /// or pending breakpoints, annotations, etc).
    NotEnabled,

    /// No `path:line` location ends the line.
    NoLocation,

    /// The location belongs to another source file.
    OtherFile,
}

/// Line skipped while scanning a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkippedLine {
    /// Index of the line within the response.
    pub index: usize,

    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Result of scanning a breakpoint listing for a single source file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BreakpointListing {
    /// Enabled breakpoints of the source file.
    pub breakpoints: BreakpointMap,

    /// Non-blank lines that did not contribute to `breakpoints`.
    pub skipped: Vec<SkippedLine>,
}

impl BreakpointListing {
    /// Scans the response to a breakpoint listing command, keeping the
    /// enabled breakpoints located in `canonical_name`.
    ///
    /// The scan never fails: lines the backend cannot make sense of are
    /// skipped.
    pub fn parse(backend: Backend, response: &str, canonical_name: &str) -> Self {
        let mut listing = Self::default();

        for (index, line) in response.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let entry = backend.parse_listing_line(line).and_then(|entry| {
                if is_same_source(canonical_name, entry.path) {
                    Ok(entry)
                } else {
                    Err(SkipReason::OtherFile)
                }
            });

            match entry {
                Ok(ListingEntry { id, line, .. }) => {
                    listing
                        .breakpoints
                        .entry(line.to_owned())
                        .or_default()
                        .push(id.to_owned());
                }
                Err(reason) => {
                    tracing::debug!(index, ?reason, line, "skipped");
                    listing.skipped.push(SkippedLine { index, reason });
                }
            }
        }

        listing
    }
}

/// Checks whether `path` designates the source file `canonical_name`.
///
/// Reported paths may be relative where the canonical name is absolute, so
/// they are compared by suffix, first as-is then resolved.
fn is_same_source(canonical_name: &str, path: &str) -> bool {
    canonical_name.ends_with(path)
        || resolve_path(Path::new(path))
            .is_some_and(|real| canonical_name.ends_with(&*real.to_string_lossy()))
}

/// Resolves `path` to an absolute path.
///
/// Symbolic links are followed when the file exists locally. Otherwise the
/// path is only normalized against the working directory.
fn resolve_path(path: &Path) -> Option<PathBuf> {
    if let Ok(real) = std::fs::canonicalize(path) {
        return Some(real);
    }

    let absolute = std::env::current_dir().ok()?.join(path);

    let mut normalized = PathBuf::new();

    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `/..` stays `/`
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }

    Some(normalized)
}
