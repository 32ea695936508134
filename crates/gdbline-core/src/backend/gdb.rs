//! GDB dialect.
//!
//! GDB is expected to run with `annotate 1` and its prompt set to the
//! annotation sentinel, so that the terminal output carries `\x1a\x1a`
//! markers for source locations and `\x1a\x1a\x1a` when the prompt is shown.

use crate::breakpoint::{ListingEntry, SkipReason};
use crate::parser::{Action, SessionState, TransitionTable};

/// Prompt, anchored at the end of the pending output.
const PROMPT: &str = r"\x1a\x1a\x1a$";

/// Source annotation: `\x1a\x1a<file>:<line>:<column>:<beg|middle>:<addr>`.
///
/// The trailing `:` makes sure the column is complete before matching.
const JUMP: &str = r"(?-u)[\r\n]\x1a\x1a([^:\r\n]+):(\d+):(\d+):";

const CONTINUING: &str = r"[\r\n]Continuing\.";

const BREAKPOINT_HIT: &str = r"[\r\n]Breakpoint \d+";

/// Generic command names with their GDB spelling.
const COMMANDS: &[(&str, &str)] = &[("delete_breakpoints", "delete"), ("breakpoint", "break")];

const SOURCE_FILE_LABEL: &str = "Current source file is ";

pub(super) fn transitions() -> crate::Result<TransitionTable> {
    use SessionState::{Paused, Running};

    let mut table = TransitionTable::new();

    table
        .add(Paused, CONTINUING, Action::Resume, Running)?
        .add(Paused, JUMP, Action::Jump, Paused)?
        .add(Paused, PROMPT, Action::Query, Paused)?
        // a breakpoint hit implies a stop, but a bare prompt doesn't
        .add(Running, BREAKPOINT_HIT, Action::Query, Paused)?
        .add(Running, PROMPT, Action::Query, Running)?
        .add(Running, JUMP, Action::Jump, Paused)?;

    Ok(table)
}

pub(super) fn translate_command(name: &str) -> &str {
    COMMANDS
        .iter()
        .find_map(|&(generic, literal)| (generic == name).then_some(literal))
        .unwrap_or(name)
}

pub(super) fn parse_source_file(response: &str) -> Option<&str> {
    response.lines().find_map(|line| {
        let (_, name) = line.split_once(SOURCE_FILE_LABEL)?;
        let name = name.split_once('\r').map_or(name, |(name, _)| name);
        (!name.is_empty()).then_some(name)
    })
}

/// Parses a row of `info breakpoints`.
///
/// ```text
/// Num     Type           Disp Enb Address            What
/// 1       breakpoint     keep y   <MULTIPLE>
/// 1.1                         y   0x0000000000401136 in foo at src/a.cpp:3
/// 2       breakpoint     keep n   0x0000000000401156 in main at src/a.cpp:12
/// ```
///
/// Only rows with an enabled flag directly followed by an address are
/// resolved code locations, which rules out disabled, pending and
/// `<MULTIPLE>` parent rows as well as watchpoints.
pub(super) fn parse_listing_line(line: &str) -> Result<ListingEntry<'_>, SkipReason> {
    let fields = line.split_whitespace().collect::<Vec<_>>();

    let is_enabled = fields
        .windows(2)
        .any(|pair| matches!(pair, [enb, addr] if *enb == "y" && addr.starts_with("0x")));

    let (true, Some(id), Some(location)) = (is_enabled, fields.first(), fields.last()) else {
        return Err(SkipReason::NotEnabled);
    };

    let (path, line) = location
        .split_once(':')
        .filter(|(path, line)| {
            !path.is_empty() && !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
        })
        .ok_or(SkipReason::NoLocation)?;

    // enable/disable only works on the parent breakpoint (e.g., 1.4 -> 1)
    let id = id.split_once('.').map_or(*id, |(parent, _)| parent);

    Ok(ListingEntry { id, path, line })
}
