use gdbline_core::ChannelError;
use gdbline_core::backend::Backend;
use gdbline_core::breakpoint::BreakpointDirectory;
use indexmap::indexmap;
use indoc::indoc;
use test_log::test;

use crate::common::{BrokenChannel, ScriptedChannel};

const SOURCE_INFO: &str = indoc! {"
    Current source file is /abs/path/src/foo.cpp
    Compilation directory is /abs/path
    Located in /abs/path/src/foo.cpp
    Contains 64 lines.
    Source language is c++.
"};

const LISTING: &str = indoc! {"
    Num     Type           Disp Enb Address            What
    1       breakpoint     keep y   <MULTIPLE>
    1.1                         y   0x0000000000401136 in foo<int> at src/foo.cpp:3
    1.2                         y   0x000000000040114a in foo<long> at src/foo.cpp:7
    2       breakpoint     keep y   0x0000000000401156 in main at src/foo.cpp:42
            breakpoint already hit 1 time
    3       breakpoint     keep n   0x0000000000401160 in main at src/foo.cpp:10
    4       breakpoint     keep y   0x0000000000401200 in bar at src/bar.cpp:42
    5       hw watchpoint  keep y                      counter
    6       breakpoint     keep y   0x0000000000401170 in main at src/foo.cpp:42
            stop only if x > 3
"};

fn directory(listing: &str) -> BreakpointDirectory<ScriptedChannel> {
    BreakpointDirectory::new(
        Backend::Gdb,
        ScriptedChannel::new()
            .respond("info source foo.cpp", SOURCE_INFO)
            .respond("info breakpoints", listing),
    )
}

fn ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| (*id).to_owned()).collect()
}

#[test(tokio::test)]
async fn enabled_breakpoints_per_line() {
    let mut directory = directory(LISTING);

    let breakpoints = directory.query("foo.cpp").await.expect("query");

    assert_eq!(
        breakpoints.iter().collect::<Vec<_>>(),
        vec![
            (&"3".to_owned(), &ids(&["1"])),
            (&"7".to_owned(), &ids(&["1"])),
            (&"42".to_owned(), &ids(&["2", "6"])),
        ]
    );
    assert_eq!(
        directory.into_channel().sent,
        vec!["info source foo.cpp", "info breakpoints"]
    );
}

#[test(tokio::test)]
async fn disabled_breakpoint_is_absent() {
    let mut directory = directory(indoc! {"
        Num     Type           Disp Enb Address            What
        3       breakpoint     keep y   0x0000000000401156 in main at foo.cpp:42
        4       breakpoint     keep n   0x0000000000401160 in main at foo.cpp:10
    "});

    let breakpoints = directory.query("foo.cpp").await.expect("query");

    assert_eq!(breakpoints, indexmap! { "42".to_owned() => ids(&["3"]) });
}

#[test(tokio::test)]
async fn multiple_locations_collapse_to_parent() {
    let mut directory = directory(indoc! {"
        2       breakpoint     keep y   <MULTIPLE>
        2.1                         y   0x0000000000401136 in foo<int> at foo.cpp:3
        2.2                         y   0x000000000040114a in foo<long> at foo.cpp:7
    "});

    let breakpoints = directory.query("foo.cpp").await.expect("query");

    assert_eq!(
        breakpoints,
        indexmap! {
            "3".to_owned() => ids(&["2"]),
            "7".to_owned() => ids(&["2"]),
        }
    );
}

#[test(tokio::test)]
async fn relative_listing_path_matches_canonical_name() {
    let mut directory = directory(
        "1       breakpoint     keep y   0x0000000000401136 in main at src/foo.cpp:5\n",
    );

    assert_eq!(
        directory
            .resolve_canonical_name("foo.cpp")
            .await
            .expect("resolve"),
        "/abs/path/src/foo.cpp"
    );

    let breakpoints = directory.query("foo.cpp").await.expect("query");

    assert_eq!(breakpoints, indexmap! { "5".to_owned() => ids(&["1"]) });
}

#[test(tokio::test)]
async fn resolved_listing_path_matches_canonical_name() {
    // integration tests run from the package directory
    let canonical_name = std::fs::canonicalize("Cargo.toml").expect("canonicalize");
    let canonical_name = canonical_name.to_string_lossy();

    let mut directory = BreakpointDirectory::new(
        Backend::Gdb,
        ScriptedChannel::new()
            .respond(
                "info source Cargo.toml",
                &format!("Current source file is {canonical_name}\n"),
            )
            .respond(
                "info breakpoints",
                "1       breakpoint     keep y   0x0000000000401136 in main at src/../Cargo.toml:1\n",
            ),
    );

    let breakpoints = directory.query("Cargo.toml").await.expect("query");

    assert_eq!(breakpoints, indexmap! { "1".to_owned() => ids(&["1"]) });
}

#[test(tokio::test)]
async fn unknown_source_falls_back_to_identifier() {
    let mut directory = BreakpointDirectory::new(
        Backend::Gdb,
        ScriptedChannel::new()
            .respond("info source foo.cpp", "No symbol table is loaded.  Use the \"file\" command.\n")
            .respond(
                "info breakpoints",
                "1       breakpoint     keep y   0x0000000000401136 in main at foo.cpp:5\n",
            ),
    );

    assert_eq!(
        directory
            .resolve_canonical_name("foo.cpp")
            .await
            .expect("resolve"),
        "foo.cpp"
    );

    let breakpoints = directory.query("foo.cpp").await.expect("query");

    assert_eq!(breakpoints, indexmap! { "5".to_owned() => ids(&["1"]) });
}

#[test(tokio::test)]
async fn empty_listing_is_empty_map() {
    let mut directory = directory("");

    let breakpoints = directory.query("foo.cpp").await.expect("query");

    assert!(breakpoints.is_empty());
}

#[test(tokio::test)]
async fn malformed_lines_do_not_abort_the_scan() {
    let mut directory = directory(indoc! {"
        y 0x
        7       breakpoint     keep y   0x0000000000401136 in main at foo.cpp:abc
        8       breakpoint     keep y   0x0000000000401140 <main+4>
        9       breakpoint     keep y   0x0000000000401150 in main at foo.cpp:
        10      breakpoint     keep y   0x0000000000401160 in main at foo.cpp:12
    "});

    let breakpoints = directory.query("foo.cpp").await.expect("query");

    assert_eq!(breakpoints, indexmap! { "12".to_owned() => ids(&["10"]) });
}

#[test(tokio::test)]
async fn every_query_asks_the_debugger() {
    let mut directory = directory(LISTING);

    let first = directory.query("foo.cpp").await.expect("query");
    let second = directory.query("foo.cpp").await.expect("query");

    assert_eq!(first, second);
    assert_eq!(directory.channel_mut().sent.len(), 4);
}

#[test(tokio::test)]
async fn channel_error_is_propagated() {
    let mut directory = BreakpointDirectory::new(Backend::Gdb, BrokenChannel);

    let err = directory.query("foo.cpp").await.expect_err("broken channel");

    let ChannelError(err) = err;
    assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
}
