//! Tests for the text-only copy run.

mod helpers;

use std::fs;

use helpers::{raw, ScriptedMapper, ScriptedSource, Workspace};
use ua_corpus::error_handling::{InfoType, ProcessingStats};
use ua_corpus::pipeline::copy_tests;
use ua_corpus::source::{SourceCollection, TxtFileSource};
use ua_corpus::run_copy_tests;

#[test]
fn test_copy_keeps_corpus_order_and_appends_new_headers() {
    let ws = Workspace::new();
    ws.write_txt_corpus(&["UA-corpus-1", "UA-shared"]);

    let first = ScriptedSource::new("first", ScriptedMapper::default())
        .entry("UA-shared", raw("Chrome", "90", None, "desktop"))
        .entry("UA-first", raw("Chrome", "91", None, "desktop"));
    let second = ScriptedSource::new("second", ScriptedMapper::default())
        .entry("UA-first", raw("Firefox", "88", None, "desktop"))
        .entry("UA-second", raw("Firefox", "89", None, "desktop"));
    let sources = SourceCollection::new().with(first).with(second);

    let stats = ProcessingStats::new();
    let report = copy_tests(&ws.config.txt_corpus_dir, &sources, &stats).unwrap();

    assert_eq!(report.new_tests, 2);
    assert_eq!(report.total_tests, 4);
    assert_eq!(
        ws.txt_corpus(),
        "UA-corpus-1\nUA-shared\nUA-first\nUA-second\n"
    );
    assert_eq!(stats.get_info_count(InfoType::DuplicateHeader), 2);
}

#[test]
fn test_copy_never_maps() {
    let ws = Workspace::new();
    let mapper = ScriptedMapper::default();
    let calls = mapper.calls.clone();
    let sources = SourceCollection::new().with(
        ScriptedSource::new("library", mapper).entry("UA-1", raw("Chrome", "90", None, "desktop")),
    );

    copy_tests(&ws.config.txt_corpus_dir, &sources, &ProcessingStats::new()).unwrap();
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_copy_splits_into_thousand_line_files() {
    let ws = Workspace::new();
    let library = ws.root().join("library");
    fs::create_dir_all(&library).unwrap();
    let lines: Vec<String> = (0..2001).map(|i| format!("UA-{i}")).collect();
    fs::write(library.join("list.txt"), lines.join("\n")).unwrap();

    let sources = SourceCollection::new().with(TxtFileSource::new(&library));
    let report = copy_tests(&ws.config.txt_corpus_dir, &sources, &ProcessingStats::new()).unwrap();

    assert_eq!(report.files, 3);
    assert_eq!(report.total_tests, 2001);
    let last = fs::read_to_string(ws.config.txt_corpus_dir.join("0000002.txt")).unwrap();
    assert_eq!(last, "UA-2000\n");
}

#[test]
fn test_copy_twice_adds_nothing_new() {
    let ws = Workspace::new();
    let library = ws.config.resources_dir.join("txt");
    fs::create_dir_all(&library).unwrap();
    fs::write(library.join("list.txt"), "UA-1\nUA-2\n").unwrap();

    let first = run_copy_tests(&ws.config).unwrap();
    assert_eq!((first.new_tests, first.total_tests), (2, 2));

    let second = run_copy_tests(&ws.config).unwrap();
    assert_eq!((second.new_tests, second.total_tests), (0, 2));
    assert_eq!(ws.txt_corpus(), "UA-1\nUA-2\n");
}

#[test]
fn test_copy_reads_browscap_fixtures() {
    let ws = Workspace::new();
    let browscap = ws.config.resources_dir.join("browscap");
    fs::create_dir_all(&browscap).unwrap();
    fs::write(
        browscap.join("issue-1.json"),
        r#"{
            "issue-1-A": {"ua": "Mozilla/5.0 (Windows NT 10.0) Chrome/90.0", "properties": {"Browser": "Chrome"}},
            "issue-1-B": {"properties": {"Browser": "Chrome"}}
        }"#,
    )
    .unwrap();

    let report = run_copy_tests(&ws.config).unwrap();
    assert_eq!(report.new_tests, 1);
    assert_eq!(
        ws.txt_corpus(),
        "Mozilla/5.0 (Windows NT 10.0) Chrome/90.0\n"
    );
}
