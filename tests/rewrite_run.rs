//! Tests for the full rewrite run: mapping, signature dedup, device
//! fallback and corpus/stub/CI output.

mod helpers;

use std::fs;

use helpers::{raw, snapshot, with_platform, ScriptedMapper, ScriptedSource, Workspace};
use ua_corpus::error_handling::{InfoType, ProcessingStats, WarningType};
use ua_corpus::initialization::{init_lookup_tables, LookupTables};
use ua_corpus::pipeline::rewrite_tests;
use ua_corpus::source::SourceCollection;
use ua_corpus::{run_rewrite_tests, Config};

fn tables() -> LookupTables {
    init_lookup_tables(&Config::default()).expect("embedded tables load")
}

fn numbered_source(mapper: ScriptedMapper, count: usize) -> ScriptedSource {
    (0..count).fold(ScriptedSource::new("numbered", mapper), |source, i| {
        source.entry(
            &format!("UA-{i}"),
            raw("Chrome", &format!("{i}.0"), None, "desktop"),
        )
    })
}

#[test]
fn test_same_signature_keeps_first_header() {
    let ws = Workspace::new();
    let sources = SourceCollection::new().with(
        ScriptedSource::new("library", ScriptedMapper::default())
            .entry("UA-A", raw("Chrome", "90.0.1", None, "desktop"))
            .entry("UA-B", raw("Chrome", "90.0.2", None, "desktop")),
    );
    let stats = ProcessingStats::new();

    let report = rewrite_tests(&ws.config, &sources, &tables(), &stats).unwrap();

    assert_eq!((report.new_tests, report.total_tests), (1, 1));
    assert_eq!(stats.get_info_count(InfoType::DuplicateSignature), 1);
    let fixtures = ws.fixtures();
    assert_eq!(fixtures.len(), 1);
    assert_eq!(fixtures[0].1["headers"]["user-agent"], "UA-A");
    assert_eq!(fixtures[0].1["browser"]["version"], "90.0.1");
}

#[test]
fn test_first_source_wins_a_shared_signature() {
    let ws = Workspace::new();
    let chrome = |version: &str| {
        with_platform(raw("Chrome", version, None, "desktop"), "Blink", "90", "Windows", "10")
    };
    let sources = SourceCollection::new()
        .with(ScriptedSource::new("a", ScriptedMapper::default()).entry("UA-1", chrome("90")))
        .with(ScriptedSource::new("b", ScriptedMapper::default()).entry("UA-2", chrome("90")));
    let stats = ProcessingStats::new();

    let report = rewrite_tests(&ws.config, &sources, &tables(), &stats).unwrap();

    assert_eq!((report.new_tests, report.total_tests), (1, 1));
    assert_eq!(stats.get_info_count(InfoType::DuplicateSignature), 1);
    let fixtures = ws.fixtures();
    assert_eq!(fixtures.len(), 1);
    assert_eq!(fixtures[0].1["headers"]["user-agent"], "UA-1");
    assert_eq!(fixtures[0].1["engine"]["name"], "Blink");
    assert_eq!(fixtures[0].1["os"]["name"], "Windows");
}

#[test]
fn test_signatures_use_the_rewritten_device() {
    let ws = Workspace::new();
    // Both devices end up unknown: the first has no regex match, the second
    // never had a name.
    let sources = SourceCollection::new().with(
        ScriptedSource::new("library", ScriptedMapper::default())
            .entry(
                "Mozilla/5.0 (Linux; Android 9; SomethingElse) AppleWebKit/537.36",
                raw("Chrome", "41", Some("general Mobile Device"), "smartphone"),
            )
            .entry(
                "Mozilla/5.0 (Linux; Android 9; OtherThing) AppleWebKit/537.36",
                raw("Chrome", "41", None, "smartphone"),
            ),
    );
    let stats = ProcessingStats::new();

    let first = rewrite_tests(&ws.config, &sources, &tables(), &stats).unwrap();
    let written = snapshot(ws.root());
    assert_eq!(first.total_tests, 1);
    assert_eq!(stats.get_info_count(InfoType::DuplicateSignature), 1);

    let second = run_rewrite_tests(&ws.config).unwrap();
    assert_eq!(second.total_tests, first.total_tests);
    assert_eq!(second.files, first.files);
    assert_eq!(snapshot(ws.root()), written);
}

#[test]
fn test_corpus_headers_are_not_mapped() {
    let ws = Workspace::new();
    ws.write_txt_corpus(&["UA-seeded"]);
    let mapper = ScriptedMapper::default();
    let calls = mapper.calls.clone();
    let sources = SourceCollection::new().with(
        ScriptedSource::new("library", mapper)
            .entry("UA-seeded", raw("Chrome", "90", None, "desktop"))
            .entry("UA-new", raw("Firefox", "88", None, "desktop")),
    );
    let stats = ProcessingStats::new();

    let report = rewrite_tests(&ws.config, &sources, &tables(), &stats).unwrap();

    // only UA-new went through the mapper
    assert_eq!(calls.get(), 1);
    assert_eq!((report.new_tests, report.total_tests), (1, 2));
    assert_eq!(stats.get_warning_count(WarningType::DetectorMiss), 1);
    let fixtures = ws.fixtures();
    assert_eq!(fixtures[0].1["headers"]["user-agent"], "UA-seeded");
    assert!(fixtures[0].1["browser"]["name"].is_null());
    assert_eq!(fixtures[1].1["browser"]["name"], "Firefox");
}

#[test]
fn test_chunk_layout_stubs_and_ci_blocks() {
    let ws = Workspace::new();
    let sources = SourceCollection::new().with(numbered_source(ScriptedMapper::default(), 2500));

    let report = rewrite_tests(&ws.config, &sources, &tables(), &ProcessingStats::new()).unwrap();

    assert_eq!(report.total_tests, 2500);
    assert_eq!(report.folders, 3);
    assert_eq!(report.files, 25);
    for group in ["0000000", "0000001", "0000002"] {
        let stub = ws.config.runner_dir.join(format!("T{group}Test.php"));
        let content = fs::read_to_string(&stub).unwrap();
        assert!(content.contains(&format!("        'tests/issues/{group}/',")));
        assert!(content.contains(&format!("class T{group}Test")));
    }
    assert!(!ws.config.runner_dir.join("T0000003Test.php").exists());

    let ci = fs::read_to_string(&ws.config.ci_config).unwrap();
    assert_eq!(ci.matches("    #1000 tests\n").count(), 2);
    assert_eq!(ci.matches("    # 500 tests\n").count(), 1);
    assert!(ci.contains("--columns 117  tests/UserAgentsTest/T0000002Test.php --  500 tests"));
    assert!(!ci.contains("### tests ###"));
}

#[test]
fn test_second_run_is_byte_identical() {
    let ws = Workspace::new();
    let sources = SourceCollection::new().with(numbered_source(ScriptedMapper::default(), 150));
    rewrite_tests(&ws.config, &sources, &tables(), &ProcessingStats::new()).unwrap();
    let first = snapshot(ws.root());

    let report = run_rewrite_tests(&ws.config).unwrap();
    let second = snapshot(ws.root());

    assert_eq!(report.total_tests, 150);
    assert_eq!(report.new_tests, 0);
    assert_eq!(first, second);
}

#[test]
fn test_stale_fixtures_and_stubs_are_replaced() {
    let ws = Workspace::new();
    let stale_fixture = ws.config.fixture_dir.join("0000009/0000000.json");
    let stale_stub = ws.config.runner_dir.join("T0000009Test.php");
    fs::create_dir_all(stale_fixture.parent().unwrap()).unwrap();
    fs::create_dir_all(&ws.config.runner_dir).unwrap();
    fs::write(&stale_fixture, "{}").unwrap();
    fs::write(&stale_stub, "<?php").unwrap();

    let sources = SourceCollection::new().with(numbered_source(ScriptedMapper::default(), 3));
    rewrite_tests(&ws.config, &sources, &tables(), &ProcessingStats::new()).unwrap();

    assert!(!stale_fixture.exists());
    assert!(!stale_stub.exists());
    assert!(ws.config.runner_dir.join("T0000000Test.php").exists());
}

#[test]
fn test_missing_template_aborts_before_cleanup() {
    let mut ws = Workspace::new();
    let fixture = ws.config.fixture_dir.join("0000000/0000000.json");
    fs::create_dir_all(fixture.parent().unwrap()).unwrap();
    fs::write(&fixture, "{}").unwrap();
    ws.config.runner_template = ws.root().join("missing.php.txt");

    let err = rewrite_tests(&ws.config, &SourceCollection::new(), &tables(), &ProcessingStats::new())
        .unwrap_err();

    assert!(format!("{:#}", err).contains("template"));
    assert!(fixture.exists());
}

#[test]
fn test_generic_mobile_devices_go_through_fallback() {
    let ws = Workspace::new();
    let galaxy = "Mozilla/5.0 (Linux; Android 4.4.2; SM-G900F Build/KOT49H) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/40.0 Mobile Safari/537.36";
    let bb10 = "Mozilla/5.0 (BB10; Touch) AppleWebKit/537.35+ (KHTML, like Gecko) Version/10.3.2.2339 Mobile Safari/537.35+";
    let nothing = "Mozilla/5.0 (Linux; Android 9; SomethingElse) AppleWebKit/537.36";
    let tablet = "Mozilla/5.0 (Linux; Android 5.0.2; SM-T810) AppleWebKit/537.36";
    let unknown = "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101";

    let generic = Some("general Mobile Device");
    let sources = SourceCollection::new().with(
        ScriptedSource::new("library", ScriptedMapper::default())
            .entry(galaxy, raw("Chrome", "40", generic, "smartphone"))
            .entry(bb10, raw("BlackBerry", "10", generic, "smartphone"))
            .entry(nothing, raw("Chrome", "41", generic, "smartphone"))
            .entry(tablet, raw("Chrome", "42", generic, "tablet"))
            .entry(unknown, raw("Firefox", "50", Some("unknown"), "desktop")),
    );
    let stats = ProcessingStats::new();

    rewrite_tests(&ws.config, &sources, &tables(), &stats).unwrap();

    let fixtures = ws.fixtures();
    assert_eq!(fixtures.len(), 5);
    let device = |i: usize| fixtures[i].1["device"].clone();

    assert_eq!(device(0)["deviceName"], "SM-G900F");
    assert_eq!(device(0)["marketingName"], "Galaxy S5 LTE");
    assert_eq!(device(0)["manufacturer"], "Samsung");

    assert_eq!(device(1)["deviceName"], "general BlackBerry Device");
    assert_eq!(device(1)["manufacturer"], "Rim");

    assert!(device(2)["deviceName"].is_null());
    assert!(device(2)["marketingName"].is_null());

    assert_eq!(device(3)["deviceName"], "SM-T810");
    assert_eq!(device(3)["type"], "tablet");

    assert!(device(4)["deviceName"].is_null());

    assert_eq!(stats.get_info_count(InfoType::RegexUnresolved), 1);
    assert_eq!(stats.get_info_count(InfoType::RegexResolved), 3);
}
