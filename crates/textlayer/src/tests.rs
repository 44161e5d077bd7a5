//! Whole-flow tests: find, mark, reset.

use quickcheck::{Arbitrary, Gen};

use super::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("textlayer=trace"))
        .with_test_writer()
        .try_init();
}

fn containers_for(fragments: &[Fragment]) -> Vec<Option<Container>> {
    fragments
        .iter()
        .map(|f| Some(Container::plain(f.text.clone())))
        .collect()
}

fn page() -> Vec<Fragment> {
    vec![
        Fragment::new("Searching the "),
        Fragment::eol("text lay-"),
        Fragment::eol("er of a page, the"),
        Fragment::new("layer keeps its "),
        Fragment::new("layout."),
    ]
}

#[test]
fn find_matches_keeps_query_order() {
    init_tracing();
    let fragments = page();
    let matches = find_matches(&["layer", "the"], &fragments, &MatchOptions::default());

    let offsets: Vec<usize> = matches.iter().map(|m| m.original_offset).collect();
    // "layer" hits first, then "the" hits, each group left to right.
    assert_eq!(offsets, vec![19, 40, 10, 36]);
    assert_eq!(matches[0].start, Position::new(1, 5));
    assert_eq!(matches[0].end, Position::new(2, 2));
}

#[test]
fn empty_and_blank_queries_find_nothing() {
    let fragments = page();
    let matches = find_matches(&["", "   "], &fragments, &MatchOptions::default());
    assert!(matches.is_empty());
}

#[test]
fn no_fragments_no_matches() {
    let matches = find_matches(&["anything"], &[], &MatchOptions::default());
    assert!(matches.is_empty());
}

#[test]
fn mark_then_reset_restores_every_container() {
    init_tracing();
    let fragments = page();
    let mut containers = containers_for(&fragments);
    containers[3] = None;

    let queries = ["layer", "the", "page, the layer"];
    let matches = find_matches(&queries, &fragments, &MatchOptions::default());
    highlight_matches(&matches, &fragments, &mut containers);
    assert!(containers[1].as_ref().unwrap().is_marked());
    assert!(containers[2].as_ref().unwrap().is_marked());

    reset_containers(&fragments, &mut containers);

    for (slot, fragment) in containers.iter().zip(&fragments) {
        if let Some(container) = slot {
            assert_eq!(container.text(), fragment.text);
            assert!(!container.is_marked());
        }
    }
    assert!(containers[3].is_none());
}

#[test]
fn query_order_does_not_change_mark_layout() {
    let fragments = page();
    let options = MatchOptions {
        ignore_case: true,
        complete_words: false,
    };

    let mut forward = containers_for(&fragments);
    let matches = find_matches(&["lay", "layer", "the text"], &fragments, &options);
    highlight_matches(&matches, &fragments, &mut forward);

    let mut backward = containers_for(&fragments);
    let matches = find_matches(&["the text", "layer", "lay"], &fragments, &options);
    highlight_matches(&matches, &fragments, &mut backward);

    assert_eq!(forward, backward);
}

#[test]
fn hyphenated_word_is_marked_in_both_fragments() {
    let fragments = vec![Fragment::eol("inter-"), Fragment::new("net")];
    let mut containers = containers_for(&fragments);
    let options = MatchOptions {
        ignore_case: false,
        complete_words: true,
    };

    let matches = find_matches(&["internet"], &fragments, &options);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].start, Position::new(0, 0));
    assert_eq!(matches[0].end, Position::new(1, 3));

    highlight_matches(&matches, &fragments, &mut containers);
    assert_eq!(containers[0].as_ref().unwrap().highlights(), vec!["inter-"]);
    assert_eq!(containers[1].as_ref().unwrap().highlights(), vec!["net"]);
}

#[test]
fn cjk_phrase_across_line_is_marked() {
    let fragments = vec![Fragment::eol("漢"), Fragment::new("字")];
    let mut containers = containers_for(&fragments);

    let matches = find_matches(&["漢字"], &fragments, &MatchOptions::default());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].start, Position::new(0, 0));
    assert_eq!(matches[0].end, Position::new(1, 1));

    highlight_matches(&matches, &fragments, &mut containers);
    assert_eq!(containers[0].as_ref().unwrap().highlights(), vec!["漢"]);
    assert_eq!(containers[1].as_ref().unwrap().highlights(), vec!["字"]);
}

#[test]
fn line_wrapped_phrase_is_marked() {
    let fragments = vec![Fragment::eol("hello"), Fragment::new("world")];
    let mut containers = containers_for(&fragments);

    let matches = find_matches(&["hello world"], &fragments, &MatchOptions::default());
    assert_eq!(matches[0].start, Position::new(0, 0));
    assert_eq!(matches[0].end, Position::new(1, 5));

    highlight_matches(&matches, &fragments, &mut containers);
    assert_eq!(containers[0].as_ref().unwrap().highlights(), vec!["hello"]);
    assert_eq!(containers[1].as_ref().unwrap().highlights(), vec!["world"]);
}

#[test]
fn highlighter_uses_config() {
    let mut config = TextLayerConfig::default();
    config.search.ignore_case = true;
    config.search.complete_words = true;
    config.highlight.marker_class = "hit".into();
    let highlighter = Highlighter::new(config);

    let fragments = vec![Fragment::new("internet NET network")];
    let mut containers = containers_for(&fragments);
    let matches = highlighter.highlight(&["Net"], &fragments, &mut containers);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].text, "NET");
    assert_eq!(
        highlighter.render_html(containers[0].as_ref().unwrap()),
        "internet <span class=\"hit\">NET</span> network"
    );

    highlighter.reset(&fragments, &mut containers);
    assert_eq!(
        highlighter.render_html(containers[0].as_ref().unwrap()),
        "internet NET network"
    );
}

#[test]
fn highlighter_find_sorts_across_queries() {
    let highlighter = Highlighter::default();
    let fragments = page();
    let matches = highlighter.find(&["layer", "the"], &fragments);
    let offsets: Vec<usize> = matches.iter().map(|m| m.original_offset).collect();
    assert_eq!(offsets, vec![10, 19, 36, 40]);
}

#[test]
fn highlighter_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[search]
ignore_case = true

[highlight]
marker_class = "search-hit"
"#,
    )
    .unwrap();

    let highlighter = Highlighter::from_config_path(&path).unwrap();
    assert!(highlighter.options().ignore_case);
    assert!(!highlighter.options().complete_words);
    assert_eq!(highlighter.config().highlight.marker_class, "search-hit");
}

#[test]
fn highlighter_rejects_invalid_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[highlight]\nmarker_class = \"\"\n").unwrap();

    let err = Highlighter::from_config_path(&path).unwrap_err();
    assert!(matches!(
        err,
        TextLayerError::Config(ConfigError::ValidationError(_))
    ));
}

#[test]
fn highlighter_load_or_create_writes_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("textlayer").join("config.toml");

    let highlighter = Highlighter::load_or_create(&path).unwrap();
    assert!(path.exists());
    assert_eq!(
        highlighter.config().highlight.marker_class,
        DEFAULT_MARKER_CLASS
    );
}

#[test]
fn log_filter_carries_configured_level() {
    let mut config = TextLayerConfig::default();
    config.logging.level = LogLevel::Warning;
    let highlighter = Highlighter::new(config);

    assert!(highlighter.log_filter().to_string().contains("textlayer=warn"));
}

#[test]
fn init_logging_fails_when_subscriber_exists() {
    init_tracing();
    let err = Highlighter::default().init_logging().unwrap_err();
    assert!(matches!(err, TextLayerError::Other(_)));
}

/// Fragment sequences built from the chars that drive normalization.
#[derive(Debug, Clone)]
struct Page(Vec<Fragment>);

impl Arbitrary for Page {
    fn arbitrary(g: &mut Gen) -> Self {
        const PIECES: &[&str] = &["a", "-", " ", "漢", "ひ", ""];
        let count = usize::arbitrary(g) % 8;
        let fragments = (0..count)
            .map(|_| {
                let pieces = usize::arbitrary(g) % 4;
                let text: String = (0..pieces)
                    .filter_map(|_| g.choose(PIECES).copied())
                    .collect();
                Fragment {
                    text,
                    ends_line: bool::arbitrary(g),
                }
            })
            .collect();
        Page(fragments)
    }
}

const PAGE_QUERIES: [&str; 6] = ["a", "a a", "a-a", "-", "漢ひ", "aa"];

quickcheck::quickcheck! {
    fn mark_then_reset_restores_text(page: Page) -> bool {
        let fragments = &page.0;
        let mut containers = containers_for(fragments);
        let matches = find_matches(&PAGE_QUERIES, fragments, &MatchOptions::default());
        highlight_matches(&matches, fragments, &mut containers);

        let marked_text_kept = containers
            .iter()
            .zip(fragments)
            .all(|(c, f)| c.as_ref().is_some_and(|c| c.text() == f.text));

        reset_containers(fragments, &mut containers);
        let restored = containers.iter().zip(fragments).all(|(c, f)| {
            c.as_ref()
                .is_some_and(|c| c.text() == f.text && !c.is_marked())
        });
        marked_text_kept && restored
    }

    fn mark_layout_ignores_query_order(page: Page) -> bool {
        let fragments = &page.0;
        let options = MatchOptions::default();
        let mut reversed_queries = PAGE_QUERIES;
        reversed_queries.reverse();

        let mut forward = containers_for(fragments);
        let matches = find_matches(&PAGE_QUERIES, fragments, &options);
        highlight_matches(&matches, fragments, &mut forward);

        let mut backward = containers_for(fragments);
        let matches = find_matches(&reversed_queries, fragments, &options);
        highlight_matches(&matches, fragments, &mut backward);

        forward == backward
    }
}
