use notemend::lexicon::Lexicon;
use notemend::repair::{EditStrategy, RepairConfig, TextRepairer, Unresolved, repair};

fn hello_world() -> Lexicon {
    Lexicon::from_words(["the", "hello", "world", "and"])
}

#[test]
fn test_clean_input_is_unchanged() {
    let lexicon = hello_world();

    for text in ["the hello world", "hello and world", "the world"] {
        assert_eq!(repair(text, &lexicon, false), text);
    }
}

#[test]
fn test_repair_is_idempotent() {
    let lexicon = hello_world();

    let once = repair("the helloworld and world-hello", &lexicon, false);
    let twice = repair(&once, &lexicon, false);

    assert_eq!(once, twice);
}

#[test]
fn test_line_wrap_hyphen_removed() {
    let lexicon = Lexicon::from_words(["helloworld"]);

    assert_eq!(repair("hello-world", &lexicon, false), "helloworld");
}

#[test]
fn test_hyphen_kept_when_pieces_are_words() {
    let lexicon = hello_world();

    assert_eq!(repair("hello-world", &lexicon, false), "hello-world");
}

#[test]
fn test_unique_split_inserts_space() {
    let lexicon = hello_world();

    assert_eq!(repair("helloworld", &lexicon, false), "hello world");
}

#[test]
fn test_tied_splits_leave_token_alone() {
    // car|pet and carp|et both recognize every half as a whole word.
    let lexicon = Lexicon::from_words(["car", "pet", "carp", "et"]);
    let report = TextRepairer::new(&lexicon).analyze("carpet");

    assert_eq!(report.text, "carpet");
    assert!(report.edits.is_empty());
    assert!(matches!(
        &report.unresolved[..],
        [Unresolved::AmbiguousDecomposition { token, candidates }]
            if token == "carpet" && candidates.len() == 2
    ));
}

#[test]
fn test_exact_words_break_ties() {
    // "pet" is only known through the stem of "pets".
    let lexicon = Lexicon::from_words(["car", "pets", "carp", "et"]);

    assert_eq!(repair("carpet", &lexicon, false), "carp et");
}

#[test]
fn test_punctuation_spacing_without_lexicon() {
    let lexicon = Lexicon::from_words(Vec::<String>::new());

    assert_eq!(repair("a(b)c.d", &lexicon, false), "a (b) c. d");
}

#[test]
fn test_common_abbreviations_rejoined() {
    let lexicon = hello_world();

    assert_eq!(
        repair("hello world,e.g.the world", &lexicon, false),
        "hello world, e.g. the world"
    );
}

#[test]
fn test_bracketed_citations_are_not_repaired() {
    let lexicon = hello_world();

    assert_eq!(
        repair("the world [helloworld] and", &lexicon, false),
        "the world [helloworld] and"
    );
}

#[test]
fn test_positional_edits_only_touch_the_token() {
    let lexicon = hello_world();
    let text = "the helloworld xhelloworld";

    let positional = TextRepairer::new(&lexicon).repair(text);
    let literal = TextRepairer::new(&lexicon)
        .with_config(RepairConfig {
            edit_strategy: EditStrategy::Literal,
            ..RepairConfig::default()
        })
        .repair(text);

    assert_eq!(positional, "the hello world xhelloworld");
    assert_eq!(literal, "the hello world xhello world");
}

#[test]
fn test_hyphen_piece_inside_brackets_is_repaired() {
    let lexicon = Lexicon::from_words(["the", "hello", "world", "large"]);
    let text = "the (helloworld)-large";

    let positional = TextRepairer::new(&lexicon).repair(text);
    let literal = TextRepairer::new(&lexicon)
        .with_config(RepairConfig {
            edit_strategy: EditStrategy::Literal,
            ..RepairConfig::default()
        })
        .repair(text);

    assert_eq!(positional, "the (hello world)-large");
    assert_eq!(positional, literal);
}

#[test]
fn test_repeated_fragment_repaired_everywhere() {
    let lexicon = hello_world();
    let report = TextRepairer::new(&lexicon).analyze("helloworld and helloworld");

    assert_eq!(report.text, "hello world and hello world");
    assert_eq!(report.edits.len(), 2);
    assert_ne!(report.edits[0].span, report.edits[1].span);
}

#[test]
fn test_repairer_shared_across_threads() {
    let lexicon = hello_world();
    let repairer = TextRepairer::new(&lexicon);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| repairer.repair("the helloworld")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "the hello world");
        }
    });
}
